//! View models for the mentions table and the source selector.
//!
//! Everything here is plain data; the frontend turns it into DOM nodes and
//! never assembles markup from strings.

use chrono::{DateTime, NaiveDateTime, TimeZone};

use crate::{Mention, Platform, Source};

/// Display format for mention timestamps (`05.01.2024, 14:30`)
const DISPLAY_FORMAT: &str = "%d.%m.%Y, %H:%M";

/// Label of the leading "all" entry of the source selector
pub const ALL_SOURCES_LABEL: &str = "All sources";

/// Single cell text shown when a page has no rows
pub const NO_DATA_MESSAGE: &str = "No data to display";

/// Header labels of the mentions table, in column order
pub const COLUMN_HEADERS: [&str; 5] = ["Date", "Platform", "Source", "Text", "Link"];

/// Text of the per-row link
pub const OPEN_LINK_LABEL: &str = "Open";

/// One table row, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionRow {
    pub datetime: String,
    pub platform: String,
    pub source_id: String,
    pub text: String,
    /// `None` when the link is empty or not http(s)
    pub link: Option<String>,
}

impl MentionRow {
    pub fn from_mention<Tz: TimeZone>(mention: &Mention, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            datetime: format_mention_datetime(&mention.mention_datetime, tz),
            platform: Platform::parse(&mention.platform).label().to_string(),
            source_id: mention.source_id.clone(),
            text: mention.mention_text.clone(),
            link: safe_link(&mention.mention_link).map(str::to_string),
        }
    }
}

/// Rows in input order
pub fn mention_rows<Tz: TimeZone>(mentions: &[Mention], tz: &Tz) -> Vec<MentionRow>
where
    Tz::Offset: std::fmt::Display,
{
    mentions
        .iter()
        .map(|mention| MentionRow::from_mention(mention, tz))
        .collect()
}

/// Contents of the table body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    /// Nothing has loaded yet
    Pending,
    /// The page came back empty: one full-width message row
    NoData,
    Rows(Vec<MentionRow>),
}

impl TableBody {
    /// Body for the latest loaded page, or `Pending` before the first one.
    ///
    /// The result depends only on `mentions`, never on what was shown before.
    pub fn for_page<Tz: TimeZone>(mentions: Option<&[Mention]>, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        match mentions {
            None => TableBody::Pending,
            Some([]) => TableBody::NoData,
            Some(mentions) => TableBody::Rows(mention_rows(mentions, tz)),
        }
    }

    /// Number of `<tr>` elements the body renders
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Pending => 0,
            TableBody::NoData => 1,
            TableBody::Rows(rows) => rows.len(),
        }
    }
}

/// Render a stored timestamp in the viewer's timezone.
///
/// Timestamps without an offset are taken as local time already. Anything
/// unparseable is shown as-is.
pub fn format_mention_datetime<Tz: TimeZone>(raw: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.with_timezone(tz).format(DISPLAY_FORMAT).to_string();
    }
    let naive = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M"));
    match naive {
        Ok(naive) => naive.format(DISPLAY_FORMAT).to_string(),
        Err(_) => trimmed.to_string(),
    }
}

/// The link if it is safe to put in an `href`
pub fn safe_link(link: &str) -> Option<&str> {
    let trimmed = link.trim();
    let scheme = trimmed.split_once(':').map(|(scheme, _)| scheme)?;
    if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") {
        Some(trimmed)
    } else {
        None
    }
}

/// One `<option>` of the source selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOption {
    pub value: String,
    pub label: String,
}

/// The selector's options: "All sources" first, then the sources in order.
///
/// Option values are distinct; they double as the options' render keys.
pub fn source_options(sources: &[Source]) -> Vec<SourceOption> {
    let mut seen = std::collections::HashSet::new();
    std::iter::once(SourceOption {
        value: String::new(),
        label: ALL_SOURCES_LABEL.to_string(),
    })
    .chain(sources.iter().map(|source| SourceOption {
        value: source.source_id.clone(),
        label: source.source_name.clone(),
    }))
    .filter(|option| seen.insert(option.value.clone()))
    .collect()
}

/// The selection to keep after the options are rebuilt
pub fn restore_selection(previous: &str, sources: &[Source]) -> String {
    if sources.iter().any(|source| source.source_id == previous) {
        previous.to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn mention(platform: &str, text: &str, link: &str) -> Mention {
        Mention {
            id: None,
            mention_datetime: "2024-01-05T10:30:00+00:00".to_string(),
            platform: platform.to_string(),
            source_id: "src".to_string(),
            mention_text: text.to_string(),
            mention_link: link.to_string(),
            source_link: String::new(),
            user_id: String::new(),
            user_name: String::new(),
            user_nick: String::new(),
        }
    }

    fn sources() -> Vec<Source> {
        vec![
            Source {
                source_id: "a".to_string(),
                source_name: "Alpha".to_string(),
            },
            Source {
                source_id: "b".to_string(),
                source_name: "Beta".to_string(),
            },
        ]
    }

    #[test]
    fn test_rows_keep_input_order_and_map_platforms() {
        let mentions = vec![
            mention("rss", "first", "https://a"),
            mention("vk", "second", "https://b"),
            mention("telegram", "third", "https://c"),
            mention("forum", "fourth", "https://d"),
        ];
        let rows = mention_rows(&mentions, &Utc);
        assert_eq!(rows.len(), 4);
        let texts: Vec<&str> = rows.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, ["first", "second", "third", "fourth"]);
        let labels: Vec<&str> = rows.iter().map(|r| r.platform.as_str()).collect();
        assert_eq!(labels, ["RSS", "VK", "Telegram", "forum"]);
    }

    #[test]
    fn test_empty_mentions_give_no_rows() {
        assert!(mention_rows(&[], &Utc).is_empty());
    }

    #[test]
    fn test_table_body_before_first_load_is_empty() {
        let body = TableBody::for_page(None, &Utc);
        assert_eq!(body, TableBody::Pending);
        assert_eq!(body.row_count(), 0);
    }

    #[test]
    fn test_empty_page_replaces_rows_with_single_message() {
        let full = TableBody::for_page(
            Some(&[mention("rss", "a", ""), mention("vk", "b", "")][..]),
            &Utc,
        );
        assert_eq!(full.row_count(), 2);

        let empty = TableBody::for_page(Some(&[][..]), &Utc);
        assert_eq!(empty, TableBody::NoData);
        assert_eq!(empty.row_count(), 1);
    }

    #[test]
    fn test_table_body_rows_follow_page() {
        let mentions = vec![mention("telegram", "hi", "https://t.me/x")];
        let body = TableBody::for_page(Some(mentions.as_slice()), &Utc);
        let TableBody::Rows(rows) = body else {
            panic!("expected rows, got {:?}", body);
        };
        assert_eq!(rows[0].platform, "Telegram");
        assert_eq!(rows[0].link.as_deref(), Some("https://t.me/x"));
    }

    #[test]
    fn test_markup_in_text_is_kept_as_text() {
        let row = MentionRow::from_mention(
            &mention("rss", "<script>alert(1)</script>", "https://x"),
            &Utc,
        );
        assert_eq!(row.text, "<script>alert(1)</script>");
    }

    #[test]
    fn test_format_rfc3339_in_local_time() {
        let msk = FixedOffset::east_opt(3 * 3600).unwrap();
        assert_eq!(
            format_mention_datetime("2024-01-05T22:30:00Z", &msk),
            "06.01.2024, 01:30"
        );
        assert_eq!(
            format_mention_datetime("2024-01-05T10:30:00.123+00:00", &Utc),
            "05.01.2024, 10:30"
        );
    }

    #[test]
    fn test_format_naive_timestamp_as_local() {
        let msk = FixedOffset::east_opt(3 * 3600).unwrap();
        assert_eq!(
            format_mention_datetime("2024-01-05T10:30:00", &msk),
            "05.01.2024, 10:30"
        );
        assert_eq!(
            format_mention_datetime("2024-01-05 10:30:00.5", &msk),
            "05.01.2024, 10:30"
        );
    }

    #[test]
    fn test_format_garbage_passes_through() {
        assert_eq!(format_mention_datetime("yesterday", &Utc), "yesterday");
    }

    #[test]
    fn test_safe_link() {
        assert_eq!(safe_link("https://t.me/c/1"), Some("https://t.me/c/1"));
        assert_eq!(safe_link(" HTTP://example.com "), Some("HTTP://example.com"));
        assert_eq!(safe_link("javascript:alert(1)"), None);
        assert_eq!(safe_link("data:text/html,hi"), None);
        assert_eq!(safe_link(""), None);
        assert_eq!(safe_link("/relative/path"), None);
    }

    #[test]
    fn test_unsafe_link_is_dropped_from_row() {
        let row = MentionRow::from_mention(&mention("vk", "t", "javascript:void(0)"), &Utc);
        assert_eq!(row.link, None);
    }

    #[test]
    fn test_source_options_lead_with_all() {
        let options = source_options(&sources());
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].value, "");
        assert_eq!(options[0].label, ALL_SOURCES_LABEL);
        assert_eq!(options[2].value, "b");
        assert_eq!(options[2].label, "Beta");

        assert_eq!(source_options(&[]).len(), 1);
    }

    #[test]
    fn test_source_option_values_are_distinct() {
        let mut listed = sources();
        listed.push(Source {
            source_id: String::new(),
            source_name: "Unnamed".to_string(),
        });
        listed.push(Source {
            source_id: "a".to_string(),
            source_name: "Alpha again".to_string(),
        });
        let options = source_options(&listed);
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["", "a", "b"]);
        assert_eq!(options[0].label, ALL_SOURCES_LABEL);
        assert_eq!(options[1].label, "Alpha");
    }

    #[test]
    fn test_selection_preserved_when_present() {
        assert_eq!(restore_selection("b", &sources()), "b");
    }

    #[test]
    fn test_selection_reverts_when_missing() {
        assert_eq!(restore_selection("c", &sources()), "");
        assert_eq!(restore_selection("", &sources()), "");
        assert_eq!(restore_selection("a", &[]), "");
    }
}
