use chrono::{DateTime, Utc};
use diesel::prelude::*;

#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::mentions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MentionRecord {
    pub id: i32,
    pub platform: String,
    pub mention_datetime: DateTime<Utc>,
    pub mention_link: Option<String>,
    pub source_id: Option<String>,
    pub source_link: Option<String>,
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub user_nick: Option<String>,
    pub mention_text: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::mentions)]
pub struct NewMention {
    pub platform: String,
    pub mention_datetime: DateTime<Utc>,
    pub mention_link: Option<String>,
    pub source_id: Option<String>,
    pub source_link: Option<String>,
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub user_nick: Option<String>,
    pub mention_text: Option<String>,
}

impl From<MentionRecord> for shared::Mention {
    fn from(record: MentionRecord) -> Self {
        shared::Mention {
            id: Some(record.id),
            mention_datetime: record.mention_datetime.to_rfc3339(),
            platform: record.platform,
            source_id: record.source_id.unwrap_or_default(),
            mention_text: record.mention_text.unwrap_or_default(),
            mention_link: record.mention_link.unwrap_or_default(),
            source_link: record.source_link.unwrap_or_default(),
            user_id: record.user_id.unwrap_or_default(),
            user_name: record.user_name.unwrap_or_default(),
            user_nick: record.user_nick.unwrap_or_default(),
        }
    }
}

/// The columns of `sources` the dashboard reads; `platform` is only written
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::sources)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SourceRecord {
    pub source_id: String,
    pub source_name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::sources)]
pub struct NewSource {
    pub source_id: String,
    pub source_name: String,
    pub platform: String,
}

impl From<SourceRecord> for shared::Source {
    fn from(record: SourceRecord) -> Self {
        shared::Source {
            source_id: record.source_id,
            source_name: record.source_name,
        }
    }
}
