use serde::{Deserialize, Deserializer, Serialize};

// Endpoint paths and paging constants shared between backend and frontend
pub mod protocol;

// Request/response bodies beyond the core dashboard payload
pub mod api;
pub use api::{DashboardQuery, HealthResponse, NewMentionRequest};

// Filter state and form normalisation
pub mod filters;
pub use filters::{FilterState, FormFields};

// Pagination state machine
pub mod pagination;
pub use pagination::{PagePosition, PaginationButtons};

// Row and option view models for the dashboard table
pub mod view;
pub use view::{MentionRow, SourceOption, TableBody};

/// A single mention of a tracked keyword found on a monitored platform.
///
/// Only the fields the dashboard renders are required; the backend also sends
/// the collector metadata, which defaults to empty when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    /// ISO 8601 timestamp of the mention
    pub mention_datetime: String,
    pub platform: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub source_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mention_text: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mention_link: String,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub source_link: String,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub user_id: String,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub user_name: String,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub user_nick: String,
}

/// A monitored origin (RSS feed, VK group, Telegram channel).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub source_id: String,
    pub source_name: String,
}

/// Response body of `GET /api/dashboard_data`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardData {
    pub mentions: Vec<Mention>,
    #[serde(default)]
    pub sources: Vec<Source>,
}

/// Platform a mention was collected from.
///
/// Unknown values are kept verbatim so new collectors show up without a
/// frontend release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Rss,
    Vk,
    Telegram,
    Other(String),
}

impl Platform {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "rss" => Platform::Rss,
            "vk" => Platform::Vk,
            "telegram" => Platform::Telegram,
            other => Platform::Other(other.to_string()),
        }
    }

    /// Wire value stored in the database and sent as the `platform` filter
    pub fn as_str(&self) -> &str {
        match self {
            Platform::Rss => "rss",
            Platform::Vk => "vk",
            Platform::Telegram => "telegram",
            Platform::Other(raw) => raw,
        }
    }

    /// Human-readable label shown in the table
    pub fn label(&self) -> &str {
        match self {
            Platform::Rss => "RSS",
            Platform::Vk => "VK",
            Platform::Telegram => "Telegram",
            Platform::Other(raw) => raw,
        }
    }

    /// The platforms offered in the filter dropdown
    pub fn known() -> [Platform; 3] {
        [Platform::Rss, Platform::Vk, Platform::Telegram]
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
