//! Request and response bodies of the dashboard HTTP API

use serde::{Deserialize, Serialize};

use crate::protocol::DEFAULT_PAGE_SIZE;
use crate::FilterState;

/// Query string of `GET /api/dashboard_data`.
///
/// The dashboard always sends every key; other clients may omit any of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub platform: String,
    /// RFC 3339 lower bound (inclusive) or empty
    #[serde(default)]
    pub start_date: String,
    /// RFC 3339 upper bound (inclusive) or empty
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub source_id: String,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for DashboardQuery {
    fn default() -> Self {
        Self {
            platform: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            source_id: String::new(),
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

impl From<&FilterState> for DashboardQuery {
    fn from(filters: &FilterState) -> Self {
        Self {
            platform: filters.platform.clone(),
            start_date: filters.start_date.clone(),
            end_date: filters.end_date.clone(),
            source_id: filters.source_id.clone(),
            limit: filters.limit,
            offset: filters.offset,
        }
    }
}

impl DashboardQuery {
    /// Query parameters in request order. Every key is always present.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("platform", self.platform.clone()),
            ("start_date", self.start_date.clone()),
            ("end_date", self.end_date.clone()),
            ("source_id", self.source_id.clone()),
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ]
    }
}

/// Body of `POST /api/mentions`, sent by collectors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMentionRequest {
    pub platform: String,
    /// RFC 3339 timestamp of the original post
    pub mention_datetime: String,
    #[serde(default)]
    pub mention_link: Option<String>,
    #[serde(default)]
    pub source_id: Option<String>,
    /// Display name for the source; the id is used when absent
    #[serde(default)]
    pub source_name: Option<String>,
    #[serde(default)]
    pub source_link: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_nick: Option<String>,
    #[serde(default)]
    pub mention_text: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: Option<String>,
}
