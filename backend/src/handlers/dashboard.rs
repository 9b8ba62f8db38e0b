//! `GET /api/dashboard_data`: one page of mentions plus the source list

use crate::db;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use shared::{DashboardData, DashboardQuery};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Error type for dashboard query validation
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid {field} timestamp: {value:?}")]
    InvalidTimestamp { field: &'static str, value: String },

    #[error("Offset must not be negative, got {0}")]
    NegativeOffset(i64),
}

/// Validated form of `DashboardQuery`, ready for the database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionFilter {
    pub platform: Option<String>,
    pub source_id: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub limit: i64,
    pub offset: i64,
}

impl MentionFilter {
    /// Empty strings mean "no filter"; `limit` is clamped to `1..=max_page_size`
    pub fn from_query(query: &DashboardQuery, max_page_size: i64) -> Result<Self, QueryError> {
        if query.offset < 0 {
            return Err(QueryError::NegativeOffset(query.offset));
        }

        Ok(Self {
            platform: non_empty(&query.platform),
            source_id: non_empty(&query.source_id),
            start: parse_bound("start_date", &query.start_date)?,
            end: parse_bound("end_date", &query.end_date)?,
            limit: query.limit.clamp(1, max_page_size.max(1)),
            offset: query.offset,
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_bound(field: &'static str, value: &str) -> Result<Option<DateTime<Utc>>, QueryError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| Some(dt.with_timezone(&Utc)))
        .map_err(|_| QueryError::InvalidTimestamp {
            field,
            value: trimmed.to_string(),
        })
}

pub async fn dashboard_data(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardData>, StatusCode> {
    let filter = MentionFilter::from_query(&query, app_state.max_page_size).map_err(|e| {
        warn!("Rejected dashboard query: {}", e);
        StatusCode::BAD_REQUEST
    })?;

    let mut conn = app_state.db_pool.get().map_err(|e| {
        error!("Failed to get database connection: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let mentions = db::query_mentions(&mut conn, &filter).map_err(|e| {
        error!("Failed to query mentions: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let sources = db::list_sources(&mut conn).map_err(|e| {
        error!("Failed to list sources: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    debug!(
        "Dashboard page: {} mentions (limit {}, offset {}), {} sources",
        mentions.len(),
        filter.limit,
        filter.offset,
        sources.len()
    );

    Ok(Json(DashboardData {
        mentions: mentions.into_iter().map(Into::into).collect(),
        sources: sources.into_iter().map(Into::into).collect(),
    }))
}
