//! `POST /api/mentions`: collectors record a mention here

use crate::db::{self, SourceRegistration};
use crate::models::{NewMention, NewSource};
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use shared::{Mention, NewMentionRequest};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Error type for rejected ingest requests
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IngestError {
    #[error("Platform is required")]
    MissingPlatform,

    #[error("Invalid mention_datetime: {0:?}")]
    InvalidTimestamp(String),
}

/// Split a request into the mention row and the source to register
pub fn prepare_mention(
    req: NewMentionRequest,
) -> Result<(NewMention, Option<SourceRegistration>), IngestError> {
    let platform = req.platform.trim().to_string();
    if platform.is_empty() {
        return Err(IngestError::MissingPlatform);
    }

    let mention_datetime = DateTime::parse_from_rfc3339(req.mention_datetime.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| IngestError::InvalidTimestamp(req.mention_datetime.clone()))?;

    let source_id = req
        .source_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty());

    let registration = source_id.as_ref().map(|id| {
        let name = req
            .source_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty());
        SourceRegistration {
            source: NewSource {
                source_id: id.clone(),
                source_name: name.unwrap_or(id.as_str()).to_string(),
                platform: platform.clone(),
            },
            overwrite_name: name.is_some(),
        }
    });

    let mention = NewMention {
        platform,
        mention_datetime,
        mention_link: req.mention_link,
        source_id,
        source_link: req.source_link,
        user_id: req.user_id,
        user_name: req.user_name,
        user_nick: req.user_nick,
        mention_text: req.mention_text,
    };

    Ok((mention, registration))
}

pub async fn create_mention(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<NewMentionRequest>,
) -> Result<(StatusCode, Json<Mention>), StatusCode> {
    let (new_mention, registration) = prepare_mention(req).map_err(|e| {
        warn!("Rejected mention: {}", e);
        StatusCode::BAD_REQUEST
    })?;

    let mut conn = app_state.db_pool.get().map_err(|e| {
        error!("Failed to get database connection: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let record = db::insert_mention(&mut conn, &new_mention, registration.as_ref()).map_err(|e| {
        error!("Failed to store mention: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    info!(
        "Stored {} mention {} from source {:?}",
        record.platform, record.id, record.source_id
    );

    Ok((StatusCode::CREATED, Json(record.into())))
}
