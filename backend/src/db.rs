use anyhow::{Context, Result};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::handlers::dashboard::MentionFilter;
use crate::models::{MentionRecord, NewMention, NewSource, SourceRecord};
use crate::schema::{mentions, sources};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

/// Embedded database migrations - compiled into the binary
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub fn create_pool(database_url: &str) -> Result<DbPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    r2d2::Pool::builder()
        .build(manager)
        .context("Failed to create database pool")
}

/// Run pending database migrations
/// Returns the list of migrations that were applied
pub fn run_migrations(pool: &DbPool) -> Result<Vec<String>> {
    let mut conn = pool.get()?;

    let applied: Vec<String> = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?
        .iter()
        .map(|m| m.to_string())
        .collect();

    Ok(applied)
}

/// One page of mentions matching the filter, newest first
pub fn query_mentions(
    conn: &mut PgConnection,
    filter: &MentionFilter,
) -> QueryResult<Vec<MentionRecord>> {
    let mut query = mentions::table
        .select(MentionRecord::as_select())
        .into_boxed();

    if let Some(platform) = &filter.platform {
        query = query.filter(mentions::platform.eq(platform.clone()));
    }
    if let Some(source_id) = &filter.source_id {
        query = query.filter(mentions::source_id.eq(source_id.clone()));
    }
    if let Some(start) = filter.start {
        query = query.filter(mentions::mention_datetime.ge(start));
    }
    if let Some(end) = filter.end {
        query = query.filter(mentions::mention_datetime.le(end));
    }

    query
        .order((mentions::mention_datetime.desc(), mentions::id.desc()))
        .limit(filter.limit)
        .offset(filter.offset)
        .load(conn)
}

/// Every known source, for the dashboard's selector
pub fn list_sources(conn: &mut PgConnection) -> QueryResult<Vec<SourceRecord>> {
    sources::table
        .order((sources::source_name.asc(), sources::source_id.asc()))
        .select(SourceRecord::as_select())
        .load(conn)
}

/// Source row to upsert alongside a new mention
#[derive(Debug)]
pub struct SourceRegistration {
    pub source: NewSource,
    /// Replace the stored name; false when the collector gave no name
    pub overwrite_name: bool,
}

/// Store a mention and register its source in one transaction
pub fn insert_mention(
    conn: &mut PgConnection,
    new_mention: &NewMention,
    registration: Option<&SourceRegistration>,
) -> QueryResult<MentionRecord> {
    conn.transaction(|conn| {
        if let Some(registration) = registration {
            let insert = diesel::insert_into(sources::table)
                .values(&registration.source)
                .on_conflict(sources::source_id);
            if registration.overwrite_name {
                insert
                    .do_update()
                    .set(sources::source_name.eq(&registration.source.source_name))
                    .execute(conn)?;
            } else {
                insert.do_nothing().execute(conn)?;
            }
        }

        diesel::insert_into(mentions::table)
            .values(new_mention)
            .returning(MentionRecord::as_returning())
            .get_result(conn)
    })
}
