//! Meetup token repository implementation
//!
//! Stores one OAuth token per chat group. Saving for a group that already has
//! a token replaces it.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use guildmeet_core::TokenRepository;
use guildmeet_domain::{GroupId, GuildMeetError, Result as DomainResult, TokenRecord};
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, Row};
use tokio::task;
use tracing::debug;

use super::manager::{DbManager, SqliteConnection};
use crate::errors::InfraError;

/// SQLite-based Meetup token repository
pub struct SqliteMeetupTokenRepository {
    db: Arc<DbManager>,
}

impl SqliteMeetupTokenRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TokenRepository for SqliteMeetupTokenRepository {
    async fn save_token(&self, record: &TokenRecord) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let record = record.clone();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            upsert_token(&conn, &record).map_err(map_sql_error)?;
            debug!(group_id = %record.group_id, "meetup token stored");
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_token(&self, group_id: GroupId) -> DomainResult<Option<TokenRecord>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Option<TokenRecord>> {
            let conn = db.get_connection()?;
            query_token(&conn, group_id).map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }
}

// ============================================================================
// SQL Operations (synchronous)
// ============================================================================

fn upsert_token(conn: &SqliteConnection, record: &TokenRecord) -> rusqlite::Result<()> {
    let now = Utc::now().timestamp();

    conn.execute(
        "INSERT INTO meetup_tokens (group_id, access_token, refresh_token, expires_in,
                                    token_type, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)
         ON CONFLICT(group_id) DO UPDATE SET
             access_token = excluded.access_token,
             refresh_token = excluded.refresh_token,
             expires_in = excluded.expires_in,
             token_type = excluded.token_type,
             updated_at = excluded.updated_at",
        params![
            record.group_id.to_string(),
            &record.access_token,
            &record.refresh_token,
            record.expires_in,
            &record.token_type,
            now,
        ],
    )?;
    Ok(())
}

fn query_token(conn: &SqliteConnection, group_id: GroupId) -> rusqlite::Result<Option<TokenRecord>> {
    conn.query_row(
        "SELECT group_id, access_token, refresh_token, expires_in, token_type
         FROM meetup_tokens
         WHERE group_id = ?1",
        params![group_id.to_string()],
        map_token_row,
    )
    .optional()
}

fn map_token_row(row: &Row<'_>) -> rusqlite::Result<TokenRecord> {
    let group_id = row
        .get::<_, String>(0)?
        .parse::<GroupId>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))?;

    Ok(TokenRecord {
        group_id,
        access_token: row.get(1)?,
        refresh_token: row.get(2)?,
        expires_in: row.get(3)?,
        token_type: row.get(4)?,
    })
}

// ============================================================================
// Error Mapping
// ============================================================================

fn map_sql_error(err: rusqlite::Error) -> GuildMeetError {
    GuildMeetError::from(InfraError::from(err))
}

fn map_join_error(err: task::JoinError) -> GuildMeetError {
    GuildMeetError::from(InfraError::from(err))
}

// ============================================================================
// Tests
// ============================================================================
