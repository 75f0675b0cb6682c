//! Conversions from external infrastructure errors into domain errors.

use guildmeet_domain::GuildMeetError;
use reqwest::Error as HttpError;
use rusqlite::Error as SqlError;
use tokio::task::JoinError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub GuildMeetError);

impl From<InfraError> for GuildMeetError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<GuildMeetError> for InfraError {
    fn from(value: GuildMeetError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoGuildMeetError {
    fn into_guildmeet(self) -> GuildMeetError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → GuildMeetError */
/* -------------------------------------------------------------------------- */

impl IntoGuildMeetError for SqlError {
    fn into_guildmeet(self) -> GuildMeetError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        GuildMeetError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        GuildMeetError::Database("database is locked".into())
                    }
                    (ErrorCode::ReadOnly, _) => {
                        GuildMeetError::Database("database is read-only".into())
                    }
                    (ErrorCode::CannotOpen, _) => {
                        GuildMeetError::Database(format!("unable to open database: {message}"))
                    }
                    _ => GuildMeetError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::FromSqlConversionFailure(_, _, cause) => {
                GuildMeetError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            other => GuildMeetError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_guildmeet())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → GuildMeetError */
/* -------------------------------------------------------------------------- */

impl IntoGuildMeetError for r2d2::Error {
    fn into_guildmeet(self) -> GuildMeetError {
        GuildMeetError::Database(format!("connection pool error: {self}"))
    }
}

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(value.into_guildmeet())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → GuildMeetError */
/* -------------------------------------------------------------------------- */

// The token endpoint reports logical failures in the body, so every reqwest
// failure is a transport problem regardless of status.
impl IntoGuildMeetError for HttpError {
    fn into_guildmeet(self) -> GuildMeetError {
        if self.is_timeout() {
            return GuildMeetError::Transport("HTTP request timed out".into());
        }

        if self.is_connect() {
            return GuildMeetError::Transport(format!("HTTP connection failure: {self}"));
        }

        if self.is_decode() {
            return GuildMeetError::Transport(format!("failed to read HTTP response: {self}"));
        }

        if let Some(status) = self.status() {
            return GuildMeetError::Transport(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            ));
        }

        GuildMeetError::Transport(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_guildmeet())
    }
}

/* -------------------------------------------------------------------------- */
/* tokio::task::JoinError → GuildMeetError */
/* -------------------------------------------------------------------------- */

impl IntoGuildMeetError for JoinError {
    fn into_guildmeet(self) -> GuildMeetError {
        if self.is_cancelled() {
            GuildMeetError::Internal("blocking task cancelled".into())
        } else {
            GuildMeetError::Internal(format!("blocking task failed: {self}"))
        }
    }
}

impl From<JoinError> for InfraError {
    fn from(value: JoinError) -> Self {
        InfraError(value.into_guildmeet())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
