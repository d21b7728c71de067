//! Identity repository - the credential store's single table.
//!
//! Email uniqueness is owned by the UNIQUE constraint on the `identities`
//! table, not by callers. The registration flow's existence check is a
//! fast-path UX optimization; two concurrent registrations of the same
//! email both reach `create`, and the loser gets `DbError::DuplicateEmail`.

use crate::{DbError, Result as DbErrorResult};

use mp_core::Identity;

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct IdentityRepository {
    pool: SqlitePool,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a new identity. A UNIQUE violation on email is surfaced as
    /// `DbError::DuplicateEmail` and leaves the store unchanged.
    pub async fn create(&self, identity: &Identity) -> DbErrorResult<()> {
        let id = identity.id.to_string();
        let created_at = identity.created_at.timestamp();

        // Use sqlx::query (not query!) to keep builds independent of a
        // prepared query cache
        sqlx::query(
            r#"
                INSERT INTO identities (id, email, display_name, password_hash, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&identity.email)
        .bind(&identity.display_name)
        .bind(&identity.password_hash)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => DbError::DuplicateEmail {
                email: identity.email.clone(),
                location: ErrorLocation::from(Location::caller()),
            },
            other => DbError::from(other),
        })?;

        Ok(())
    }

    /// Look up an identity by its external login key.
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, display_name, password_hash, created_at
                FROM identities
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| identity_from_row(&r)).transpose()
    }

    /// Look up an identity by id. This is the one call the session layer
    /// needs to resolve a token subject back to an account.
    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Identity>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, email, display_name, password_hash, created_at
                FROM identities
                WHERE id = ?
            "#,
        )
        .bind(&id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| identity_from_row(&r)).transpose()
    }
}

fn identity_from_row(row: &SqliteRow) -> DbErrorResult<Identity> {
    let id: String = row.try_get("id")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(Identity {
        id: Uuid::parse_str(&id).map_err(|e| DbError::CorruptRow {
            message: format!("invalid UUID in identities.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        email: row.try_get("email")?,
        display_name: row.try_get("display_name")?,
        password_hash: row.try_get("password_hash")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| DbError::CorruptRow {
            message: "invalid timestamp in identities.created_at".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
    })
}
