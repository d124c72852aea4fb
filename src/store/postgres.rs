/**
 * Postgres Store
 *
 * Production `Store` backend over a sqlx connection pool. Unique-constraint
 * violations surface as `StoreError::Conflict` so a registration that loses
 * a race to the pre-check still maps to the same conflict response instead
 * of a 500 or a duplicate row.
 */
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::auth::users::{NewUser, User, UserUpdate};
use crate::emails::types::{Email, EmailStatus, NewEmail};
use crate::onboarding::profiles::{Profile, ProfileSubmission};
use crate::store::{EmailPage, Store, StoreError};

/// Postgres-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a sqlx error, folding unique violations into `Conflict`
fn map_sqlx(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            return StoreError::Conflict;
        }
    }
    StoreError::Database(err)
}

/// Rebuild an `Email` from a row; the status column is TEXT
fn email_from_row(row: sqlx::postgres::PgRow) -> Email {
    let status: String = row.get("status");
    Email {
        id: row.get("id"),
        subject: row.get("subject"),
        content: row.get("content"),
        from_email: row.get("from_email"),
        to_email: row.get("to_email"),
        status: EmailStatus::parse(&status).unwrap_or(EmailStatus::Pending),
        sent_at: row.get("sent_at"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, name, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, email, name, password_hash, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password_hash)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn update_user(
        &self,
        id: Uuid,
        update: UserUpdate,
    ) -> Result<Option<User>, StoreError> {
        let now = Utc::now();

        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET email = COALESCE($1, email),
                name = COALESCE($2, name),
                updated_at = $3
            WHERE id = $4
            RETURNING id, email, name, password_hash, created_at, updated_at
            "#,
        )
        .bind(update.email)
        .bind(update.name)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn profile_for_user(&self, user_id: Uuid) -> Result<Option<Profile>, StoreError> {
        sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, user_id, full_name, school, grade, major,
                   onboarding_completed, created_at, updated_at
            FROM user_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn upsert_profile(
        &self,
        user_id: Uuid,
        submission: ProfileSubmission,
    ) -> Result<Profile, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO user_profiles
                (id, user_id, full_name, school, grade, major,
                 onboarding_completed, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, TRUE, $7, $7)
            ON CONFLICT (user_id) DO UPDATE
            SET full_name = EXCLUDED.full_name,
                school = EXCLUDED.school,
                grade = EXCLUDED.grade,
                major = EXCLUDED.major,
                onboarding_completed = TRUE,
                updated_at = EXCLUDED.updated_at
            RETURNING id, user_id, full_name, school, grade, major,
                      onboarding_completed, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&submission.full_name)
        .bind(&submission.school)
        .bind(&submission.grade)
        .bind(&submission.major)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn create_email(&self, email: NewEmail) -> Result<Email, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let row = sqlx::query(
            r#"
            INSERT INTO emails
                (id, subject, content, from_email, to_email, status,
                 sent_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, NULL, $7, $7)
            RETURNING id, subject, content, from_email, to_email, status,
                      sent_at, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&email.subject)
        .bind(&email.content)
        .bind(&email.from_email)
        .bind(&email.to_email)
        .bind(email.status.as_str())
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(email_from_row(row))
    }

    async fn emails_for_owner(
        &self,
        owner: &str,
        page: i64,
        limit: i64,
    ) -> Result<EmailPage, StoreError> {
        let offset = (page - 1) * limit;

        let rows = sqlx::query(
            r#"
            SELECT id, subject, content, from_email, to_email, status,
                   sent_at, created_at, updated_at
            FROM emails
            WHERE from_email = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(owner)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM emails WHERE from_email = $1
            "#,
        )
        .bind(owner)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(EmailPage {
            emails: rows.into_iter().map(email_from_row).collect(),
            total,
        })
    }

    async fn email_by_id(&self, id: Uuid, owner: &str) -> Result<Option<Email>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, subject, content, from_email, to_email, status,
                   sent_at, created_at, updated_at
            FROM emails
            WHERE id = $1 AND from_email = $2
            "#,
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(email_from_row))
    }

    async fn set_email_status(
        &self,
        id: Uuid,
        owner: &str,
        status: EmailStatus,
    ) -> Result<bool, StoreError> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE emails
            SET status = $1,
                sent_at = CASE WHEN $1 = 'SENT' THEN $2 ELSE sent_at END,
                updated_at = $2
            WHERE id = $3 AND from_email = $4
            "#,
        )
        .bind(status.as_str())
        .bind(now)
        .bind(id)
        .bind(owner)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_email(&self, id: Uuid, owner: &str) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM emails WHERE id = $1 AND from_email = $2
            "#,
        )
        .bind(id)
        .bind(owner)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}
