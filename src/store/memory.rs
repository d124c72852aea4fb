/**
 * In-Memory Store
 *
 * `Store` backend over `RwLock`-guarded maps, used by the test suite to
 * drive the real router without a database. Semantics mirror `PgStore`:
 * duplicate emails are conflicts, email queries are owner-scoped, and a
 * `SENT` transition stamps `sent_at`.
 */
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::auth::users::{NewUser, User, UserUpdate};
use crate::emails::types::{Email, EmailStatus, NewEmail};
use crate::onboarding::profiles::{Profile, ProfileSubmission};
use crate::store::{EmailPage, Store, StoreError};

#[derive(Debug, Default)]
struct Inner {
    users: HashMap<Uuid, User>,
    profiles: HashMap<Uuid, Profile>,
    emails: HashMap<Uuid, Email>,
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;

        if inner.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict);
        }

        let now = Utc::now();
        let record = User {
            id: Uuid::new_v4(),
            email: user.email,
            name: user.name,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
        };
        inner.users.insert(record.id, record.clone());
        Ok(record)
    }

    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .inner
            .read()
            .await
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn update_user(
        &self,
        id: Uuid,
        update: UserUpdate,
    ) -> Result<Option<User>, StoreError> {
        let mut inner = self.inner.write().await;

        if let Some(ref email) = update.email {
            if inner.users.values().any(|u| u.email == *email && u.id != id) {
                return Err(StoreError::Conflict);
            }
        }

        let Some(user) = inner.users.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(name) = update.name {
            user.name = name;
        }
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn profile_for_user(&self, user_id: Uuid) -> Result<Option<Profile>, StoreError> {
        Ok(self
            .inner
            .read()
            .await
            .profiles
            .values()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn upsert_profile(
        &self,
        user_id: Uuid,
        submission: ProfileSubmission,
    ) -> Result<Profile, StoreError> {
        let mut inner = self.inner.write().await;
        let now = Utc::now();

        if let Some(profile) = inner.profiles.values_mut().find(|p| p.user_id == user_id) {
            profile.full_name = submission.full_name;
            profile.school = submission.school;
            profile.grade = submission.grade;
            profile.major = submission.major;
            profile.onboarding_completed = true;
            profile.updated_at = now;
            return Ok(profile.clone());
        }

        let record = Profile {
            id: Uuid::new_v4(),
            user_id,
            full_name: submission.full_name,
            school: submission.school,
            grade: submission.grade,
            major: submission.major,
            onboarding_completed: true,
            created_at: now,
            updated_at: now,
        };
        inner.profiles.insert(record.id, record.clone());
        Ok(record)
    }

    async fn create_email(&self, email: NewEmail) -> Result<Email, StoreError> {
        let mut inner = self.inner.write().await;
        let now = Utc::now();

        let record = Email {
            id: Uuid::new_v4(),
            subject: email.subject,
            content: email.content,
            from_email: email.from_email,
            to_email: email.to_email,
            status: email.status,
            sent_at: None,
            created_at: now,
            updated_at: now,
        };
        inner.emails.insert(record.id, record.clone());
        Ok(record)
    }

    async fn emails_for_owner(
        &self,
        owner: &str,
        page: i64,
        limit: i64,
    ) -> Result<EmailPage, StoreError> {
        let inner = self.inner.read().await;

        let mut emails: Vec<Email> = inner
            .emails
            .values()
            .filter(|e| e.from_email == owner)
            .cloned()
            .collect();
        emails.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = emails.len() as i64;
        let offset = ((page - 1) * limit) as usize;
        let emails = emails
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .collect();

        Ok(EmailPage { emails, total })
    }

    async fn email_by_id(&self, id: Uuid, owner: &str) -> Result<Option<Email>, StoreError> {
        Ok(self
            .inner
            .read()
            .await
            .emails
            .get(&id)
            .filter(|e| e.from_email == owner)
            .cloned())
    }

    async fn set_email_status(
        &self,
        id: Uuid,
        owner: &str,
        status: EmailStatus,
    ) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;

        let Some(email) = inner.emails.get_mut(&id).filter(|e| e.from_email == owner) else {
            return Ok(false);
        };

        let now = Utc::now();
        email.status = status;
        if status == EmailStatus::Sent {
            email.sent_at = Some(now);
        }
        email.updated_at = now;
        Ok(true)
    }

    async fn delete_email(&self, id: Uuid, owner: &str) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;

        let owned = inner
            .emails
            .get(&id)
            .map(|e| e.from_email == owner)
            .unwrap_or(false);
        if !owned {
            return Ok(false);
        }
        inner.emails.remove(&id);
        Ok(true)
    }
}
