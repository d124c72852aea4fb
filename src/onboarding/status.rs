/**
 * Onboarding Status
 *
 * Whether a user may use gated features is resolved per request through a
 * small state machine:
 *
 * ```text
 * Unknown → Checking → { Complete, Incomplete }
 * ```
 *
 * - Fast path: the session token carries a server-signed `onboarding`
 *   claim. If it says complete, the status is Complete with no store
 *   round trip.
 * - Slow path: read the profile row. No row means a new user
 *   (Incomplete). A store failure is logged and also resolves Incomplete:
 *   failing closed sends the user back through onboarding rather than
 *   granting access on missing data.
 *
 * Once Complete, a resolution never regresses the status; the only way to
 * move "backwards" is a fresh resolution on a later request, which will
 * hit the same claim or store and come to the same answer.
 */
use uuid::Uuid;

use crate::middleware::auth::AuthenticatedUser;
use crate::store::Store;

/// Per-request onboarding status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStatus {
    /// Nothing resolved yet
    Unknown,
    /// Resolution in progress
    Checking,
    /// Onboarding profile exists and is complete
    Complete,
    /// No profile, profile incomplete, or store unreachable
    Incomplete,
}

impl OnboardingStatus {
    /// Unknown → Checking; any other state is unchanged
    pub fn begin_check(self) -> Self {
        match self {
            Self::Unknown => Self::Checking,
            other => other,
        }
    }

    /// Resolve a check. Only `Checking` moves; `Complete` never regresses,
    /// and `Unknown` must pass through `begin_check` first.
    pub fn resolve(self, completed: bool) -> Self {
        match self {
            Self::Checking => {
                if completed {
                    Self::Complete
                } else {
                    Self::Incomplete
                }
            }
            Self::Complete => Self::Complete,
            other => other,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// Whether the user's stored profile marks onboarding complete
///
/// Fail-closed: a missing row or a store error both count as incomplete.
pub async fn onboarding_completed(store: &dyn Store, user_id: Uuid) -> bool {
    match store.profile_for_user(user_id).await {
        Ok(Some(profile)) => profile.onboarding_completed,
        Ok(None) => false,
        Err(e) => {
            tracing::error!("onboarding status check failed for {user_id}: {e}");
            false
        }
    }
}

/// Resolve the onboarding status for an authenticated request
pub async fn resolve_status(store: &dyn Store, user: &AuthenticatedUser) -> OnboardingStatus {
    let status = OnboardingStatus::Unknown.begin_check();

    // Fast path: trust the signed claim, skip the store.
    if user.onboarding_claim {
        return status.resolve(true);
    }

    status.resolve(onboarding_completed(store, user.user_id).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::profiles::ProfileSubmission;
    use crate::store::MemoryStore;

    fn authed(user_id: Uuid, claim: bool) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id,
            email: "a@x.com".to_string(),
            name: "Ann".to_string(),
            onboarding_claim: claim,
        }
    }

    #[test]
    fn test_transition_order() {
        let status = OnboardingStatus::Unknown;
        assert_eq!(status.begin_check(), OnboardingStatus::Checking);
        assert_eq!(status.begin_check().resolve(true), OnboardingStatus::Complete);
        assert_eq!(
            status.begin_check().resolve(false),
            OnboardingStatus::Incomplete
        );
    }

    #[test]
    fn test_resolve_without_check_is_rejected() {
        // Unknown never resolves directly.
        assert_eq!(
            OnboardingStatus::Unknown.resolve(true),
            OnboardingStatus::Unknown
        );
    }

    #[test]
    fn test_complete_never_regresses() {
        let status = OnboardingStatus::Complete;
        assert_eq!(status.resolve(false), OnboardingStatus::Complete);
        assert_eq!(status.begin_check(), OnboardingStatus::Complete);
    }

    #[tokio::test]
    async fn test_fast_path_skips_store() {
        // Empty store: only the claim can say complete.
        let store = MemoryStore::new();
        let user = authed(Uuid::new_v4(), true);

        let status = resolve_status(&store, &user).await;
        assert_eq!(status, OnboardingStatus::Complete);
    }

    #[tokio::test]
    async fn test_slow_path_missing_profile_is_incomplete() {
        let store = MemoryStore::new();
        let user = authed(Uuid::new_v4(), false);

        let status = resolve_status(&store, &user).await;
        assert_eq!(status, OnboardingStatus::Incomplete);
    }

    #[tokio::test]
    async fn test_slow_path_reads_profile() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();
        store
            .upsert_profile(
                user_id,
                ProfileSubmission {
                    full_name: "Ann Example".to_string(),
                    school: "State".to_string(),
                    grade: "junior".to_string(),
                    major: "CS".to_string(),
                },
            )
            .await
            .unwrap();

        let status = resolve_status(&store, &authed(user_id, false)).await;
        assert_eq!(status, OnboardingStatus::Complete);
    }
}
