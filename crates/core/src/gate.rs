//! Ownership check for pricing mutations.
//!
//! Update and delete must pass [`authorize`] first. The resulting
//! [`Authorized`] token can only be built here, and the reconciler's mutating
//! functions take it by reference, so a mutation without a passed check does
//! not type-check. Reads never go through the gate.

use crate::error::CoreError;
use crate::store::PricingStore;
use crate::types::DbId;

/// The authenticated caller of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerIdentity {
    pub user_id: DbId,
}

/// The mutation being attempted, used for the rejection message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingAction {
    Update,
    Delete,
}

impl PricingAction {
    pub fn verb(self) -> &'static str {
        match self {
            PricingAction::Update => "update",
            PricingAction::Delete => "delete",
        }
    }
}

/// Proof that the caller owns the freelancer profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorized {
    freelancer_id: DbId,
    owner_user_id: DbId,
}

impl Authorized {
    pub fn freelancer_id(&self) -> DbId {
        self.freelancer_id
    }

    pub fn owner_user_id(&self) -> DbId {
        self.owner_user_id
    }
}

/// Decide whether `caller` may perform `action` on the freelancer's pricing.
///
/// - No profile: `CoreError::NotFound`.
/// - Profile owned by someone else: `CoreError::Forbidden`.
pub async fn authorize(
    store: &dyn PricingStore,
    freelancer_id: DbId,
    caller: &CallerIdentity,
    action: PricingAction,
) -> Result<Authorized, CoreError> {
    let profile = store
        .find_profile(freelancer_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Freelancer",
            id: freelancer_id,
        })?;

    if profile.user_id != caller.user_id {
        return Err(CoreError::Forbidden(format!(
            "Not authorized to {} this freelancer's pricing",
            action.verb()
        )));
    }

    Ok(Authorized {
        freelancer_id,
        owner_user_id: profile.user_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::FreelancerProfile;
    use crate::store::MemoryPricingStore;
    use assert_matches::assert_matches;

    fn profile(freelancer_id: DbId, owner: DbId) -> FreelancerProfile {
        let now = chrono::Utc::now();
        FreelancerProfile {
            freelancer_id,
            user_id: owner,
            title: "Rust developer".to_string(),
            bio: String::new(),
            hourly_rate: None,
            skills: vec![],
            experience_years: 4,
            available_for_hire: true,
            location: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn owner_is_authorized() {
        let store = MemoryPricingStore::new();
        let (freelancer, owner) = (DbId::new_v4(), DbId::new_v4());
        store.insert_profile(profile(freelancer, owner)).await;

        let auth = authorize(
            &store,
            freelancer,
            &CallerIdentity { user_id: owner },
            PricingAction::Update,
        )
        .await
        .unwrap();

        assert_eq!(auth.freelancer_id(), freelancer);
        assert_eq!(auth.owner_user_id(), owner);
    }

    #[tokio::test]
    async fn non_owner_is_forbidden() {
        let store = MemoryPricingStore::new();
        let freelancer = DbId::new_v4();
        store.insert_profile(profile(freelancer, DbId::new_v4())).await;

        let result = authorize(
            &store,
            freelancer,
            &CallerIdentity {
                user_id: DbId::new_v4(),
            },
            PricingAction::Delete,
        )
        .await;

        assert_matches!(result, Err(CoreError::Forbidden(msg)) if msg.contains("delete"));
    }

    #[tokio::test]
    async fn missing_profile_is_not_found() {
        let store = MemoryPricingStore::new();
        let missing = DbId::new_v4();

        let result = authorize(
            &store,
            missing,
            &CallerIdentity {
                user_id: DbId::new_v4(),
            },
            PricingAction::Update,
        )
        .await;

        assert_matches!(
            result,
            Err(CoreError::NotFound { entity: "Freelancer", id }) if id == missing
        );
    }
}
