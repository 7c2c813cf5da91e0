//! End-to-end checks of the access engine through its public facade, the
//! way route guards and service handlers consume it: one shared policy,
//! immutable user snapshots, pure queries.

mod common {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use marketplace_access::access::{
        default_privacy_settings, AccessPolicy, LimitChecker, PermissionEvaluator, Role,
        UserId, UserSnapshot, VerificationType,
    };

    pub(super) struct Engine {
        pub evaluator: PermissionEvaluator,
        pub limits: LimitChecker,
    }

    pub(super) fn engine() -> Engine {
        let policy = Arc::new(AccessPolicy::standard().expect("standard policy builds"));
        Engine {
            evaluator: PermissionEvaluator::new(policy.clone()),
            limits: LimitChecker::new(policy),
        }
    }

    pub(super) fn snapshot(
        id: &str,
        role: Role,
        verifications: &[VerificationType],
    ) -> UserSnapshot {
        UserSnapshot {
            id: UserId(id.to_string()),
            role,
            verifications: verifications.iter().copied().collect(),
            privacy: default_privacy_settings(role),
            contacts: BTreeSet::new(),
        }
    }
}

use common::{engine, snapshot};
use marketplace_access::access::{
    can_view_contact_info, resolve_access_level, AccessLevel, ContactInfoVisibility,
    LimitName, Permission, Role, UserSnapshot, VerificationType,
};

#[test]
fn buyer_unlocks_offers_by_completing_verifications() {
    let engine = engine();
    let make_offers: Permission = "property:make_offers".parse().expect("valid id");

    // Fresh signup: basic tier, offers locked, and the denial explains
    // exactly which verifications are outstanding.
    let buyer = snapshot("buyer-17", Role::Buyer, &[VerificationType::Email]);
    assert_eq!(
        resolve_access_level(buyer.role, &buyer.verifications),
        AccessLevel::Basic
    );
    assert!(!engine.evaluator.has_permission(&buyer, &make_offers));

    let check = engine
        .evaluator
        .check_permission_requirements(&buyer, &make_offers);
    assert_eq!(
        check.missing,
        vec![VerificationType::Phone, VerificationType::Identity]
    );

    // The verification workflow completes phone and identity; the next
    // snapshot resolves to verified and the gate opens.
    let buyer = snapshot(
        "buyer-17",
        Role::Buyer,
        &[
            VerificationType::Email,
            VerificationType::Phone,
            VerificationType::Identity,
        ],
    );
    assert_eq!(
        resolve_access_level(buyer.role, &buyer.verifications),
        AccessLevel::Verified
    );
    assert!(engine.evaluator.has_permission(&buyer, &make_offers));

    // Verified buyers hold at most five open offers.
    assert!(engine
        .limits
        .is_within_limit(&buyer, LimitName::MaxOpenOffers, 4));
    assert!(!engine
        .limits
        .is_within_limit(&buyer, LimitName::MaxOpenOffers, 5));
}

#[test]
fn professional_agent_moderates_and_reaches_guarded_contacts() {
    let engine = engine();
    let agent = snapshot(
        "agent-03",
        Role::Agent,
        &[
            VerificationType::Email,
            VerificationType::Phone,
            VerificationType::Identity,
            VerificationType::Professional,
        ],
    );

    assert_eq!(
        resolve_access_level(agent.role, &agent.verifications),
        AccessLevel::Professional
    );
    assert!(engine
        .evaluator
        .has_permission(&agent, &"conversation:moderate".parse().expect("valid id")));
    assert!(engine
        .limits
        .is_within_limit(&agent, LimitName::CanModerateConversations, 0));

    // Contact details guarded behind "verified" are still reachable for
    // the professional tier.
    let mut seller = snapshot("seller-40", Role::Seller, &[]);
    seller.privacy.contact_info_visibility = ContactInfoVisibility::Verified;
    assert!(can_view_contact_info(&agent, &seller));
}

#[test]
fn snapshots_from_the_identity_collaborator_deserialize_and_fail_closed() {
    let engine = engine();

    // A snapshot as the identity service would hand it over, including a
    // privacy value this build does not know. Unknown settings must deny.
    let raw = serde_json::json!({
        "id": "seller-91",
        "role": "seller",
        "verifications": ["email", "phone", "identity"],
        "privacy": {
            "profile_visibility": "public",
            "contact_info_visibility": "inner_circle",
            "activity_history_visibility": "stats",
            "notification_cadence": "daily"
        },
        "contacts": ["buyer-17"]
    });
    let seller: UserSnapshot = serde_json::from_value(raw).expect("snapshot deserializes");

    assert_eq!(
        resolve_access_level(seller.role, &seller.verifications),
        AccessLevel::Verified
    );
    assert!(engine
        .evaluator
        .has_permission(&seller, &"property:list".parse().expect("valid id")));

    let viewer = snapshot("buyer-17", Role::Buyer, &[]);
    assert!(!can_view_contact_info(&viewer, &seller));
}
