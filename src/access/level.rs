use std::collections::BTreeSet;

use super::domain::{AccessLevel, Role, VerificationType};

/// Verifications a user must complete to reach the verified tier.
pub const VERIFIED_REQUIREMENTS: [VerificationType; 3] = [
    VerificationType::Email,
    VerificationType::Phone,
    VerificationType::Identity,
];

/// Verifications an agent must complete to reach the professional tier.
/// Strict superset of [`VERIFIED_REQUIREMENTS`].
pub const PROFESSIONAL_REQUIREMENTS: [VerificationType; 4] = [
    VerificationType::Email,
    VerificationType::Phone,
    VerificationType::Identity,
    VerificationType::Professional,
];

/// Derive the access tier for a role and its completed verifications.
///
/// Pure and total: the tier is never stored, always recomputed from the
/// snapshot. The professional check runs first; it subsumes the verified
/// check, and an agent who qualifies must be labeled professional rather
/// than verified.
pub fn resolve_access_level(
    role: Role,
    verifications: &BTreeSet<VerificationType>,
) -> AccessLevel {
    let holds = |required: &[VerificationType]| {
        required.iter().all(|kind| verifications.contains(kind))
    };

    if role == Role::Agent && holds(&PROFESSIONAL_REQUIREMENTS) {
        return AccessLevel::Professional;
    }

    if holds(&VERIFIED_REQUIREMENTS) {
        return AccessLevel::Verified;
    }

    AccessLevel::Basic
}

/// Tiers a role can actually occupy; professional is agent-only.
pub fn reachable_levels(role: Role) -> &'static [AccessLevel] {
    match role {
        Role::Agent => &[
            AccessLevel::Basic,
            AccessLevel::Verified,
            AccessLevel::Professional,
        ],
        Role::Buyer | Role::Seller | Role::Admin => {
            &[AccessLevel::Basic, AccessLevel::Verified]
        }
    }
}
