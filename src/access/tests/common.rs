use std::collections::BTreeSet;
use std::sync::Arc;

use crate::access::domain::{
    Permission, PermissionCategory, Role, UserId, UserSnapshot, VerificationType,
};
use crate::access::{
    default_privacy_settings, AccessPolicy, LimitChecker, PermissionEvaluator,
};

pub(super) fn policy() -> Arc<AccessPolicy> {
    Arc::new(AccessPolicy::standard().expect("standard policy builds"))
}

pub(super) fn evaluator() -> PermissionEvaluator {
    PermissionEvaluator::new(policy())
}

pub(super) fn limit_checker() -> LimitChecker {
    LimitChecker::new(policy())
}

pub(super) fn user(id: &str, role: Role, verifications: &[VerificationType]) -> UserSnapshot {
    UserSnapshot {
        id: UserId(id.to_string()),
        role,
        verifications: verifications.iter().copied().collect(),
        privacy: default_privacy_settings(role),
        contacts: BTreeSet::new(),
    }
}

pub(super) fn verified_set() -> [VerificationType; 3] {
    [
        VerificationType::Email,
        VerificationType::Phone,
        VerificationType::Identity,
    ]
}

pub(super) fn professional_set() -> [VerificationType; 4] {
    [
        VerificationType::Email,
        VerificationType::Phone,
        VerificationType::Identity,
        VerificationType::Professional,
    ]
}

pub(super) fn perm(category: PermissionCategory, action: &str) -> Permission {
    Permission::new(category, action)
}
