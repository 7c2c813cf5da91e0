use std::collections::BTreeMap;
use std::sync::Arc;

use super::domain::{Limit, LimitName, UserSnapshot};
use super::level::resolve_access_level;
use super::policy::AccessPolicy;

static NO_LIMITS: BTreeMap<LimitName, Limit> = BTreeMap::new();

/// Resolves resource limits and tests counters against them.
#[derive(Debug, Clone)]
pub struct LimitChecker {
    policy: Arc<AccessPolicy>,
}

impl LimitChecker {
    pub fn new(policy: Arc<AccessPolicy>) -> Self {
        Self { policy }
    }

    /// Limit map for the user's role at their current access level.
    /// An absent `(role, level)` pair resolves to an empty map.
    pub fn user_limits(&self, user: &UserSnapshot) -> &BTreeMap<LimitName, Limit> {
        let level = resolve_access_level(user.role, &user.verifications);
        self.policy
            .limits_for(user.role, level)
            .unwrap_or(&NO_LIMITS)
    }

    /// Whether one more action is allowed under the named limit.
    ///
    /// A name with no entry is unconstrained. Capability flags are
    /// returned verbatim and ignore `current`. Ceilings use strict
    /// inequality: reaching the ceiling denies the next action without
    /// invalidating actions already taken.
    pub fn is_within_limit(&self, user: &UserSnapshot, name: LimitName, current: u32) -> bool {
        match self.user_limits(user).get(&name) {
            None => true,
            Some(Limit::Capability(allowed)) => *allowed,
            Some(Limit::Ceiling(ceiling)) => current < *ceiling,
        }
    }
}
