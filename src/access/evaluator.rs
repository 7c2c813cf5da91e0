use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{Permission, UserSnapshot, VerificationType};
use super::level::resolve_access_level;
use super::policy::AccessPolicy;

static NO_PERMISSIONS: BTreeSet<Permission> = BTreeSet::new();

/// Answers permission queries against an injected [`AccessPolicy`].
/// Stateless beyond the shared policy; denial is an expected outcome,
/// never an error.
#[derive(Debug, Clone)]
pub struct PermissionEvaluator {
    policy: Arc<AccessPolicy>,
}

/// Outcome of [`PermissionEvaluator::check_permission_requirements`].
///
/// `missing` lists the verifications the user still lacks for the
/// permission, and is empty when the permission has no requirement-table
/// entry: that denial is a role-capability gap, and the engine does not
/// fabricate an explanation it cannot justify.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementCheck {
    pub granted: bool,
    pub missing: Vec<VerificationType>,
}

impl PermissionEvaluator {
    pub fn new(policy: Arc<AccessPolicy>) -> Self {
        Self { policy }
    }

    /// Permission set for the user's role at their current access level.
    /// An absent `(role, level)` pair resolves to the empty set, never to
    /// a grant.
    pub fn user_permissions(&self, user: &UserSnapshot) -> &BTreeSet<Permission> {
        let level = resolve_access_level(user.role, &user.verifications);
        self.policy
            .grants_for(user.role, level)
            .unwrap_or(&NO_PERMISSIONS)
    }

    pub fn has_permission(&self, user: &UserSnapshot, permission: &Permission) -> bool {
        let granted = self.user_permissions(user).contains(permission);
        if !granted {
            debug!(user = %user.id, %permission, "permission denied");
        }
        granted
    }

    /// True when the user holds at least one of `permissions`.
    /// An empty slice yields `false`: there is nothing to satisfy the
    /// existential.
    pub fn has_any_permission(&self, user: &UserSnapshot, permissions: &[Permission]) -> bool {
        let granted = self.user_permissions(user);
        permissions.iter().any(|p| granted.contains(p))
    }

    /// True when the user holds every one of `permissions`.
    /// An empty slice yields `true` (vacuous truth), the opposite
    /// convention from [`Self::has_any_permission`].
    pub fn has_all_permissions(&self, user: &UserSnapshot, permissions: &[Permission]) -> bool {
        let granted = self.user_permissions(user);
        permissions.iter().all(|p| granted.contains(p))
    }

    /// Explain whether a permission is granted and, if not, which
    /// verifications from the requirement table the user still lacks.
    pub fn check_permission_requirements(
        &self,
        user: &UserSnapshot,
        permission: &Permission,
    ) -> RequirementCheck {
        if self.user_permissions(user).contains(permission) {
            return RequirementCheck {
                granted: true,
                missing: Vec::new(),
            };
        }

        let missing = self
            .policy
            .requirements_for(permission)
            .map(|required| {
                required
                    .iter()
                    .filter(|kind| !user.verifications.contains(kind))
                    .copied()
                    .collect()
            })
            .unwrap_or_default();

        RequirementCheck {
            granted: false,
            missing,
        }
    }
}
