use std::collections::BTreeSet;

use super::domain::{Permission, PermissionCategory};

/// Every permission the platform knows about, grouped by category at
/// authoring time. The matrix may only grant permissions defined here,
/// and every entry must be granted by at least one role/level pair;
/// both directions are enforced when an [`super::AccessPolicy`] is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCatalog {
    permissions: BTreeSet<Permission>,
}

const CATALOG: &[(PermissionCategory, &[&str])] = &[
    (
        PermissionCategory::Conversation,
        &["create", "view", "reply", "archive", "delete", "moderate"],
    ),
    (
        PermissionCategory::Message,
        &["send", "send_attachments", "delete_own"],
    ),
    (
        PermissionCategory::Info,
        &["view_listings", "view_agent_profiles", "export_own_data"],
    ),
    (
        PermissionCategory::Admin,
        &[
            "configure_automation",
            "manage_users",
            "moderate_content",
            "view_reports",
        ],
    ),
    (
        PermissionCategory::Property,
        &[
            "make_offers",
            "list",
            "edit_own",
            "feature_listing",
            "schedule_viewings",
        ],
    ),
    (
        PermissionCategory::Offer,
        &["make_formal", "accept", "counter", "withdraw"],
    ),
    (PermissionCategory::Privacy, &["customize_visibility"]),
];

impl PermissionCatalog {
    /// The built-in platform catalog.
    pub fn standard() -> Self {
        let permissions = CATALOG
            .iter()
            .flat_map(|(category, actions)| {
                actions
                    .iter()
                    .map(move |action| Permission::new(*category, *action))
            })
            .collect();

        Self { permissions }
    }

    /// Build a catalog from an explicit permission set, for callers
    /// assembling their own policy configuration.
    pub fn from_permissions(permissions: BTreeSet<Permission>) -> Self {
        Self { permissions }
    }

    pub fn contains(&self, permission: &Permission) -> bool {
        self.permissions.contains(permission)
    }

    pub fn all(&self) -> impl Iterator<Item = &Permission> {
        self.permissions.iter()
    }

    pub fn by_category(
        &self,
        category: PermissionCategory,
    ) -> impl Iterator<Item = &Permission> {
        self.permissions
            .iter()
            .filter(move |permission| permission.category == category)
    }

    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }
}
