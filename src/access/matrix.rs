use std::collections::{BTreeMap, BTreeSet};

use super::catalog::PermissionCatalog;
use super::domain::{
    AccessLevel, Limit, LimitName, Permission, PermissionCategory, Role, VerificationType,
};
use super::level::reachable_levels;

/// Authoring or wiring mistakes caught while building an
/// [`super::AccessPolicy`]. Every variant is a startup failure; none can
/// occur during evaluation.
#[derive(Debug, thiserror::Error)]
pub enum PolicyBuildError {
    #[error("matrix grants '{permission}' to {role:?}/{level:?} but the catalog does not define it")]
    GrantOutsideCatalog {
        role: Role,
        level: AccessLevel,
        permission: Permission,
    },
    #[error(
        "permissions for {role:?} are not cumulative: '{permission}' granted at {lower:?} is missing at {upper:?}"
    )]
    NonMonotonicGrant {
        role: Role,
        lower: AccessLevel,
        upper: AccessLevel,
        permission: Permission,
    },
    #[error("catalog defines '{permission}' but no role/level entry grants it")]
    UnreferencedPermission { permission: Permission },
    #[error("requirement table references '{permission}' which is not in the catalog")]
    RequirementOutsideCatalog { permission: Permission },
}

/// Static table mapping `(role, access level)` to the granted permission
/// set. Higher levels are authored as the next-lower level's set plus an
/// increment, so the cumulative invariant holds by construction;
/// validation still re-checks it to catch authoring mistakes in custom
/// tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionMatrix {
    grants: BTreeMap<(Role, AccessLevel), BTreeSet<Permission>>,
}

type Increment = &'static [(PermissionCategory, &'static str)];

const BUYER_BASIC: Increment = &[
    (PermissionCategory::Conversation, "create"),
    (PermissionCategory::Conversation, "view"),
    (PermissionCategory::Conversation, "reply"),
    (PermissionCategory::Message, "send"),
    (PermissionCategory::Message, "delete_own"),
    (PermissionCategory::Info, "view_listings"),
    (PermissionCategory::Info, "view_agent_profiles"),
    (PermissionCategory::Info, "export_own_data"),
    (PermissionCategory::Property, "schedule_viewings"),
    (PermissionCategory::Privacy, "customize_visibility"),
];

const BUYER_VERIFIED_EXTRA: Increment = &[
    (PermissionCategory::Conversation, "archive"),
    (PermissionCategory::Message, "send_attachments"),
    (PermissionCategory::Property, "make_offers"),
    (PermissionCategory::Offer, "make_formal"),
    (PermissionCategory::Offer, "withdraw"),
];

const SELLER_BASIC: Increment = &[
    (PermissionCategory::Conversation, "create"),
    (PermissionCategory::Conversation, "view"),
    (PermissionCategory::Conversation, "reply"),
    (PermissionCategory::Message, "send"),
    (PermissionCategory::Message, "delete_own"),
    (PermissionCategory::Info, "view_listings"),
    (PermissionCategory::Info, "export_own_data"),
    (PermissionCategory::Privacy, "customize_visibility"),
];

const SELLER_VERIFIED_EXTRA: Increment = &[
    (PermissionCategory::Conversation, "archive"),
    (PermissionCategory::Message, "send_attachments"),
    (PermissionCategory::Property, "list"),
    (PermissionCategory::Property, "edit_own"),
    (PermissionCategory::Offer, "accept"),
    (PermissionCategory::Offer, "counter"),
];

const AGENT_BASIC: Increment = &[
    (PermissionCategory::Conversation, "create"),
    (PermissionCategory::Conversation, "view"),
    (PermissionCategory::Conversation, "reply"),
    (PermissionCategory::Message, "send"),
    (PermissionCategory::Message, "delete_own"),
    (PermissionCategory::Info, "view_listings"),
    (PermissionCategory::Info, "view_agent_profiles"),
    (PermissionCategory::Info, "export_own_data"),
    (PermissionCategory::Privacy, "customize_visibility"),
];

const AGENT_VERIFIED_EXTRA: Increment = &[
    (PermissionCategory::Conversation, "archive"),
    (PermissionCategory::Message, "send_attachments"),
    (PermissionCategory::Property, "list"),
    (PermissionCategory::Property, "edit_own"),
    (PermissionCategory::Property, "make_offers"),
    (PermissionCategory::Property, "schedule_viewings"),
    (PermissionCategory::Offer, "accept"),
    (PermissionCategory::Offer, "counter"),
];

const AGENT_PROFESSIONAL_EXTRA: Increment = &[
    (PermissionCategory::Conversation, "delete"),
    (PermissionCategory::Conversation, "moderate"),
    (PermissionCategory::Admin, "configure_automation"),
    (PermissionCategory::Property, "feature_listing"),
    (PermissionCategory::Offer, "make_formal"),
];

const ADMIN_BASIC: Increment = &[
    (PermissionCategory::Conversation, "view"),
    (PermissionCategory::Info, "view_listings"),
    (PermissionCategory::Admin, "view_reports"),
];

const ADMIN_VERIFIED_EXTRA: Increment = &[
    (PermissionCategory::Conversation, "delete"),
    (PermissionCategory::Conversation, "moderate"),
    (PermissionCategory::Admin, "manage_users"),
    (PermissionCategory::Admin, "moderate_content"),
    (PermissionCategory::Info, "export_own_data"),
];

impl PermissionMatrix {
    /// The built-in platform matrix, assembled as explicit unions of the
    /// next-lower level plus an increment.
    pub fn standard() -> Self {
        let mut grants = BTreeMap::new();

        let ladders: &[(Role, &[(AccessLevel, Increment)])] = &[
            (
                Role::Buyer,
                &[
                    (AccessLevel::Basic, BUYER_BASIC),
                    (AccessLevel::Verified, BUYER_VERIFIED_EXTRA),
                ],
            ),
            (
                Role::Seller,
                &[
                    (AccessLevel::Basic, SELLER_BASIC),
                    (AccessLevel::Verified, SELLER_VERIFIED_EXTRA),
                ],
            ),
            (
                Role::Agent,
                &[
                    (AccessLevel::Basic, AGENT_BASIC),
                    (AccessLevel::Verified, AGENT_VERIFIED_EXTRA),
                    (AccessLevel::Professional, AGENT_PROFESSIONAL_EXTRA),
                ],
            ),
            (
                Role::Admin,
                &[
                    (AccessLevel::Basic, ADMIN_BASIC),
                    (AccessLevel::Verified, ADMIN_VERIFIED_EXTRA),
                ],
            ),
        ];

        for (role, rungs) in ladders {
            let mut cumulative: BTreeSet<Permission> = BTreeSet::new();
            for (level, increment) in *rungs {
                cumulative.extend(
                    increment
                        .iter()
                        .map(|(category, action)| Permission::new(*category, *action)),
                );
                grants.insert((*role, *level), cumulative.clone());
            }
        }

        Self { grants }
    }

    /// Build a matrix from explicit per-pair grant sets, for callers
    /// assembling their own policy configuration.
    pub fn from_grants(grants: BTreeMap<(Role, AccessLevel), BTreeSet<Permission>>) -> Self {
        Self { grants }
    }

    pub fn grants_for(&self, role: Role, level: AccessLevel) -> Option<&BTreeSet<Permission>> {
        self.grants.get(&(role, level))
    }

    /// Check that every grant exists in the catalog and that grant sets
    /// only grow along each role's reachable levels.
    pub(crate) fn validate_against(
        &self,
        catalog: &PermissionCatalog,
    ) -> Result<(), PolicyBuildError> {
        for ((role, level), granted) in &self.grants {
            for permission in granted {
                if !catalog.contains(permission) {
                    return Err(PolicyBuildError::GrantOutsideCatalog {
                        role: *role,
                        level: *level,
                        permission: permission.clone(),
                    });
                }
            }
        }

        // An absent rung grants nothing at evaluation time, so it is
        // checked as the empty set: a populated lower rung with a
        // missing upper rung is a shrink, not a gap to skip.
        let empty = BTreeSet::new();
        for role in [Role::Buyer, Role::Seller, Role::Agent, Role::Admin] {
            let levels = reachable_levels(role);
            for pair in levels.windows(2) {
                let (lower, upper) = (pair[0], pair[1]);
                let lower_set = self.grants.get(&(role, lower)).unwrap_or(&empty);
                let upper_set = self.grants.get(&(role, upper)).unwrap_or(&empty);
                if let Some(lost) = lower_set.iter().find(|p| !upper_set.contains(*p)) {
                    return Err(PolicyBuildError::NonMonotonicGrant {
                        role,
                        lower,
                        upper,
                        permission: lost.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Union of every grant set; used to catch catalog entries nothing
    /// references.
    pub(crate) fn referenced(&self) -> BTreeSet<&Permission> {
        self.grants.values().flatten().collect()
    }
}

/// Static table mapping `(role, access level)` to resource limits.
/// A missing pair means "no limits object"; the checker treats missing
/// names as unconstrained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitMatrix {
    limits: BTreeMap<(Role, AccessLevel), BTreeMap<LimitName, Limit>>,
}

impl LimitMatrix {
    pub fn standard() -> Self {
        let entries: &[((Role, AccessLevel), &[(LimitName, Limit)])] = &[
            (
                (Role::Buyer, AccessLevel::Basic),
                &[
                    (LimitName::MaxDailyMessages, Limit::Ceiling(20)),
                    (LimitName::MaxActiveConversations, Limit::Ceiling(5)),
                ],
            ),
            (
                (Role::Buyer, AccessLevel::Verified),
                &[
                    (LimitName::MaxDailyMessages, Limit::Ceiling(100)),
                    (LimitName::MaxActiveConversations, Limit::Ceiling(25)),
                    (LimitName::MaxOpenOffers, Limit::Ceiling(5)),
                ],
            ),
            (
                (Role::Seller, AccessLevel::Basic),
                &[
                    (LimitName::MaxDailyMessages, Limit::Ceiling(20)),
                    (LimitName::MaxActiveConversations, Limit::Ceiling(5)),
                ],
            ),
            (
                (Role::Seller, AccessLevel::Verified),
                &[
                    (LimitName::MaxDailyMessages, Limit::Ceiling(150)),
                    (LimitName::MaxActiveConversations, Limit::Ceiling(50)),
                    (LimitName::MaxActiveListings, Limit::Ceiling(25)),
                    (LimitName::MaxAppointmentsPerDay, Limit::Ceiling(10)),
                ],
            ),
            (
                (Role::Agent, AccessLevel::Basic),
                &[
                    (LimitName::MaxDailyMessages, Limit::Ceiling(20)),
                    (LimitName::MaxActiveConversations, Limit::Ceiling(5)),
                    (
                        LimitName::CanModerateConversations,
                        Limit::Capability(false),
                    ),
                ],
            ),
            (
                (Role::Agent, AccessLevel::Verified),
                &[
                    (LimitName::MaxDailyMessages, Limit::Ceiling(200)),
                    (LimitName::MaxActiveConversations, Limit::Ceiling(100)),
                    (LimitName::MaxActiveListings, Limit::Ceiling(50)),
                    (LimitName::MaxAppointmentsPerDay, Limit::Ceiling(15)),
                    (
                        LimitName::CanModerateConversations,
                        Limit::Capability(false),
                    ),
                    (LimitName::CanFeatureListings, Limit::Capability(false)),
                ],
            ),
            (
                (Role::Agent, AccessLevel::Professional),
                &[
                    (LimitName::MaxDailyMessages, Limit::Ceiling(500)),
                    (LimitName::MaxActiveConversations, Limit::Ceiling(250)),
                    (LimitName::MaxActiveListings, Limit::Ceiling(200)),
                    (LimitName::MaxAppointmentsPerDay, Limit::Ceiling(30)),
                    (LimitName::CanModerateConversations, Limit::Capability(true)),
                    (LimitName::CanFeatureListings, Limit::Capability(true)),
                ],
            ),
            (
                (Role::Admin, AccessLevel::Basic),
                &[(LimitName::CanModerateConversations, Limit::Capability(true))],
            ),
            (
                (Role::Admin, AccessLevel::Verified),
                &[(LimitName::CanModerateConversations, Limit::Capability(true))],
            ),
        ];

        let limits = entries
            .iter()
            .map(|(pair, values)| (*pair, values.iter().copied().collect()))
            .collect();

        Self { limits }
    }

    /// Build a limit matrix from explicit per-pair maps.
    pub fn from_limits(
        limits: BTreeMap<(Role, AccessLevel), BTreeMap<LimitName, Limit>>,
    ) -> Self {
        Self { limits }
    }

    pub fn limits_for(
        &self,
        role: Role,
        level: AccessLevel,
    ) -> Option<&BTreeMap<LimitName, Limit>> {
        self.limits.get(&(role, level))
    }
}

/// Verifications a user must complete to ever obtain a sensitive
/// permission. Consulted only to explain denials; grants always come
/// from the permission matrix. Each entry mirrors the verification gate
/// of the lowest tier that grants the permission, so completing exactly
/// the listed verifications is what actually unlocks it.
pub fn standard_requirement_table() -> BTreeMap<Permission, BTreeSet<VerificationType>> {
    let entries: &[((PermissionCategory, &str), &[VerificationType])] = &[
        (
            (PermissionCategory::Offer, "make_formal"),
            &[
                VerificationType::Email,
                VerificationType::Phone,
                VerificationType::Identity,
            ],
        ),
        (
            (PermissionCategory::Property, "make_offers"),
            &[
                VerificationType::Email,
                VerificationType::Phone,
                VerificationType::Identity,
            ],
        ),
        (
            (PermissionCategory::Conversation, "delete"),
            &[VerificationType::Professional],
        ),
        (
            (PermissionCategory::Admin, "configure_automation"),
            &[VerificationType::Professional],
        ),
    ];

    entries
        .iter()
        .map(|((category, action), required)| {
            (
                Permission::new(*category, *action),
                required.iter().copied().collect(),
            )
        })
        .collect()
}
