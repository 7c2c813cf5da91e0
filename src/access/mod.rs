//! Role- and verification-driven authorization for the marketplace.
//!
//! Route guards, UI gates, and service handlers supply an immutable
//! [`UserSnapshot`] and ask one of the evaluators a question; the engine
//! never fetches data and never writes back. All shared state is the
//! [`AccessPolicy`] tables, built once at startup and immutable
//! afterward, so evaluation is pure and safe from any number of threads.

pub mod domain;

pub(crate) mod catalog;
pub(crate) mod evaluator;
pub(crate) mod level;
pub(crate) mod limits;
pub(crate) mod matrix;
pub(crate) mod policy;
pub(crate) mod privacy;

#[cfg(test)]
mod tests;

pub use catalog::PermissionCatalog;
pub use domain::{
    AccessLevel, ActivityHistoryVisibility, ContactInfoVisibility, Limit, LimitName,
    NotificationCadence, Permission, PermissionCategory, PermissionParseError,
    PrivacySettings, ProfileVisibility, Role, UserId, UserSnapshot, VerificationType,
};
pub use evaluator::{PermissionEvaluator, RequirementCheck};
pub use level::{resolve_access_level, PROFESSIONAL_REQUIREMENTS, VERIFIED_REQUIREMENTS};
pub use limits::LimitChecker;
pub use matrix::{standard_requirement_table, LimitMatrix, PermissionMatrix, PolicyBuildError};
pub use policy::AccessPolicy;
pub use privacy::{can_view_contact_info, can_view_profile, default_privacy_settings};
