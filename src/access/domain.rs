use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for marketplace users.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Primary category of a marketplace account, selecting which
/// permission and limit tables apply.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Buyer,
    Seller,
    Agent,
    Admin,
}

/// Identity or credential checks a user can complete. The verification
/// workflow itself lives elsewhere; this engine only ever reads the
/// resulting set of completed checks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum VerificationType {
    Email,
    Phone,
    Identity,
    Professional,
    Financial,
}

/// Derived access tier. Ordering matters: `Basic < Verified < Professional`,
/// and privacy rules compare tiers directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    Basic,
    Verified,
    Professional,
}

/// Groups permissions for catalog authoring and display.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PermissionCategory {
    Conversation,
    Message,
    Info,
    Admin,
    Property,
    Offer,
    Privacy,
}

impl PermissionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionCategory::Conversation => "conversation",
            PermissionCategory::Message => "message",
            PermissionCategory::Info => "info",
            PermissionCategory::Admin => "admin",
            PermissionCategory::Property => "property",
            PermissionCategory::Offer => "offer",
            PermissionCategory::Privacy => "privacy",
        }
    }

    fn from_prefix(value: &str) -> Option<Self> {
        match value {
            "conversation" => Some(PermissionCategory::Conversation),
            "message" => Some(PermissionCategory::Message),
            "info" => Some(PermissionCategory::Info),
            "admin" => Some(PermissionCategory::Admin),
            "property" => Some(PermissionCategory::Property),
            "offer" => Some(PermissionCategory::Offer),
            "privacy" => Some(PermissionCategory::Privacy),
            _ => None,
        }
    }
}

impl fmt::Display for PermissionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An atomic, named capability a user either has or lacks at their
/// current access level. Structured as category plus action rather than
/// a convention-parsed `"category:action"` string; parsing only happens
/// at initialization time through [`FromStr`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Permission {
    pub category: PermissionCategory,
    pub action: String,
}

impl Permission {
    pub fn new(category: PermissionCategory, action: impl Into<String>) -> Self {
        Self {
            category,
            action: action.into(),
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category, self.action)
    }
}

/// Rejections raised when parsing a permission identifier.
#[derive(Debug, thiserror::Error)]
pub enum PermissionParseError {
    #[error("permission must be formatted as 'category:action', got '{0}'")]
    MissingSeparator(String),
    #[error("unknown permission category '{0}'")]
    UnknownCategory(String),
    #[error("permission action must not be empty")]
    EmptyAction,
}

impl FromStr for Permission {
    type Err = PermissionParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (prefix, action) = value
            .split_once(':')
            .ok_or_else(|| PermissionParseError::MissingSeparator(value.to_string()))?;
        let category = PermissionCategory::from_prefix(prefix)
            .ok_or_else(|| PermissionParseError::UnknownCategory(prefix.to_string()))?;
        if action.is_empty() {
            return Err(PermissionParseError::EmptyAction);
        }
        Ok(Permission::new(category, action))
    }
}

/// Names of the resource limits resolved per role and access level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LimitName {
    MaxDailyMessages,
    MaxActiveConversations,
    MaxActiveListings,
    MaxAppointmentsPerDay,
    MaxOpenOffers,
    CanModerateConversations,
    CanFeatureListings,
}

/// A resolved limit value. Ceilings bound counters; capability flags are
/// yes/no switches that ignore the caller-supplied counter entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Limit {
    Ceiling(u32),
    Capability(bool),
}

/// Who may view a user's profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileVisibility {
    Public,
    Contacts,
    Private,
    /// Values persisted by clients this build does not know about.
    /// Treated as deny everywhere.
    #[serde(other)]
    Unrecognized,
}

/// Who may view a user's contact details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactInfoVisibility {
    Hidden,
    Verified,
    All,
    #[serde(other)]
    Unrecognized,
}

/// Who may view a user's activity history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityHistoryVisibility {
    Visible,
    Stats,
    Hidden,
    #[serde(other)]
    Unrecognized,
}

/// How the user wants to be notified about marketplace activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationCadence {
    Immediate,
    Daily,
    Disabled,
    #[serde(other)]
    Unrecognized,
}

/// A user's declared visibility and notification preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub profile_visibility: ProfileVisibility,
    pub contact_info_visibility: ContactInfoVisibility,
    pub activity_history_visibility: ActivityHistoryVisibility,
    pub notification_cadence: NotificationCadence,
}

/// Immutable view of a user supplied by the identity collaborator.
/// The engine only ever reads it; `verifications` is mutated solely by
/// the external verification workflow, and `contacts` by whatever
/// relationship action the surrounding application defines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub id: UserId,
    pub role: Role,
    pub verifications: BTreeSet<VerificationType>,
    pub privacy: PrivacySettings,
    pub contacts: BTreeSet<UserId>,
}
