use tracing::debug;

use super::domain::{
    AccessLevel, ActivityHistoryVisibility, ContactInfoVisibility, NotificationCadence,
    PrivacySettings, ProfileVisibility, Role, UserSnapshot,
};
use super::level::resolve_access_level;

/// Whether `viewer` may see `target`'s contact details.
///
/// Rule order: self always sees own data; professional agents see
/// everyone; otherwise the target's declared setting decides. An
/// unrecognized persisted setting denies.
pub fn can_view_contact_info(viewer: &UserSnapshot, target: &UserSnapshot) -> bool {
    if viewer.id == target.id {
        return true;
    }

    let viewer_level = resolve_access_level(viewer.role, &viewer.verifications);
    if viewer.role == Role::Agent && viewer_level == AccessLevel::Professional {
        return true;
    }

    let visible = match target.privacy.contact_info_visibility {
        ContactInfoVisibility::Hidden => false,
        ContactInfoVisibility::Verified => viewer_level >= AccessLevel::Verified,
        ContactInfoVisibility::All => true,
        ContactInfoVisibility::Unrecognized => false,
    };

    if !visible {
        debug!(viewer = %viewer.id, target = %target.id, "contact info withheld");
    }
    visible
}

/// Whether `viewer` may see `target`'s profile.
///
/// Self always sees own profile; otherwise the target's declared setting
/// decides, with `Contacts` gated on the target being in the viewer's
/// contact set. An unrecognized persisted setting denies, the same
/// fail-closed default as contact info.
pub fn can_view_profile(viewer: &UserSnapshot, target: &UserSnapshot) -> bool {
    if viewer.id == target.id {
        return true;
    }

    let visible = match target.privacy.profile_visibility {
        ProfileVisibility::Public => true,
        ProfileVisibility::Contacts => viewer.contacts.contains(&target.id),
        ProfileVisibility::Private => false,
        ProfileVisibility::Unrecognized => false,
    };

    if !visible {
        debug!(viewer = %viewer.id, target = %target.id, "profile withheld");
    }
    visible
}

/// Privacy preferences seeded for a newly registered user of the given
/// role, before they customize anything. Agents default to maximum
/// reachability; admin accounts default to minimum exposure.
pub fn default_privacy_settings(role: Role) -> PrivacySettings {
    match role {
        Role::Buyer | Role::Seller => PrivacySettings {
            profile_visibility: ProfileVisibility::Public,
            contact_info_visibility: ContactInfoVisibility::Verified,
            activity_history_visibility: ActivityHistoryVisibility::Stats,
            notification_cadence: NotificationCadence::Immediate,
        },
        Role::Agent => PrivacySettings {
            profile_visibility: ProfileVisibility::Public,
            contact_info_visibility: ContactInfoVisibility::All,
            activity_history_visibility: ActivityHistoryVisibility::Visible,
            notification_cadence: NotificationCadence::Immediate,
        },
        Role::Admin => PrivacySettings {
            profile_visibility: ProfileVisibility::Private,
            contact_info_visibility: ContactInfoVisibility::Hidden,
            activity_history_visibility: ActivityHistoryVisibility::Hidden,
            notification_cadence: NotificationCadence::Daily,
        },
    }
}
