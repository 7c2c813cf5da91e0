use super::common::*;
use crate::access::domain::{
    ActivityHistoryVisibility, ContactInfoVisibility, NotificationCadence, PrivacySettings,
    ProfileVisibility, Role,
};
use crate::access::{can_view_contact_info, can_view_profile, default_privacy_settings};

fn locked_down() -> PrivacySettings {
    PrivacySettings {
        profile_visibility: ProfileVisibility::Private,
        contact_info_visibility: ContactInfoVisibility::Hidden,
        activity_history_visibility: ActivityHistoryVisibility::Hidden,
        notification_cadence: NotificationCadence::Disabled,
    }
}

#[test]
fn users_always_see_their_own_data() {
    let mut me = user("u-1", Role::Buyer, &[]);
    me.privacy = locked_down();

    assert!(can_view_contact_info(&me, &me));
    assert!(can_view_profile(&me, &me));
}

#[test]
fn hidden_contact_info_is_withheld_even_from_verified_viewers() {
    let viewer = user("v-1", Role::Buyer, &verified_set());
    let mut target = user("t-1", Role::Seller, &[]);
    target.privacy.contact_info_visibility = ContactInfoVisibility::Hidden;

    assert!(!can_view_contact_info(&viewer, &target));
}

#[test]
fn verified_only_contact_info_follows_the_viewer_tier() {
    let mut target = user("t-2", Role::Seller, &[]);
    target.privacy.contact_info_visibility = ContactInfoVisibility::Verified;

    let basic_viewer = user("v-2", Role::Buyer, &[]);
    assert!(!can_view_contact_info(&basic_viewer, &target));

    let same_viewer_verified = user("v-2", Role::Buyer, &verified_set());
    assert!(can_view_contact_info(&same_viewer_verified, &target));
}

#[test]
fn open_contact_info_is_visible_to_basic_viewers() {
    let viewer = user("v-3", Role::Buyer, &[]);
    let mut target = user("t-3", Role::Agent, &[]);
    target.privacy.contact_info_visibility = ContactInfoVisibility::All;

    assert!(can_view_contact_info(&viewer, &target));
}

#[test]
fn professional_agents_bypass_contact_info_settings() {
    let agent = user("a-1", Role::Agent, &professional_set());
    let mut target = user("t-4", Role::Buyer, &[]);
    target.privacy = locked_down();

    assert!(can_view_contact_info(&agent, &target));
    // The override is contact-info only; a private profile stays private.
    assert!(!can_view_profile(&agent, &target));
}

#[test]
fn verified_agents_do_not_get_the_professional_override() {
    let agent = user("a-2", Role::Agent, &verified_set());
    let mut target = user("t-5", Role::Buyer, &[]);
    target.privacy.contact_info_visibility = ContactInfoVisibility::Hidden;

    assert!(!can_view_contact_info(&agent, &target));
}

#[test]
fn contacts_only_profiles_require_the_relationship() {
    let mut viewer = user("v-4", Role::Buyer, &[]);
    let mut target = user("t-6", Role::Seller, &[]);
    target.privacy.profile_visibility = ProfileVisibility::Contacts;

    assert!(!can_view_profile(&viewer, &target));

    viewer.contacts.insert(target.id.clone());
    assert!(can_view_profile(&viewer, &target));
}

#[test]
fn public_and_private_profiles_behave_as_declared() {
    let viewer = user("v-5", Role::Buyer, &[]);

    let mut open = user("t-7", Role::Seller, &[]);
    open.privacy.profile_visibility = ProfileVisibility::Public;
    assert!(can_view_profile(&viewer, &open));

    let mut closed = user("t-8", Role::Seller, &[]);
    closed.privacy.profile_visibility = ProfileVisibility::Private;
    assert!(!can_view_profile(&viewer, &closed));
}

#[test]
fn unrecognized_persisted_settings_deny() {
    // Settings written by a newer client deserialize to Unrecognized and
    // must deny for both decisions.
    let settings: PrivacySettings = serde_json::from_value(serde_json::json!({
        "profile_visibility": "followers_only",
        "contact_info_visibility": "friends",
        "activity_history_visibility": "aggregate",
        "notification_cadence": "weekly",
    }))
    .expect("unknown values fall back to Unrecognized");

    assert_eq!(settings.profile_visibility, ProfileVisibility::Unrecognized);
    assert_eq!(
        settings.contact_info_visibility,
        ContactInfoVisibility::Unrecognized
    );

    let viewer = user("v-6", Role::Buyer, &verified_set());
    let mut target = user("t-9", Role::Seller, &[]);
    target.privacy = settings;

    assert!(!can_view_contact_info(&viewer, &target));
    assert!(!can_view_profile(&viewer, &target));
}

#[test]
fn defaults_match_role_exposure_expectations() {
    let agent = default_privacy_settings(Role::Agent);
    assert_eq!(agent.contact_info_visibility, ContactInfoVisibility::All);
    assert_eq!(agent.profile_visibility, ProfileVisibility::Public);

    let buyer = default_privacy_settings(Role::Buyer);
    assert_eq!(buyer.contact_info_visibility, ContactInfoVisibility::Verified);

    let admin = default_privacy_settings(Role::Admin);
    assert_eq!(admin.profile_visibility, ProfileVisibility::Private);
    assert_eq!(admin.contact_info_visibility, ContactInfoVisibility::Hidden);
}

#[test]
fn evaluators_never_mutate_the_snapshots() {
    let viewer = user("v-7", Role::Buyer, &verified_set());
    let target = user("t-10", Role::Seller, &[]);
    let viewer_before = viewer.clone();
    let target_before = target.clone();

    can_view_contact_info(&viewer, &target);
    can_view_profile(&viewer, &target);

    assert_eq!(viewer, viewer_before);
    assert_eq!(target, target_before);
}
