mod common;

use payout_core::{
    core::services::{
        api_key_service::LIVE_KEY_PREFIX, ActivityService, ApiKeyService, SettingsService,
    },
    domain::{ActivityStatus, StatusFilter},
    seed,
    validation::forms::{EmailChangeForm, PasswordChangeForm, ProfileForm},
};

#[test]
fn issued_key_is_live_and_masked_on_display() {
    let keys = seed::api_keys();
    let next = ApiKeyService::create(&keys, "  CI Runner ", &common::fixed_clock()).expect("key");
    assert_eq!(next.len(), 3);

    let issued = next.last().expect("issued key");
    assert_eq!(issued.name, "CI Runner");
    assert_eq!(issued.created, common::reference_date());
    assert!(issued.key.starts_with(LIVE_KEY_PREFIX));
    assert_eq!(ApiKeyService::last_used_label(issued), "Never");

    let masked = ApiKeyService::mask(&issued.key);
    assert!(masked.starts_with(&issued.key[..12]));
    assert!(masked.ends_with(&issued.key[issued.key.len() - 4..]));
    assert_eq!(masked.chars().count(), issued.key.chars().count());

    let revoked = ApiKeyService::remove(&next, issued.id);
    assert_eq!(revoked, keys);
}

#[test]
fn blank_key_name_is_rejected() {
    let err = ApiKeyService::create(&seed::api_keys(), "   ", &common::fixed_clock())
        .expect_err("blank name");
    assert!(err.validation_errors().expect("fields").has_field("name"));
}

#[test]
fn security_log_filters_by_location_and_status() {
    let activities = seed::activities();
    let london = ActivityService::filter(&activities, "london", StatusFilter::All);
    assert_eq!(london.len(), 2);

    let failed = ActivityService::filter(&activities, "", StatusFilter::Only(ActivityStatus::Failed));
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].action, "Login Attempt");
}

#[test]
fn account_forms_validate_before_applying() {
    let weak = PasswordChangeForm {
        current_password: "old-secret".into(),
        new_password: "short".into(),
        confirm_password: "short".into(),
    };
    assert!(SettingsService::change_password(&weak).is_err());

    let email = EmailChangeForm {
        email: "new@example.com".into(),
        confirm_email: "new@example.com".into(),
    };
    assert_eq!(
        SettingsService::change_email(&email).expect("email"),
        "new@example.com"
    );

    let profile = ProfileForm {
        first_name: "Jane".into(),
        last_name: "Roe".into(),
        email: "jane@example.com".into(),
        bio: Some("x".repeat(501)),
        ..ProfileForm::default()
    };
    let err = SettingsService::update_profile(&profile).expect_err("bio too long");
    assert!(err.validation_errors().expect("fields").has_field("bio"));
}

#[test]
fn sessions_can_be_revoked_except_the_current_one() {
    use payout_core::core::{
        services::{ServiceError, SessionService},
        Clock,
    };

    let sessions = seed::sessions();
    let now = common::fixed_clock().now();
    assert_eq!(SessionService::last_active_label(&sessions[1], now), "2 hours ago");

    let after = SessionService::revoke(&sessions, "3").expect("revoke");
    assert_eq!(after.len(), 2);
    assert!(matches!(
        SessionService::revoke(&after, "1"),
        Err(ServiceError::CurrentSession)
    ));
    assert_eq!(SessionService::revoke(&after, "3").expect("noop"), after);
    assert_eq!(SessionService::revoke_others(&after).len(), 1);
}
