//! Registration, login, and logout semantics.

#![allow(clippy::unwrap_used)]

use stylestore_integration_tests::{TestContext, jane_registration};
use stylestore_storefront::AppError;
use stylestore_storefront::persist::{KeyValueStore, keys};
use stylestore_storefront::services::AuthError;
use stylestore_storefront::validation::LoginForm;

fn login_form(email: &str, password: &str) -> LoginForm {
    LoginForm {
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

#[test]
fn login_with_no_stored_profile_fails_generically() {
    let mut ctx = TestContext::new();

    let err = ctx.storefront.login(&login_form("a@b.com", "xxxxxx")).unwrap_err();
    assert!(matches!(
        err,
        AppError::Auth(AuthError::InvalidCredentials)
    ));
    assert!(!ctx.storefront.session().is_authenticated());
}

#[test]
fn wrong_password_and_wrong_email_fail_identically() {
    let mut ctx = TestContext::new();
    ctx.storefront.register(jane_registration()).unwrap();
    ctx.storefront.logout();

    let wrong_password = ctx
        .storefront
        .login(&login_form("jane@example.com", "nope99"))
        .unwrap_err();
    let wrong_email = ctx
        .storefront
        .login(&login_form("john@example.com", "secret1"))
        .unwrap_err();

    // Neither error reveals which field was wrong.
    assert_eq!(wrong_password.to_string(), wrong_email.to_string());
}

#[test]
fn logout_keeps_stored_account() {
    // Logging out ends the session; it must not delete the account.
    let mut ctx = TestContext::new();
    ctx.storefront.register(jane_registration()).unwrap();
    assert!(ctx.storefront.session().is_authenticated());

    ctx.storefront.logout();
    assert!(!ctx.storefront.session().is_authenticated());
    assert!(ctx.storefront.session().has_account());

    // A second login succeeds without re-registering.
    let profile = ctx
        .storefront
        .login(&login_form("jane@example.com", "secret1"))
        .unwrap();
    assert_eq!(profile.email.as_str(), "jane@example.com");
}

#[test]
fn registering_again_overwrites_the_single_profile() {
    let mut ctx = TestContext::new();
    ctx.storefront.register(jane_registration()).unwrap();

    let mut second = jane_registration();
    second.email = "june@example.com".to_owned();
    second.password = "other-secret".to_owned();
    second.confirm_password = "other-secret".to_owned();
    ctx.storefront.register(second).unwrap();

    assert!(ctx
        .storefront
        .login(&login_form("jane@example.com", "secret1"))
        .is_err());
    assert!(ctx
        .storefront
        .login(&login_form("june@example.com", "other-secret"))
        .is_ok());
}

#[test]
fn sessions_do_not_survive_a_reload_but_accounts_do() {
    let mut ctx = TestContext::new();
    ctx.storefront.register(jane_registration()).unwrap();

    let mut fresh = ctx.reload();
    assert!(!fresh.session().is_authenticated());
    assert!(fresh.session().has_account());
    assert!(fresh
        .login(&login_form("jane@example.com", "secret1"))
        .is_ok());
}

#[test]
fn stored_profile_never_contains_the_plaintext_password() {
    let mut ctx = TestContext::new();
    ctx.storefront.register(jane_registration()).unwrap();

    let raw = ctx.kv.get(keys::USER).unwrap().unwrap();
    assert!(!raw.contains("secret1"));
}

#[test]
fn validation_rejects_malformed_login_before_the_store_sees_it() {
    let mut ctx = TestContext::new();
    ctx.storefront.register(jane_registration()).unwrap();
    ctx.storefront.logout();

    let err = ctx.storefront.login(&login_form("not-an-email", "secret1")).unwrap_err();
    let fields = err.field_errors().unwrap();
    assert_eq!(fields.get("email"), Some("Email is invalid"));
}
