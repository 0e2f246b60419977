//! Unit tests for auth configuration parsing.

use super::*;
use mockable::MockEnv;
use rstest::rstest;
use std::collections::HashMap;

const STRONG: &str = "0123456789abcdef0123456789abcdef";

fn mock_env(vars: &[(&str, &str)]) -> MockEnv {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

#[rstest]
#[case(BuildMode::Debug)]
#[case(BuildMode::Release)]
fn configured_secret_is_used(#[case] mode: BuildMode) {
    let env = mock_env(&[(JWT_SECRET_ENV, STRONG)]);
    let settings = auth_settings_from_env(&env, mode).expect("valid settings");
    assert_eq!(settings.secret(), STRONG.as_bytes());
    assert!(!settings.demo_mode());
}

#[rstest]
fn debug_falls_back_to_the_demo_secret() {
    let env = mock_env(&[]);
    let settings = auth_settings_from_env(&env, BuildMode::Debug).expect("fallback");
    assert_eq!(settings.secret(), DEMO_SECRET.as_bytes());
}

#[rstest]
#[case(&[])]
#[case(&[(JWT_SECRET_ENV, "")])]
fn release_requires_a_secret(#[case] vars: &[(&str, &str)]) {
    let env = mock_env(vars);
    let err = auth_settings_from_env(&env, BuildMode::Release).expect_err("missing secret");
    assert_eq!(
        err,
        AuthConfigError::MissingSecret {
            name: JWT_SECRET_ENV
        }
    );
}

#[rstest]
fn release_rejects_short_secrets() {
    let env = mock_env(&[(JWT_SECRET_ENV, "short")]);
    let err = auth_settings_from_env(&env, BuildMode::Release).expect_err("too short");
    assert_eq!(
        err,
        AuthConfigError::SecretTooShort {
            name: JWT_SECRET_ENV,
            length: 5,
            min_len: SECRET_MIN_LEN,
        }
    );
}

#[rstest]
#[case("1")]
#[case("true")]
#[case("YES")]
fn demo_mode_relaxes_release_checks(#[case] flag: &str) {
    let env = mock_env(&[(DEMO_MODE_ENV, flag)]);
    let settings = auth_settings_from_env(&env, BuildMode::Release).expect("demo fallback");
    assert!(settings.demo_mode());
    assert_eq!(settings.secret(), DEMO_SECRET.as_bytes());
}

#[rstest]
fn invalid_demo_flag_is_fatal_only_in_release() {
    let env = mock_env(&[(DEMO_MODE_ENV, "maybe"), (JWT_SECRET_ENV, STRONG)]);
    let debug = auth_settings_from_env(&env, BuildMode::Debug).expect("debug tolerates");
    assert!(!debug.demo_mode());

    let err = auth_settings_from_env(&env, BuildMode::Release).expect_err("release rejects");
    assert!(matches!(err, AuthConfigError::InvalidEnv { name: DEMO_MODE_ENV, .. }));
}

#[rstest]
fn fingerprint_identifies_the_secret_without_revealing_it() {
    let strong = auth_settings_from_env(&mock_env(&[(JWT_SECRET_ENV, STRONG)]), BuildMode::Debug)
        .expect("settings");
    let demo = auth_settings_from_env(&mock_env(&[]), BuildMode::Debug).expect("settings");

    let fingerprint = strong.fingerprint();
    assert_eq!(fingerprint.len(), FINGERPRINT_BYTES * 2);
    assert!(fingerprint.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(fingerprint, demo.fingerprint());
    assert!(!format!("{strong:?}").contains(STRONG));
}
