#![cfg(feature = "serde")]

use uzi_reader::prelude::*;

static CORRECT: &str = include_str!("../assets/mock-011-correct.pem");
static COMMON_NAME_ONLY: &str = include_str!("../assets/mock-014-common-name-only.pem");

#[test]
fn test_policy_from_json() {
    let config: PolicyConfig = serde_json::from_str(
        r#"{ "strict_ca": true, "allowed_types": ["Z", "N"], "allowed_roles": ["30."] }"#,
    )
    .unwrap();
    assert_eq!(
        config,
        PolicyConfig::new(true)
            .allow_types(vec!["Z", "N"])
            .allow_role("30.")
    );
    // missing keys use the defaults
    let config: PolicyConfig = serde_json::from_str(r#"{ "allowed_roles": ["01."] }"#).unwrap();
    assert!(!config.strict_ca);
    assert!(config.allowed_types.is_empty());
}

#[test]
fn test_record_to_json() {
    let user = UziRecord::pass_user(Verification::Success, Some(CORRECT)).unwrap();
    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["givenName"], "john");
    assert_eq!(value["Role"], "30.015");
    assert_eq!(value.as_object().unwrap().len(), 10);

    let user = UziRecord::pass_user(Verification::Success, Some(COMMON_NAME_ONLY)).unwrap();
    let value = serde_json::to_value(&user).unwrap();
    assert!(value["surName"].is_null());
}
