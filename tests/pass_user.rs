use uzi_reader::prelude::*;

static CORRECT: &str = include_str!("../assets/mock-011-correct.pem");
static CORRECT_ADMIN: &str = include_str!("../assets/mock-012-correct-admin.pem");
static COMMON_NAME_ONLY: &str = include_str!("../assets/mock-014-common-name-only.pem");
static SERVER: &str = include_str!("../assets/mock-022-correct-server-cert.pem");
static NO_VALID_DATA: &str = include_str!("../assets/mock-001-no-valid-uzi-data.pem");
static INCORRECT_SAN: &str = include_str!("../assets/mock-005-incorrect-san-data.pem");
static BMP_NAMES: &str = include_str!("../assets/mock-018-bmp-names.pem");
static DUPLICATE_NAMES: &str = include_str!("../assets/mock-019-duplicate-names.pem");
static MULTI_VALUED_RDN: &str = include_str!("../assets/mock-020-multi-valued-rdn.pem");
static EQUALS_PREFIX: &str = include_str!("../assets/mock-013-equals-prefix.pem");

const SUCCESS: Verification = Verification::Success;

fn check_cert(pem: &str) -> UziError {
    UziRecord::pass_user(SUCCESS, Some(pem)).expect_err("certificate should be rejected")
}

#[test]
fn test_request_has_no_cert() {
    let res = UziRecord::pass_user(Verification::from_value(None), None);
    assert!(matches!(res, Err(UziError::ServerConfigError)));
}

#[test]
fn test_ssl_client_failed() {
    let res = UziRecord::pass_user(Verification::from("FAILED"), Some(CORRECT));
    let err = res.unwrap_err();
    assert!(matches!(err, UziError::ServerConfigError));
    assert_eq!(err.family(), ErrorFamily::ServerConfig);
}

#[test]
fn test_no_client_cert() {
    let res = UziRecord::pass_user(SUCCESS, None);
    let err = res.unwrap_err();
    assert!(matches!(err, UziError::ClientCertError));
    assert_eq!(err.family(), ErrorFamily::ClientCert);
}

#[test]
fn test_cert_without_valid_data() {
    assert!(matches!(check_cert(NO_VALID_DATA), UziError::CertificateNotUzi));
}

#[test]
fn test_cert_incorrect_san_data() {
    let err = check_cert(INCORRECT_SAN);
    assert!(matches!(err, UziError::MalformedCertificate));
    assert_eq!(err.to_string(), "Incorrect SAN found");
}

#[test]
fn test_valid_cert() {
    let data = UziRecord::pass_user(SUCCESS, Some(CORRECT)).unwrap();
    assert_eq!(data.kind(), UziKind::PassUser);
    assert_eq!(data.agb_code(), "00000000");
    assert_eq!(data.card_type(), "N");
    assert_eq!(data.given_name(), Some("john"));
    assert_eq!(data.oid_ca(), "2.16.528.1.1003.1.3.5.5.2");
    assert_eq!(data.role(), "30.015");
    assert_eq!(data.subscriber_number(), "90000111");
    assert_eq!(data.sur_name(), Some("doe-12345678"));
    assert_eq!(data.uzi_number(), "12345678");
    assert_eq!(data.uzi_version(), "1");
    assert_eq!(data.common_name(), Some("john doe-12345678"));
}

#[test]
fn test_valid_admin_cert() {
    let data = UziRecord::pass_user(SUCCESS, Some(CORRECT_ADMIN)).unwrap();
    assert_eq!(data.agb_code(), "00000000");
    assert_eq!(data.card_type(), "N");
    assert_eq!(data.given_name(), Some("john"));
    assert_eq!(data.oid_ca(), "2.16.528.1.1003.1.3.5.5.2");
    assert_eq!(data.role(), "01.015");
    assert_eq!(data.subscriber_number(), "90000111");
    assert_eq!(data.sur_name(), Some("doe-11111111"));
    assert_eq!(data.uzi_number(), "11111111");
    assert_eq!(data.uzi_version(), "1");
}

#[test]
fn test_care_provider_cert() {
    let data = UziRecord::pass_user(SUCCESS, Some(EQUALS_PREFIX)).unwrap();
    assert_eq!(data.card_type(), UZI_TYPE_CARE_PROVIDER);
    assert_eq!(data.given_name(), Some("jane"));
    assert_eq!(data.sur_name(), Some("roe-12345678"));
}

#[test]
fn test_common_name_fallback() {
    let data = UziRecord::pass_user(SUCCESS, Some(COMMON_NAME_ONLY)).unwrap();
    assert_eq!(data.card_type(), UZI_TYPE_UNNAMED_EMPLOYEE);
    assert_eq!(data.given_name(), None);
    assert_eq!(data.sur_name(), None);
    assert_eq!(data.common_name(), Some("john doe-12345678"));
    let map = data.to_map();
    assert_eq!(map.len(), 10);
    assert_eq!(map["givenName"], None);
    assert_eq!(map["commonName"].as_deref(), Some("john doe-12345678"));
    assert_eq!(
        data.to_string(),
        "UziPassUser(john doe-12345678, UZI 12345678, card M, role 30.015)"
    );
}

#[test]
fn test_server_cert_is_not_user() {
    let err = check_cert(SERVER);
    assert!(matches!(err, UziError::CardTypeNotUser(ref t) if t == "S"));
    assert_eq!(err.to_string(), "Uzi CardType is not User (Z/N/M)");
    assert!(!err.is_validation());
}

#[test]
fn test_webserver_env() {
    let env = WebserverEnv {
        verify: Verification::Success,
        cert: Some(CORRECT.to_owned()),
    };
    assert_eq!(env.pass_user().unwrap().uzi_number(), "12345678");
    assert!(env.uzi().is_ok());
}

#[test]
fn test_bmp_string_subject() {
    let data = UziRecord::pass_user(SUCCESS, Some(BMP_NAMES)).unwrap();
    assert_eq!(data.common_name(), Some("jöhn doe-12345678"));
    assert_eq!(data.given_name(), Some("jöhn"));
    assert_eq!(data.sur_name(), Some("doe-12345678"));
    assert_eq!(data.uzi_number(), "12345678");
}

#[test]
fn test_first_names_in_subject_order() {
    let data = UziRecord::pass_user(SUCCESS, Some(DUPLICATE_NAMES)).unwrap();
    assert_eq!(data.common_name(), Some("john first"));
    assert_eq!(data.given_name(), Some("john"));
    assert_eq!(data.sur_name(), Some("first"));

    let data = UziRecord::pass_user(SUCCESS, Some(MULTI_VALUED_RDN)).unwrap();
    assert_eq!(data.common_name(), Some("jan de Vries"));
    assert_eq!(data.given_name(), Some("jan"));
    assert_eq!(data.sur_name(), Some("de Vries"));
}
