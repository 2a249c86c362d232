//! UZI-register constants: OIDs, card types and role categories
//!
//! Values are taken from the UZI-register Certification Practice Statement. Roles are listed by
//! their category prefix (the first 3 characters of the `Role` field), which is what
//! [`PolicyConfig`](crate::validator::PolicyConfig) compares against.

use asn1_rs::{oid, Oid};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Type identifier of the UZI `OtherName` entry (IA5String, see <https://oidref.com/2.5.5.5>)
pub const OID_IA5STRING: Oid<'static> = oid!(2.5.5.5);

/// UZI-register Care Provider CA
pub const OID_CA_CARE_PROVIDER: &str = "2.16.528.1.1003.1.3.5.5.2";
/// UZI-register Named Employee CA
pub const OID_CA_NAMED_EMPLOYEE: &str = "2.16.528.1.1003.1.3.5.5.3";
/// UZI-register Unnamed Employee CA
pub const OID_CA_UNNAMED_EMPLOYEE: &str = "2.16.528.1.1003.1.3.5.5.4";
/// UZI-register Server CA
pub const OID_CA_SERVER: &str = "2.16.528.1.1003.1.3.5.5.5";

/// The only version of the SAN encoding this crate understands
pub const UZI_VERSION: &str = "1";

pub const UZI_TYPE_CARE_PROVIDER: &str = "Z";
pub const UZI_TYPE_NAMED_EMPLOYEE: &str = "N";
pub const UZI_TYPE_UNNAMED_EMPLOYEE: &str = "M";
pub const UZI_TYPE_SERVER: &str = "S";

/// Card types issued to persons
pub const UZI_USER_TYPES: &[&str] = &[
    UZI_TYPE_CARE_PROVIDER,
    UZI_TYPE_NAMED_EMPLOYEE,
    UZI_TYPE_UNNAMED_EMPLOYEE,
];

pub const UZI_ROLE_DOCTOR: &str = "01.";
pub const UZI_ROLE_DENTIST: &str = "02.";
pub const UZI_ROLE_MIDWIFE: &str = "03.";
pub const UZI_ROLE_PHYSIOTHERAPIST: &str = "04.";
pub const UZI_ROLE_PSYCHOTHERAPIST: &str = "16.";
pub const UZI_ROLE_PHARMACIST: &str = "17.";
pub const UZI_ROLE_HEALTHCARE_PSYCHOLOGIST: &str = "25.";
pub const UZI_ROLE_NURSE: &str = "30.";
pub const UZI_ROLE_ORTHOPEDAGOGUE: &str = "31.";
pub const UZI_ROLE_PHYSICIAN_ASSISTANT: &str = "81.";
pub const UZI_ROLE_CLINICAL_TECHNOLOGIST: &str = "82.";
pub const UZI_ROLE_PHARMACY_ASSISTANT: &str = "83.";
pub const UZI_ROLE_CLINICAL_PHYSICIST: &str = "84.";
pub const UZI_ROLE_DENTAL_PROSTHETIST: &str = "85.";
pub const UZI_ROLE_CAREGIVER: &str = "86.";
pub const UZI_ROLE_OPTOMETRIST: &str = "87.";
pub const UZI_ROLE_SKIN_THERAPIST: &str = "88.";
pub const UZI_ROLE_DIETICIAN: &str = "89.";
pub const UZI_ROLE_ERGOTHERAPIST: &str = "90.";
pub const UZI_ROLE_SPEECH_THERAPIST: &str = "91.";
pub const UZI_ROLE_DENTAL_HYGIENIST: &str = "92.";
pub const UZI_ROLE_PODIATRIST: &str = "95.";
pub const UZI_ROLE_ORTHOPTIST: &str = "96.";
/// Role used on server certificates and cards without a care role
pub const UZI_ROLE_NONE: &str = "00.";

lazy_static! {
    static ref ROLE_DESCRIPTIONS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert(UZI_ROLE_DOCTOR, "Doctor");
        m.insert(UZI_ROLE_DENTIST, "Dentist");
        m.insert(UZI_ROLE_MIDWIFE, "Midwife");
        m.insert(UZI_ROLE_PHYSIOTHERAPIST, "Physiotherapist");
        m.insert(UZI_ROLE_PSYCHOTHERAPIST, "Psychotherapist");
        m.insert(UZI_ROLE_PHARMACIST, "Pharmacist");
        m.insert(UZI_ROLE_HEALTHCARE_PSYCHOLOGIST, "Healthcare psychologist");
        m.insert(UZI_ROLE_NURSE, "Nurse");
        m.insert(UZI_ROLE_ORTHOPEDAGOGUE, "Orthopedagogue-generalist");
        m.insert(UZI_ROLE_PHYSICIAN_ASSISTANT, "Physician assistant");
        m.insert(UZI_ROLE_CLINICAL_TECHNOLOGIST, "Clinical technologist");
        m.insert(UZI_ROLE_PHARMACY_ASSISTANT, "Pharmacy assistant");
        m.insert(UZI_ROLE_CLINICAL_PHYSICIST, "Clinical physicist");
        m.insert(UZI_ROLE_DENTAL_PROSTHETIST, "Dental prosthetist");
        m.insert(UZI_ROLE_CAREGIVER, "Caregiver");
        m.insert(UZI_ROLE_OPTOMETRIST, "Optometrist");
        m.insert(UZI_ROLE_SKIN_THERAPIST, "Skin therapist");
        m.insert(UZI_ROLE_DIETICIAN, "Dietician");
        m.insert(UZI_ROLE_ERGOTHERAPIST, "Ergotherapist");
        m.insert(UZI_ROLE_SPEECH_THERAPIST, "Speech therapist");
        m.insert(UZI_ROLE_DENTAL_HYGIENIST, "Dental hygienist");
        m.insert(UZI_ROLE_PODIATRIST, "Podiatrist");
        m.insert(UZI_ROLE_ORTHOPTIST, "Orthoptist");
        m.insert(UZI_ROLE_NONE, "No role");
        m
    };
}

/// Return the role category of a `Role` value: its first 3 characters, or the whole value if
/// it is shorter.
pub fn role_prefix(role: &str) -> &str {
    match role.char_indices().nth(3) {
        Some((idx, _)) => &role[..idx],
        None => role,
    }
}

/// Human-readable description of a role, looked up by its category prefix
pub fn role_description(role: &str) -> Option<&'static str> {
    ROLE_DESCRIPTIONS.get(role_prefix(role)).copied()
}

/// Human-readable description of a card type
pub fn card_type_description(card_type: &str) -> Option<&'static str> {
    match card_type {
        UZI_TYPE_CARE_PROVIDER => Some("Care provider"),
        UZI_TYPE_NAMED_EMPLOYEE => Some("Named employee"),
        UZI_TYPE_UNNAMED_EMPLOYEE => Some("Unnamed employee"),
        UZI_TYPE_SERVER => Some("Server"),
        _ => None,
    }
}

/// Human-readable description of an UZI-register CA OID
pub fn ca_description(oid_ca: &str) -> Option<&'static str> {
    match oid_ca {
        OID_CA_CARE_PROVIDER => Some("UZI-register Care Provider CA"),
        OID_CA_NAMED_EMPLOYEE => Some("UZI-register Named Employee CA"),
        OID_CA_UNNAMED_EMPLOYEE => Some("UZI-register Unnamed Employee CA"),
        OID_CA_SERVER => Some("UZI-register Server CA"),
        _ => None,
    }
}
