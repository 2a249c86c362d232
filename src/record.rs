//! UZI records
//!
//! A record is built once per certificate presentation. All variants share the same decoding
//! (webserver checks, subject commonName, SAN fields); each variant then applies its own
//! checks:
//!
//! - [`UziKind::Generic`]: any UZI card or server certificate
//! - [`UziKind::PassUser`]: cards issued to persons (card type `Z`, `N` or `M`), with their
//!   `givenName` and `surName` when the subject holds them
//! - [`UziKind::Server`]: server certificates (card type `S`)

use crate::certificate::{subject_rdns, ClientCertificate};
use crate::consts::{UZI_TYPE_SERVER, UZI_USER_TYPES};
use crate::env::Verification;
use crate::error::{UziError, UziResult};
use crate::field::UziField;
use crate::name::{common_name, user_names};
use crate::san::{decode_san, UziFields};
use log::debug;
use std::collections::BTreeMap;
use std::fmt;
use x509_parser::certificate::X509Certificate;

/// Variant of an UZI record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UziKind {
    Generic,
    PassUser,
    Server,
}

const GENERIC_KEYS: &[UziField] = &[
    UziField::CommonName,
    UziField::OidCa,
    UziField::UziVersion,
    UziField::UziNumber,
    UziField::CardType,
    UziField::SubscriberNumber,
    UziField::Role,
    UziField::AgbCode,
];

const PASS_USER_KEYS: &[UziField] = &[
    UziField::GivenName,
    UziField::SurName,
    UziField::CommonName,
    UziField::OidCa,
    UziField::UziVersion,
    UziField::UziNumber,
    UziField::CardType,
    UziField::SubscriberNumber,
    UziField::Role,
    UziField::AgbCode,
];

impl UziKind {
    /// Keys of a record of this kind
    pub fn keys(self) -> &'static [UziField] {
        match self {
            UziKind::Generic | UziKind::Server => GENERIC_KEYS,
            UziKind::PassUser => PASS_USER_KEYS,
        }
    }
}

impl fmt::Display for UziKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UziKind::Generic => "Uzi",
            UziKind::PassUser => "UziPassUser",
            UziKind::Server => "UziServer",
        };
        f.write_str(s)
    }
}

/// Identity read from an UZI certificate
///
/// Fields can be overwritten with [`set`](UziRecord::set), for example to check how a
/// [`PolicyValidator`](crate::validator::PolicyValidator) handles other values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UziRecord {
    kind: UziKind,
    fields: UziFields,
    common_name: Option<String>,
    given_name: Option<String>,
    sur_name: Option<String>,
}

impl UziRecord {
    /// Build a generic record from the webserver variables
    ///
    /// `verify` must be [`Verification::Success`] and `cert` a PEM-encoded certificate.
    pub fn new(verify: Verification, cert: Option<&str>) -> UziResult<Self> {
        UziRecord::from_pem(UziKind::Generic, verify, cert)
    }

    /// Build a record for a card issued to a person
    pub fn pass_user(verify: Verification, cert: Option<&str>) -> UziResult<Self> {
        UziRecord::from_pem(UziKind::PassUser, verify, cert)
    }

    /// Build a record for a server certificate
    pub fn server(verify: Verification, cert: Option<&str>) -> UziResult<Self> {
        UziRecord::from_pem(UziKind::Server, verify, cert)
    }

    /// Build a record of `kind` from a PEM-encoded certificate
    pub fn from_pem(kind: UziKind, verify: Verification, cert: Option<&str>) -> UziResult<Self> {
        check_presentation(verify, cert.map(str::is_empty))?;
        let cert = ClientCertificate::from_pem(cert.unwrap_or_default())?;
        UziRecord::from_certificate(kind, &cert)
    }

    /// Build a record of `kind` from a DER-encoded certificate
    pub fn from_der(kind: UziKind, verify: Verification, cert: Option<&[u8]>) -> UziResult<Self> {
        check_presentation(verify, cert.map(<[u8]>::is_empty))?;
        let cert = ClientCertificate::from_der(cert.unwrap_or_default());
        UziRecord::from_certificate(kind, &cert)
    }

    fn from_certificate(kind: UziKind, cert: &ClientCertificate) -> UziResult<Self> {
        let x509 = cert.parse()?;
        let (fields, cn) = decode_core(&x509)?;
        let mut record = UziRecord {
            kind,
            fields,
            common_name: Some(cn),
            given_name: None,
            sur_name: None,
        };
        match kind {
            UziKind::Generic => (),
            UziKind::PassUser => {
                if !UZI_USER_TYPES.contains(&record.card_type()) {
                    return Err(UziError::CardTypeNotUser(record.fields.card_type));
                }
                match user_names(x509.subject()) {
                    Ok((given, sur)) => {
                        record.given_name = Some(given);
                        record.sur_name = Some(sur);
                    }
                    // commonName stays the identity
                    Err(UziError::NameNotFound) => debug!("no givenName / surname in subject"),
                    Err(e) => return Err(e),
                }
            }
            UziKind::Server => {
                if record.card_type() != UZI_TYPE_SERVER {
                    return Err(UziError::CardTypeNotServer(record.fields.card_type));
                }
            }
        }
        debug!(
            "{} record for UZI number {} (card type {})",
            kind,
            record.uzi_number(),
            record.card_type()
        );
        Ok(record)
    }

    pub fn kind(&self) -> UziKind {
        self.kind
    }

    pub fn fields(&self) -> &UziFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut UziFields {
        &mut self.fields
    }

    pub fn oid_ca(&self) -> &str {
        &self.fields.oid_ca
    }

    pub fn uzi_version(&self) -> &str {
        &self.fields.uzi_version
    }

    pub fn uzi_number(&self) -> &str {
        &self.fields.uzi_number
    }

    pub fn card_type(&self) -> &str {
        &self.fields.card_type
    }

    pub fn subscriber_number(&self) -> &str {
        &self.fields.subscriber_number
    }

    pub fn role(&self) -> &str {
        &self.fields.role
    }

    pub fn agb_code(&self) -> &str {
        &self.fields.agb_code
    }

    pub fn common_name(&self) -> Option<&str> {
        self.common_name.as_deref()
    }

    pub fn given_name(&self) -> Option<&str> {
        self.given_name.as_deref()
    }

    pub fn sur_name(&self) -> Option<&str> {
        self.sur_name.as_deref()
    }

    /// Return the value of a field, or `None` if it is absent
    pub fn get(&self, field: UziField) -> Option<&str> {
        match field {
            UziField::CommonName => self.common_name(),
            UziField::GivenName => self.given_name(),
            UziField::SurName => self.sur_name(),
            _ => self.fields.get(field),
        }
    }

    /// Overwrite the value of a field
    pub fn set<S: Into<String>>(&mut self, field: UziField, value: S) {
        let value = value.into();
        match field {
            UziField::CommonName => self.common_name = Some(value),
            UziField::GivenName => self.given_name = Some(value),
            UziField::SurName => self.sur_name = Some(value),
            _ => {
                if let Some(v) = self.fields.get_mut(field) {
                    *v = value;
                }
            }
        }
    }

    /// Clear a subject name field. SAN fields cannot be absent and are left untouched.
    pub fn clear(&mut self, field: UziField) {
        match field {
            UziField::CommonName => self.common_name = None,
            UziField::GivenName => self.given_name = None,
            UziField::SurName => self.sur_name = None,
            _ => (),
        }
    }

    /// Iterate over the keys of this record and their values
    pub fn iter(&self) -> impl Iterator<Item = (UziField, Option<&str>)> {
        self.kind.keys().iter().map(move |f| (*f, self.get(*f)))
    }

    /// Return the record as a key/value map
    pub fn to_map(&self) -> BTreeMap<&'static str, Option<String>> {
        self.iter()
            .map(|(f, v)| (f.as_str(), v.map(str::to_owned)))
            .collect()
    }
}

impl fmt::Display for UziRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind)?;
        match (self.given_name(), self.sur_name(), self.common_name()) {
            (Some(given), Some(sur), _) => write!(f, "{} {}", given, sur)?,
            (_, _, Some(cn)) => write!(f, "{}", cn)?,
            _ => (),
        }
        write!(
            f,
            ", UZI {}, card {}, role {})",
            self.uzi_number(),
            self.card_type(),
            self.role()
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UziRecord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(f, v)| (f.as_str(), v)))
    }
}

/// Check the webserver variables, before anything is decoded
fn check_presentation(verify: Verification, cert_is_empty: Option<bool>) -> UziResult<()> {
    if !verify.is_success() {
        return Err(UziError::ServerConfigError);
    }
    match cert_is_empty {
        None | Some(true) => Err(UziError::ClientCertError),
        Some(false) => Ok(()),
    }
}

/// Decoding shared by all record kinds: the SAN fields and the subject commonName
pub fn decode_core(x509: &X509Certificate<'_>) -> UziResult<(UziFields, String)> {
    if subject_rdns(x509).next().is_none() {
        return Err(UziError::MissingSubject);
    }
    let cn = common_name(x509.subject())?;
    let fields = decode_san(x509)?;
    Ok((fields, cn))
}
