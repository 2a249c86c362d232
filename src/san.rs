//! UZI data stored in the subjectAltName extension
//!
//! UZI certificates carry an `OtherName` general name of type `2.5.5.5` whose value is an
//! IA5String of the form
//!
//! <pre>
//! OidCa-UziVersion-UziNumber-CardType-SubscriberNumber-Role-AgbCode
//! </pre>
//!
//! (UZI-register CPS, page 60). The payload is read as the ASCII text of the DER encoding of the
//! value, so the first field starts with the IA5String tag and length bytes. For the usual
//! payload lengths the length byte is `?` (63) or `=` (61), which is where the prefix stripping
//! of the first field comes from.

use crate::certificate::subject_alt_names;
use crate::consts::OID_IA5STRING;
use crate::error::{UziError, UziResult};
use crate::field::UziField;
use asn1_rs::{Any, FromDer};
use data_encoding::HEXUPPER;
use log::{debug, trace};
use std::fmt;
use std::str::FromStr;
use x509_parser::certificate::X509Certificate;
use x509_parser::extensions::GeneralName;

const SAN_SEPARATOR: char = '-';

/// The seven fields of the UZI subjectAltName, in encoding order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UziFields {
    /// OID of the issuing UZI-register CA
    pub oid_ca: String,
    pub uzi_version: String,
    pub uzi_number: String,
    /// Card type: `Z`, `N`, `M` or `S`
    pub card_type: String,
    pub subscriber_number: String,
    /// Role, see the CPS page 89
    pub role: String,
    pub agb_code: String,
}

impl UziFields {
    /// Return the value of a SAN field, or `None` for a subject name field
    pub fn get(&self, field: UziField) -> Option<&str> {
        let value = match field {
            UziField::OidCa => &self.oid_ca,
            UziField::UziVersion => &self.uzi_version,
            UziField::UziNumber => &self.uzi_number,
            UziField::CardType => &self.card_type,
            UziField::SubscriberNumber => &self.subscriber_number,
            UziField::Role => &self.role,
            UziField::AgbCode => &self.agb_code,
            UziField::CommonName | UziField::GivenName | UziField::SurName => return None,
        };
        Some(value)
    }

    /// Return a mutable reference to a SAN field, or `None` for a subject name field
    pub fn get_mut(&mut self, field: UziField) -> Option<&mut String> {
        let value = match field {
            UziField::OidCa => &mut self.oid_ca,
            UziField::UziVersion => &mut self.uzi_version,
            UziField::UziNumber => &mut self.uzi_number,
            UziField::CardType => &mut self.card_type,
            UziField::SubscriberNumber => &mut self.subscriber_number,
            UziField::Role => &mut self.role,
            UziField::AgbCode => &mut self.agb_code,
            UziField::CommonName | UziField::GivenName | UziField::SurName => return None,
        };
        Some(value)
    }

    /// Iterate over the fields, in encoding order
    pub fn iter(&self) -> impl Iterator<Item = (UziField, &str)> {
        UziField::SAN_FIELDS
            .iter()
            .filter_map(move |f| self.get(*f).map(|v| (*f, v)))
    }
}

impl FromStr for UziFields {
    type Err = UziError;

    /// Split a SAN payload into its fields
    ///
    /// Fields after the seventh are ignored.
    fn from_str(payload: &str) -> Result<Self, Self::Err> {
        let data: Vec<&str> = payload.split(SAN_SEPARATOR).collect();
        if data.len() < UziField::SAN_FIELDS.len() {
            debug!("SAN payload has {} fields", data.len());
            return Err(UziError::MalformedCertificate);
        }
        let fields = UziFields {
            oid_ca: strip_oid_prefix(data[0]).to_owned(),
            uzi_version: data[1].to_owned(),
            uzi_number: data[2].to_owned(),
            card_type: data[3].to_owned(),
            subscriber_number: data[4].to_owned(),
            role: data[5].to_owned(),
            agb_code: data[6].to_owned(),
        };
        if let Some((field, _)) = fields.iter().find(|(_, v)| v.is_empty()) {
            debug!("SAN payload has an empty {} field", field);
            return Err(UziError::MalformedCertificate);
        }
        Ok(fields)
    }
}

impl fmt::Display for UziFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v: Vec<_> = self.iter().map(|(_, v)| v).collect();
        write!(f, "{}", v.join("-"))
    }
}

/// Remove the encoding prefix from the first SAN field
///
/// Everything up to the first `=` is dropped; failing that, everything up to the first `?`.
/// Other values are returned unchanged.
pub fn strip_oid_prefix(s: &str) -> &str {
    if let Some((_, oid)) = s.split_once('=') {
        oid
    } else if let Some((_, oid)) = s.split_once('?') {
        oid
    } else {
        s
    }
}

/// Return the UZI payload text of an `OtherName` value
///
/// `value` is the `[0] EXPLICIT` element following the type identifier. The payload is the DER
/// encoding it wraps, read as ASCII.
pub fn other_name_payload(value: &[u8]) -> UziResult<String> {
    let (_, any) = Any::from_der(value).map_err(|_| UziError::MalformedCertificate)?;
    let inner = any.data;
    if !inner.is_ascii() {
        debug!("non-ASCII UZI payload: {}", HEXUPPER.encode(inner));
        return Err(UziError::MalformedCertificate);
    }
    std::str::from_utf8(inner)
        .map(str::to_owned)
        .map_err(|_| UziError::MalformedCertificate)
}

/// Return the UZI payload text of the first matching `OtherName` in a list of general names
pub fn find_uzi_payload<'a, 'b, I>(names: I) -> UziResult<String>
where
    'a: 'b,
    I: IntoIterator<Item = &'b GeneralName<'a>>,
{
    for name in names {
        match name {
            GeneralName::OtherName(oid, value) if *oid == OID_IA5STRING => {
                return other_name_payload(value);
            }
            GeneralName::OtherName(oid, _) => trace!("skipping OtherName {}", oid),
            _ => (),
        }
    }
    Err(UziError::CertificateNotUzi)
}

/// Decode the UZI fields of a certificate
pub fn decode_san(x509: &X509Certificate<'_>) -> UziResult<UziFields> {
    let payload = find_uzi_payload(subject_alt_names(x509))?;
    let fields = payload.parse::<UziFields>()?;
    debug!(
        "UZI SAN: version {} number {} card type {} role {}",
        fields.uzi_version, fields.uzi_number, fields.card_type, fields.role
    );
    Ok(fields)
}
