//! Subject name lookup
//!
//! The UZI CPS puts the card holder names in the subject: `commonName` on every card,
//! `givenName` and `surname` on cards issued to persons. Attributes are matched on their OID
//! (`oid-registry` names them `commonName`, `givenName` and `surname`).

use crate::error::{UziError, UziResult};
use asn1_rs::{Error as Asn1Error, Tag};
use oid_registry::{OID_X509_COMMON_NAME, OID_X509_GIVEN_NAME, OID_X509_SURNAME};
use x509_parser::error::X509Error;
use x509_parser::x509::{AttributeTypeAndValue, X509Name};

/// Return the value of the first `commonName` attribute of the subject
pub fn common_name(subject: &X509Name<'_>) -> UziResult<String> {
    for rdn in subject.iter_rdn() {
        for attr in rdn.iter() {
            if attr.attr_type() == &OID_X509_COMMON_NAME {
                return attr_string(attr);
            }
        }
    }
    Err(UziError::CommonNameNotFound)
}

/// Return the `(givenName, surname)` pair of the subject
///
/// The first non-empty value of each attribute wins. Both attributes do not need to be in the
/// same RDN.
pub fn user_names(subject: &X509Name<'_>) -> UziResult<(String, String)> {
    let mut given_name: Option<String> = None;
    let mut sur_name: Option<String> = None;
    'rdns: for rdn in subject.iter_rdn() {
        for attr in rdn.iter() {
            let slot = if attr.attr_type() == &OID_X509_SURNAME {
                &mut sur_name
            } else if attr.attr_type() == &OID_X509_GIVEN_NAME {
                &mut given_name
            } else {
                continue;
            };
            if slot.is_none() {
                let value = attr_string(attr)?;
                if !value.is_empty() {
                    *slot = Some(value);
                }
            }
            if given_name.is_some() && sur_name.is_some() {
                break 'rdns;
            }
        }
    }
    match (given_name, sur_name) {
        (Some(given), Some(sur)) => Ok((given, sur)),
        _ => Err(UziError::NameNotFound),
    }
}

/// Decode a DirectoryString attribute value
///
/// `as_str` covers the 8-bit string types. BMPString (UCS-2) and UniversalString (UCS-4) are
/// decoded here.
fn attr_string(attr: &AttributeTypeAndValue<'_>) -> UziResult<String> {
    let err = match attr.as_str() {
        Ok(s) => return Ok(s.to_owned()),
        Err(e) => e,
    };
    let any = attr.attr_value();
    match any.tag() {
        Tag::BmpString => decode_bmp(any.data),
        Tag::UniversalString => decode_universal(any.data),
        _ => Err(err.into()),
    }
}

fn invalid_charset() -> UziError {
    UziError::X509(X509Error::Der(Asn1Error::StringInvalidCharset))
}

fn decode_bmp(data: &[u8]) -> UziResult<String> {
    if data.len() % 2 != 0 {
        return Err(invalid_charset());
    }
    let units = data.chunks_exact(2).map(|c| u16::from_be_bytes([c[0], c[1]]));
    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|_| invalid_charset())
}

fn decode_universal(data: &[u8]) -> UziResult<String> {
    if data.len() % 4 != 0 {
        return Err(invalid_charset());
    }
    data.chunks_exact(4)
        .map(|c| char::from_u32(u32::from_be_bytes([c[0], c[1], c[2], c[3]])))
        .collect::<Option<String>>()
        .ok_or_else(invalid_charset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::ClientCertificate;

    fn with_subject<F: FnOnce(&X509Name<'_>)>(pem: &str, f: F) {
        let cert = ClientCertificate::from_pem(pem).unwrap();
        let x509 = cert.parse().unwrap();
        f(x509.subject())
    }

    #[test]
    fn test_names() {
        with_subject(include_str!("../assets/mock-011-correct.pem"), |subject| {
            assert_eq!(common_name(subject).unwrap(), "john doe-12345678");
            let (given, sur) = user_names(subject).unwrap();
            assert_eq!(given, "john");
            assert_eq!(sur, "doe-12345678");
        });
    }

    #[test]
    fn test_common_name_only() {
        with_subject(include_str!("../assets/mock-014-common-name-only.pem"), |subject| {
            assert_eq!(common_name(subject).unwrap(), "john doe-12345678");
            assert!(matches!(user_names(subject), Err(UziError::NameNotFound)));
        });
    }

    #[test]
    fn test_missing_names() {
        with_subject(include_str!("../assets/mock-017-no-common-name.pem"), |subject| {
            assert!(matches!(
                common_name(subject),
                Err(UziError::CommonNameNotFound)
            ));
        });
        with_subject(include_str!("../assets/mock-016-empty-subject.pem"), |subject| {
            assert_eq!(subject.iter_rdn().count(), 0);
            assert!(matches!(user_names(subject), Err(UziError::NameNotFound)));
        });
    }

    #[test]
    fn test_bmp_string_names() {
        with_subject(include_str!("../assets/mock-018-bmp-names.pem"), |subject| {
            assert_eq!(common_name(subject).unwrap(), "jöhn doe-12345678");
            let (given, sur) = user_names(subject).unwrap();
            assert_eq!(given, "jöhn");
            assert_eq!(sur, "doe-12345678");
        });
    }

    #[test]
    fn test_first_non_empty_name_wins() {
        // SN=first, GN=, GN=john, SN=second, GN=jack
        with_subject(include_str!("../assets/mock-019-duplicate-names.pem"), |subject| {
            let (given, sur) = user_names(subject).unwrap();
            assert_eq!(given, "john");
            assert_eq!(sur, "first");
        });
    }

    #[test]
    fn test_multi_valued_rdn() {
        with_subject(include_str!("../assets/mock-020-multi-valued-rdn.pem"), |subject| {
            assert_eq!(common_name(subject).unwrap(), "jan de Vries");
            let (given, sur) = user_names(subject).unwrap();
            assert_eq!(given, "jan");
            assert_eq!(sur, "de Vries");
        });
    }

    #[test]
    fn test_decode_wide_strings() {
        assert_eq!(decode_bmp(&[0x00, 0x6a, 0x00, 0xf6]).unwrap(), "jö");
        assert_eq!(decode_universal(&[0, 0, 0, 0x6a, 0, 1, 0xf6, 0x00]).unwrap(), "j\u{1f600}");
        assert!(matches!(decode_bmp(&[0x00]), Err(UziError::X509(_))));
        // lone surrogate
        assert!(decode_bmp(&[0xd8, 0x00]).is_err());
        assert!(decode_universal(&[0, 0x11, 0, 0]).is_err());
    }
}
