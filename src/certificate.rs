//! Client certificate decoding
//!
//! Thin layer over `x509-parser`: the webserver forwards the client certificate as PEM text, the
//! rest of the crate only needs the subject RDN sequence and the subjectAltName entries.

use crate::error::UziResult;
use log::trace;
use x509_parser::certificate::X509Certificate;
use x509_parser::extensions::{GeneralName, ParsedExtension};
use x509_parser::parse_x509_certificate;
use x509_parser::pem::parse_x509_pem;
use x509_parser::x509::RelativeDistinguishedName;

/// A client certificate, holding the DER bytes until they are parsed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientCertificate {
    der: Vec<u8>,
}

impl ClientCertificate {
    /// Decode the first PEM block of `text`
    pub fn from_pem(text: &str) -> UziResult<Self> {
        let (_, pem) = parse_x509_pem(text.as_bytes())?;
        trace!("decoded PEM block '{}' ({} bytes)", pem.label, pem.contents.len());
        Ok(ClientCertificate { der: pem.contents })
    }

    /// Hold a copy of DER-encoded certificate bytes, without parsing them
    pub fn from_der(der: &[u8]) -> Self {
        ClientCertificate { der: der.to_vec() }
    }

    /// Return the DER encoding of the certificate
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }

    /// Parse the certificate structure. Trailing data after the certificate is ignored.
    pub fn parse(&self) -> UziResult<X509Certificate<'_>> {
        let (_, x509) = parse_x509_certificate(&self.der)?;
        Ok(x509)
    }
}

/// Iterate over the RDN sequence of the certificate subject
pub fn subject_rdns<'a>(
    x509: &'a X509Certificate<'a>,
) -> impl Iterator<Item = &'a RelativeDistinguishedName<'a>> {
    x509.subject().iter_rdn()
}

/// Iterate over the general names of every subjectAltName extension of the certificate
///
/// Extensions that could not be parsed are skipped.
pub fn subject_alt_names<'a, 'b>(
    x509: &'b X509Certificate<'a>,
) -> impl Iterator<Item = &'b GeneralName<'a>> {
    x509.extensions()
        .iter()
        .filter_map(|ext| match ext.parsed_extension() {
            ParsedExtension::SubjectAlternativeName(san) => Some(san.general_names.iter()),
            _ => None,
        })
        .flatten()
}
