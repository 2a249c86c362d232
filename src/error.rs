//! UZI errors

use std::fmt;
use x509_parser::error::{PEMError, X509Error};

/// Broad classification of an [`UziError`].
///
/// Callers that only care about *why* a presentation failed (bad webserver setup, missing client
/// certificate, foreign or broken certificate, policy rejection) can match on the family instead
/// of on every variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorFamily {
    ServerConfig,
    ClientCert,
    CertificateShape,
    Policy,
}

impl fmt::Display for ErrorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorFamily::ServerConfig => "server configuration",
            ErrorFamily::ClientCert => "client certificate",
            ErrorFamily::CertificateShape => "certificate shape",
            ErrorFamily::Policy => "policy",
        };
        f.write_str(s)
    }
}

/// An error that can occur while reading or validating an UZI certificate.
#[derive(Debug, thiserror::Error)]
pub enum UziError {
    #[error("Webserver client cert check not passed")]
    ServerConfigError,
    #[error("No client certificate presented")]
    ClientCertError,

    #[error("PEM error: {0}")]
    Pem(#[from] PEMError),
    #[error("X.509 error: {0}")]
    X509(#[from] X509Error),
    #[error("No subject rdnSequence")]
    MissingSubject,
    #[error("No commonName found.")]
    CommonNameNotFound,
    #[error("No surname / givenName found.")]
    NameNotFound,
    #[error("Uzi CardType is not User (Z/N/M)")]
    CardTypeNotUser(String),
    #[error("Uzi CardType is not S (Server)")]
    CardTypeNotServer(String),
    #[error("Incorrect SAN found")]
    MalformedCertificate,
    #[error("No valid UZI data found")]
    CertificateNotUzi,

    #[error("Empty User Provided")]
    EmptyUser,
    #[error("CA OID not UZI register Care Provider or named employee")]
    CaNotAllowed(String),
    #[error("UZI version not 1")]
    VersionMismatch(String),
    #[error("UZI card type not allowed")]
    TypeNotAllowed(String),
    #[error("UZI card role not allowed")]
    RoleNotAllowed(String),
}

impl UziError {
    /// Return the family this error belongs to.
    pub fn family(&self) -> ErrorFamily {
        match self {
            UziError::ServerConfigError => ErrorFamily::ServerConfig,
            UziError::ClientCertError => ErrorFamily::ClientCert,
            UziError::Pem(_)
            | UziError::X509(_)
            | UziError::MissingSubject
            | UziError::CommonNameNotFound
            | UziError::NameNotFound
            | UziError::CardTypeNotUser(_)
            | UziError::CardTypeNotServer(_)
            | UziError::MalformedCertificate
            | UziError::CertificateNotUzi => ErrorFamily::CertificateShape,
            UziError::EmptyUser
            | UziError::CaNotAllowed(_)
            | UziError::VersionMismatch(_)
            | UziError::TypeNotAllowed(_)
            | UziError::RoleNotAllowed(_) => ErrorFamily::Policy,
        }
    }

    /// Return true if this error was raised by the policy validator.
    pub fn is_validation(&self) -> bool {
        self.family() == ErrorFamily::Policy
    }
}

impl From<nom::Err<X509Error>> for UziError {
    fn from(e: nom::Err<X509Error>) -> UziError {
        match e {
            nom::Err::Error(e) | nom::Err::Failure(e) => UziError::X509(e),
            nom::Err::Incomplete(_) => UziError::X509(X509Error::InvalidCertificate),
        }
    }
}

impl From<nom::Err<PEMError>> for UziError {
    fn from(e: nom::Err<PEMError>) -> UziError {
        match e {
            nom::Err::Error(e) | nom::Err::Failure(e) => UziError::Pem(e),
            nom::Err::Incomplete(_) => UziError::Pem(PEMError::IncompletePEM),
        }
    }
}

/// Holds the result of reading or validating an UZI certificate.
pub type UziResult<T> = Result<T, UziError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_families() {
        assert_eq!(UziError::ServerConfigError.family(), ErrorFamily::ServerConfig);
        assert_eq!(UziError::ClientCertError.family(), ErrorFamily::ClientCert);
        assert_eq!(UziError::CertificateNotUzi.family(), ErrorFamily::CertificateShape);
        assert_eq!(
            UziError::CardTypeNotServer("N".into()).family(),
            ErrorFamily::CertificateShape
        );
        assert!(UziError::EmptyUser.is_validation());
        assert!(UziError::RoleNotAllowed("01.".into()).is_validation());
        assert!(!UziError::MalformedCertificate.is_validation());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(UziError::MalformedCertificate.to_string(), "Incorrect SAN found");
        assert_eq!(UziError::CertificateNotUzi.to_string(), "No valid UZI data found");
        assert_eq!(
            UziError::CardTypeNotUser("S".into()).to_string(),
            "Uzi CardType is not User (Z/N/M)"
        );
        assert_eq!(
            UziError::X509(X509Error::InvalidCertificate).family().to_string(),
            "certificate shape"
        );
    }
}
