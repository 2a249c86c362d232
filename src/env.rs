//! Webserver variables
//!
//! The webserver (or reverse proxy) terminating TLS verifies the client certificate chain and
//! forwards the outcome and the certificate, conventionally as `SSL_CLIENT_VERIFY` and
//! `SSL_CLIENT_CERT`.

use crate::error::UziResult;
use crate::record::UziRecord;
use std::env;

/// Variable holding the outcome of the client certificate verification
pub const ENV_CLIENT_VERIFY: &str = "SSL_CLIENT_VERIFY";
/// Variable holding the PEM-encoded client certificate
pub const ENV_CLIENT_CERT: &str = "SSL_CLIENT_CERT";

const VERIFY_SUCCESS: &str = "SUCCESS";

/// Outcome of the TLS client certificate verification done by the webserver
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verification {
    Success,
    NotSuccess,
}

impl Verification {
    /// Only the exact value `SUCCESS` is a success; an absent value is not.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some(VERIFY_SUCCESS) => Verification::Success,
            _ => Verification::NotSuccess,
        }
    }

    pub fn is_success(self) -> bool {
        self == Verification::Success
    }
}

impl<'a> From<&'a str> for Verification {
    fn from(value: &'a str) -> Self {
        Verification::from_value(Some(value))
    }
}

impl<'a> From<Option<&'a str>> for Verification {
    fn from(value: Option<&'a str>) -> Self {
        Verification::from_value(value)
    }
}

/// The variables forwarded by the webserver for one request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebserverEnv {
    pub verify: Verification,
    pub cert: Option<String>,
}

impl WebserverEnv {
    /// Read the variables from the process environment
    pub fn from_env() -> Self {
        WebserverEnv::from_lookup(|name| env::var(name).ok())
    }

    /// Read the variables through `lookup`, for example from request-scoped variables
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let verify = Verification::from_value(lookup(ENV_CLIENT_VERIFY).as_deref());
        let cert = lookup(ENV_CLIENT_CERT);
        WebserverEnv { verify, cert }
    }

    pub fn uzi(&self) -> UziResult<UziRecord> {
        UziRecord::new(self.verify, self.cert.as_deref())
    }

    pub fn pass_user(&self) -> UziResult<UziRecord> {
        UziRecord::pass_user(self.verify, self.cert.as_deref())
    }

    pub fn server(&self) -> UziResult<UziRecord> {
        UziRecord::server(self.verify, self.cert.as_deref())
    }
}
