//! [![License: MIT](https://img.shields.io/badge/License-MIT-yellow.svg)](./LICENSE-MIT)
//! [![Apache License 2.0](https://img.shields.io/badge/License-Apache%202.0-blue.svg)](./LICENSE-APACHE)
//!
//! # UZI reader
//!
//! Reader and policy validator for client certificates of the Dutch healthcare UZI-register
//! (UZI pass, UZI server certificates), built on [x509-parser](https://docs.rs/x509-parser).
//!
//! This crate is meant to run behind a webserver or reverse proxy that terminates TLS and has
//! already verified the client certificate chain. It does *not* verify signatures, chains or
//! revocation: it trusts the verification outcome forwarded by the webserver (`SSL_CLIENT_VERIFY`),
//! decodes the UZI data of the certificate (`SSL_CLIENT_CERT`) and checks it against a policy.
//!
//! The UZI data is stored in an `OtherName` entry of the subjectAltName extension, see the
//! [`san`] module for the format.
//!
//! # Examples
//!
//! Reading an UZI pass and checking that it belongs to a nurse:
//!
//! ```rust
//! use uzi_reader::prelude::*;
//!
//! static PEM: &str = include_str!("../assets/mock-011-correct.pem");
//!
//! # fn main() -> Result<(), UziError> {
//! let user = UziRecord::pass_user(Verification::from("SUCCESS"), Some(PEM))?;
//! assert_eq!(user.card_type(), UZI_TYPE_NAMED_EMPLOYEE);
//! assert_eq!(user.given_name(), Some("john"));
//!
//! let validator = PolicyValidator::new(
//!     PolicyConfig::new(true)
//!         .allow_types(UZI_USER_TYPES.iter().copied())
//!         .allow_role(UZI_ROLE_NURSE),
//! );
//! assert!(validator.is_valid(Some(&user)));
//! # Ok(())
//! # }
//! ```
//!
//! Inside a CGI-like environment, [`WebserverEnv::from_env`](env::WebserverEnv::from_env) reads
//! both variables.
//!
//! # Features
//!
//! - The `serde` feature derives `Serialize`/`Deserialize` for [`PolicyConfig`] (so a policy can
//!   be part of an application configuration file), and serializes records as a map of field
//!   names to values.
//!
//! # Logging
//!
//! Decoding and validation events are emitted through the [log](https://docs.rs/log) facade.
//! Certificates and person names are never logged.
//!
//! [`PolicyConfig`]: validator::PolicyConfig

#![deny(
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod certificate;
pub mod consts;
pub mod env;
pub mod error;
mod field;
pub mod name;
pub mod record;
pub mod san;
pub mod validator;

pub use field::*;

/// Common imports
pub mod prelude {
    pub use crate::consts::*;
    pub use crate::env::{Verification, WebserverEnv};
    pub use crate::error::{ErrorFamily, UziError, UziResult};
    pub use crate::field::UziField;
    pub use crate::record::{UziKind, UziRecord};
    pub use crate::san::UziFields;
    pub use crate::validator::{PolicyConfig, PolicyValidator};
}
