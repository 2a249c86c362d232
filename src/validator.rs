//! Policy checks on UZI records
//!
//! A [`PolicyValidator`] is built once from a [`PolicyConfig`] and can then be shared between
//! requests: it holds no mutable state.
//!
//! Checks are applied in a fixed order, stopping at the first failure:
//!
//! 1. with `strict_ca`, the record must be issued by the UZI-register Care Provider or Named
//!    Employee CA
//! 2. the SAN encoding version must be `1`
//! 3. the card type must be allowed
//! 4. the role category (first 3 characters of the role, for ex. `30.` for `30.015`) must be
//!    allowed

use crate::consts::{role_prefix, OID_CA_CARE_PROVIDER, OID_CA_NAMED_EMPLOYEE, UZI_VERSION};
use crate::error::{UziError, UziResult};
use crate::record::UziRecord;
use log::warn;
use std::collections::BTreeSet;

/// CAs accepted when `strict_ca` is set
const STRICT_CAS: &[&str] = &[OID_CA_CARE_PROVIDER, OID_CA_NAMED_EMPLOYEE];

/// Which UZI records are accepted
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PolicyConfig {
    /// Only accept the UZI-register Care Provider and Named Employee CAs
    pub strict_ca: bool,
    /// Allowed card types, for ex. `Z`
    pub allowed_types: BTreeSet<String>,
    /// Allowed role categories, for ex. `30.`
    pub allowed_roles: BTreeSet<String>,
}

impl PolicyConfig {
    /// Create an empty policy: no card type or role is allowed
    pub fn new(strict_ca: bool) -> Self {
        PolicyConfig {
            strict_ca,
            ..PolicyConfig::default()
        }
    }

    /// Set the strict CA check
    pub fn strict(mut self, strict_ca: bool) -> Self {
        self.strict_ca = strict_ca;
        self
    }

    /// Allow a card type
    pub fn allow_type<S: Into<String>>(mut self, card_type: S) -> Self {
        self.allowed_types.insert(card_type.into());
        self
    }

    /// Allow several card types
    pub fn allow_types<I, S>(mut self, card_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_types
            .extend(card_types.into_iter().map(Into::into));
        self
    }

    /// Allow a role category, for ex. `30.`
    pub fn allow_role<S: Into<String>>(mut self, role: S) -> Self {
        self.allowed_roles.insert(role.into());
        self
    }

    /// Allow several role categories
    pub fn allow_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_roles.extend(roles.into_iter().map(Into::into));
        self
    }
}

/// Validates UZI records against a [`PolicyConfig`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyValidator {
    config: PolicyConfig,
}

impl From<PolicyConfig> for PolicyValidator {
    fn from(config: PolicyConfig) -> Self {
        PolicyValidator::new(config)
    }
}

impl PolicyValidator {
    /// Create a validator enforcing `config`
    pub fn new(config: PolicyConfig) -> Self {
        PolicyValidator { config }
    }

    /// Return the policy enforced by this validator
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Check `user` against the policy
    ///
    /// All errors returned belong to the [`Policy`](crate::error::ErrorFamily::Policy) family.
    pub fn validate(&self, user: Option<&UziRecord>) -> UziResult<()> {
        let user = user.ok_or(UziError::EmptyUser)?;
        let res = self.check(user);
        if let Err(e) = &res {
            warn!("UZI number {} rejected: {}", user.uzi_number(), e);
        }
        res
    }

    /// Return true if `user` is accepted by the policy
    pub fn is_valid(&self, user: Option<&UziRecord>) -> bool {
        self.validate(user).is_ok()
    }

    fn check(&self, user: &UziRecord) -> UziResult<()> {
        let oid_ca = user.oid_ca();
        if self.config.strict_ca && !STRICT_CAS.contains(&oid_ca) {
            return Err(UziError::CaNotAllowed(oid_ca.to_owned()));
        }
        if user.uzi_version() != UZI_VERSION {
            return Err(UziError::VersionMismatch(user.uzi_version().to_owned()));
        }
        if !self.config.allowed_types.contains(user.card_type()) {
            return Err(UziError::TypeNotAllowed(user.card_type().to_owned()));
        }
        let role = role_prefix(user.role());
        if !self.config.allowed_roles.contains(role) {
            return Err(UziError::RoleNotAllowed(role.to_owned()));
        }
        Ok(())
    }
}
