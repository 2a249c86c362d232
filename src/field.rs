use std::fmt;
use std::str::FromStr;

/// Name of a field of an UZI record
///
/// The string forms are the keys used by the UZI reader libraries on other platforms, so records
/// can be exchanged as plain key/value data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UziField {
    OidCa,
    UziVersion,
    UziNumber,
    CardType,
    SubscriberNumber,
    Role,
    AgbCode,
    CommonName,
    GivenName,
    SurName,
}

impl UziField {
    /// Fields encoded in the subjectAltName, in their encoding order
    pub const SAN_FIELDS: &'static [UziField] = &[
        UziField::OidCa,
        UziField::UziVersion,
        UziField::UziNumber,
        UziField::CardType,
        UziField::SubscriberNumber,
        UziField::Role,
        UziField::AgbCode,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UziField::OidCa => "OidCa",
            UziField::UziVersion => "UziVersion",
            UziField::UziNumber => "UziNumber",
            UziField::CardType => "CardType",
            UziField::SubscriberNumber => "SubscriberNumber",
            UziField::Role => "Role",
            UziField::AgbCode => "AgbCode",
            UziField::CommonName => "commonName",
            UziField::GivenName => "givenName",
            UziField::SurName => "surName",
        }
    }

    /// Return true if the field comes from the certificate subject rather than from the SAN
    pub fn is_name(self) -> bool {
        matches!(
            self,
            UziField::CommonName | UziField::GivenName | UziField::SurName
        )
    }
}

impl fmt::Display for UziField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The string is not the name of an UZI record field
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown UZI field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for UziField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s {
            "OidCa" => UziField::OidCa,
            "UziVersion" => UziField::UziVersion,
            "UziNumber" => UziField::UziNumber,
            "CardType" => UziField::CardType,
            "SubscriberNumber" => UziField::SubscriberNumber,
            "Role" => UziField::Role,
            "AgbCode" => UziField::AgbCode,
            "commonName" => UziField::CommonName,
            "givenName" => UziField::GivenName,
            "surName" => UziField::SurName,
            _ => return Err(UnknownField(s.to_owned())),
        };
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        for field in UziField::SAN_FIELDS.iter() {
            assert!(!field.is_name());
            assert_eq!(field.as_str().parse::<UziField>(), Ok(*field));
        }
        assert_eq!("surName".parse::<UziField>(), Ok(UziField::SurName));
        assert_eq!(UziField::GivenName.to_string(), "givenName");
        // keys are case-sensitive
        assert_eq!(
            "surname".parse::<UziField>(),
            Err(UnknownField("surname".to_owned()))
        );
    }
}
