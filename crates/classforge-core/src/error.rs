//! Error types for classforge
//!
//! Construction never fails; every variant here is a call-time failure of an
//! ability invocation or a seed conversion.

/// Main classforge error type
#[derive(Debug, thiserror::Error)]
pub enum ForgeError {
    /// Ability name not bound on this instance
    #[error("unknown ability '{0}'")]
    UnknownAbility(String),

    /// Ability touched a state field that was never seeded
    #[error("missing required field '{field}'")]
    MissingField {
        /// Name of the absent field
        field: String,
    },

    /// Ability performed arithmetic on a non-numeric field
    #[error("field '{field}' holds a {actual} value, expected a number")]
    NotNumeric {
        /// Name of the offending field
        field: String,
        /// Type name of the value actually stored
        actual: &'static str,
    },

    /// Ability called with a missing or wrongly typed argument
    #[error("invalid argument for '{ability}': {reason}")]
    InvalidArgument {
        /// Ability that rejected the argument
        ability: String,
        /// What was expected
        reason: String,
    },

    /// Seed conversion from an external representation failed
    #[error("invalid seed: {0}")]
    InvalidSeed(String),
}

impl ForgeError {
    /// Create an invalid-argument error
    #[inline]
    #[must_use]
    pub fn invalid_argument(ability: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            ability: ability.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing-field error
    #[inline]
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Check whether this error names a state-field problem
    ///
    /// True for the two field failure modes ([`Self::MissingField`] and
    /// [`Self::NotNumeric`]), which arise from unvalidated seeds.
    #[inline]
    #[must_use]
    pub fn is_field_error(&self) -> bool {
        matches!(self, Self::MissingField { .. } | Self::NotNumeric { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        let err = ForgeError::UnknownAbility("cast".to_string());
        assert_eq!(err.to_string(), "unknown ability 'cast'");

        let err = ForgeError::missing_field("mana");
        assert_eq!(err.to_string(), "missing required field 'mana'");

        let err = ForgeError::NotNumeric {
            field: "name".to_string(),
            actual: "text",
        };
        assert_eq!(
            err.to_string(),
            "field 'name' holds a text value, expected a number"
        );
    }

    #[test]
    fn field_error_classification() {
        assert!(ForgeError::missing_field("mana").is_field_error());
        assert!(!ForgeError::UnknownAbility("x".to_string()).is_field_error());
    }
}
