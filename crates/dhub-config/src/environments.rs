//! Environment name rules.
//!
//! Names are salted into hashed URNs (`<env>_<...>`), so they must be stable
//! tokens: non-empty, no whitespace, and no `:` that could be confused with a
//! URN segment boundary.

use crate::ConfigError;

/// Check one environment name. `field` is the config path reported on error.
pub fn validate_environment_name(field: &str, name: &str) -> Result<(), ConfigError> {
    let reason = if name.is_empty() {
        "environment name must not be empty"
    } else if name.chars().any(char::is_whitespace) {
        "environment name must not contain whitespace"
    } else if name.contains(':') {
        "environment name must not contain ':'"
    } else {
        return Ok(());
    };

    Err(ConfigError::InvalidValue {
        field: field.to_string(),
        reason: format!("{reason} (got {name:?})"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        for name in ["dev", "staging", "prod", "prod-eu", "qa_2"] {
            assert!(validate_environment_name("environments", name).is_ok(), "{name}");
        }
    }

    #[test]
    fn rejects_bad_names() {
        for name in ["", "pro d", "prod\t", "urn:prod"] {
            let err = validate_environment_name("environments", name).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { .. }), "{name}");
        }
    }

    #[test]
    fn error_names_the_field() {
        let err = validate_environment_name("general.default_environment", "").unwrap_err();
        assert!(err.to_string().contains("general.default_environment"));
    }
}
