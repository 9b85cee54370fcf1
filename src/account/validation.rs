//! Input validation for account names and transfer descriptions
//!
//! The bounds here mirror the column definitions: `username VARCHAR(50)`,
//! `description VARCHAR(255)`. Validation runs at the API boundary so the
//! store never sees an out-of-range value.

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 50;
pub const PASSWORD_MIN_LEN: usize = 6;
pub const DESCRIPTION_MAX_LEN: usize = 255;

/// Validation errors for account and transfer fields
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid length for {field}: expected {min}-{max} characters, got {actual}")]
    InvalidLength {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("{field} must not be blank")]
    Blank { field: &'static str },
}

/// Validated account username (guaranteed trimmed, 3-50 characters).
///
/// Fields are private to force validation through `new()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(ValidationError::Blank { field: "username" });
        }
        let len = name.chars().count();
        if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
            return Err(ValidationError::InvalidLength {
                field: "username",
                min: USERNAME_MIN_LEN,
                max: USERNAME_MAX_LEN,
                actual: len,
            });
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate an optional transfer description against the column bound.
pub fn validate_description(description: Option<&str>) -> Result<(), ValidationError> {
    if let Some(text) = description {
        let len = text.chars().count();
        if len > DESCRIPTION_MAX_LEN {
            return Err(ValidationError::InvalidLength {
                field: "description",
                min: 0,
                max: DESCRIPTION_MAX_LEN,
                actual: len,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_accepts_valid_names() {
        let name = Username::new("alice").unwrap();
        assert_eq!(name.as_str(), "alice");

        // Boundary lengths
        assert!(Username::new("abc").is_ok());
        assert!(Username::new(&"x".repeat(50)).is_ok());
    }

    #[test]
    fn test_username_trims_whitespace() {
        let name = Username::new("  alice  ").unwrap();
        assert_eq!(name.as_str(), "alice");
    }

    #[test]
    fn test_username_rejects_too_short() {
        let err = Username::new("ab").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidLength {
                field: "username",
                min: 3,
                max: 50,
                actual: 2
            }
        );
    }

    #[test]
    fn test_username_rejects_too_long() {
        assert!(Username::new(&"x".repeat(51)).is_err());
    }

    #[test]
    fn test_username_rejects_blank() {
        assert_eq!(
            Username::new("   ").unwrap_err(),
            ValidationError::Blank { field: "username" }
        );
    }

    #[test]
    fn test_description_bounds() {
        assert!(validate_description(None).is_ok());
        assert!(validate_description(Some("rent")).is_ok());
        assert!(validate_description(Some(&"d".repeat(255))).is_ok());
        assert!(validate_description(Some(&"d".repeat(256))).is_err());
    }
}
