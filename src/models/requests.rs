//! Request DTOs for the greeting service API
//!
//! Defines the structure of incoming HTTP request parameters.

use serde::Deserialize;

// == Public Constants ==
/// Minimum allowed name length in characters
pub const NAME_MIN_LENGTH: usize = 3;

/// Maximum allowed name length in characters
pub const NAME_MAX_LENGTH: usize = 10;

/// Path parameters for the set-name operation (POST /hello/{name})
///
/// # Fields
/// - `name`: The name to store, constrained to 3-10 characters
#[derive(Debug, Clone, Deserialize)]
pub struct NameParam {
    /// The name to store
    pub name: String,
}

impl NameParam {
    /// Validates the name parameter.
    ///
    /// Returns an error message if validation fails, None if valid.
    /// Validation runs before any store call, so a rejected request
    /// has no side effect.
    pub fn validate(&self) -> Option<String> {
        let len = self.name.chars().count();
        if len < NAME_MIN_LENGTH {
            return Some(format!(
                "Name must be at least {} characters",
                NAME_MIN_LENGTH
            ));
        }
        if len > NAME_MAX_LENGTH {
            return Some(format!(
                "Name must be at most {} characters",
                NAME_MAX_LENGTH
            ));
        }
        None
    }
}
