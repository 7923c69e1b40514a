use serde::{Deserialize, Serialize};

/// Configuration for the courses module.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoursesConfig {
    /// Upper bound for short text fields (names, username, title).
    pub max_field_length: usize,
    /// Lower bound for new passwords.
    pub min_password_length: usize,
}

impl Default for CoursesConfig {
    fn default() -> Self {
        Self {
            max_field_length: 255,
            min_password_length: 8,
        }
    }
}
