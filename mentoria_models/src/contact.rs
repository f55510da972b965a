use serde::{Deserialize, Serialize};

use crate::EMAIL_REGEX;

/// One contact form submission. Ephemeral, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactSubmission {
    /// Server-side check: a submission may only reach the delivery API with a
    /// non-empty name and a plausible email address.
    pub fn is_valid_for_send(&self) -> bool {
        !self.name.trim().is_empty() && EMAIL_REGEX.is_match(&self.email)
    }
}
