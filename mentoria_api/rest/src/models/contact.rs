use mentoria_models::contact::ContactSubmission;
use serde::Deserialize;

/// The request body of the send-email route. Every field falls back to an
/// empty string when absent; the client is untrusted, so validation happens
/// again behind this type.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl From<ApiContactSubmission> for ContactSubmission {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            name: value.name,
            email: value.email,
            phone: value.phone,
            message: value.message,
        }
    }
}
