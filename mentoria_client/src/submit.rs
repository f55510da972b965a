use std::time::Duration;

use mentoria_models::{delivery::DeliveryId, EMAIL_REGEX};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::form::ContactFormData;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// The fabricated delivery id returned for honeypot submissions. Bots only
/// ever see success, so they never learn they were filtered.
pub const HONEYPOT_DELIVERY_ID: &str = "skipped-honeypot";

#[derive(Debug, Clone)]
pub struct SubmissionClientConfig {
    pub endpoint: Url,
    pub timeout: Duration,
}

impl SubmissionClientConfig {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmissionClient {
    config: SubmissionClientConfig,
    client: reqwest::Client,
}

/// The settled result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted { id: Option<DeliveryId> },
    Failed { error: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Informe seu nome.")]
    NameMissing,
    #[error("Mínimo de 3 caracteres.")]
    NameTooShort,
    #[error("Informe seu e-mail.")]
    EmailMissing,
    #[error("E-mail inválido.")]
    EmailInvalid,
}

/// Field validation as performed by the form, before any network activity.
pub fn validate(fields: &ContactFormData) -> Result<(), FieldError> {
    let name = fields.name.trim();
    if name.is_empty() {
        return Err(FieldError::NameMissing);
    }
    if name.chars().count() < 3 {
        return Err(FieldError::NameTooShort);
    }
    if fields.email.is_empty() {
        return Err(FieldError::EmailMissing);
    }
    if !EMAIL_REGEX.is_match(&fields.email) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}

impl SubmissionClient {
    pub fn new(config: SubmissionClientConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Produces exactly one [`SubmissionOutcome`] for the given field values.
    pub async fn submit(&self, fields: &ContactFormData) -> SubmissionOutcome {
        if let Err(err) = validate(fields) {
            return SubmissionOutcome::Failed {
                error: err.to_string(),
            };
        }

        // Honeypot: real users never fill this hidden field.
        if !fields.website.is_empty() {
            debug!("honeypot field populated, feigning success");
            return SubmissionOutcome::Accepted {
                id: Some(HONEYPOT_DELIVERY_ID.to_owned().into()),
            };
        }

        self.send(fields).await
    }

    async fn send(&self, fields: &ContactFormData) -> SubmissionOutcome {
        let request = self
            .client
            .post(self.config.endpoint.clone())
            .json(&SendEmailRequest {
                name: &fields.name,
                email: &fields.email,
                phone: &fields.phone,
                message: &fields.message,
            })
            .send();

        // The timer races the request; dropping the losing future tears it
        // down, so no stale callback can fire after the outcome is settled.
        let response = match tokio::time::timeout(self.config.timeout, request).await {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => {
                warn!("failed to reach submission endpoint: {err}");
                return SubmissionOutcome::Failed {
                    error: "Não foi possível enviar agora. Tente novamente.".into(),
                };
            }
            Err(_) => {
                warn!("submission timed out after {:?}", self.config.timeout);
                return SubmissionOutcome::Failed {
                    error: "Tempo de envio excedido. Tente novamente.".into(),
                };
            }
        };

        let status = response.status();
        // A missing or unparsable body is tolerated and treated as empty.
        let body = response
            .json::<SendEmailResponse>()
            .await
            .unwrap_or_default();

        if !status.is_success() || body.ok == Some(false) {
            let error = body
                .error
                .unwrap_or_else(|| format!("Falha no envio ({})", status.as_u16()));
            return SubmissionOutcome::Failed { error };
        }

        SubmissionOutcome::Accepted {
            id: body.id.map(Into::into),
        }
    }
}

/// The honeypot field is deliberately never part of this payload.
#[derive(Serialize)]
struct SendEmailRequest<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    message: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct SendEmailResponse {
    ok: Option<bool>,
    id: Option<String>,
    error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> ContactFormData {
        ContactFormData {
            name: "Maria Silva".into(),
            email: "maria@example.com".into(),
            ..Default::default()
        }
    }

    #[test]
    fn validate_ok() {
        validate(&fields()).unwrap();
    }

    #[test]
    fn validate_name_missing() {
        for name in ["", "   ", "\t"] {
            let mut fields = fields();
            fields.name = name.into();
            assert_eq!(validate(&fields), Err(FieldError::NameMissing));
        }
    }

    #[test]
    fn validate_name_too_short() {
        for name in ["ab", " ab ", "x"] {
            let mut fields = fields();
            fields.name = name.into();
            assert_eq!(validate(&fields), Err(FieldError::NameTooShort));
        }
    }

    #[test]
    fn validate_email_missing() {
        let mut fields = fields();
        fields.email = String::new();
        assert_eq!(validate(&fields), Err(FieldError::EmailMissing));
    }

    #[test]
    fn validate_email_invalid() {
        for email in ["bad", "maria@example", "maria @example.com"] {
            let mut fields = fields();
            fields.email = email.into();
            assert_eq!(validate(&fields), Err(FieldError::EmailInvalid));
        }
    }

    #[test]
    fn validate_phone_and_message_pass_through() {
        let mut fields = fields();
        fields.phone = "anything".into();
        fields.message = "anything".into();
        validate(&fields).unwrap();
    }
}
