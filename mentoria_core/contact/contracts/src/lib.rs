use std::future::Future;

use mentoria_models::{contact::ContactSubmission, delivery::DeliveryId};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Relays one contact form submission as an email. Invalid submissions
    /// are rejected before any delivery activity.
    fn send_message(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<Option<DeliveryId>, ContactSendMessageError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSendMessageError {
    #[error("Nome ou e-mail inválidos")]
    InvalidSubmission,
    /// The delivery API reported an error; carried verbatim.
    #[error("{0}")]
    Delivery(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
