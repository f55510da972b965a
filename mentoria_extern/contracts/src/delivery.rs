use std::future::Future;

use mentoria_models::delivery::DeliveryId;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait DeliveryApiService: Send + Sync + 'static {
    /// Hands one email to the delivery API. Returns the delivery id if the
    /// API reported one.
    fn send(
        &self,
        email: OutboundEmail,
    ) -> impl Future<Output = Result<Option<DeliveryId>, DeliverySendError>> + Send;
}

/// The payload of one outbound send request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    /// Replies go straight to the form submitter.
    pub reply_to: String,
    pub subject: String,
    pub text: String,
}

#[derive(Debug, Error)]
pub enum DeliverySendError {
    /// The delivery API itself reported an error; carried verbatim.
    #[error("{0}")]
    Api(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockDeliveryApiService {
    pub fn with_send(
        mut self,
        email: OutboundEmail,
        result: Result<Option<DeliveryId>, DeliverySendError>,
    ) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
