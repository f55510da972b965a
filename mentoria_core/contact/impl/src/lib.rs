use std::sync::Arc;

use mentoria_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};
use mentoria_extern_contracts::delivery::{DeliveryApiService, DeliverySendError, OutboundEmail};
use mentoria_models::{contact::ContactSubmission, delivery::DeliveryId};
use mentoria_utils::Apply;
use tracing::info;

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<DeliveryApi> {
    delivery_api: DeliveryApi,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    pub from: Arc<str>,
    pub to: Arc<str>,
    pub subject: Arc<str>,
}

impl<DeliveryApi> ContactFeatureServiceImpl<DeliveryApi> {
    pub fn new(delivery_api: DeliveryApi, config: ContactFeatureConfig) -> Self {
        Self {
            delivery_api,
            config,
        }
    }
}

impl<DeliveryApi> ContactFeatureService for ContactFeatureServiceImpl<DeliveryApi>
where
    DeliveryApi: DeliveryApiService,
{
    async fn send_message(
        &self,
        submission: ContactSubmission,
    ) -> Result<Option<DeliveryId>, ContactSendMessageError> {
        if !submission.is_valid_for_send() {
            return Err(ContactSendMessageError::InvalidSubmission);
        }

        let text = format!(
            "Novo contato pela landing page\n\nNome: {}\nEmail: {}\nCelular: {}",
            submission.name, submission.email, submission.phone
        )
        .apply_map(
            (!submission.message.is_empty()).then_some(&submission.message),
            |text, message| format!("{text}\nMensagem: {message}"),
        );

        let email = OutboundEmail {
            from: self.config.from.to_string(),
            to: self.config.to.to_string(),
            reply_to: submission.email,
            subject: self.config.subject.to_string(),
            text,
        };

        match self.delivery_api.send(email).await {
            Ok(id) => {
                info!(?id, "contact message relayed");
                Ok(id)
            }
            Err(DeliverySendError::Api(error)) => Err(ContactSendMessageError::Delivery(error)),
            Err(DeliverySendError::Other(err)) => Err(err.into()),
        }
    }
}
