use std::sync::Arc;

use anyhow::Context;
use mentoria_extern_contracts::delivery::{DeliveryApiService, DeliverySendError, OutboundEmail};
use mentoria_models::delivery::DeliveryId;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::HttpClient;

const SEND_ENDPOINT: &str = "https://api.resend.com/emails";

#[derive(Debug, Clone)]
pub struct DeliveryApiServiceImpl {
    config: DeliveryApiServiceConfig,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct DeliveryApiServiceConfig {
    send_endpoint: Arc<Url>,
    api_key: Arc<str>,
}

impl DeliveryApiServiceConfig {
    pub fn new(send_endpoint_override: Option<Url>, api_key: String) -> Self {
        Self {
            send_endpoint: send_endpoint_override
                .unwrap_or_else(|| SEND_ENDPOINT.parse().unwrap())
                .into(),
            api_key: api_key.into(),
        }
    }
}

impl DeliveryApiServiceImpl {
    pub fn new(config: DeliveryApiServiceConfig) -> Self {
        Self {
            config,
            client: HttpClient::default(),
        }
    }
}

impl DeliveryApiService for DeliveryApiServiceImpl {
    async fn send(&self, email: OutboundEmail) -> Result<Option<DeliveryId>, DeliverySendError> {
        let response = self
            .client
            .post((*self.config.send_endpoint).clone())
            .bearer_auth(&self.config.api_key)
            .json(&SendRequest {
                from: &email.from,
                to: [&email.to],
                reply_to: &email.reply_to,
                subject: &email.subject,
                text: &email.text,
            })
            .send()
            .await
            .context("Failed to reach delivery API")?;

        let status = response.status();
        let body = response
            .json::<SendResponse>()
            .await
            .with_context(|| format!("Failed to deserialize delivery API response ({status})"))?;

        if let Some(error) = body.error {
            return Err(DeliverySendError::Api(stringify_error(error)));
        }
        if !status.is_success() {
            return Err(DeliverySendError::Api(format!(
                "Delivery API returned status {status}"
            )));
        }

        Ok(body.data.and_then(|data| data.id).map(Into::into))
    }
}

fn stringify_error(error: serde_json::Value) -> String {
    match error {
        serde_json::Value::String(message) => message,
        other => other.to_string(),
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct SendResponse {
    data: Option<SendResponseData>,
    error: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct SendResponseData {
    id: Option<String>,
}
