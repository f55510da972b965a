use mentoria_models::delivery::DeliveryId;
use serde::Serialize;

pub mod contact;

/// Stable failure shape: `{ok: false, error}`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub ok: bool,
    pub error: String,
}

/// Stable success shape: `{ok: true, id?}`.
#[derive(Debug, Serialize)]
pub struct ApiSendResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DeliveryId>,
}
