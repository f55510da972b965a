use std::{
    net::IpAddr,
    sync::{Arc, Mutex},
};

use anyhow::Context;
use axum::{extract::State, http::HeaderMap, routing, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::info;
use uuid::Uuid;

const SEND_ROUTE: &str = "/emails";

pub async fn start_server(host: IpAddr, port: u16, api_key: String) -> anyhow::Result<()> {
    info!("Starting delivery testing server on {host}:{port}");
    info!("Send endpoint: http://{host}:{port}{SEND_ROUTE}");
    info!("Api key: {api_key:?}");
    info!("Recipients with the local part \"fail\" are rejected with an error response");

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(api_key))
        .await
        .context("Failed to start HTTP server")
}

pub fn router(api_key: String) -> Router<()> {
    router_with_mailbox(api_key).0
}

/// Same as [`router`], but also returns a handle to the emails the fake API
/// accepted, in order.
pub fn router_with_mailbox(api_key: String) -> (Router<()>, Mailbox) {
    let mailbox = Mailbox::default();
    let state = AppState {
        api_key: api_key.into(),
        mailbox: mailbox.clone(),
    };
    let router = Router::new()
        .route(SEND_ROUTE, routing::post(send))
        .with_state(state);
    (router, mailbox)
}

#[derive(Debug, Clone, Default)]
pub struct Mailbox(Arc<Mutex<Vec<SentEmail>>>);

impl Mailbox {
    pub fn take(&self) -> Vec<SentEmail> {
        std::mem::take(&mut self.0.lock().unwrap())
    }
}

/// One email the fake API accepted, with the id it was assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub id: String,
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
}

#[derive(Clone)]
struct AppState {
    api_key: Arc<str>,
    mailbox: Mailbox,
}

#[derive(Deserialize)]
struct SendRequest {
    from: String,
    to: Vec<String>,
    reply_to: String,
    subject: String,
    text: String,
}

#[derive(Serialize)]
struct SendResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<SendResponseData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct SendResponseData {
    id: String,
}

async fn send(
    state: State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SendRequest>,
) -> Json<SendResponse> {
    let authorized = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| token == &*state.api_key);
    if !authorized {
        return error("invalid api key");
    }

    if request
        .to
        .iter()
        .any(|to| to.split('@').next() == Some("fail"))
    {
        return error("recipient rejected");
    }

    let id = Uuid::new_v4().to_string();
    state.mailbox.0.lock().unwrap().push(SentEmail {
        id: id.clone(),
        from: request.from,
        to: request.to,
        reply_to: request.reply_to,
        subject: request.subject,
        text: request.text,
    });

    Json(SendResponse {
        data: Some(SendResponseData { id }),
        error: None,
    })
}

fn error(message: &str) -> Json<SendResponse> {
    Json(SendResponse {
        data: None,
        error: Some(message.into()),
    })
}
