use anyhow::anyhow;
use mentoria_extern_contracts::delivery::{
    DeliverySendError, MockDeliveryApiService, OutboundEmail,
};
use serde_json::json;

mod common;

use common::spawn_server;

#[tokio::test]
async fn send_email_ok() {
    let delivery_api = MockDeliveryApiService::new().with_send(
        expected_email(),
        Ok(Some("abc123".to_owned().into())),
    );
    let url = spawn_server(delivery_api).await;

    let response = reqwest::Client::new()
        .post(format!("{url}/api/send-email"))
        .json(&json!({
            "name": "Maria Silva",
            "email": "maria@example.com",
            "phone": "",
            "message": "",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body, json!({"ok": true, "id": "abc123"}));
}

#[tokio::test]
async fn send_email_ok_without_id() {
    let delivery_api = MockDeliveryApiService::new().with_send(expected_email(), Ok(None));
    let url = spawn_server(delivery_api).await;

    let response = reqwest::Client::new()
        .post(format!("{url}/api/send-email"))
        .json(&json!({"name": "Maria Silva", "email": "maria@example.com"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body, json!({"ok": true}));
}

#[tokio::test]
async fn send_email_invalid_submission() {
    // no expectations: the delivery API must not be touched
    let url = spawn_server(MockDeliveryApiService::new()).await;

    let response = reqwest::Client::new()
        .post(format!("{url}/api/send-email"))
        .json(&json!({"name": "", "email": "bad"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body, json!({"ok": false, "error": "Nome ou e-mail inválidos"}));
}

#[tokio::test]
async fn send_email_missing_fields() {
    let url = spawn_server(MockDeliveryApiService::new()).await;

    let response = reqwest::Client::new()
        .post(format!("{url}/api/send-email"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body, json!({"ok": false, "error": "Nome ou e-mail inválidos"}));
}

#[tokio::test]
async fn send_email_delivery_error() {
    let delivery_api = MockDeliveryApiService::new().with_send(
        expected_email(),
        Err(DeliverySendError::Api("invalid api key".into())),
    );
    let url = spawn_server(delivery_api).await;

    let response = reqwest::Client::new()
        .post(format!("{url}/api/send-email"))
        .json(&json!({"name": "Maria Silva", "email": "maria@example.com"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body, json!({"ok": false, "error": "invalid api key"}));
}

#[tokio::test]
async fn send_email_unexpected_error() {
    let delivery_api = MockDeliveryApiService::new().with_send(
        expected_email(),
        Err(DeliverySendError::Other(anyhow!("connection reset"))),
    );
    let url = spawn_server(delivery_api).await;

    let response = reqwest::Client::new()
        .post(format!("{url}/api/send-email"))
        .json(&json!({"name": "Maria Silva", "email": "maria@example.com"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body, json!({"ok": false, "error": "Erro inesperado"}));
}

#[tokio::test]
async fn send_email_malformed_body() {
    let url = spawn_server(MockDeliveryApiService::new()).await;

    let response = reqwest::Client::new()
        .post(format!("{url}/api/send-email"))
        .header("Content-Type", "application/json")
        .body("not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body["ok"], json!(false));
    assert!(body["error"].as_str().is_some_and(|error| !error.is_empty()));
}

fn expected_email() -> OutboundEmail {
    OutboundEmail {
        from: "Mentoria <onboarding@resend.dev>".into(),
        to: "voce@seuemail.com".into(),
        reply_to: "maria@example.com".into(),
        subject: "Mentoria — Novo contato".into(),
        text: "Novo contato pela landing page\n\nNome: Maria Silva\nEmail: \
               maria@example.com\nCelular: "
            .into(),
    }
}
