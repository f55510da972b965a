use mentoria_extern_contracts::delivery::MockDeliveryApiService;
use serde_json::json;

mod common;

use common::spawn_server;

#[tokio::test]
async fn health() {
    let url = spawn_server(MockDeliveryApiService::new()).await;

    let response = reqwest::get(format!("{url}/health")).await.unwrap();

    assert_eq!(response.status(), 200);
    let body = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body, json!({"http": true}));
}
