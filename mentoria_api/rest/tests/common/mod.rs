use mentoria_api_rest::RestServer;
use mentoria_core_contact_impl::{ContactFeatureConfig, ContactFeatureServiceImpl};
use mentoria_extern_contracts::delivery::MockDeliveryApiService;

/// Spawns a full server (real contact service, mocked delivery API) on an
/// ephemeral port and returns its base url.
pub async fn spawn_server(delivery_api: MockDeliveryApiService) -> String {
    let contact = ContactFeatureServiceImpl::new(
        delivery_api,
        ContactFeatureConfig {
            from: "Mentoria <onboarding@resend.dev>".into(),
            to: "voce@seuemail.com".into(),
            subject: "Mentoria — Novo contato".into(),
        },
    );
    let router = RestServer::new(contact).router();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });

    format!("http://{addr}")
}
