use mentoria_api_rest::RestServer;
use mentoria_config::Config;
use tracing::info;

use super::contact_service;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let server = RestServer::new(contact_service(&config));

    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
