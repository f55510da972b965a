use clap::Subcommand;
use mentoria_config::Config;
use mentoria_core_contact_contracts::ContactFeatureService;
use mentoria_models::contact::ContactSubmission;

use super::contact_service;

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Relay a test message through the configured delivery API
    Test {
        /// Reply-to address for the test message
        email: String,
    },
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            ContactCommand::Test { email } => test(config, email).await,
        }
    }
}

async fn test(config: Config, email: String) -> anyhow::Result<()> {
    let id = contact_service(&config)
        .send_message(ContactSubmission {
            name: "Contato de teste".into(),
            email,
            phone: String::new(),
            message: "A entrega de contatos parece estar funcionando!".into(),
        })
        .await?;

    match id {
        Some(id) => println!("Message relayed (id: {})", &*id),
        None => println!("Message relayed"),
    }

    Ok(())
}
