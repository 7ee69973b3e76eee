//! Terminal front end for the lead-capture flow.
//!
//! Plays the role of the landing-page form: prompts for the four fields,
//! echoes the masked renderings, submits the lead to the Mautic form
//! endpoint, and prints the resulting notification.

use anyhow::Result;
use mautic_lead_capture::{
    AsyncMauticClient, AsyncMauticClientImpl, Config, LeadCaptureSession, MauticClient,
    Notification, Notifier, SdkLoader, TerminalNotifier,
};
use std::io::{self, Write};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn prompt(label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging (stderr only; stdout belongs to the form)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting lead capture against {} (form {} \"{}\")",
        config.mautic_base_url, config.form_id, config.form_name
    );

    let sync_client = MauticClient::new(&config);
    let client =
        Arc::new(AsyncMauticClientImpl::new(sync_client)) as Arc<dyn AsyncMauticClient>;

    // Once-only SDK bootstrap, owned here and injected below.
    let mut sdk = SdkLoader::new(
        client.clone(),
        config.mautic_base_url.clone(),
        config.submitting_message.clone(),
    );
    if let Err(e) = sdk.ensure_loaded().await {
        // The form endpoint may still accept submissions.
        warn!("form SDK unavailable: {}", e);
    }

    let notifier = TerminalNotifier;
    let mut session = LeadCaptureSession::new(client, config.form_id, &config.form_name);

    println!("Participe do Sorteio - preencha seus dados para concorrer!");
    loop {
        session.set_full_name(&prompt("Nome Completo")?);
        session.set_tax_id(&prompt("CPF")?);
        println!("  CPF: {}", session.submission().tax_id);
        session.set_email(&prompt("Email")?);
        session.set_phone(&prompt("Telefone")?);
        println!("  Telefone: {}", session.submission().phone);

        println!("{}", sdk.submitting_message());
        let outcome = session.submit().await;
        notifier.notify(&Notification::for_outcome(&outcome));

        if prompt("Enviar outra inscrição? (s/n)")?.to_lowercase() != "s" {
            break;
        }
    }

    info!("Lead capture session finished");
    Ok(())
}
