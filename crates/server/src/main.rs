//! Bank assistant server binary
//!
//! Boots tracing, loads settings and domain configuration, seeds the
//! demo account directory and serves the chat API.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use bank_assistant_accounts::InMemoryAccountDirectory;
use bank_assistant_agent::ChatEngine;
use bank_assistant_config::{DomainConfig, Settings};
use bank_assistant_server::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bank_assistant_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load().context("loading settings")?;
    let domain = match &settings.domain_file {
        Some(path) => DomainConfig::load(path)
            .with_context(|| format!("loading domain config from {}", path.display()))?,
        None => DomainConfig::default(),
    };

    let engine = ChatEngine::new(
        Arc::new(InMemoryAccountDirectory::demo()),
        Arc::new(domain),
    );
    let app = build_router(AppState::new(engine));

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    tracing::info!("bank assistant listening on {}", addr);

    axum::serve(listener, app)
        .await
        .context("serving chat API")?;

    Ok(())
}
