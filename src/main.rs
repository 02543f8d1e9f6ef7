use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use vendor_portal_bff::utils::{logger, validation::Validate};
use vendor_portal_bff::{app, AppState, CliConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // .env is optional; it must load before the logger reads RUST_LOG
    let env_file = dotenvy::from_path(&cli.env_file);

    logger::init_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting vendor-portal-bff");
    match env_file {
        Ok(()) => tracing::debug!("Loaded environment from {}", cli.env_file.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Ignoring {}: {}", cli.env_file.display(), e),
    }

    let config = match cli.load().and_then(|config| config.validate().map(|()| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    if cli.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    let state = AppState::from_config(&config).context("building upstream gateway")?;

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {}", address))?;

    tracing::info!(
        "✅ Server running at http://{} (upstream: {})",
        listener.local_addr()?,
        config.upstream.base_url
    );

    app::serve(listener, state).await?;

    tracing::info!("Server stopped");
    Ok(())
}
