pub mod handlers;
pub mod response;

use crate::adapters::ODataGateway;
use crate::config::AppConfig;
use crate::core::VendorService;
use crate::utils::error::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Login is the only endpoint with a body; it is tiny.
const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub service: VendorService,
}

impl AppState {
    pub fn new(service: VendorService) -> Self {
        Self { service }
    }

    /// Wires the real OData gateway from config.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let gateway = ODataGateway::try_new(&config.upstream)?;
        Ok(Self::new(VendorService::new(Arc::new(gateway))))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/login", post(handlers::login))
        .route("/profile/:vendor_id", get(handlers::profile))
        .route("/goodsreceipt/:vendor_id", get(handlers::goods_receipts))
        .route("/invoices/:vendor_id", get(handlers::invoices))
        .route("/invoice/:invoice_id", get(handlers::invoice_pdf))
        .route("/memos/:vendor_id", get(handlers::memos))
        .route("/purchase-orders/:vendor_id", get(handlers::purchase_orders))
        .route("/rfq/:vendor_id", get(handlers::rfqs))
        .route("/aging/:vendor_id", get(handlers::aging))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves until Ctrl-C (or SIGTERM on unix).
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
