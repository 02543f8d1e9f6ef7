#![allow(dead_code)]

use reqwest::Client;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use vendor_portal_bff::config::{AppConfig, ServerConfig, UpstreamConfig};
use vendor_portal_bff::{router, AppState};

pub const SERVICE_ROOT: &str = "/sap/opu/odata/sap/ZVENDOR_SRV";

pub fn config_for(upstream_base_url: String) -> AppConfig {
    AppConfig {
        upstream: UpstreamConfig {
            base_url: upstream_base_url,
            username: "portal".to_string(),
            password: "portal-pw".to_string(),
            timeout_seconds: 5,
            accept_invalid_certs: false,
        },
        server: ServerConfig::default(),
    }
}

/// Spawns the adapter on a random port in front of `upstream_base_url`.
pub async fn spawn(upstream_base_url: String) -> (String, Client, tokio::task::JoinHandle<()>) {
    spawn_with(config_for(upstream_base_url)).await
}

pub async fn spawn_with(config: AppConfig) -> (String, Client, tokio::task::JoinHandle<()>) {
    let state = AppState::from_config(&config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });
    (format!("http://{}", addr), Client::new(), handle)
}

pub fn upstream_path(resource: &str) -> String {
    format!("{}/{}", SERVICE_ROOT, resource)
}
