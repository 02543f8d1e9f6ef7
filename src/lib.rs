pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::{router, AppState};
pub use config::{AppConfig, CliConfig};
pub use crate::core::service::VendorService;
pub use utils::error::{AdapterError, Result};
