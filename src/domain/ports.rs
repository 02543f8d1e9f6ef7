use crate::utils::error::UpstreamError;
use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Json,
    Pdf,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Json => "application/json",
            MediaType::Pdf => "application/pdf",
        }
    }
}

/// One outbound request, relative to the configured service root.
///
/// `path` and `filter` are already escaped; the gateway only joins them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamQuery {
    pub path: String,
    pub filter: Option<String>,
    pub accept: MediaType,
}

impl fmt::Display for UpstreamQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.filter {
            Some(filter) => write!(f, "{}?$filter={}", self.path, filter),
            None => f.write_str(&self.path),
        }
    }
}

/// The ERP as seen by the adapter: exactly one GET per call, no retries.
#[async_trait]
pub trait ErpGateway: Send + Sync {
    async fn fetch_json(
        &self,
        query: &UpstreamQuery,
    ) -> std::result::Result<serde_json::Value, UpstreamError>;

    async fn fetch_bytes(&self, query: &UpstreamQuery)
        -> std::result::Result<Vec<u8>, UpstreamError>;
}
