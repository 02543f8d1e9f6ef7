use crate::config::UpstreamConfig;
use crate::domain::ports::{ErpGateway, UpstreamQuery};
use crate::utils::error::{AdapterError, Result, UpstreamError};
use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client, Response};

/// Basic-auth OData client for the configured ERP service root.
#[derive(Clone)]
pub struct ODataGateway {
    base_url: String,
    username: String,
    password: String,
    client: Client,
}

impl ODataGateway {
    pub fn try_new(config: &UpstreamConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| AdapterError::ConfigError {
                message: format!("Failed to build upstream client: {}", e),
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
            client,
        })
    }

    pub fn url_for(&self, query: &UpstreamQuery) -> String {
        format!("{}/{}", self.base_url, query)
    }

    /// Sends the GET and turns any non-2xx answer into [`UpstreamError::Status`].
    async fn send(&self, query: &UpstreamQuery) -> std::result::Result<Response, UpstreamError> {
        let url = self.url_for(query);
        tracing::debug!("Making upstream request to: {}", url);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .header(ACCEPT, query.accept.as_str())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Upstream response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let text = response.text().await?;
        // Keep JSON error bodies structured; anything else goes through as text.
        let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text));

        Err(UpstreamError::Status {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}

#[async_trait]
impl ErpGateway for ODataGateway {
    async fn fetch_json(
        &self,
        query: &UpstreamQuery,
    ) -> std::result::Result<serde_json::Value, UpstreamError> {
        let bytes = self.send(query).await?.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| UpstreamError::Decode {
            message: e.to_string(),
        })
    }

    async fn fetch_bytes(
        &self,
        query: &UpstreamQuery,
    ) -> std::result::Result<Vec<u8>, UpstreamError> {
        let bytes = self.send(query).await?.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resources::Resource;
    use httpmock::prelude::*;
    use serde_json::json;

    fn config(base_url: String) -> UpstreamConfig {
        UpstreamConfig {
            base_url,
            username: "portal".to_string(),
            password: "pw".to_string(),
            timeout_seconds: 5,
            accept_invalid_certs: false,
        }
    }

    #[test]
    fn test_url_for_joins_base_and_query() {
        let gateway = ODataGateway::try_new(&config("https://erp.example.com/odata/".to_string()))
            .unwrap();
        assert_eq!(
            gateway.url_for(&Resource::Memos.query("0000012345")),
            "https://erp.example.com/odata/ZATC_MEMOSet?$filter=(VendorId eq '0000012345')"
        );
    }

    #[tokio::test]
    async fn test_fetch_json_sends_credentials_and_accept() {
        let server = MockServer::start_async().await;
        let upstream = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/odata/ZATC_MEMOSet")
                    .query_param("$filter", "(VendorId eq '0000012345')")
                    // base64("portal:pw")
                    .header("authorization", "Basic cG9ydGFsOnB3")
                    .header("accept", "application/json");
                then.status(200).json_body(json!({"d": {"results": []}}));
            })
            .await;

        let gateway = ODataGateway::try_new(&config(server.url("/odata"))).unwrap();
        let value = gateway
            .fetch_json(&Resource::Memos.query("0000012345"))
            .await
            .unwrap();

        upstream.assert_async().await;
        assert_eq!(value, json!({"d": {"results": []}}));
    }

    #[tokio::test]
    async fn test_error_status_keeps_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(503).json_body(json!({"msg": "down"}));
            })
            .await;

        let gateway = ODataGateway::try_new(&config(server.url("/odata"))).unwrap();
        let err = gateway
            .fetch_json(&Resource::Aging.query("0000000001"))
            .await
            .unwrap_err();

        match err {
            UpstreamError::Status {
                status,
                status_text,
                body,
            } => {
                assert_eq!(status, 503);
                assert_eq!(status_text, "Service Unavailable");
                assert_eq!(body, json!({"msg": "down"}));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_status_with_text_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(500).body("<error>boom</error>");
            })
            .await;

        let gateway = ODataGateway::try_new(&config(server.url("/odata"))).unwrap();
        let err = gateway
            .fetch_bytes(&Resource::InvoicePdf.query("1"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            UpstreamError::Status { status: 500, body: serde_json::Value::String(ref s), .. }
                if s == "<error>boom</error>"
        ));
    }

    #[tokio::test]
    async fn test_non_json_success_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(200).body("not json");
            })
            .await;

        let gateway = ODataGateway::try_new(&config(server.url("/odata"))).unwrap();
        let err = gateway
            .fetch_json(&Resource::Profile.query("0000000001"))
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let gateway = ODataGateway::try_new(&config("http://127.0.0.1:1/odata".to_string()))
            .unwrap();
        let err = gateway
            .fetch_json(&Resource::Profile.query("0000000001"))
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::Transport(_)));
        assert!(!err.to_string().is_empty());
    }
}
