use std::sync::Arc;

use async_trait::async_trait;
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::{Method, Request};
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use native_tls::TlsConnector;
use serde_json::Value;
use thiserror::Error;

use crate::YouTubeError;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    NetworkError(#[from] std::io::Error),
    #[error("TLS error: {0}")]
    TlsError(#[from] native_tls::Error),
}

/// A parameterized GET capability. Resolves the parsed JSON body on a 2xx
/// status, fails with the status code and text otherwise.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, base_url: &str, params: &[(&str, String)]) -> Result<Value, YouTubeError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get(&self, base_url: &str, params: &[(&str, String)]) -> Result<Value, YouTubeError> {
        (**self).get(base_url, params).await
    }
}

// Keys and values are percent-encoded individually, joined with '&'.
pub(crate) fn encode_query(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

pub struct HyperTransport {
    client: Client<HttpsConnector<HttpConnector>, Empty<Bytes>>,
}

impl HyperTransport {
    pub fn new() -> Result<Self, ClientError> {
        let mut http = HttpConnector::new();
        http.enforce_http(false);

        let tls = TlsConnector::builder().build()?;
        let https = HttpsConnector::from((http, tls.into()));

        let client = Client::builder(TokioExecutor::new()).build::<_, Empty<Bytes>>(https);

        Ok(HyperTransport { client })
    }
}

#[async_trait]
impl Transport for HyperTransport {
    async fn get(&self, base_url: &str, params: &[(&str, String)]) -> Result<Value, YouTubeError> {
        let query = encode_query(params);
        let url = if query.is_empty() {
            base_url.to_string()
        } else {
            format!("{}?{}", base_url, query)
        };

        log::debug!("GET {}", base_url);

        let req = Request::builder()
            .method(Method::GET)
            .uri(url)
            .body(Empty::<Bytes>::new())
            .map_err(|e| YouTubeError::Other(Box::new(e)))?;

        let resp = self.client.request(req).await?;
        let status = resp.status();

        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or("").to_string();
            log::warn!("GET {} failed: {} {}", base_url, status.as_u16(), status_text);
            return Err(YouTubeError::Transport {
                status: status.as_u16(),
                status_text,
            });
        }

        let body = resp.into_body().collect().await?.to_bytes();
        let value: Value = serde_json::from_slice(&body)?;

        Ok(value)
    }
}
