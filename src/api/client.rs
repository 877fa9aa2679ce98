//! Signup client used by the preview's footer form.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("signup rejected with {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("signup request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Clone)]
pub struct NewsletterClient {
    http: reqwest::Client,
    endpoint: String,
}

impl NewsletterClient {
    /// Client for the API served at `bind`.  An unspecified bind address
    /// (`0.0.0.0` / `::`) is reached over loopback.
    pub fn new(bind: SocketAddr) -> Result<Self, reqwest::Error> {
        let host = match bind.ip() {
            IpAddr::V4(ip) if ip.is_unspecified() => IpAddr::V4(Ipv4Addr::LOCALHOST),
            IpAddr::V6(ip) if ip.is_unspecified() => IpAddr::V6(Ipv6Addr::LOCALHOST),
            ip => ip,
        };
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            endpoint: format!("http://{}/api/newsletter", SocketAddr::new(host, bind.port())),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `{ "email": email }`.  Any non-2xx status is an error.
    pub async fn subscribe(&self, email: &str) -> Result<(), SubmitError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "email": email }))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status.canonical_reason().unwrap_or("unknown").to_string(),
        };
        Err(SubmitError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
