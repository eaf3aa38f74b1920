use crate::error::{Error, ErrorKind};
use crate::r#static::REQUEST_TIMEOUT;
use async_trait::async_trait;
use getset::{CopyGetters, Getters};
use surf::Client;
use utils::surf_logging::SurfLogging;

/// One raw HTTP exchange as the client sees it: status code and body text.
#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct RawResponse {
    #[getset(get_copy = "pub")]
    status: u16,
    #[getset(get = "pub")]
    body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Dispatches one authenticated GET request. The catalog API is read-only,
/// so this is the only verb the client ever needs.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, api_key: &str) -> Result<RawResponse, Error>;
}

/// Production transport backed by surf, with request logging and a capped
/// round-trip time.
pub struct SurfTransport {
    http: Client,
}

impl SurfTransport {
    pub fn new() -> Self {
        let http: Client = surf::Config::new()
            .set_timeout(Some(REQUEST_TIMEOUT))
            .try_into()
            .unwrap_or_else(|_| Client::new());
        Self {
            http: http.with(SurfLogging),
        }
    }
}

impl Default for SurfTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for SurfTransport {
    async fn get(&self, url: &str, api_key: &str) -> Result<RawResponse, Error> {
        let mut response = self
            .http
            .get(url)
            .header("x-api-key", api_key)
            .await
            .map_err(|err| ErrorKind::Transport(err.to_string()))?;
        let body = response
            .body_string()
            .await
            .map_err(|err| ErrorKind::Transport(err.to_string()))?;
        Ok(RawResponse::new(u16::from(response.status()), body))
    }
}
