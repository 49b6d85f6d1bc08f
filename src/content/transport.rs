use std::future::Future;

use http::StatusCode;
use serde_json::Value;

use super::error::ContentError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// The HTTP seam of the content clients. Exactly one request per call;
/// implementations never retry.
pub trait Transport {
    fn get(&self, url: &str) -> impl Future<Output = Result<TransportResponse, ContentError>>;

    fn post_json(
        &self,
        url: &str,
        body: &Value,
    ) -> impl Future<Output = Result<TransportResponse, ContentError>>;
}

/// [`Transport`] over `reqwest`, which uses `fetch` when built for the browser.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    async fn read(url: &str, res: reqwest::Response) -> Result<TransportResponse, ContentError> {
        let status = res.status();
        let body = res
            .bytes()
            .await
            .map_err(|e| ContentError::transport(url, e))?;
        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, ContentError> {
        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ContentError::transport(url, e))?;
        Self::read(url, res).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<TransportResponse, ContentError> {
        let res = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ContentError::transport(url, e))?;
        Self::read(url, res).await
    }
}
