//! HTTP adapter implementing [`RawApiPort`]
//!
//! Native builds use reqwest with the client-side timeout applied at the
//! client level; wasm builds use gloo-net on top of the browser's fetch.
//! Both speak the same JSON REST dialect against the moderation API.

use serde_json::Value;

use crate::application::get_request_timeout_ms;
use crate::ports::outbound::{ApiError, RawApiPort};

pub struct HttpApiAdapter {
    base_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl HttpApiAdapter {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        #[cfg(not(target_arch = "wasm32"))]
        {
            let client = reqwest::Client::builder()
                .timeout(std::time::Duration::from_millis(get_request_timeout_ms()))
                .build()
                .unwrap_or_default();
            Self { base_url, client }
        }
        #[cfg(target_arch = "wasm32")]
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::*;

    fn map_transport(e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Timeout(get_request_timeout_ms())
        } else {
            ApiError::RequestFailed(e.to_string())
        }
    }

    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode(resp: reqwest::Response) -> Result<Value, ApiError> {
        let resp = check_status(resp).await?;
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    #[async_trait::async_trait]
    impl RawApiPort for HttpApiAdapter {
        async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
            let resp = self
                .client
                .get(self.url(path))
                .send()
                .await
                .map_err(map_transport)?;
            decode(resp).await
        }

        async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
            let resp = self
                .client
                .post(self.url(path))
                .json(body)
                .send()
                .await
                .map_err(map_transport)?;
            decode(resp).await
        }

        async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
            let resp = self
                .client
                .post(self.url(path))
                .send()
                .await
                .map_err(map_transport)?;
            check_status(resp).await.map(|_| ())
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::*;
    use gloo_net::http::{Request, Response};

    // The browser's own fetch timeout applies here; the reqwest-side
    // timeout only exists on native builds.

    fn map_transport(e: gloo_net::Error) -> ApiError {
        ApiError::RequestFailed(e.to_string())
    }

    async fn check_status(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let message = resp.text().await.unwrap_or_default();
        Err(ApiError::Status { status, message })
    }

    async fn decode(resp: Response) -> Result<Value, ApiError> {
        let resp = check_status(resp).await?;
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    #[async_trait::async_trait(?Send)]
    impl RawApiPort for HttpApiAdapter {
        async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
            let resp = Request::get(&self.url(path))
                .send()
                .await
                .map_err(map_transport)?;
            decode(resp).await
        }

        async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
            let resp = Request::post(&self.url(path))
                .json(body)
                .map_err(map_transport)?
                .send()
                .await
                .map_err(map_transport)?;
            decode(resp).await
        }

        async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
            let resp = Request::post(&self.url(path))
                .send()
                .await
                .map_err(map_transport)?;
            check_status(resp).await.map(|_| ())
        }
    }
}
