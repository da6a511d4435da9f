use std::time::{Duration, Instant};

use crate::Result;
use crate::config::RequestConfig;
use crate::http::response::Response;

#[derive(Clone)]
pub struct Client {
    inner: reqwest::Client,
}

impl Client {
    /// 默认 30 秒超时
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(30))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Ok(Self {
            inner: reqwest::Client::builder().timeout(timeout).build()?,
        })
    }

    pub async fn execute(&self, request: &RequestConfig) -> Result<Response> {
        let mut req = self
            .inner
            .request(request.method.into(), request.url.clone());

        // 同名 header 追加，不覆盖
        for header in &request.headers {
            req = req.header(header.key.as_str(), header.value.as_str());
        }

        if let Some(body) = &request.body {
            req = req.body(body.clone());
        }

        tracing::debug!(method = %request.method, url = %request.url, "Sending request");

        let start = Instant::now();
        let response = req.send().await?;
        let duration = start.elapsed();

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await?;

        tracing::debug!(status, elapsed_ms = duration.as_millis() as u64, "Received response");
        Ok(Response::new(status, &headers, body, duration))
    }
}
