use crate::config::{BodyType, Config, RequestConfig};
use crate::http::{Client, Response};
use crate::runner::types::RunOutput;
use crate::{HcError, Result};

pub struct RequestRunner {
    client: Client,
}

impl RequestRunner {
    pub fn new() -> Result<Self> {
        Ok(Self::with_client(Client::new()?))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// 按名称执行一个请求并提取结果
    pub async fn run(&self, config: &Config, name: &str) -> Result<RunOutput> {
        let request = config
            .request(name)
            .ok_or_else(|| HcError::UnknownRequest(name.to_string()))?;

        tracing::info!(request = name, "Running request");
        let response = self.client.execute(request).await?;
        let values = extract_values(request, &response)?;

        Ok(RunOutput {
            name: name.to_string(),
            method: request.method,
            url: request.url.to_string(),
            status: response.status.code(),
            duration: response.duration,
            values,
        })
    }
}

/// 按 select 顺序提取值；没有 select 时按 body_type 展示整个 body
pub fn extract_values(request: &RequestConfig, response: &Response) -> Result<Vec<(String, String)>> {
    if !request.select.is_empty() {
        return Ok(request
            .select
            .iter()
            .map(|selector| {
                (
                    selector.to_string(),
                    response.select(selector, request.body_type),
                )
            })
            .collect());
    }

    match request.body_type {
        BodyType::Text => Ok(vec![("body".to_string(), response.body.clone())]),
        BodyType::Json => {
            let value: serde_json::Value = serde_json::from_str(&response.body)?;
            match value {
                serde_json::Value::Object(map) => {
                    let mut values: Vec<(String, String)> = map
                        .into_iter()
                        .map(|(key, value)| (key, display_json(value)))
                        .collect();
                    values.sort_by(|a, b| a.0.cmp(&b.0));
                    Ok(values)
                }
                other => Ok(vec![("body".to_string(), display_json(other))]),
            }
        }
    }
}

/// 字符串不带引号，其余按 JSON 输出
fn display_json(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}
