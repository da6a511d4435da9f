use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::HeaderMap;

use crate::config::{BodyType, Selector};
use crate::http::types::Status;

pub struct Response {
    pub status: Status,
    /// header 名为小写，同名 header 以逗号合并
    pub headers: HashMap<String, String>,
    pub body: String,
    pub duration: Duration,
}

impl Response {
    pub fn new(status: u16, headers: &HeaderMap, body: String, duration: Duration) -> Self {
        Self {
            status: Status::new(status),
            headers: header_mapping(headers),
            body,
            duration,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// 对响应执行一个选择器
    pub fn select(&self, selector: &Selector, body_type: BodyType) -> String {
        selector.extract(&self.headers, &self.body, body_type)
    }
}

fn header_mapping(headers: &HeaderMap) -> HashMap<String, String> {
    let mut mapping: HashMap<String, String> = HashMap::new();
    for (name, value) in headers {
        let value = value.to_str().unwrap_or("<invalid utf-8>");
        mapping
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }
    mapping
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_mapping_merges_duplicates() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", "application/json".parse().unwrap());
        headers.append("set-cookie", "a=1".parse().unwrap());
        headers.append("set-cookie", "b=2".parse().unwrap());

        let response = Response::new(200, &headers, "{}".to_string(), Duration::from_millis(5));
        assert_eq!(response.headers["content-type"], "application/json");
        assert_eq!(response.headers["set-cookie"], "a=1, b=2");
        assert!(response.is_success());
    }

    #[test]
    fn test_select() {
        let mut headers = HeaderMap::new();
        headers.insert("x-status", "up".parse().unwrap());
        let response = Response::new(200, &headers, "pong".to_string(), Duration::ZERO);

        let header = Selector::Header("X-Status".to_string());
        assert_eq!(response.select(&header, BodyType::Json), "up");
        assert_eq!(response.select(&Selector::Body(vec![]), BodyType::Text), "pong");
    }
}
