use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::config::types::{BodyType, ConfigError};

/// 从 HTTP 响应中提取单个值的规则
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `header:<key>`
    Header(String),
    /// `cookie:<key>`，目前与 header 一样在响应头中查找
    Cookie(String),
    /// `body` 或 `body:a.b.c`
    ///
    /// 路径段只做记录，提取时始终返回完整 body
    Body(Vec<String>),
}

impl Selector {
    /// 解析 `<kind>:<rest>` 语法
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let (kind, rest) = match raw.split_once(':') {
            Some((kind, rest)) => (kind, Some(rest)),
            None => (raw, None),
        };

        match kind {
            "header" => Self::keyed("header", raw, rest).map(Selector::Header),
            "cookie" => Self::keyed("cookie", raw, rest).map(Selector::Cookie),
            "body" => Ok(Selector::Body(
                rest.map(|path| path.split('.').map(str::to_string).collect())
                    .unwrap_or_default(),
            )),
            _ => Err(ConfigError::UnknownSelectorKind(raw.to_string())),
        }
    }

    /// header/cookie 必须恰好是两段
    fn keyed(kind: &'static str, raw: &str, rest: Option<&str>) -> Result<String, ConfigError> {
        match rest {
            Some(key) if !key.contains(':') => Ok(key.to_string()),
            _ => Err(ConfigError::MalformedSelector {
                kind,
                raw: raw.to_string(),
            }),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Selector::Header(_) => "header",
            Selector::Cookie(_) => "cookie",
            Selector::Body(_) => "body",
        }
    }

    /// 从响应中提取值
    ///
    /// 找不到 key 时返回空字符串，提取阶段不报错
    pub fn extract(
        &self,
        headers: &HashMap<String, String>,
        body: &str,
        _body_type: BodyType,
    ) -> String {
        match self {
            Selector::Header(key) | Selector::Cookie(key) => {
                lookup_header(headers, key).unwrap_or_default().to_string()
            }
            Selector::Body(_) => body.to_string(),
        }
    }
}

/// 先精确匹配，再忽略大小写匹配（reqwest 返回的 header 名是小写）
fn lookup_header<'a>(headers: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    headers
        .get(key)
        .or_else(|| {
            headers
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(key))
                .map(|(_, value)| value)
        })
        .map(String::as_str)
}

impl FromStr for Selector {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Header(key) => write!(f, "header:{}", key),
            Selector::Cookie(key) => write!(f, "cookie:{}", key),
            Selector::Body(depth) if depth.is_empty() => write!(f, "body"),
            Selector::Body(depth) => write!(f, "body:{}", depth.join(".")),
        }
    }
}
