use serde::Deserialize;
use std::collections::HashMap;

/// `[settings]` 段，所有字段可选
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct RawSettings {
    pub base_url: Option<String>,
    pub output: Option<String>,
    pub load_env: Option<LoadEnv>,
    pub include: Option<Vec<String>>,
}

/// `load_env = true` 或 `load_env = ".env"`
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LoadEnv {
    Flag(bool),
    Path(String),
}

impl LoadEnv {
    pub fn requested(&self) -> bool {
        match self {
            LoadEnv::Flag(enabled) => *enabled,
            LoadEnv::Path(_) => true,
        }
    }
}

/// `[req.<name>]` 段，未出现的字段保持 None / 空列表
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct RawRequest {
    #[serde(default)]
    pub args: Vec<String>,
    pub method: Option<String>,
    pub url: Option<String>,
    pub path: Option<String>,
    #[serde(default)]
    pub select: Vec<String>,
    #[serde(default)]
    pub headers: Vec<String>,
    pub body: Option<String>,
    pub body_type: Option<String>,
    pub extend: Option<String>,
}

/// 反序列化后的原始文档
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct RawDocument {
    pub settings: Option<RawSettings>,
    #[serde(default, rename = "req")]
    pub requests: HashMap<String, RawRequest>,
}

impl RawDocument {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
