use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum HcError {
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("未知的请求: {0}")]
    UnknownRequest(String),

    #[error("参数数量错误: 需要 1 个请求名, 实际 {0} 个 (用法: hc <request_name>)")]
    InvalidArgs(usize),

    #[error("HTTP 请求失败: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON 解析错误: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for hc crate
pub type Result<T> = std::result::Result<T, HcError>;
