use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::builder::ConfigBuilder;
use crate::config::raw::RawDocument;
use crate::config::types::{Config, ConfigResult};

/// 配置文件加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 默认配置文件名
    pub const DEFAULT_FILE: &'static str = "rc.toml";

    /// 新项目的配置模板
    pub const TEMPLATE: &'static str = r#"[settings]
base_url = "http://localhost:7900"

[req.ping]
path = "/ping"
select = ["header:Content-Type", "body"]

[req.create]
method = "POST"
path = "/test"
headers = ["Content-Type:application/json"]
body = '{"name": "hc"}'
"#;

    /// 读取并反序列化配置文件，不做语义解析
    pub fn load_raw<P: AsRef<Path>>(path: P) -> ConfigResult<RawDocument> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Reading config file");

        let content = fs::read_to_string(path)?;
        Ok(RawDocument::from_toml(&content)?)
    }

    /// 读取并完整解析配置文件
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Config> {
        let raw = Self::load_raw(path)?;
        let config = ConfigBuilder::build(&raw)?;
        tracing::info!(requests = config.requests.len(), "Config loaded");
        Ok(config)
    }

    /// 在目录中写入配置模板，已存在时返回错误
    pub fn init<P: AsRef<Path>>(dir: P) -> ConfigResult<PathBuf> {
        let path = dir.as_ref().join(Self::DEFAULT_FILE);
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)?;
        file.write_all(Self::TEMPLATE.as_bytes())?;
        Ok(path)
    }
}
