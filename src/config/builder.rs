use std::collections::HashMap;

use crate::config::extend::resolve_extend;
use crate::config::raw::{RawDocument, RawRequest, RawSettings};
use crate::config::selector::Selector;
use crate::config::types::{
    Argument, BodyType, Config, ConfigError, ConfigResult, GlobalSettings, Header, Method,
    RequestConfig, parse_url,
};

/// 将原始文档解析为完整的 `Config`
///
/// 遇到第一个错误即中止，不返回部分结果
pub struct ConfigBuilder;

impl ConfigBuilder {
    pub fn build(raw: &RawDocument) -> ConfigResult<Config> {
        let settings = raw
            .settings
            .as_ref()
            .map(Self::build_settings)
            .transpose()?;

        // 按名称顺序解析，保证报出的第一个错误是确定的
        let mut names: Vec<&String> = raw.requests.keys().collect();
        names.sort();

        let mut requests = HashMap::with_capacity(names.len());
        for name in names {
            let request = Self::build_request(name, &raw.requests, settings.as_ref())?;
            tracing::debug!(
                request = %name,
                method = %request.method,
                url = %request.url,
                "Resolved request"
            );
            requests.insert(name.clone(), request);
        }

        Ok(Config { settings, requests })
    }

    fn build_settings(raw: &RawSettings) -> ConfigResult<GlobalSettings> {
        let base_url = raw.base_url.as_deref().map(parse_url).transpose()?;
        let env_vars = raw
            .load_env
            .as_ref()
            .filter(|load_env| load_env.requested())
            .map(|_| HashMap::new());

        Ok(GlobalSettings {
            base_url,
            output: raw.output.clone(),
            env_vars,
            include: raw.include.clone().unwrap_or_default(),
        })
    }

    fn build_request(
        name: &str,
        all: &HashMap<String, RawRequest>,
        settings: Option<&GlobalSettings>,
    ) -> ConfigResult<RequestConfig> {
        let raw = resolve_extend(name, &all[name], all)?;

        let args = raw
            .args
            .iter()
            .map(|arg| Argument::parse(arg))
            .collect::<ConfigResult<Vec<_>>>()?;

        let method: Method = match raw.method.as_deref() {
            Some(method) => method.parse()?,
            None => Method::default(),
        };

        let url = Self::resolve_url(name, &raw, settings)?;

        let headers = raw
            .headers
            .iter()
            .map(|header| Header::parse(header))
            .collect::<ConfigResult<Vec<_>>>()?;

        let body_type: BodyType = match raw.body_type.as_deref() {
            Some(body_type) => body_type.parse()?,
            None => BodyType::default(),
        };

        let body = raw.body.map(String::into_bytes);

        let select = raw
            .select
            .iter()
            .map(|selector| Selector::parse(selector))
            .collect::<ConfigResult<Vec<_>>>()?;

        Ok(RequestConfig {
            args,
            method,
            url,
            select,
            headers,
            body,
            body_type,
        })
    }

    /// 显式 url 优先于 base_url + path
    fn resolve_url(
        name: &str,
        raw: &RawRequest,
        settings: Option<&GlobalSettings>,
    ) -> ConfigResult<url::Url> {
        let from_path = match raw.path.as_deref() {
            Some(path) => {
                let mut url = settings
                    .and_then(|s| s.base_url.clone())
                    .ok_or_else(|| ConfigError::MissingBaseUrl(name.to_string()))?;
                url.set_path(path);
                Some(url)
            }
            None => None,
        };

        match raw.url.as_deref() {
            Some(explicit) => parse_url(explicit),
            None => from_path.ok_or_else(|| ConfigError::MissingUrl(name.to_string())),
        }
    }
}
