use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::config::selector::Selector;

/// 配置解析错误类型
///
/// 任意一个错误都会中止整个文档的构建，不会返回部分结果
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 枚举类字段（method / arg type / body type）取值不在合法集合内
    #[error("Unknown {kind}: '{token}'. Only {allowed} are supported")]
    UnrecognizedToken {
        kind: &'static str,
        token: String,
        allowed: &'static str,
    },

    /// select 条目不符合 kind:arg 语法
    #[error("Invalid {kind} selector: '{raw}'. Format should be {kind}:<key>")]
    MalformedSelector { kind: &'static str, raw: String },

    /// select 条目使用了不支持的类型
    #[error("Unknown selector: '{0}'. Only header, cookie and body are supported")]
    UnknownSelectorKind(String),

    /// args 条目有多个类型段
    #[error("Invalid argument: '{0}'. Format should be key:type or key")]
    MalformedArgument(String),

    /// headers 条目不是 key:value
    #[error("Invalid header: '{0}'. Format should be key:value")]
    MalformedHeader(String),

    /// extend 指向了不存在的请求
    #[error("Can't find extended request '{target}' (extended by '{request}')")]
    ExtendTargetNotFound { request: String, target: String },

    /// 使用了 path，但全局配置没有 base_url
    #[error("Request '{0}' uses path, but no base_url is defined in [settings]")]
    MissingBaseUrl(String),

    /// 既没有 url 也没有 path
    #[error("Request '{0}' defines neither url nor path")]
    MissingUrl(String),

    /// URL 语法错误
    #[error("Invalid URL '{input}': {source}")]
    UrlParseFailure {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML 反序列化错误
    #[error("Invalid config document: {0}")]
    Toml(#[from] toml::de::Error),
}

/// 配置结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;

/// 解析 URL，失败时保留原始输入
pub(crate) fn parse_url(input: &str) -> ConfigResult<url::Url> {
    url::Url::parse(input).map_err(|source| ConfigError::UrlParseFailure {
        input: input.to_string(),
        source,
    })
}

/// HTTP 方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl FromStr for Method {
    type Err = ConfigError;

    /// 整个 token 全大写或全小写，不接受 "Get" 这种混合写法
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" | "get" => Ok(Method::Get),
            "POST" | "post" => Ok(Method::Post),
            "PUT" | "put" => Ok(Method::Put),
            "PATCH" | "patch" => Ok(Method::Patch),
            "DELETE" | "delete" => Ok(Method::Delete),
            _ => Err(ConfigError::UnrecognizedToken {
                kind: "method",
                token: s.to_string(),
                allowed: "GET, POST, PUT, PATCH and DELETE",
            }),
        }
    }
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 参数类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArgType {
    #[default]
    String,
    Int,
    Float,
    Bool,
}

impl FromStr for ArgType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(ArgType::String),
            "int" => Ok(ArgType::Int),
            "float" => Ok(ArgType::Float),
            "bool" => Ok(ArgType::Bool),
            _ => Err(ConfigError::UnrecognizedToken {
                kind: "argument type",
                token: s.to_string(),
                allowed: "string, int, float and bool",
            }),
        }
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArgType::String => "string",
            ArgType::Int => "int",
            ArgType::Float => "float",
            ArgType::Bool => "bool",
        };
        f.write_str(name)
    }
}

/// 请求/响应 body 的解释方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyType {
    Text,
    #[default]
    Json,
}

impl FromStr for BodyType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(BodyType::Text),
            "json" => Ok(BodyType::Json),
            _ => Err(ConfigError::UnrecognizedToken {
                kind: "body type",
                token: s.to_string(),
                allowed: "text and json",
            }),
        }
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyType::Text => f.write_str("text"),
            BodyType::Json => f.write_str("json"),
        }
    }
}

/// 声明的输入参数（仅占位，尚未做替换）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub key: String,
    pub arg_type: ArgType,
}

impl Argument {
    /// 解析 `key` 或 `key:type`
    pub fn parse(token: &str) -> ConfigResult<Self> {
        let parts: Vec<&str> = token.split(':').collect();
        match parts.as_slice() {
            [key] => Ok(Self {
                key: key.to_string(),
                arg_type: ArgType::default(),
            }),
            [key, arg_type] => Ok(Self {
                key: key.to_string(),
                arg_type: arg_type.parse()?,
            }),
            _ => Err(ConfigError::MalformedArgument(token.to_string())),
        }
    }
}

/// 单个请求头，允许重复，保持声明顺序
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub key: String,
    pub value: String,
}

impl Header {
    /// 按第一个冒号切分 `key:value`，value 可以为空
    pub fn parse(token: &str) -> ConfigResult<Self> {
        let (key, value) = token
            .split_once(':')
            .ok_or_else(|| ConfigError::MalformedHeader(token.to_string()))?;
        Ok(Self {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

/// 解析后的全局配置
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GlobalSettings {
    pub base_url: Option<url::Url>,
    pub output: Option<String>,
    /// 仅在请求了 load_env 时存在
    pub env_vars: Option<HashMap<String, String>>,
    pub include: Vec<String>,
}

/// 完全解析、可直接执行的请求定义
#[derive(Debug, Clone, PartialEq)]
pub struct RequestConfig {
    pub args: Vec<Argument>,
    pub method: Method,
    pub url: url::Url,
    pub select: Vec<Selector>,
    pub headers: Vec<Header>,
    pub body: Option<Vec<u8>>,
    pub body_type: BodyType,
}

/// 顶层配置，构建完成后只读
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub settings: Option<GlobalSettings>,
    pub requests: HashMap<String, RequestConfig>,
}

impl Config {
    pub fn request(&self, name: &str) -> Option<&RequestConfig> {
        self.requests.get(name)
    }

    /// 按名称排序的请求名列表
    pub fn request_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.requests.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn output(&self) -> Option<&str> {
        self.settings.as_ref()?.output.as_deref()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(settings) = &self.settings {
            writeln!(f, "Settings:")?;
            match &settings.base_url {
                Some(url) => writeln!(f, "  BaseUrl: {}", url)?,
                None => writeln!(f, "  BaseUrl: -")?,
            }
            writeln!(f, "  Output: {}", settings.output.as_deref().unwrap_or("-"))?;
            writeln!(f, "  LoadEnv: {}", settings.env_vars.is_some())?;
            writeln!(f, "  Include: {:?}", settings.include)?;
            writeln!(f)?;
        }

        for name in self.request_names() {
            let request = &self.requests[name];
            writeln!(f, "Request: {}", name)?;
            let args: Vec<String> = request
                .args
                .iter()
                .map(|a| format!("{}:{}", a.key, a.arg_type))
                .collect();
            writeln!(f, "  Args: [{}]", args.join(", "))?;
            writeln!(f, "  Method: {}", request.method)?;
            writeln!(f, "  Url: {}", request.url)?;
            let select: Vec<String> = request.select.iter().map(ToString::to_string).collect();
            writeln!(f, "  Select: [{}]", select.join(", "))?;
            let headers: Vec<String> = request
                .headers
                .iter()
                .map(|h| format!("{}:{}", h.key, h.value))
                .collect();
            writeln!(f, "  Headers: [{}]", headers.join(", "))?;
            writeln!(f, "  BodyType: {}", request.body_type)?;
            if let Some(body) = &request.body {
                writeln!(f, "  Body: {}", String::from_utf8_lossy(body))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_method_both_cases() {
        let cases = [
            ("GET", Method::Get),
            ("POST", Method::Post),
            ("PUT", Method::Put),
            ("PATCH", Method::Patch),
            ("DELETE", Method::Delete),
        ];
        for (token, expected) in cases {
            assert_eq!(token.parse::<Method>().unwrap(), expected);
            assert_eq!(token.to_lowercase().parse::<Method>().unwrap(), expected);
            assert_eq!(expected.as_str(), token);
        }
    }

    #[test]
    fn test_parse_method_rejects_others() {
        for token in ["Get", "HEAD", "options", "", " GET"] {
            let err = token.parse::<Method>().unwrap_err();
            assert!(matches!(err, ConfigError::UnrecognizedToken { kind: "method", .. }));
        }
    }

    #[test]
    fn test_parse_arg_type() {
        assert_eq!("string".parse::<ArgType>().unwrap(), ArgType::String);
        assert_eq!("int".parse::<ArgType>().unwrap(), ArgType::Int);
        assert_eq!("float".parse::<ArgType>().unwrap(), ArgType::Float);
        assert_eq!("bool".parse::<ArgType>().unwrap(), ArgType::Bool);
        assert!("Int".parse::<ArgType>().is_err());
        assert!("number".parse::<ArgType>().is_err());
    }

    #[test]
    fn test_parse_body_type() {
        assert_eq!("text".parse::<BodyType>().unwrap(), BodyType::Text);
        assert_eq!("json".parse::<BodyType>().unwrap(), BodyType::Json);
        let err = "xml".parse::<BodyType>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown body type: 'xml'. Only text and json are supported"
        );
    }

    #[test]
    fn test_parse_argument() {
        let arg = Argument::parse("id").unwrap();
        assert_eq!(arg.key, "id");
        assert_eq!(arg.arg_type, ArgType::String);

        let arg = Argument::parse("count:int").unwrap();
        assert_eq!(arg.key, "count");
        assert_eq!(arg.arg_type, ArgType::Int);

        assert!(matches!(
            Argument::parse("k:int:extra"),
            Err(ConfigError::MalformedArgument(_))
        ));
        assert!(matches!(
            Argument::parse("k:long"),
            Err(ConfigError::UnrecognizedToken { .. })
        ));
    }

    #[test]
    fn test_parse_header() {
        let header = Header::parse("Accept:application/json").unwrap();
        assert_eq!(header.key, "Accept");
        assert_eq!(header.value, "application/json");

        // 只按第一个冒号切分
        let header = Header::parse("Referer:http://example.com").unwrap();
        assert_eq!(header.key, "Referer");
        assert_eq!(header.value, "http://example.com");

        let header = Header::parse("X-Empty:").unwrap();
        assert_eq!(header.value, "");

        assert!(matches!(
            Header::parse("no-colon"),
            Err(ConfigError::MalformedHeader(_))
        ));
    }
}
