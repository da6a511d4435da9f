use std::time::Duration;

use crate::config::Method;

/// 单次请求的执行结果
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutput {
    /// 请求名称（配置中的 key）
    pub name: String,

    pub method: Method,

    pub url: String,

    pub status: u16,

    pub duration: Duration,

    /// 提取出的值，保持 select 声明顺序
    ///
    /// 没有 select 时为 JSON 顶层字段或完整 body
    pub values: Vec<(String, String)>,
}

impl RunOutput {
    pub fn value(&self, label: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, value)| value.as_str())
    }
}
