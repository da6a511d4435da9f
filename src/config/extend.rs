use std::collections::HashMap;

use crate::config::raw::RawRequest;
use crate::config::types::{ConfigError, ConfigResult};

/// 展开一层 `extend` 继承
///
/// - 标量字段（url / path / method / body）只在子请求未设置时继承
/// - 列表字段（select / headers / args）追加：子请求在前，被继承者在后
/// - 被继承者自身的 `extend` 不会再展开
pub fn resolve_extend(
    name: &str,
    request: &RawRequest,
    all: &HashMap<String, RawRequest>,
) -> ConfigResult<RawRequest> {
    let Some(target_name) = request.extend.as_deref() else {
        return Ok(request.clone());
    };

    let target = all
        .get(target_name)
        .ok_or_else(|| ConfigError::ExtendTargetNotFound {
            request: name.to_string(),
            target: target_name.to_string(),
        })?;

    let mut merged = request.clone();
    merged.url = merged.url.or_else(|| target.url.clone());
    merged.path = merged.path.or_else(|| target.path.clone());
    merged.method = merged.method.or_else(|| target.method.clone());
    merged.body = merged.body.or_else(|| target.body.clone());
    merged.select.extend(target.select.iter().cloned());
    merged.headers.extend(target.headers.iter().cloned());
    merged.args.extend(target.args.iter().cloned());

    tracing::trace!(request = name, target = target_name, "Resolved extend");
    Ok(merged)
}
