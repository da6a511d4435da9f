use hc::HcError;
use hc::config::{ConfigError, Method, Selector};

#[test]
fn test_config_error_wrapped() {
    let err: HcError = ConfigError::MissingBaseUrl("ping".to_string()).into();
    assert_eq!(
        err.to_string(),
        "配置错误: Request 'ping' uses path, but no base_url is defined in [settings]"
    );
}

#[test]
fn test_unknown_request() {
    let err = HcError::UnknownRequest("nope".to_string());
    assert_eq!(err.to_string(), "未知的请求: nope");
}

#[test]
fn test_unrecognized_method_message() {
    let err = "TRACE".parse::<Method>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown method: 'TRACE'. Only GET, POST, PUT, PATCH and DELETE are supported"
    );
}

#[test]
fn test_selector_messages() {
    let err = Selector::parse("header:a:b").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid header selector: 'header:a:b'. Format should be header:<key>"
    );

    let err = Selector::parse("status").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown selector: 'status'. Only header, cookie and body are supported"
    );
}
