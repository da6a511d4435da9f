use hc::HcError;
use hc::config::ConfigLoader;
use hc::runner::RequestRunner;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 在临时目录写入 rc.toml 并加载
fn load_config(temp_dir: &TempDir, content: &str) -> hc::config::Config {
    let config_path = temp_dir.path().join("rc.toml");
    fs::write(&config_path, content).unwrap();
    ConfigLoader::load(&config_path).unwrap()
}

/// 测试 path + base_url 组合并提取 header
#[tokio::test]
async fn test_header_selector_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Status", "up")
                .set_body_string("pong"),
        )
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let config = load_config(
        &temp_dir,
        &format!(
            r#"
[settings]
base_url = "{}"

[req.ping]
path = "/ping"
select = ["header:X-Status", "body"]
"#,
            mock_server.uri()
        ),
    );

    let runner = RequestRunner::new().unwrap();
    let output = runner.run(&config, "ping").await.unwrap();

    assert_eq!(output.status, 200);
    assert_eq!(output.value("header:X-Status"), Some("up"));
    assert_eq!(output.value("body"), Some("pong"));
}

/// 测试 extend 继承 method / headers / body 后发送
#[tokio::test]
async fn test_extended_post_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/test"))
        .and(header("Content-Type", "application/json"))
        .and(header("X-Client", "hc"))
        .and(body_string(r#"{"name": "hc"}"#))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "status": "ok",
            "id": 7
        })))
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let config = load_config(
        &temp_dir,
        &format!(
            r#"
[settings]
base_url = "{}"

[req.base]
method = "POST"
path = "/test"
headers = ["Content-Type:application/json"]
body = '{{"name": "hc"}}'

[req.create]
extend = "base"
headers = ["X-Client:hc"]
"#,
            mock_server.uri()
        ),
    );

    let runner = RequestRunner::new().unwrap();
    let output = runner.run(&config, "create").await.unwrap();

    assert_eq!(output.status, 201);
    // 没有 select 时展示 JSON 顶层字段
    assert_eq!(
        output.values,
        vec![
            ("id".to_string(), "7".to_string()),
            ("status".to_string(), "ok".to_string()),
        ]
    );
}

/// 测试未知请求名
#[tokio::test]
async fn test_unknown_request() {
    let temp_dir = TempDir::new().unwrap();
    let config = load_config(&temp_dir, "[req.a]\nurl = \"http://localhost:1/\"\n");

    let runner = RequestRunner::new().unwrap();
    let result = runner.run(&config, "missing").await;
    assert!(matches!(result, Err(HcError::UnknownRequest(name)) if name == "missing"));
}
