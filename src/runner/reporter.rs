use std::fs;
use std::path::Path;

use colored::Colorize;

use crate::Result;
use crate::http::Status;
use crate::runner::types::RunOutput;

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// 渲染执行结果：状态行 + 每行一个 `key: value`
    pub fn render(&self, output: &RunOutput) -> String {
        let mut lines = Vec::with_capacity(output.values.len() + 1);
        let status = Status::new(output.status);
        let status_line = format!(
            "{} {} {} -> {} {} ({}ms)",
            output.name,
            output.method,
            output.url,
            status.code(),
            status.reason_phrase(),
            output.duration.as_millis()
        );

        if self.color {
            let colored_status_line = if status.is_success() {
                status_line.green()
            } else if status.is_client_error() {
                status_line.yellow()
            } else {
                status_line.red()
            };
            lines.push(colored_status_line.to_string());
        } else {
            lines.push(status_line);
        }

        for (key, value) in &output.values {
            if self.color {
                lines.push(format!("{}: {}", key.cyan().bold(), value));
            } else {
                lines.push(format!("{}: {}", key, value));
            }
        }

        lines.join("\n")
    }

    /// 输出到终端，或写入 settings.output 指定的文件
    pub fn report(&self, output: &RunOutput, destination: Option<&str>) -> Result<()> {
        match destination {
            Some(path) => {
                let plain = Reporter::new(false).render(output);
                fs::write(Path::new(path), plain + "\n")?;
                tracing::info!(path, "Result written");
            }
            None => println!("{}", self.render(output)),
        }
        Ok(())
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(true)
    }
}
