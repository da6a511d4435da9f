use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use hc::config::ConfigLoader;
use hc::runner::{Reporter, RequestRunner};
use hc::{HcError, Result};

#[derive(Parser)]
#[command(name = "hc", author, version, about = "Declarative HTTP request runner", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 配置文件路径
    #[arg(short, long, default_value = ConfigLoader::DEFAULT_FILE)]
    pub config: PathBuf,

    /// 要执行的请求名称
    pub args: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 在当前目录创建 rc.toml 模板
    Init,
    /// 解析配置并打印结果
    Check,
}

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init) => {
            let path = ConfigLoader::init(std::env::current_dir()?)?;
            println!("Created {}", path.display());
            Ok(())
        }
        Some(Commands::Check) => {
            let config = ConfigLoader::load(&cli.config)?;
            print!("{}", config);
            Ok(())
        }
        None => run_request(&cli.config, &cli.args).await,
    }
}

async fn run_request(config_path: &Path, args: &[String]) -> Result<()> {
    let config = ConfigLoader::load(config_path)?;

    let [name] = args else {
        return Err(HcError::InvalidArgs(args.len()));
    };

    let runner = RequestRunner::new()?;
    let output = runner.run(&config, name).await?;
    Reporter::default().report(&output, config.output())
}
