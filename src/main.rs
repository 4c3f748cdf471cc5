use anyhow::Result;
use research_reader::utils::logging;
use research_reader::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    let log_file = logging::init_log_file(&config.output_log_file)?;
    logging::init(config.verbose_logging, Some(log_file));

    // 初始化并运行应用
    App::initialize(config).await?.run().await?;

    Ok(())
}
