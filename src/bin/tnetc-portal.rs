use std::env;

use anyhow::{anyhow, Context, Result};
use tnetc_portal::bot::{new_bot, start_dispatcher};
use tnetc_portal::config::Config;
use tnetc_portal::portal::Portal;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // .env 不存在时忽略
    dotenvy::dotenv().ok();

    let path = env::args().nth(1).unwrap_or_else(|| "./config.toml".into());
    let config = Config::new(&path).with_context(|| format!("failed to load config from {path}"))?;

    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .try_init()
        .map_err(|e| anyhow!("failed to init tracing: {e}"))?;

    // 菜单有重复标识符或悬空按钮时直接退出，不启动 bot
    let portal = Portal::build(&config.portal).context("invalid portal menu")?;
    info!("根菜单按钮数：{}", portal.root().buttons().count());

    let bot = new_bot(&config.telegram.token);
    start_dispatcher(config, portal.router(), bot).await
}
