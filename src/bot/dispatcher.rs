use anyhow::Result;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{debug, info};

use super::command::PublicCommand;
use super::handlers::*;
use super::utils::RateLimiter;
use super::Bot;
use crate::config::Config;
use crate::menu::Router;

pub async fn start_dispatcher(config: Config, router: Router, bot: Bot) -> Result<()> {
    bot.set_my_commands(PublicCommand::bot_commands()).await?;

    let handler = dptree::entry()
        .branch(Update::filter_message().branch(command_handler()))
        .branch(callback_query_handler());

    let rate_limiter = RateLimiter::new(config.rate_limit.interval, config.rate_limit.limit);

    info!("bot 开始运行");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![config, router, rate_limiter])
        // NOTE: 默认情况下，同一个分组内的消息是串行处理，不同分组内的消息是并行处理
        // 此处使用空的分组函数，这样所有消息都会串行处理
        .distribution_function(|_| None::<()>)
        .default_handler(|upd| async move {
            debug!("未处理的更新: {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("处理更新时出错"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
