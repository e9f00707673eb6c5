use anyhow::Result;
use teloxide::dispatching::DpHandlerDescription;
use teloxide::prelude::*;
use tracing::{info, warn};

use crate::bot::filter::filter_callback_event;
use crate::bot::utils::{edit_response, send_response, RateLimiter};
use crate::bot::Bot;
use crate::config::Config;
use crate::menu::{Event, Router};

pub fn callback_query_handler() -> Handler<'static, DependencyMap, Result<()>, DpHandlerDescription>
{
    Update::filter_callback_query()
        .branch(filter_callback_event().endpoint(callback_portal))
        .branch(dptree::endpoint(callback_without_data))
}

async fn callback_portal(
    bot: Bot,
    query: CallbackQuery,
    event: Event,
    router: Router,
    limiter: RateLimiter,
    cfg: Config,
) -> Result<()> {
    if let Some(d) = limiter.insert(query.from.id) {
        warn!("{}: 点击过于频繁，需等待 {} 秒", query.from.id, d.as_secs());
        bot.answer_callback_query(query.id)
            .text(format!("Too many requests, please wait {} seconds and try again", d.as_secs()))
            .show_alert(true)
            .await?;
        return Ok(());
    }

    info!("{}: <- {}", query.from.id, event.identifier);

    // 先应答，去掉客户端按钮上的加载状态
    bot.answer_callback_query(query.id.clone()).await?;

    let response = router.handle(&event);
    match &query.message {
        Some(message) if cfg.delivery.edit_in_place => {
            edit_response(&bot, message, &response).await?
        }
        _ => {
            send_response(&bot, ChatId(event.chat_id), &response).await?;
        }
    }
    Ok(())
}

/// 游戏按钮之类没有数据的回调，只需要应答
async fn callback_without_data(bot: Bot, query: CallbackQuery) -> Result<()> {
    warn!("{}: 回调没有数据", query.from.id);
    bot.answer_callback_query(query.id).await?;
    Ok(())
}
