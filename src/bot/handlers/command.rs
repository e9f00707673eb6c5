use anyhow::Result;
use teloxide::dispatching::DpHandlerDescription;
use teloxide::prelude::*;
use tracing::info;

use crate::bot::command::PublicCommand;
use crate::bot::filter::{filter_private_chat, filter_unknown_command, with_sender};
use crate::bot::utils::send_response;
use crate::bot::Bot;
use crate::menu::{Event, Router};

pub fn command_handler() -> Handler<'static, DependencyMap, Result<()>, DpHandlerDescription> {
    dptree::entry()
        .branch(
            teloxide::filter_command::<PublicCommand, _>()
                .map(|command: PublicCommand, message: Message| {
                    let (identifier, payload) = command.identifier();
                    let event = Event::command(identifier, message.chat.id.0).with_payload(payload);
                    with_sender(event, message.from())
                })
                .endpoint(cmd_portal),
        )
        // 群里可能有其他 bot 的命令，只在私聊中回复未知命令
        .branch(filter_private_chat().chain(filter_unknown_command()).endpoint(cmd_portal))
}

async fn cmd_portal(bot: Bot, msg: Message, router: Router, event: Event) -> Result<()> {
    let user = event.user_id.map(|id| id.to_string()).unwrap_or_else(|| "-".into());
    info!("{}: {} {}", user, event.identifier, event.payload);
    let response = router.handle(&event);
    send_response(&bot, msg.chat.id, &response).await?;
    Ok(())
}
