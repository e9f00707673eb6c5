use teloxide::dispatching::DpHandlerDescription;
use teloxide::prelude::*;
use teloxide::types::{ChatKind, User};

use super::utils::command_token;
use crate::menu::Event;

/// 记录发送者，匿名管理员、频道消息没有发送者
pub fn with_sender(event: Event, user: Option<&User>) -> Event {
    match user {
        Some(user) => event.with_user(user.id.0),
        None => event,
    }
}

/// 带数据的回调转换为 [`Event`]
pub fn filter_callback_event<Output>() -> Handler<'static, DependencyMap, Output, DpHandlerDescription>
where
    Output: Send + Sync + 'static,
{
    dptree::filter_map(|query: CallbackQuery| {
        let data = query.data?;
        // 内联消息或过旧的消息拿不到 chat，此时回复到用户私聊
        let chat_id = query.message.map(|m| m.chat.id.0).unwrap_or(query.from.id.0 as i64);
        Some(with_sender(Event::callback(data, chat_id), Some(&query.from)))
    })
}

/// 任何以 `/` 开头、但不是已知命令的文本消息
pub fn filter_unknown_command<Output>() -> Handler<'static, DependencyMap, Output, DpHandlerDescription>
where
    Output: Send + Sync + 'static,
{
    dptree::filter_map(|message: Message| {
        let (command, args) = command_token(message.text()?)?;
        let event = Event::command(command, message.chat.id.0).with_payload(args);
        Some(with_sender(event, message.from()))
    })
}

pub fn filter_private_chat<Output>() -> Handler<'static, DependencyMap, Output, DpHandlerDescription>
where
    Output: Send + Sync + 'static,
{
    dptree::filter(|message: Message| matches!(message.chat.kind, ChatKind::Private(_)))
}
