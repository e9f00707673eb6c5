use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use dashmap::DashMap;
use reqwest::Url;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use tracing::warn;

use super::Bot;
use crate::menu::{ButtonTarget, MenuNode, Response};

/// 把菜单按钮转换为内联键盘，没有按钮时返回 None
pub fn keyboard(node: &MenuNode) -> Option<InlineKeyboardMarkup> {
    let rows = node
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .filter_map(|button| match &button.target {
                    ButtonTarget::Callback(id) => {
                        Some(InlineKeyboardButton::callback(button.label.clone(), id.clone()))
                    }
                    ButtonTarget::Url(url) => match Url::parse(url) {
                        Ok(url) => Some(InlineKeyboardButton::url(button.label.clone(), url)),
                        Err(e) => {
                            warn!("跳过无效链接 {}（{}）: {}", url, node.id, e);
                            None
                        }
                    },
                })
                .collect::<Vec<_>>()
        })
        .filter(|row| !row.is_empty())
        .collect::<Vec<_>>();
    (!rows.is_empty()).then(|| InlineKeyboardMarkup::new(rows))
}

/// 拆分 `/cmd@bot 参数`，返回命令（不含 bot 名称）和参数
pub fn command_token(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    if !text.starts_with('/') {
        return None;
    }
    let (head, rest) = text.split_once(char::is_whitespace).unwrap_or((text, ""));
    let command = head.split_once('@').map_or(head, |(command, _)| command);
    (command.len() > 1).then(|| (command, rest.trim()))
}

/// 发送一条新消息
pub async fn send_response(bot: &Bot, chat_id: ChatId, response: &Response) -> Result<Message> {
    let request = bot.send_message(chat_id, &response.text).disable_web_page_preview(true);
    let message = match response.menu.as_deref().and_then(keyboard) {
        Some(markup) => request.reply_markup(markup).await?,
        None => request.await?,
    };
    Ok(message)
}

/// 直接编辑回调所在的消息
pub async fn edit_response(bot: &Bot, message: &Message, response: &Response) -> Result<()> {
    let request = bot
        .edit_message_text(message.chat.id, message.id, &response.text)
        .disable_web_page_preview(true);
    match response.menu.as_deref().and_then(keyboard) {
        Some(markup) => request.reply_markup(markup).await?,
        None => request.await?,
    };
    Ok(())
}

/// 限制每个用户的按钮点击频率
#[derive(Debug, Clone)]
pub struct RateLimiter(Arc<RateLimiterInner>);

#[derive(Debug)]
struct RateLimiterInner {
    interval: Duration,
    /// 为 0 时不限制
    limit: usize,
    data: DashMap<UserId, VecDeque<Instant>>,
}

impl RateLimiter {
    pub fn new(interval: Duration, limit: usize) -> Self {
        Self(Arc::new(RateLimiterInner { interval, limit, data: Default::default() }))
    }

    /// 记录一次点击，正常情况下返回 None，如果达到了限制则返回需要等待的时间
    pub fn insert(&self, key: UserId) -> Option<Duration> {
        if self.0.limit == 0 {
            return None;
        }
        let mut entry = self.0.data.entry(key).or_default();
        let entry = entry.value_mut();
        // 先去掉已经过期的记录
        while let Some(first) = entry.front() {
            if first.elapsed() > self.0.interval {
                entry.pop_front();
            } else {
                break;
            }
        }
        if entry.len() >= self.0.limit {
            return entry.front().map(|t| self.0.interval.saturating_sub(t.elapsed()));
        }
        entry.push_back(Instant::now());
        None
    }
}

#[cfg(test)]
mod tests {
    use teloxide::types::InlineKeyboardButtonKind;

    use super::*;
    use crate::menu::Button;

    #[test]
    fn test_keyboard() {
        let node = MenuNode::new("copytrade", "text").rows([
            Button::url("📱 Contact Support", "https://t.me/support"),
            Button::callback("🔙 Back", "main_menu"),
        ]);
        let markup = keyboard(&node).unwrap();
        assert_eq!(markup.inline_keyboard.len(), 2);

        let support = &markup.inline_keyboard[0][0];
        assert_eq!(support.text, "📱 Contact Support");
        match &support.kind {
            InlineKeyboardButtonKind::Url(url) => assert_eq!(url.as_str(), "https://t.me/support"),
            kind => panic!("expected url button, got {kind:?}"),
        }
        match &markup.inline_keyboard[1][0].kind {
            InlineKeyboardButtonKind::CallbackData(data) => assert_eq!(data, "main_menu"),
            kind => panic!("expected callback button, got {kind:?}"),
        }
    }

    #[test]
    fn test_keyboard_skips_bad_links() {
        let node = MenuNode::new("menu", "text")
            .rows([Button::url("broken", "not a url"), Button::callback("ok", "main_menu")]);
        let markup = keyboard(&node).unwrap();
        assert_eq!(markup.inline_keyboard.len(), 1);
        assert!(keyboard(&MenuNode::new("join_10x", "text")).is_none());
    }

    #[test]
    fn test_command_token() {
        assert_eq!(command_token("/start"), Some(("/start", "")));
        assert_eq!(command_token("/start@tnetc_bot ea_campaign"), Some(("/start", "ea_campaign")));
        assert_eq!(command_token("  /stats  now "), Some(("/stats", "now")));
        assert_eq!(command_token("/"), None);
        assert_eq!(command_token("hello"), None);
    }

    #[test]
    fn test_rate_limiter() {
        let limiter = RateLimiter::new(Duration::from_secs(60), 2);
        let user = UserId(1);
        assert_eq!(limiter.insert(user), None);
        assert_eq!(limiter.insert(user), None);
        let wait = limiter.insert(user).unwrap();
        assert!(wait <= Duration::from_secs(60));
        // 其他用户不受影响
        assert_eq!(limiter.insert(UserId(2)), None);
    }

    #[test]
    fn test_rate_limiter_expires() {
        let limiter = RateLimiter::new(Duration::from_millis(10), 1);
        assert_eq!(limiter.insert(UserId(1)), None);
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(limiter.insert(UserId(1)), None);
    }

    #[test]
    fn test_rate_limiter_disabled() {
        let limiter = RateLimiter::new(Duration::from_secs(60), 0);
        for _ in 0..100 {
            assert_eq!(limiter.insert(UserId(1)), None);
        }
    }
}
