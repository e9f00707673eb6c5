use std::sync::Arc;

use super::node::MenuNode;

/// 处理器无法理解输入时的回复
pub const UNRECOGNIZED_OPTION: &str =
    "That option is not available. Please pick one of the buttons from the menu.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// `/start`、`/help` 之类的斜杠命令
    Command,
    /// 内联按钮回调
    Callback,
}

/// 一次来自 Telegram 的交互，每个 update 生成一个，处理完即丢弃
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub identifier: String,
    /// 命令参数，回调时为空
    pub payload: String,
    pub chat_id: i64,
    /// 频道消息、匿名管理员没有发送者
    pub user_id: Option<u64>,
}

impl Event {
    pub fn command(identifier: impl Into<String>, chat_id: i64) -> Self {
        Self::new(EventKind::Command, identifier.into(), chat_id)
    }

    pub fn callback(identifier: impl Into<String>, chat_id: i64) -> Self {
        Self::new(EventKind::Callback, identifier.into(), chat_id)
    }

    fn new(kind: EventKind, identifier: String, chat_id: i64) -> Self {
        Self { kind, identifier, payload: String::new(), chat_id, user_id: None }
    }

    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = payload.into();
        self
    }

    pub fn with_user(mut self, user_id: u64) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

/// 处理结果：要发送的文本，以及可选的下一个菜单（提供按钮）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub text: String,
    pub menu: Option<Arc<MenuNode>>,
}

impl Response {
    /// 不带按钮的纯文本回复
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into(), menu: None }
    }

    /// 直接展示一个菜单
    pub fn screen(node: Arc<MenuNode>) -> Self {
        Self { text: node.text.clone(), menu: Some(node) }
    }

    /// 展示菜单的按钮，但使用另外渲染的文本
    pub fn rendered(text: impl Into<String>, node: Arc<MenuNode>) -> Self {
        Self { text: text.into(), menu: Some(node) }
    }

    pub fn unrecognized() -> Self {
        Self::text(UNRECOGNIZED_OPTION)
    }

    pub fn buttons(&self) -> impl Iterator<Item = &super::Button> {
        self.menu.iter().flat_map(|node| node.buttons())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Button;

    #[test]
    fn test_event_builders() {
        let event = Event::command("/start", 42).with_payload("ea_campaign").with_user(7);
        assert_eq!(event.kind, EventKind::Command);
        assert_eq!(event.identifier, "/start");
        assert_eq!(event.payload, "ea_campaign");
        assert_eq!(event.chat_id, 42);
        assert_eq!(event.user_id, Some(7));

        let event = Event::callback("join_10x", 42);
        assert_eq!(event.kind, EventKind::Callback);
        assert!(event.payload.is_empty());
        assert_eq!(event.user_id, None);
    }

    #[test]
    fn test_screen_response_uses_node_text() {
        let node = Arc::new(
            MenuNode::new("main_menu", "Welcome").row([Button::callback("Go", "join_10x")]),
        );
        let response = Response::screen(node.clone());
        assert_eq!(response.text, "Welcome");
        assert_eq!(response.buttons().count(), 1);

        let response = Response::text("plain");
        assert_eq!(response.buttons().count(), 0);
    }
}
