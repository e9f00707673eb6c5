use std::sync::Arc;

use tracing::{debug, warn};

use super::dispatch::DispatchTable;
use super::event::{Event, Response};
use super::MenuError;

pub const DEFAULT_FALLBACK: &str =
    "Sorry, I didn't understand that. Send /start to open the main menu.";

/// 根据事件标识符查找处理器并调用
///
/// 查找失败时返回通用回复，不会让整个 bot 出错
#[derive(Debug, Clone)]
pub struct Router(Arc<RouterInner>);

#[derive(Debug)]
struct RouterInner {
    table: DispatchTable,
    fallback: String,
}

impl Router {
    pub fn new(table: DispatchTable) -> Self {
        Self::with_fallback(table, DEFAULT_FALLBACK)
    }

    pub fn with_fallback(table: DispatchTable, fallback: impl Into<String>) -> Self {
        Self(Arc::new(RouterInner { table, fallback: fallback.into() }))
    }

    pub fn handle(&self, event: &Event) -> Response {
        match self.0.table.resolve(&event.identifier) {
            Ok(handler) => {
                debug!("{:?} {} -> handler", event.kind, event.identifier);
                handler(event)
            }
            Err(MenuError::UnknownIdentifier(id)) => {
                warn!("未知标识符 {:?} {}（chat {}）", event.kind, id, event.chat_id);
                self.fallback()
            }
            Err(e) => {
                warn!("路由失败: {}", e);
                self.fallback()
            }
        }
    }

    pub fn fallback(&self) -> Response {
        Response::text(self.0.fallback.as_str())
    }

    pub fn table(&self) -> &DispatchTable {
        &self.0.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Router {
        let mut table = DispatchTable::new();
        table.register_fn("/start", |e| Response::text(format!("hi {}", e.chat_id))).unwrap();
        Router::new(table)
    }

    #[test]
    fn test_handle_registered() {
        let response = router().handle(&Event::command("/start", 5));
        assert_eq!(response, Response::text("hi 5"));
    }

    #[test]
    fn test_handle_unknown_returns_fallback() {
        let router = router();
        let response = router.handle(&Event::callback("nonexistent_button", 5));
        assert_eq!(response.text, DEFAULT_FALLBACK);
        assert!(response.menu.is_none());
    }

    #[test]
    fn test_custom_fallback() {
        let router = Router::with_fallback(DispatchTable::new(), "nope");
        assert_eq!(router.handle(&Event::command("/whatever", 1)).text, "nope");
    }

    #[test]
    fn test_clones_share_table() {
        let router = router();
        let other = router.clone();
        assert!(std::ptr::eq(router.table(), other.table()));
    }
}
