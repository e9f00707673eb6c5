use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::error::{MenuError, Result};
use super::event::{Event, Response};

/// 处理器必须是纯函数：同样的事件总是得到同样的回复
pub type Handler = Arc<dyn Fn(&Event) -> Response + Send + Sync>;

/// 标识符（命令名、回调数据）到处理器的映射
///
/// 启动时一次性构建，之后通过 [`super::Router`] 只读共享
#[derive(Default)]
pub struct DispatchTable {
    handlers: HashMap<String, Handler>,
}

impl DispatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, identifier: impl Into<String>, handler: Handler) -> Result<()> {
        let identifier = identifier.into();
        if self.handlers.contains_key(&identifier) {
            return Err(MenuError::DuplicateIdentifier(identifier));
        }
        self.handlers.insert(identifier, handler);
        Ok(())
    }

    pub fn register_fn<F>(&mut self, identifier: impl Into<String>, handler: F) -> Result<()>
    where
        F: Fn(&Event) -> Response + Send + Sync + 'static,
    {
        self.register(identifier, Arc::new(handler))
    }

    pub fn resolve(&self, identifier: &str) -> Result<&Handler> {
        self.handlers
            .get(identifier)
            .ok_or_else(|| MenuError::UnknownIdentifier(identifier.to_string()))
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.handlers.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }
}

impl fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids = self.identifiers().collect::<Vec<_>>();
        ids.sort_unstable();
        f.debug_struct("DispatchTable").field("identifiers", &ids).finish()
    }
}
