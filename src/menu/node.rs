use std::sync::Arc;

use indexmap::IndexMap;

use super::dispatch::DispatchTable;
use super::error::{MenuError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonTarget {
    /// 回调标识符，必须能在分发表中找到
    Callback(String),
    /// 外部链接，不经过路由
    Url(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub target: ButtonTarget,
}

impl Button {
    pub fn callback(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self { label: label.into(), target: ButtonTarget::Callback(target.into()) }
    }

    pub fn url(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self { label: label.into(), target: ButtonTarget::Url(url.into()) }
    }

    pub fn callback_target(&self) -> Option<&str> {
        match &self.target {
            ButtonTarget::Callback(id) => Some(id),
            ButtonTarget::Url(_) => None,
        }
    }
}

/// 门户中的一屏：一段文本和若干行按钮
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    pub id: String,
    pub text: String,
    pub rows: Vec<Vec<Button>>,
}

impl MenuNode {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self { id: id.into(), text: text.into(), rows: vec![] }
    }

    pub fn row(mut self, buttons: impl IntoIterator<Item = Button>) -> Self {
        self.rows.push(buttons.into_iter().collect());
        self
    }

    /// 每个按钮单独占一行
    pub fn rows(mut self, buttons: impl IntoIterator<Item = Button>) -> Self {
        self.rows.extend(buttons.into_iter().map(|b| vec![b]));
        self
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }
}

/// 所有菜单组成的有向图，启动时构建，之后只读
#[derive(Debug, Default, Clone)]
pub struct MenuGraph {
    nodes: IndexMap<String, Arc<MenuNode>>,
}

impl MenuGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: MenuNode) -> Result<Arc<MenuNode>> {
        if self.nodes.contains_key(&node.id) {
            return Err(MenuError::DuplicateIdentifier(node.id));
        }
        let node = Arc::new(node);
        self.nodes.insert(node.id.clone(), node.clone());
        Ok(node)
    }

    pub fn get(&self, id: &str) -> Option<&Arc<MenuNode>> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<MenuNode>> {
        self.nodes.values()
    }

    /// 检查每个回调按钮的目标都已注册，返回第一个悬空的目标
    pub fn validate(&self, table: &DispatchTable) -> Result<()> {
        for node in self.nodes.values() {
            for target in node.buttons().filter_map(Button::callback_target) {
                if !table.contains(target) {
                    return Err(MenuError::DanglingTarget {
                        node: node.id.clone(),
                        target: target.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
