//! Tnetc 门户的全部菜单与处理器
//!
//! [`Portal::build`] 在启动时构建菜单图和分发表，并在 bot 开始轮询之前
//! 校验每个按钮都指向已注册的标识符。

pub mod ids;
mod plan;
mod text;

use std::sync::Arc;

use tracing::info;

pub use self::plan::{Guide, Plan};
use crate::config::PortalConfig;
use crate::menu::{
    Button, DispatchTable, Event, MenuGraph, MenuNode, Response, Result, Router,
};

const LABEL_JOIN_10X: &str = "🔥 Join the 10X Challenge Community";
const LABEL_COPYTRADE: &str = "📈 Copytrade Signals - $500 → $0/lifetime";
const LABEL_VIP_SIGNALS: &str = "💎 VIP Signal Calls";
const LABEL_PREMIUM_SIGNALS: &str = "⭐ Premium Signal Subscription + EA Bot";
const LABEL_SUPPORT: &str = "📱 Contact Support";
const LABEL_PAYMENT_MADE: &str = "✅ I've Made Payment";
const LABEL_BACK_TO_PLANS: &str = "🔙 Back to Plans";
const LABEL_BACK: &str = "🔙 Back";
const LABEL_MAIN_MENU: &str = "🏠 Main Menu";

/// 广告链接 `t.me/<bot>?start=<campaign>` 中的活动参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Campaign {
    Ea,
    Signal,
    Vip,
}

impl Campaign {
    pub fn parse(payload: &str) -> Option<Self> {
        match payload.trim() {
            "ea_campaign" => Some(Self::Ea),
            "signal_campaign" => Some(Self::Signal),
            "vip_campaign" => Some(Self::Vip),
            _ => None,
        }
    }

    fn welcome_id(self) -> &'static str {
        match self {
            Self::Ea => ids::WELCOME_EA,
            Self::Signal => ids::WELCOME_SIGNAL,
            Self::Vip => ids::WELCOME_VIP,
        }
    }
}

/// 构建完成并通过校验的门户
#[derive(Debug, Clone)]
pub struct Portal {
    graph: Arc<MenuGraph>,
    root: Arc<MenuNode>,
    router: Router,
}

impl Portal {
    pub fn build(cfg: &PortalConfig) -> Result<Self> {
        let mut graph = MenuGraph::new();
        let mut table = DispatchTable::new();
        let support = || Button::url(LABEL_SUPPORT, cfg.support_url.as_str());

        // 四个产品按钮出现在所有欢迎页上
        let features = || {
            [
                Button::callback(LABEL_JOIN_10X, ids::JOIN_10X),
                Button::callback(LABEL_COPYTRADE, ids::COPYTRADE),
                Button::callback(LABEL_VIP_SIGNALS, ids::VIP_SIGNALS),
                Button::callback(LABEL_PREMIUM_SIGNALS, ids::PREMIUM_SIGNALS),
            ]
        };

        // 欢迎页
        let main_menu =
            graph.insert(MenuNode::new(ids::MAIN_MENU, text::MAIN_MENU).rows(features()))?;
        let welcome_ea = graph.insert(
            MenuNode::new(ids::WELCOME_EA, text::WELCOME_EA)
                .rows(features())
                .rows([Button::callback("📊 View Performance Results", ids::EA_RESULTS)]),
        )?;
        let welcome_signal = graph.insert(
            MenuNode::new(ids::WELCOME_SIGNAL, text::WELCOME_SIGNAL)
                .rows(features())
                .rows([Button::callback("📊 View Signal Performance", ids::SIGNAL_RESULTS)]),
        )?;
        let welcome_vip = graph.insert(
            MenuNode::new(ids::WELCOME_VIP, text::WELCOME_VIP)
                .rows(features())
                .rows([Button::callback("📊 View PremiumVIP Benefits", ids::VIP_BENEFITS)]),
        )?;

        // 产品页
        graph.insert(MenuNode::new(ids::COPYTRADE, text::COPYTRADE).rows([
            support(),
            Button::callback(LABEL_PAYMENT_MADE, ids::payment_made(Plan::Copytrade.code())),
            Button::callback(LABEL_BACK_TO_PLANS, ids::MAIN_MENU),
        ]))?;
        graph.insert(MenuNode::new(ids::VIP_SIGNALS, text::VIP_SIGNALS).rows([
            support(),
            Button::url("👀 Explore Our Channel", cfg.community_url.as_str()),
            Button::callback("📊 View Signal Performance", ids::SIGNAL_RESULTS),
            Button::callback(LABEL_BACK_TO_PLANS, ids::MAIN_MENU),
        ]))?;
        graph.insert(MenuNode::new(ids::PREMIUM_SIGNALS, text::PREMIUM_SIGNALS).rows([
            support(),
            Button::callback("💰 EA Pricing Plans", ids::EA_PRICING),
            Button::callback(LABEL_PAYMENT_MADE, ids::payment_made(Plan::PremiumVipEa.code())),
            Button::callback(LABEL_BACK_TO_PLANS, ids::MAIN_MENU),
        ]))?;

        // 活动漏斗
        let bundle =
            || Button::callback("💎 Premium VIP Signal + EA Bundle", ids::PREMIUM_SIGNALS);
        graph.insert(
            MenuNode::new(ids::EA_RESULTS, text::EA_RESULTS)
                .rows([bundle(), Button::callback(LABEL_BACK, ids::WELCOME_EA)]),
        )?;
        graph.insert(MenuNode::new(ids::EA_STATS, text::EA_STATS).rows([
            Button::callback("🤖 How Our EA Works", ids::EA_HOW_WORKS),
            Button::callback("💰 EA Pricing Plans", ids::EA_PRICING),
            Button::callback(LABEL_BACK, ids::WELCOME_EA),
        ]))?;
        graph.insert(MenuNode::new(ids::EA_HOW_WORKS, text::EA_HOW_WORKS).rows([
            Button::callback("📊 View Performance Stats", ids::EA_STATS),
            Button::callback("💰 EA Pricing Plans", ids::EA_PRICING),
            Button::callback(LABEL_BACK, ids::WELCOME_EA),
        ]))?;
        graph.insert(
            MenuNode::new(ids::EA_PRICING, text::EA_PRICING)
                .rows(Plan::PURCHASABLE.into_iter().map(|plan| {
                    Button::callback(plan.button_label(), ids::purchase(plan.code()))
                }))
                .rows([
                    Button::url("❓ Questions? Chat with Support", cfg.support_url.as_str()),
                    Button::callback("🔙 Back to EA Info", ids::WELCOME_EA),
                ]),
        )?;
        graph.insert(
            MenuNode::new(ids::SIGNAL_RESULTS, text::SIGNAL_RESULTS)
                .rows([bundle(), Button::callback(LABEL_BACK, ids::WELCOME_SIGNAL)]),
        )?;
        graph.insert(MenuNode::new(ids::VIP_BENEFITS, text::VIP_BENEFITS).rows([
            Button::callback("💎 Get Premium VIP + EA Bundle", ids::PREMIUM_SIGNALS),
            Button::callback(LABEL_BACK, ids::WELCOME_VIP),
        ]))?;

        // 以上都是静态页，标识符即菜单 ID
        let statics = graph.iter().cloned().collect::<Vec<_>>();
        for node in statics {
            table.register_fn(node.id.clone(), move |_| Response::screen(node.clone()))?;
        }

        // 命令
        let root = main_menu.clone();
        let start_menu = main_menu.clone();
        let campaigns = [welcome_ea, welcome_signal, welcome_vip];
        table.register_fn(ids::CMD_START, move |event| {
            let welcome = Campaign::parse(&event.payload)
                .and_then(|c| campaigns.iter().find(|node| node.id == c.welcome_id()));
            Response::screen(welcome.unwrap_or(&start_menu).clone())
        })?;
        table.register_fn(ids::CMD_MENU, move |_| Response::screen(main_menu.clone()))?;
        table.register_fn(ids::CMD_HELP, |_| Response::text(text::HELP))?;

        // 终止页
        let join_10x = text::join_10x(&cfg.challenge_url);
        table.register_fn(ids::JOIN_10X, move |_| Response::text(join_10x.as_str()))?;

        // 套餐：下单、付款确认、设置指南
        for plan in Plan::PURCHASABLE {
            let node = graph.insert(
                MenuNode::new(ids::purchase(plan.code()), plan.name()).rows([
                    support(),
                    Button::callback(LABEL_PAYMENT_MADE, ids::payment_made(plan.code())),
                    Button::callback(LABEL_BACK_TO_PLANS, ids::EA_PRICING),
                ]),
            )?;
            table.register_fn(node.id.clone(), move |event| purchase(plan, &node, event))?;
        }
        for plan in Plan::ALL {
            let node = graph.insert(
                MenuNode::new(ids::payment_made(plan.code()), text::payment_made(plan)).rows([
                    support(),
                    Button::callback("📚 Setup Guide", ids::setup_guide(plan.code())),
                    Button::callback(LABEL_MAIN_MENU, ids::MAIN_MENU),
                ]),
            )?;
            table.register_fn(node.id.clone(), move |_| Response::screen(node.clone()))?;

            let node = graph.insert(
                MenuNode::new(ids::setup_guide(plan.code()), text::setup_guide(plan))
                    .rows([support(), Button::callback(LABEL_MAIN_MENU, ids::MAIN_MENU)]),
            )?;
            table.register_fn(node.id.clone(), move |_| Response::screen(node.clone()))?;
        }

        graph.validate(&table)?;
        info!("门户菜单构建完成：{} 个菜单，{} 个标识符", graph.len(), table.len());

        Ok(Self {
            graph: Arc::new(graph),
            root,
            router: Router::with_fallback(table, cfg.fallback_text.as_str()),
        })
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn graph(&self) -> &MenuGraph {
        &self.graph
    }

    /// `/start` 显示的根菜单
    pub fn root(&self) -> &Arc<MenuNode> {
        &self.root
    }

    pub fn handle(&self, event: &Event) -> Response {
        self.router.handle(event)
    }
}

/// 下单页需要用户 ID 生成订单代码
fn purchase(plan: Plan, node: &Arc<MenuNode>, event: &Event) -> Response {
    match event.user_id {
        Some(user) => {
            Response::rendered(text::purchase(plan, &plan.order_code(user)), node.clone())
        }
        None => Response::unrecognized(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::UNRECOGNIZED_OPTION;

    fn portal() -> Portal {
        Portal::build(&PortalConfig::default()).unwrap()
    }

    fn labels(response: &Response) -> Vec<&str> {
        response.buttons().map(|b| b.label.as_str()).collect()
    }

    #[test]
    fn test_campaign_parse() {
        assert_eq!(Campaign::parse("ea_campaign"), Some(Campaign::Ea));
        assert_eq!(Campaign::parse(" vip_campaign "), Some(Campaign::Vip));
        assert_eq!(Campaign::parse(""), None);
        assert_eq!(Campaign::parse("tiktok"), None);
    }

    #[test]
    fn test_every_node_is_routable() {
        let portal = portal();
        for node in portal.graph().iter() {
            assert!(portal.router().table().contains(&node.id), "{} not registered", node.id);
        }
    }

    #[test]
    fn test_campaign_welcome() {
        let portal = portal();
        let event = Event::command(ids::CMD_START, 1).with_payload("signal_campaign");
        let response = portal.handle(&event);
        assert_eq!(response.menu.as_ref().unwrap().id, ids::WELCOME_SIGNAL);
        assert_eq!(labels(&response).len(), 5);
        assert_eq!(labels(&response)[4], "📊 View Signal Performance");

        let event = Event::command(ids::CMD_START, 1).with_payload("unknown_campaign");
        assert_eq!(portal.handle(&event).menu.as_ref(), Some(portal.root()));
    }

    #[test]
    fn test_purchase_needs_user() {
        let portal = portal();
        let event = Event::callback("purchase_quarterly", 10).with_user(99);
        let response = portal.handle(&event);
        assert!(response.text.contains("<code>EA_QUARTERLY_99</code>"));
        assert!(response.text.contains("$500"));
        assert_eq!(labels(&response), [LABEL_SUPPORT, LABEL_PAYMENT_MADE, LABEL_BACK_TO_PLANS]);

        let response = portal.handle(&Event::callback("purchase_quarterly", 10));
        assert_eq!(response.text, UNRECOGNIZED_OPTION);
        assert!(response.menu.is_none());
    }

    #[test]
    fn test_setup_guides() {
        let portal = portal();
        let copytrade = portal.handle(&Event::callback("setup_guide_copytrade", 1));
        assert!(copytrade.text.contains("Copytrade Setup Guide"));
        let annual = portal.handle(&Event::callback("setup_guide_annual", 1));
        assert!(annual.text.contains("EA Setup Guide"));
    }

    #[test]
    fn test_custom_fallback() {
        let cfg = PortalConfig { fallback_text: "try /start".into(), ..Default::default() };
        let portal = Portal::build(&cfg).unwrap();
        assert_eq!(portal.handle(&Event::callback("nope", 1)).text, "try /start");
    }
}
