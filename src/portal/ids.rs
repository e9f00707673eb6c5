//! 命令与回调标识符，按钮和处理器注册都从这里取

// 命令
pub const CMD_START: &str = "/start";
pub const CMD_MENU: &str = "/menu";
pub const CMD_HELP: &str = "/help";

// 主菜单与广告活动入口
pub const MAIN_MENU: &str = "main_menu";
pub const WELCOME_EA: &str = "welcome_ea";
pub const WELCOME_SIGNAL: &str = "welcome_signal";
pub const WELCOME_VIP: &str = "welcome_vip";

// 四个主要产品
pub const JOIN_10X: &str = "join_10x";
pub const COPYTRADE: &str = "copytrade";
pub const VIP_SIGNALS: &str = "vip_signals";
pub const PREMIUM_SIGNALS: &str = "premium_signals";

// 活动漏斗中的信息页
pub const EA_RESULTS: &str = "ea_results";
pub const EA_STATS: &str = "ea_stats";
pub const EA_HOW_WORKS: &str = "ea_how_works";
pub const EA_PRICING: &str = "ea_pricing";
pub const SIGNAL_RESULTS: &str = "signal_results";
pub const VIP_BENEFITS: &str = "vip_benefits";

// 后接套餐代码
pub const PURCHASE_PREFIX: &str = "purchase_";
pub const PAYMENT_MADE_PREFIX: &str = "payment_made_";
pub const SETUP_GUIDE_PREFIX: &str = "setup_guide_";

pub fn purchase(code: &str) -> String {
    format!("{PURCHASE_PREFIX}{code}")
}

pub fn payment_made(code: &str) -> String {
    format!("{PAYMENT_MADE_PREFIX}{code}")
}

pub fn setup_guide(code: &str) -> String {
    format!("{SETUP_GUIDE_PREFIX}{code}")
}
