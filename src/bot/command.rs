use teloxide::utils::command::BotCommands;

use crate::portal::ids;

// NOTE: 此处必须实现 Clone，否则不满足 dptree 的 Injectable 约束
#[derive(BotCommands, Clone, PartialEq, Debug)]
#[command(rename_rule = "lowercase", description = "Tnetc portal commands:")]
pub enum PublicCommand {
    #[command(description = "open the main menu")]
    Start(String),
    #[command(description = "show the main menu again")]
    Menu,
    #[command(description = "list the commands")]
    Help,
}

impl PublicCommand {
    /// 分发表中的标识符与参数
    pub fn identifier(&self) -> (&'static str, &str) {
        match self {
            Self::Start(campaign) => (ids::CMD_START, campaign.as_str()),
            Self::Menu => (ids::CMD_MENU, ""),
            Self::Help => (ids::CMD_HELP, ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(
            PublicCommand::parse("/start ea_campaign", "tnetc_bot").unwrap(),
            PublicCommand::Start("ea_campaign".into())
        );
        assert_eq!(
            PublicCommand::parse("/start", "tnetc_bot").unwrap(),
            PublicCommand::Start("".into())
        );
        assert_eq!(
            PublicCommand::parse("/help@tnetc_bot", "tnetc_bot").unwrap(),
            PublicCommand::Help
        );
        assert!(PublicCommand::parse("/stats", "tnetc_bot").is_err());
    }

    #[test]
    fn test_identifier() {
        let start = PublicCommand::Start("vip_campaign".into());
        assert_eq!(start.identifier(), ("/start", "vip_campaign"));
        assert_eq!(PublicCommand::Menu.identifier(), ("/menu", ""));
    }
}
