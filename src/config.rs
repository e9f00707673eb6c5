use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use duration_str::deserialize_duration;
use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

/// 覆盖配置文件中 token 的环境变量
pub const TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

const PLACEHOLDER_TOKEN: &str = "your_bot_token_here";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no bot token: set TELEGRAM_BOT_TOKEN or telegram.token")]
    MissingToken,
    #[error("bot token is still the placeholder, use the one from BotFather")]
    PlaceholderToken,
    #[error("invalid URL in portal.{0}: {1}")]
    InvalidUrl(&'static str, String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 日志等级，RUST_LOG 未设置时使用
    pub log_level: String,
    pub telegram: Telegram,
    pub portal: PortalConfig,
    pub rate_limit: RateLimit,
    pub delivery: Delivery,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Telegram {
    /// bot token
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// 客服账号
    pub support_url: String,
    /// 公开交易频道
    pub community_url: String,
    /// 10X 挑战报名帖
    pub challenge_url: String,
    /// 未知命令、按钮的通用回复
    pub fallback_text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimit {
    /// 统计窗口
    #[serde(deserialize_with = "deserialize_duration")]
    pub interval: Duration,
    /// 窗口内允许的按钮点击次数
    pub limit: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Delivery {
    /// 回调时直接编辑原消息，而不是发送新消息
    pub edit_in_place: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            telegram: Telegram::default(),
            portal: PortalConfig::default(),
            rate_limit: RateLimit::default(),
            delivery: Delivery::default(),
        }
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            support_url: "https://t.me/trump_tnetc_admin".into(),
            community_url: "https://t.me/tnect_trade".into(),
            challenge_url: "https://t.me/tnetccommunity/186".into(),
            fallback_text: crate::menu::DEFAULT_FALLBACK.into(),
        }
    }
}

impl Default for RateLimit {
    fn default() -> Self {
        Self { interval: Duration::from_secs(60), limit: 10 }
    }
}

impl Config {
    /// 读取配置文件（不存在时使用默认值），再用环境变量覆盖 token
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let s = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Self::from_toml(&s).with_context(|| format!("failed to parse {}", path.display()))?
        } else {
            Self::default()
        };
        config.override_token(std::env::var(TOKEN_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn override_token(&mut self, token: Option<String>) {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.telegram.token = token;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.telegram.token.trim() {
            "" => return Err(ConfigError::MissingToken),
            PLACEHOLDER_TOKEN => return Err(ConfigError::PlaceholderToken),
            _ => {}
        }
        self.portal.validate()
    }
}

impl PortalConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("support_url", &self.support_url),
            ("community_url", &self.community_url),
            ("challenge_url", &self.challenge_url),
        ] {
            if Url::parse(value).is_err() {
                return Err(ConfigError::InvalidUrl(name, value.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.rate_limit.interval, Duration::from_secs(60));
        assert_eq!(config.rate_limit.limit, 10);
        assert!(!config.delivery.edit_in_place);
        assert_eq!(config.portal.validate(), Ok(()));
        assert_eq!(config.validate(), Err(ConfigError::MissingToken));
    }

    #[test]
    fn test_parse_full() {
        let config = Config::from_toml(
            r#"
            log_level = "debug"

            [telegram]
            token = "123:abc"

            [portal]
            support_url = "https://t.me/support"
            fallback_text = "Use /start"

            [rate_limit]
            interval = "30s"
            limit = 3

            [delivery]
            edit_in_place = true
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.telegram.token, "123:abc");
        assert_eq!(config.portal.support_url, "https://t.me/support");
        assert_eq!(config.portal.community_url, PortalConfig::default().community_url);
        assert_eq!(config.portal.fallback_text, "Use /start");
        assert_eq!(config.rate_limit.interval, Duration::from_secs(30));
        assert_eq!(config.rate_limit.limit, 3);
        assert!(config.delivery.edit_in_place);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_token_override() {
        let mut config = Config::default();
        config.telegram.token = "from-file".into();

        config.override_token(None);
        assert_eq!(config.telegram.token, "from-file");
        config.override_token(Some("  ".into()));
        assert_eq!(config.telegram.token, "from-file");
        config.override_token(Some("from-env".into()));
        assert_eq!(config.telegram.token, "from-env");
    }

    #[test]
    fn test_placeholder_token() {
        let mut config = Config::default();
        config.telegram.token = PLACEHOLDER_TOKEN.into();
        assert_eq!(config.validate(), Err(ConfigError::PlaceholderToken));
    }

    #[test]
    fn test_invalid_url() {
        let mut config = Config::default();
        config.telegram.token = "123:abc".into();
        config.portal.support_url = "t.me/support".into();
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidUrl("support_url", "t.me/support".into()))
        );
    }

    #[test]
    fn test_read_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[telegram]\ntoken = \"123:abc\"\n[rate_limit]\nlimit = 5").unwrap();
        let config = Config::new(file.path());
        // 环境变量可能覆盖 token，但文件中的其它字段不受影响
        assert_eq!(config.unwrap().rate_limit.limit, 5);
    }

    #[test]
    fn test_bad_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "log_level = ").unwrap();
        assert!(Config::new(file.path()).is_err());
    }
}
