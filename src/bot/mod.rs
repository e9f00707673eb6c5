mod command;
mod dispatcher;
mod filter;
mod handlers;
mod utils;

pub use command::PublicCommand;
pub use dispatcher::start_dispatcher;
use teloxide::adaptors::throttle::Limits;
use teloxide::adaptors::{CacheMe, DefaultParseMode, Throttle};
use teloxide::requests::RequesterExt;
use teloxide::types::ParseMode;
pub use utils::{command_token, keyboard, RateLimiter};

pub type Bot = Throttle<CacheMe<DefaultParseMode<teloxide::Bot>>>;

/// 所有文案都是 HTML 格式
pub fn new_bot(token: &str) -> Bot {
    teloxide::Bot::new(token).parse_mode(ParseMode::Html).cache_me().throttle(Limits::default())
}
