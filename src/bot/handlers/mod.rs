mod callback_query;
mod command;

pub use callback_query::*;
pub use command::*;
