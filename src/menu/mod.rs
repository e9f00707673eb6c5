mod dispatch;
mod error;
mod event;
mod node;
mod router;

pub use dispatch::{DispatchTable, Handler};
pub use error::{MenuError, Result};
pub use event::{Event, EventKind, Response, UNRECOGNIZED_OPTION};
pub use node::{Button, ButtonTarget, MenuGraph, MenuNode};
pub use router::{Router, DEFAULT_FALLBACK};
