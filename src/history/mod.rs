pub mod proxy;
pub mod session;

pub use proxy::{HistoryProxy, UrlHandler};
pub use session::{HistoryEntry, SessionHandle, SessionHistory, SessionSettings};
