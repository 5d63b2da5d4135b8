pub mod dispatch;
pub mod history;

pub use dispatch::{DispatchError, Dispatcher, IntoPayload, Payload};
pub use history::{
    HistoryEntry, HistoryProxy, SessionHandle, SessionHistory, SessionSettings, UrlHandler,
};
