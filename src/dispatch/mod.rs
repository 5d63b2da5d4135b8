pub mod dispatcher;
pub mod payload;

pub use dispatcher::{DispatchError, Dispatcher, Listener};
pub use payload::{IntoPayload, Payload};
