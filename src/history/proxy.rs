use super::session::{SessionHandle, SessionHistory};
use crate::dispatch::{DispatchError, Dispatcher, IntoPayload};
use serde_json::Value;
use std::rc::Rc;

/// Pluggable strategy that records the current location on every
/// trigger. Argument order follows the dispatch convention rather than
/// the usual pushState one: data first, url last.
pub type UrlHandler = Rc<dyn Fn(&[Value], Option<&str>, &str)>;

/// Binds a named-event dispatcher to a session-history stack: every
/// trigger records the url through the active [`UrlHandler`] and then
/// fans the same payload out to the event's listeners.
///
/// Invalid input is reported through the log and never interrupts a
/// trigger; both side effects still run with the value as supplied.
pub struct HistoryProxy {
    dispatcher: Dispatcher,
    url_handler: UrlHandler,
    session: Option<SessionHandle>,
}

impl HistoryProxy {
    /// Creates a proxy scoped to exactly `events`, recording into a
    /// fresh session stack.
    pub fn new<I, S>(events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_session(events, SessionHistory::new().into_handle())
    }

    /// Creates a proxy that records into a caller-supplied stack.
    pub fn with_session<I, S>(events: I, session: SessionHandle) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dispatcher: Dispatcher::new(events),
            url_handler: default_url_handler(Some(Rc::clone(&session))),
            session: Some(session),
        }
    }

    /// Creates a proxy with no history facility attached; the default
    /// handler skips the push silently.
    pub fn detached<I, S>(events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dispatcher: Dispatcher::new(events),
            url_handler: default_url_handler(None),
            session: None,
        }
    }

    /// The currently active url handler.
    pub fn url_handler(&self) -> UrlHandler {
        Rc::clone(&self.url_handler)
    }

    /// Swaps in a new url handler, useful for tapping in to insert
    /// custom location handling.
    pub fn set_url_handler(&mut self, handler: UrlHandler) -> &mut Self {
        self.url_handler = handler;
        self
    }

    /// Registers a listener for `event`. Listeners for one name
    /// accumulate and run in registration order; registering under a
    /// name the proxy was not created with is reported and skipped.
    pub fn on<F>(&mut self, event: &str, listener: F) -> &mut Self
    where
        F: FnMut(Option<&Value>, &[Value]) + 'static,
    {
        if let Err(err) = self.dispatcher.on(event, listener) {
            log::error!("listener not registered: {}", err);
        }
        self
    }

    /// Triggers `event`: records `url` through the active url handler,
    /// then dispatches `args` to every listener with `context` as the
    /// receiver value.
    ///
    /// An empty `url` is reported as invalid but does not abort the
    /// trigger; the push and the dispatch still run with the empty
    /// string.
    pub fn apply(
        &mut self,
        event: &str,
        context: Option<&Value>,
        url: &str,
        args: &[Value],
    ) -> &mut Self {
        if url.is_empty() {
            log::error!(
                "{}",
                DispatchError::InvalidArgument(format!(
                    "trigger for '{}' needs a url fragment to record",
                    event
                ))
            );
        }

        // Title is reserved; nothing sets it through this surface yet.
        (self.url_handler)(args, None, url);

        if let Err(err) = self.dispatcher.apply(event, context, args) {
            log::error!("dispatch skipped: {}", err);
        }
        self
    }

    /// Variadic-style sugar over [`apply`](Self::apply): collects
    /// `args` into a payload and delegates.
    pub fn call<P: IntoPayload>(
        &mut self,
        event: &str,
        context: Option<&Value>,
        url: &str,
        args: P,
    ) -> &mut Self {
        let args = args.into_payload();
        self.apply(event, context, url, &args)
    }

    /// The session stack triggers record into, if one is attached.
    pub fn session(&self) -> Option<&SessionHandle> {
        self.session.as_ref()
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

fn default_url_handler(session: Option<SessionHandle>) -> UrlHandler {
    Rc::new(move |data, title, url| match &session {
        Some(session) => session.borrow_mut().push_state(data.to_vec(), title, url),
        None => log::debug!("no session history attached, skipping push for '{}'", url),
    })
}
