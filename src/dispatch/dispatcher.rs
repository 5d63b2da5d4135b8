use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("unknown event name: {0}")]
    UnknownEvent(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Listeners receive the trigger context first, then the positional
/// payload, matching the dispatch calling convention.
pub type Listener = Box<dyn FnMut(Option<&Value>, &[Value])>;

/// Maps event names to ordered listener lists. The name set is fixed
/// at construction; registration and fan-out only operate on names
/// supplied there.
pub struct Dispatcher {
    listeners: HashMap<String, Vec<Listener>>,
}

impl Dispatcher {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut listeners = HashMap::new();
        for name in names {
            // Duplicate names collapse onto the same listener list
            listeners.entry(name.into()).or_insert_with(Vec::new);
        }
        Self { listeners }
    }

    pub fn on<F>(&mut self, name: &str, listener: F) -> Result<(), DispatchError>
    where
        F: FnMut(Option<&Value>, &[Value]) + 'static,
    {
        self.on_boxed(name, Box::new(listener))
    }

    pub fn on_boxed(&mut self, name: &str, listener: Listener) -> Result<(), DispatchError> {
        match self.listeners.get_mut(name) {
            Some(slot) => {
                slot.push(listener);
                log::debug!("registered listener for '{}' ({} total)", name, slot.len());
                Ok(())
            }
            None => Err(DispatchError::UnknownEvent(name.to_string())),
        }
    }

    /// Invokes every listener for `name` in registration order and
    /// returns how many ran. Unknown names invoke nothing.
    pub fn apply(
        &mut self,
        name: &str,
        context: Option<&Value>,
        args: &[Value],
    ) -> Result<usize, DispatchError> {
        let slot = self
            .listeners
            .get_mut(name)
            .ok_or_else(|| DispatchError::UnknownEvent(name.to_string()))?;

        for listener in slot.iter_mut() {
            listener(context, args);
        }
        Ok(slot.len())
    }

    pub fn recognizes(&self, name: &str) -> bool {
        self.listeners.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.listeners.keys().map(String::as_str)
    }

    pub fn listener_count(&self, name: &str) -> usize {
        self.listeners.get(name).map(Vec::len).unwrap_or(0)
    }
}
