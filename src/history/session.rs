use crate::dispatch::Payload;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// One recorded history state: the pushState triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub data: Payload,
    pub title: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Oldest entries are evicted once the stack grows past this.
    pub max_entries: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self { max_entries: 50 }
    }
}

/// Back/forward stack of history states. Pushing while somewhere in
/// the middle of the stack discards the forward entries first.
#[derive(Debug, Default)]
pub struct SessionHistory {
    entries: Vec<HistoryEntry>,
    current_index: Option<usize>,
    settings: SessionSettings,
}

/// Shared single-threaded handle; the default url handler records
/// through one of these.
pub type SessionHandle = Rc<RefCell<SessionHistory>>;

impl SessionHistory {
    pub fn new() -> Self {
        Self::with_settings(SessionSettings::default())
    }

    pub fn with_settings(settings: SessionSettings) -> Self {
        Self {
            entries: Vec::new(),
            current_index: None,
            settings,
        }
    }

    pub fn into_handle(self) -> SessionHandle {
        Rc::new(RefCell::new(self))
    }

    pub fn push_state(&mut self, data: Payload, title: Option<&str>, url: &str) {
        if let Some(index) = self.current_index {
            self.entries.truncate(index + 1);
        }

        self.entries.push(HistoryEntry {
            data,
            title: title.map(str::to_string),
            url: url.to_string(),
        });

        if self.entries.len() > self.settings.max_entries {
            self.entries.remove(0);
        }

        self.current_index = Some(self.entries.len() - 1);
    }

    pub fn current(&self) -> Option<&HistoryEntry> {
        self.current_index.map(|i| &self.entries[i])
    }

    pub fn can_go_back(&self) -> bool {
        self.current_index.map(|i| i > 0).unwrap_or(false)
    }

    pub fn can_go_forward(&self) -> bool {
        self.current_index
            .map(|i| i < self.entries.len() - 1)
            .unwrap_or(false)
    }

    pub fn go_back(&mut self) -> Option<&HistoryEntry> {
        if self.can_go_back() {
            self.current_index = self.current_index.map(|i| i - 1);
            self.current()
        } else {
            None
        }
    }

    pub fn go_forward(&mut self) -> Option<&HistoryEntry> {
        if self.can_go_forward() {
            self.current_index = self.current_index.map(|i| i + 1);
            self.current()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn push(history: &mut SessionHistory, url: &str) {
        history.push_state(Vec::new(), None, url);
    }

    #[test]
    fn test_back_and_forward_walk() {
        let mut history = SessionHistory::new();

        push(&mut history, "/inbox");
        push(&mut history, "/inbox/1");
        push(&mut history, "/inbox/2");

        assert_eq!(history.current().unwrap().url, "/inbox/2");
        assert!(history.can_go_back());
        assert!(!history.can_go_forward());

        assert_eq!(history.go_back().unwrap().url, "/inbox/1");
        assert_eq!(history.go_back().unwrap().url, "/inbox");
        assert!(!history.can_go_back());
        assert!(history.can_go_forward());

        assert_eq!(history.go_forward().unwrap().url, "/inbox/1");
    }

    #[test]
    fn test_push_discards_forward_entries() {
        let mut history = SessionHistory::new();

        push(&mut history, "/a");
        push(&mut history, "/b");
        push(&mut history, "/c");
        history.go_back();
        history.go_back();

        push(&mut history, "/d");
        assert_eq!(history.len(), 2);
        assert_eq!(history.current().unwrap().url, "/d");
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_state_triple_is_kept() {
        let mut history = SessionHistory::new();
        history.push_state(vec![json!({"page": 3})], Some("Inbox"), "/inbox?p=3");

        let entry = history.current().unwrap();
        assert_eq!(entry.data, vec![json!({"page": 3})]);
        assert_eq!(entry.title.as_deref(), Some("Inbox"));
        assert_eq!(entry.url, "/inbox?p=3");
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = SessionHistory::with_settings(SessionSettings { max_entries: 2 });

        push(&mut history, "/a");
        push(&mut history, "/b");
        push(&mut history, "/c");

        assert_eq!(history.len(), 2);
        assert_eq!(history.current().unwrap().url, "/c");
        assert_eq!(history.go_back().unwrap().url, "/b");
        assert!(!history.can_go_back());
    }
}
