//! Session history.
//!
//! Mirrors the browser history stack: pushing after going back drops
//! the forward entries.

use crate::view::ViewId;

/// How a navigation was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    Push,
    Replace,
    Back,
    Forward,
}

impl NavigationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationKind::Push => "push",
            NavigationKind::Replace => "replace",
            NavigationKind::Back => "back",
            NavigationKind::Forward => "forward",
        }
    }
}

impl std::fmt::Display for NavigationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Path as navigated.
    pub path: String,
    pub view: ViewId,
}

#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        if let Some(cursor) = self.cursor {
            self.entries.truncate(cursor + 1);
        }
        self.entries.push(entry);
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Overwrite the current entry, or push if history is empty.
    pub fn replace(&mut self, entry: HistoryEntry) {
        match self.cursor {
            Some(cursor) => self.entries[cursor] = entry,
            None => self.push(entry),
        }
    }

    pub fn back(&mut self) -> Option<&HistoryEntry> {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                self.current()
            }
            _ => None,
        }
    }

    pub fn forward(&mut self) -> Option<&HistoryEntry> {
        match self.cursor {
            Some(cursor) if cursor + 1 < self.entries.len() => {
                self.cursor = Some(cursor + 1);
                self.current()
            }
            _ => None,
        }
    }

    pub fn current(&self) -> Option<&HistoryEntry> {
        self.cursor.map(|cursor| &self.entries[cursor])
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
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

    fn entry(path: &str) -> HistoryEntry {
        HistoryEntry {
            path: path.to_string(),
            view: ViewId::new("Main"),
        }
    }

    #[test]
    fn test_back_and_forward() {
        let mut history = History::new();
        assert!(history.back().is_none());

        history.push(entry("/"));
        history.push(entry("/edit"));
        history.push(entry("/profile"));

        assert_eq!(history.back().unwrap().path, "/edit");
        assert_eq!(history.back().unwrap().path, "/");
        assert!(history.back().is_none());
        assert_eq!(history.forward().unwrap().path, "/edit");
        assert_eq!(history.current().unwrap().path, "/edit");
    }

    #[test]
    fn test_push_drops_forward_entries() {
        let mut history = History::new();
        history.push(entry("/"));
        history.push(entry("/edit"));
        history.back();
        history.push(entry("/profile"));

        let paths: Vec<&str> = history.entries().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/profile"]);
        assert!(history.forward().is_none());
    }

    #[test]
    fn test_replace() {
        let mut history = History::new();
        history.replace(entry("/"));
        assert_eq!(history.len(), 1);
        history.replace(entry("/edit"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.current().unwrap().path, "/edit");
    }
}
