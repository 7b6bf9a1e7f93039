//! Console sink for character-visible output
//!
//! Skill abilities narrate what a character does ("Scorcher casts fireball!").
//! That narration is program output, not diagnostics, so it goes through an
//! explicit sink rather than the tracing layer. The default sink writes to
//! stdout; tests swap in [`BufferConsole`].

use parking_lot::Mutex;
use std::sync::Arc;

/// Sink for one-line character narration
pub trait Console: Send + Sync + std::fmt::Debug {
    /// Emit one line of output
    fn line(&self, text: &str);
}

/// Shared console handle passed to skills at bind time
pub type ConsoleHandle = Arc<dyn Console>;

/// Console writing to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl StdoutConsole {
    /// Create a stdout console
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Create a shared handle to a stdout console
    #[must_use]
    pub fn handle() -> ConsoleHandle {
        Arc::new(Self)
    }
}

impl Console for StdoutConsole {
    fn line(&self, text: &str) {
        println!("{text}");
    }
}

/// Console capturing lines in memory
#[derive(Debug, Default)]
pub struct BufferConsole {
    lines: Mutex<Vec<String>>,
}

impl BufferConsole {
    /// Create an empty buffer console
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared handle, keeping a second reference for assertions
    #[must_use]
    pub fn shared() -> (Arc<Self>, ConsoleHandle) {
        let console = Arc::new(Self::new());
        let handle: ConsoleHandle = console.clone();
        (console, handle)
    }

    /// All captured lines, oldest first
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Most recently captured line
    #[must_use]
    pub fn last_line(&self) -> Option<String> {
        self.lines.lock().last().cloned()
    }

    /// Number of captured lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    /// Check whether nothing was captured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Drop all captured lines
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Console for BufferConsole {
    fn line(&self, text: &str) {
        self.lines.lock().push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_captures_in_order() {
        let (console, handle) = BufferConsole::shared();
        handle.line("first");
        handle.line("second");

        assert_eq!(console.lines(), vec!["first", "second"]);
        assert_eq!(console.last_line().as_deref(), Some("second"));
        assert_eq!(console.len(), 2);
    }

    #[test]
    fn buffer_clear() {
        let console = BufferConsole::new();
        console.line("x");
        console.clear();
        assert!(console.is_empty());
    }
}
