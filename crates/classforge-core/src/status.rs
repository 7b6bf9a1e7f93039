//! Read-only status projection over a state record
//!
//! The view freezes the key set at capture time but reads values live, so a
//! mutation made later through a bound ability is visible immediately. Fields
//! inserted into the record after capture are not part of the view.

use crate::state::{StatValue, StateHandle};

/// Read-only view over one character's state
///
/// Cheap to clone; all clones observe the same live record.
#[derive(Debug, Clone)]
pub struct StatusView {
    state: StateHandle,
    keys: Vec<String>,
}

impl StatusView {
    /// Capture a view over `state`, freezing the current key set
    #[must_use]
    pub fn capture(state: &StateHandle) -> Self {
        let keys = state.read().keys().map(str::to_string).collect();
        Self {
            state: state.clone(),
            keys,
        }
    }

    /// Current value of a captured field
    ///
    /// Returns `None` for fields outside the captured key set, including
    /// fields added to the record after capture.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<StatValue> {
        if !self.keys.iter().any(|k| k == field) {
            return None;
        }
        self.state.read().get(field).cloned()
    }

    /// Check whether a field is part of the view
    #[inline]
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.keys.iter().any(|k| k == field)
    }

    /// Captured field names, in record order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Snapshot of `(field, current value)` pairs, in record order
    #[must_use]
    pub fn entries(&self) -> Vec<(String, StatValue)> {
        let record = self.state.read();
        self.keys
            .iter()
            .filter_map(|k| record.get(k).map(|v| (k.clone(), v.clone())))
            .collect()
    }

    /// Number of captured fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if the view is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{StateRecord, StateSeed};
    use pretty_assertions::assert_eq;

    fn handle() -> StateHandle {
        let seed = StateSeed::new().with("health", 150).with("mana", 120);
        StateHandle::new(StateRecord::seed("mage", "Scorcher", &seed))
    }

    #[test]
    fn reads_are_live() {
        let state = handle();
        let status = StatusView::capture(&state);

        assert_eq!(status.get("mana"), Some(StatValue::Int(120)));
        state.adjust("mana", -21).unwrap();
        assert_eq!(status.get("mana"), Some(StatValue::Int(99)));
    }

    #[test]
    fn key_set_frozen_at_capture() {
        let state = handle();
        let status = StatusView::capture(&state);

        state.write().set("rage", 5);
        assert!(state.read().contains("rage"));
        assert_eq!(status.get("rage"), None);
        assert!(!status.contains("rage"));
    }

    #[test]
    fn fields_preserve_record_order() {
        let status = StatusView::capture(&handle());
        let fields: Vec<_> = status.fields().collect();
        assert_eq!(fields, vec!["type", "name", "health", "mana"]);
    }

    #[test]
    fn entries_snapshot_current_values() {
        let state = handle();
        let status = StatusView::capture(&state);
        state.adjust("health", -50).unwrap();

        let entries = status.entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(
            entries[2],
            ("health".to_string(), StatValue::Int(100))
        );
    }
}
