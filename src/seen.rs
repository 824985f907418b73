//! Cycle tracking for table traversal.
//!
//! A [`SeenSet`] holds the identities of the tables that are currently open,
//! i.e. entered but not yet closed, during a walk. Meeting an open table again
//! means the walk is inside a cycle; the serializer writes `nil` there instead of
//! recursing. Closed tables are removed, so a table shared by two siblings is
//! written out in full both times.
//!
//! A set is created per call unless the caller supplies one. Marking a table
//! beforehand with [`SeenSet::insert`] makes the serializer treat it as already
//! open, which is how a caller continues a literal it is assembling by hand.
//!
//! The set holds a handle to every marked table, so a marked table stays alive
//! and its address cannot be handed to a different table while the mark exists.
//!
//! ```rust
//! use serde_luat::{to_string_with_seen, SeenSet, SerializeOptions, Table, Value};
//!
//! let parent = Table::new();
//! let child = Table::new();
//! child.set("up", parent.clone());
//!
//! let mut seen = SeenSet::new();
//! seen.insert(&parent);
//!
//! let options = SerializeOptions::minified();
//! let out = to_string_with_seen(&Value::Table(child), &options, &mut seen).unwrap();
//! assert_eq!(out, "{[\"up\"]=nil}");
//! assert!(seen.contains(&parent));
//! ```

use crate::table::{Table, TableId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Identity set of tables currently being serialized.
#[derive(Debug, Default, Clone)]
pub struct SeenSet {
    open: HashMap<TableId, Table>,
}

impl SeenSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `table` as open. Returns `false` if it already was.
    pub fn insert(&mut self, table: &Table) -> bool {
        self.enter(table)
    }

    /// Clears the open mark of `table`. Returns `false` if it was not marked.
    pub fn remove(&mut self, table: &Table) -> bool {
        self.open.remove(&table.id()).is_some()
    }

    #[must_use]
    pub fn contains(&self, table: &Table) -> bool {
        self.open.contains_key(&table.id())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub(crate) fn enter(&mut self, table: &Table) -> bool {
        match self.open.entry(table.id()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(table.clone());
                true
            }
        }
    }

    pub(crate) fn leave(&mut self, id: TableId) {
        self.open.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_by_identity_not_contents() {
        let a = Table::new();
        let b = Table::new();
        let mut seen = SeenSet::new();

        assert!(seen.insert(&a));
        assert!(!seen.insert(&a.clone()));
        assert!(!seen.contains(&b));
        assert_eq!(seen.len(), 1);

        assert!(seen.remove(&a));
        assert!(!seen.remove(&a));
        assert!(seen.is_empty());
    }

    #[test]
    fn test_mark_keeps_table_alive() {
        let mut seen = SeenSet::new();
        {
            let temporary = Table::from_sequence(vec![1, 2]);
            seen.insert(&temporary);
        }
        assert_eq!(seen.len(), 1);

        // The marked allocation is still owned by the set, so no new table
        // can share its address.
        let fresh: Vec<Table> = (0..50).map(|_| Table::from_sequence(vec![1, 2])).collect();
        assert!(fresh.iter().all(|t| !seen.contains(t)));
    }
}
