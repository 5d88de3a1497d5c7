use std::collections::HashSet;

/// Expand/collapse state of tree nodes addressed by string id.
///
/// Unknown ids are collapsed. Nothing is evicted; the id space is the set of
/// engine names seen during the page session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisclosureStore {
    expanded: HashSet<String>,
}

impl DisclosureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn expand(&mut self, id: &str) {
        self.expanded.insert(id.to_string());
    }

    pub fn collapse(&mut self, id: &str) {
        self.expanded.remove(id);
    }

    /// Number of expanded nodes
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_collapsed() {
        let store = DisclosureStore::new();
        assert!(!store.is_expanded("PostgreSQL"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_toggle_parity() {
        let ids = ["pgx-lower", "PostgreSQL", "DuckDB"];
        let sequence = [0, 1, 0, 2, 0, 1, 1, 0, 2];

        let mut store = DisclosureStore::new();
        store.expand("DuckDB");
        let before: Vec<bool> = ids.iter().map(|id| store.is_expanded(id)).collect();

        for &i in &sequence {
            store.toggle(ids[i]);
        }

        for (i, id) in ids.iter().enumerate() {
            let count = sequence.iter().filter(|&&s| s == i).count();
            let expected = if count % 2 == 0 { before[i] } else { !before[i] };
            assert_eq!(store.is_expanded(id), expected, "{} toggled {} times", id, count);
        }
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut store = DisclosureStore::new();
        store.toggle("pgx-lower");
        assert!(store.is_expanded("pgx-lower"));
        store.toggle("pgx-lower");
        assert!(!store.is_expanded("pgx-lower"));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_expand_and_collapse_are_idempotent() {
        let mut store = DisclosureStore::new();
        store.expand("a");
        store.expand("a");
        assert_eq!(store.len(), 1);
        store.collapse("a");
        store.collapse("a");
        assert!(!store.is_expanded("a"));
    }
}
