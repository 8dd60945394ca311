//! List Ordering Rules
//!
//! Pure position arithmetic shared by every ordered collection and by
//! page-section ordering. Storage-independent: the repository and service
//! layers apply these to rows, views and config maps alike.

use super::entity::Ordered;

/// Position assigned to a newly created entry (appended at the end)
pub fn next_position(len: usize) -> i32 {
    len as i32
}

/// Classic array-move: remove the entry at `from` and reinsert it at `to`.
///
/// `to` is clamped to the list bounds; an out-of-range `from` is a no-op.
pub fn move_entry<T>(entries: &mut Vec<T>, from: usize, to: usize) {
    if from >= entries.len() {
        return;
    }
    let entry = entries.remove(from);
    let to = to.min(entries.len());
    entries.insert(to, entry);
}

/// Rewrite every entry's position to its zero-based index.
///
/// Restores the dense, contiguous-from-0 invariant after a move or delete.
pub fn renumber<T: Ordered>(entries: &mut [T]) {
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.set_position(index as i32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Entry {
        label: &'static str,
        position: i32,
        active: bool,
    }

    impl Ordered for Entry {
        fn position(&self) -> i32 {
            self.position
        }
        fn set_position(&mut self, position: i32) {
            self.position = position;
        }
        fn is_active(&self) -> bool {
            self.active
        }
        fn set_active(&mut self, active: bool) {
            self.active = active;
        }
    }

    fn entry(label: &'static str, position: i32) -> Entry {
        Entry {
            label,
            position,
            active: true,
        }
    }

    #[test]
    fn test_next_position_is_collection_length() {
        assert_eq!(next_position(0), 0);
        assert_eq!(next_position(3), 3);
    }

    #[test]
    fn test_move_last_to_front() {
        // [A(0), B(1), C(2)], drag C to position 0 -> [C(0), A(1), B(2)]
        let mut entries = vec![entry("A", 0), entry("B", 1), entry("C", 2)];
        move_entry(&mut entries, 2, 0);
        renumber(&mut entries);

        let labels: Vec<_> = entries.iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["C", "A", "B"]);
        let positions: Vec<_> = entries.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_move_first_to_end() {
        let mut entries = vec![entry("A", 0), entry("B", 1), entry("C", 2)];
        move_entry(&mut entries, 0, 2);
        renumber(&mut entries);

        let labels: Vec<_> = entries.iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_move_target_clamped_to_bounds() {
        let mut entries = vec![entry("A", 0), entry("B", 1)];
        move_entry(&mut entries, 0, 99);
        let labels: Vec<_> = entries.iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["B", "A"]);
    }

    #[test]
    fn test_move_out_of_range_source_is_noop() {
        let mut entries = vec![entry("A", 0), entry("B", 1)];
        move_entry(&mut entries, 5, 0);
        let labels: Vec<_> = entries.iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["A", "B"]);
    }

    #[test]
    fn test_renumber_compacts_gaps() {
        // Positions with gaps (e.g. after a delete) become contiguous again
        let mut entries = vec![entry("A", 0), entry("B", 4), entry("C", 9)];
        renumber(&mut entries);
        let positions: Vec<_> = entries.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }
}
