//! Measurement table: the last size each item reported.
//!
//! Sizes arrive one item at a time and in any order, so they are keyed by
//! item id and never by sequence index. The ordered size list the engine
//! needs is re-derived from the current item order on every recompute.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::primitives::Size;

/// Persistent id -> size mapping, retained across layout passes.
///
/// Entries only disappear through [`MeasurementTable::retain_ids`]; layout
/// changes alone never shrink it.
#[derive(Debug, Clone)]
pub struct MeasurementTable<Id> {
    entries: HashMap<Id, Size>,
}

impl<Id> Default for MeasurementTable<Id> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<Id: Eq + Hash + Clone> MeasurementTable<Id> {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a measurement, overwriting any previous one for `id`.
    ///
    /// Returns `true` if the stored size changed.
    pub fn insert(&mut self, id: Id, size: Size) -> bool {
        match self.entries.insert(id, size) {
            Some(previous) => previous != size,
            None => true,
        }
    }

    /// Look up a measurement.
    #[inline]
    pub fn get(&self, id: &Id) -> Option<Size> {
        self.entries.get(id).copied()
    }

    /// Measurement for `id`, or the zero-size placeholder if it has none yet.
    #[inline]
    pub fn size_or_zero(&self, id: &Id) -> Size {
        self.get(id).unwrap_or(Size::ZERO)
    }

    /// Whether `id` has reported a size.
    #[inline]
    pub fn contains(&self, id: &Id) -> bool {
        self.entries.contains_key(id)
    }

    /// Drop every entry whose id is not in `live`. Returns how many were dropped.
    pub fn retain_ids(&mut self, live: &HashSet<Id>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|id, _| live.contains(id));
        before - self.entries.len()
    }

    /// Map an ordered id sequence to sizes, substituting [`Size::ZERO`] for
    /// ids that have not been measured.
    pub fn ordered_sizes<'a, I>(&self, ids: I) -> Vec<Size>
    where
        I: IntoIterator<Item = &'a Id>,
        Id: 'a,
    {
        ids.into_iter().map(|id| self.size_or_zero(id)).collect()
    }

    /// Get the number of measured items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been measured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_get() {
        let mut table = MeasurementTable::new();
        assert!(table.insert(1u32, Size::new(120.0, 30.0)));
        assert_eq!(table.get(&1), Some(Size::new(120.0, 30.0)));
        assert_eq!(table.get(&2), None);
    }

    #[test]
    fn test_overwrite_reports_change() {
        let mut table = MeasurementTable::new();
        table.insert("a", Size::new(10.0, 10.0));

        assert!(!table.insert("a", Size::new(10.0, 10.0)));
        assert!(table.insert("a", Size::new(12.0, 10.0)));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_ordered_sizes_uses_placeholder() {
        let mut table = MeasurementTable::new();
        table.insert(2u32, Size::new(20.0, 5.0));

        let sizes = table.ordered_sizes(&[1, 2, 3]);
        assert_eq!(sizes, vec![Size::ZERO, Size::new(20.0, 5.0), Size::ZERO]);
    }

    #[test]
    fn test_retain_ids() {
        let mut table = MeasurementTable::new();
        for id in 0u32..5 {
            table.insert(id, Size::new(id as f32, 1.0));
        }

        let live: HashSet<u32> = [1, 3].into_iter().collect();
        assert_eq!(table.retain_ids(&live), 3);
        assert_eq!(table.len(), 2);
        assert!(table.contains(&1));
        assert!(!table.contains(&0));
    }
}
