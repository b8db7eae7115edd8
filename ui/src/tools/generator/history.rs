//! Bounded, newest-first record of past generations.

use std::collections::VecDeque;

use time::OffsetDateTime;

use crate::core::format;
use crate::core::settings::{DEFAULT_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY};

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: u64,
    pub value: String,
    pub length: usize,
    pub created_at: OffsetDateTime,
    pub timestamp: String,
}

impl HistoryEntry {
    pub fn new(id: u64, value: String, created_at: OffsetDateTime) -> Self {
        let length = value.chars().count();
        Self {
            id,
            value,
            length,
            timestamp: format::format_clock(created_at),
            created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl History {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, MAX_HISTORY_CAPACITY);
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Prepend `entry`, dropping the oldest entries beyond capacity.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Entries newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn entry(id: u64) -> HistoryEntry {
        HistoryEntry::new(id, format!("value-{id}"), datetime!(2024-01-01 09:00:00 UTC))
    }

    #[test]
    fn record_prepends() {
        let mut history = History::default();
        history.record(entry(1));
        history.record(entry(2));
        let ids: Vec<u64> = history.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(history.latest().map(|e| e.id), Some(2));
    }

    #[test]
    fn eleventh_record_evicts_the_oldest() {
        let mut history = History::default();
        for id in 1..=11 {
            history.record(entry(id));
        }
        assert_eq!(history.len(), 10);
        let ids: Vec<u64> = history.iter().map(|e| e.id).collect();
        assert_eq!(ids, (2..=11).rev().collect::<Vec<_>>());
    }

    #[test]
    fn clear_empties_any_history() {
        let mut history = History::with_capacity(3);
        for id in 0..7 {
            history.record(entry(id));
        }
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn entry_captures_length_and_clock_label() {
        let e = entry(5);
        assert_eq!(e.length, "value-5".len());
        assert_eq!(e.timestamp, "9:00:00 AM");
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut history = History::with_capacity(0);
        history.record(entry(1));
        history.record(entry(2));
        assert_eq!(history.capacity(), 1);
        assert_eq!(history.latest().map(|e| e.id), Some(2));
    }

    #[test]
    fn huge_capacity_is_capped_without_allocating() {
        let mut history = History::with_capacity(usize::MAX);
        assert_eq!(history.capacity(), MAX_HISTORY_CAPACITY);
        for id in 0..150 {
            history.record(entry(id));
        }
        assert_eq!(history.len(), MAX_HISTORY_CAPACITY);
    }
}
