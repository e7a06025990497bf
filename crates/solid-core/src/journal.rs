//! Journal entry store.
//!
//! The journal only keeps entries. It does not render or persist them;
//! those concerns belong to whoever holds the journal.

use std::sync::Arc;

use serde::Serialize;

use crate::error::{Result, SolidError};
use crate::sequence::SequenceGenerator;

/// A single journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalEntry {
    /// Sequence number assigned when the entry was added
    pub sequence: u64,

    /// Entry text
    pub text: String,
}

/// Ordered store of journal entries.
///
/// Insertion order is display order. Removing an entry never renumbers the
/// others, and a removed number is never issued again.
#[derive(Debug, Serialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
    #[serde(skip)]
    sequence: Arc<SequenceGenerator>,
}

impl Default for Journal {
    fn default() -> Self {
        Self::new()
    }
}

impl Journal {
    /// Create an empty journal with its own sequence generator.
    pub fn new() -> Self {
        Self::with_sequence(SequenceGenerator::shared())
    }

    /// Create an empty journal drawing numbers from `sequence`.
    pub fn with_sequence(sequence: Arc<SequenceGenerator>) -> Self {
        Self {
            entries: Vec::new(),
            sequence,
        }
    }

    /// Append an entry and return its sequence number.
    pub fn add_entry(&mut self, text: impl Into<String>) -> u64 {
        let sequence = self.sequence.next();
        self.entries.push(JournalEntry {
            sequence,
            text: text.into(),
        });
        tracing::debug!(sequence, "added journal entry");
        sequence
    }

    /// Remove the entry with the given sequence number.
    ///
    /// # Errors
    ///
    /// Returns `SolidError::OutOfRange` if `sequence` is 0 or above the
    /// highest number issued, and `SolidError::EntryNotFound` if it was
    /// issued but no live entry in this journal carries it.
    pub fn remove_entry(&mut self, sequence: u64) -> Result<JournalEntry> {
        let highest = self.sequence.current();
        if sequence == 0 || sequence > highest {
            tracing::warn!(sequence, highest, "sequence out of range");
            return Err(SolidError::OutOfRange { sequence, highest });
        }

        let position = self
            .entries
            .iter()
            .position(|entry| entry.sequence == sequence)
            .ok_or(SolidError::EntryNotFound(sequence))?;
        let removed = self.entries.remove(position);
        tracing::debug!(sequence, position, "removed journal entry");
        Ok(removed)
    }

    /// Entry texts in store order, one per line.
    pub fn to_display_string(&self) -> String {
        self.entries
            .iter()
            .map(|entry| entry.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Live entries in store order.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Look up a live entry by its sequence number.
    pub fn get(&self, sequence: u64) -> Option<&JournalEntry> {
        self.entries.iter().find(|entry| entry.sequence == sequence)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest sequence number issued by this journal's generator.
    pub fn last_sequence(&self) -> u64 {
        self.sequence.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_entries() -> Journal {
        let mut journal = Journal::new();
        journal.add_entry("First entry");
        journal.add_entry("Second entry");
        journal.add_entry("Third entry");
        journal
    }

    #[test]
    fn test_add_assigns_increasing_numbers() {
        let mut journal = Journal::new();
        assert_eq!(journal.add_entry("a"), 1);
        assert_eq!(journal.add_entry("b"), 2);
        assert_eq!(journal.add_entry("c"), 3);
        assert_eq!(journal.len(), 3);
        assert_eq!(journal.last_sequence(), 3);
    }

    #[test]
    fn test_remove_second_entry() {
        let mut journal = three_entries();

        let removed = journal.remove_entry(2).expect("remove should succeed");

        assert_eq!(removed.text, "Second entry");
        assert_eq!(journal.to_display_string(), "First entry\nThird entry");
        let numbers: Vec<u64> = journal.entries().iter().map(|e| e.sequence).collect();
        assert_eq!(numbers, vec![1, 3]);
    }

    #[test]
    fn test_remove_zero_is_out_of_range() {
        let mut journal = three_entries();
        assert_eq!(
            journal.remove_entry(0),
            Err(SolidError::OutOfRange {
                sequence: 0,
                highest: 3
            })
        );
        assert_eq!(journal.len(), 3);
    }

    #[test]
    fn test_remove_unissued_is_out_of_range() {
        let mut journal = three_entries();
        assert!(matches!(
            journal.remove_entry(4),
            Err(SolidError::OutOfRange { sequence: 4, .. })
        ));
    }

    #[test]
    fn test_remove_twice_is_not_found() {
        let mut journal = three_entries();
        journal.remove_entry(2).expect("first remove should succeed");
        assert_eq!(journal.remove_entry(2), Err(SolidError::EntryNotFound(2)));
    }

    #[test]
    fn test_remove_after_prior_removal_targets_right_entry() {
        let mut journal = three_entries();
        journal.remove_entry(1).expect("remove 1");

        let removed = journal.remove_entry(3).expect("remove 3");

        assert_eq!(removed.text, "Third entry");
        assert_eq!(journal.to_display_string(), "Second entry");
    }

    #[test]
    fn test_removed_number_not_reused() {
        let mut journal = three_entries();
        journal.remove_entry(3).expect("remove 3");
        assert_eq!(journal.add_entry("Fourth entry"), 4);
        assert!(journal.get(3).is_none());
        assert_eq!(journal.get(4).map(|e| e.text.as_str()), Some("Fourth entry"));
    }

    #[test]
    fn test_shared_sequence_between_journals() {
        let seq = SequenceGenerator::shared();
        let mut work = Journal::with_sequence(Arc::clone(&seq));
        let mut home = Journal::with_sequence(Arc::clone(&seq));

        assert_eq!(work.add_entry("standup"), 1);
        assert_eq!(home.add_entry("groceries"), 2);
        assert_eq!(work.add_entry("review"), 3);

        // Issued to `home`, so in range for `work` but not present there.
        assert_eq!(work.remove_entry(2), Err(SolidError::EntryNotFound(2)));
        assert_eq!(home.remove_entry(2).map(|e| e.text), Ok("groceries".to_string()));
    }

    #[test]
    fn test_empty_display_string() {
        let journal = Journal::new();
        assert!(journal.is_empty());
        assert_eq!(journal.to_display_string(), "");
    }

    #[test]
    fn test_serializes_entries_only() {
        let journal = three_entries();
        let value = serde_json::to_value(&journal).expect("serialize");
        assert_eq!(value["entries"][0]["sequence"], 1);
        assert_eq!(value["entries"][2]["text"], "Third entry");
        assert!(value.get("sequence").is_none());
    }
}
