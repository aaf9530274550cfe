//! In-memory host adapter.
//!
//! `InMemoryRecord` stands in for a persisted row: a stored state code, an
//! `updated_at` touch stamp, a row lock, and a journal of everything the
//! engine did to it. A failed lock body rolls the row back. Useful for tests and for hosts that keep entities in
//! process.

use super::host::HostAdapter;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InMemoryError {
    #[error("undefined callback `{0}`")]
    UndefinedCallback(String),

    #[error("record lock unavailable")]
    LockUnavailable,
}

/// One observable side effect on the record, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalEntry {
    Callback(String),
    Write(i64),
    Touch,
    /// A failed lock body had side effects and the stored state was
    /// restored.
    Rollback,
}

#[derive(Debug, Default)]
struct Row {
    raw_state: Option<i64>,
    updated_at: Option<DateTime<Utc>>,
    journal: Vec<JournalEntry>,
}

/// A mutex-backed entity implementing [`HostAdapter`].
///
/// By default every callback name is treated as defined. Use
/// [`with_callbacks`](Self::with_callbacks) to restrict them so undefined
/// callbacks fail loudly.
///
/// # Example
///
/// ```rust
/// use argonaut::engine::{HostAdapter, InMemoryRecord, JournalEntry};
///
/// let record = InMemoryRecord::with_state(1);
/// record.write_raw_state(2).unwrap();
///
/// assert_eq!(record.raw_state(), Some(2));
/// assert_eq!(record.journal(), vec![JournalEntry::Write(2)]);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryRecord {
    row: Mutex<Row>,
    lock: Mutex<()>,
    defined_callbacks: Option<HashSet<String>>,
    lock_unavailable: AtomicBool,
}

impl InMemoryRecord {
    /// A record with no stored state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(code: i64) -> Self {
        let record = Self::new();
        record.set_raw_state(Some(code));
        record
    }

    /// Only the named callbacks exist; any other name fails.
    pub fn with_callbacks<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.defined_callbacks = Some(names.into_iter().map(Into::into).collect());
        self
    }

    fn row(&self) -> MutexGuard<'_, Row> {
        self.row.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn raw_state(&self) -> Option<i64> {
        self.row().raw_state
    }

    /// Overwrite the stored code directly, bypassing the journal.
    pub fn set_raw_state(&self, code: Option<i64>) {
        self.row().raw_state = code;
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.row().updated_at
    }

    pub fn journal(&self) -> Vec<JournalEntry> {
        self.row().journal.clone()
    }

    /// Names of the callbacks invoked so far, in order.
    pub fn callbacks(&self) -> Vec<String> {
        self.row()
            .journal
            .iter()
            .filter_map(|entry| match entry {
                JournalEntry::Callback(name) => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn touch_count(&self) -> usize {
        self.row()
            .journal
            .iter()
            .filter(|entry| matches!(entry, JournalEntry::Touch))
            .count()
    }

    pub fn clear_journal(&self) {
        self.row().journal.clear();
    }

    /// Make subsequent lock acquisitions fail with
    /// [`InMemoryError::LockUnavailable`].
    pub fn set_lock_unavailable(&self, unavailable: bool) {
        self.lock_unavailable.store(unavailable, Ordering::SeqCst);
    }
}

impl HostAdapter for InMemoryRecord {
    type Error = InMemoryError;

    fn read_raw_state(&self) -> Result<Option<i64>, Self::Error> {
        Ok(self.row().raw_state)
    }

    fn write_raw_state(&self, code: i64) -> Result<(), Self::Error> {
        let mut row = self.row();
        row.raw_state = Some(code);
        row.journal.push(JournalEntry::Write(code));
        Ok(())
    }

    fn mark_modified(&self) -> Result<(), Self::Error> {
        let mut row = self.row();
        row.updated_at = Some(Utc::now());
        row.journal.push(JournalEntry::Touch);
        Ok(())
    }

    fn with_exclusive_lock<T, E, F>(&self, body: F) -> Result<Result<T, E>, Self::Error>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if self.lock_unavailable.load(Ordering::SeqCst) {
            return Err(InMemoryError::LockUnavailable);
        }
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let (raw_state, updated_at, journaled) = {
            let row = self.row();
            (row.raw_state, row.updated_at, row.journal.len())
        };
        let outcome = body();
        if outcome.is_err() {
            let mut row = self.row();
            row.raw_state = raw_state;
            row.updated_at = updated_at;
            if row.journal.len() > journaled {
                row.journal.push(JournalEntry::Rollback);
            }
        }
        Ok(outcome)
    }

    fn invoke_callback(&self, name: &str) -> Result<(), Self::Error> {
        if let Some(defined) = &self.defined_callbacks {
            if !defined.contains(name) {
                return Err(InMemoryError::UndefinedCallback(name.to_string()));
            }
        }
        self.row()
            .journal
            .push(JournalEntry::Callback(name.to_string()));
        Ok(())
    }
}
