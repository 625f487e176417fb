//! # Record Collections
//!
//! Immutable, ordered snapshots of records.
//!
//! ## Snapshot Isolation by Copy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  before = [A, B, C]             update(B → B')                          │
//! │             │  │  │                     │                               │
//! │  after  = [A, B', C]   ◄────────────────┘                               │
//! │             ▲      ▲                                                    │
//! │             └──────┴── same allocations as in `before`                  │
//! │                                                                         │
//! │  Anyone still holding `before` sees [A, B, C] forever.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutation builds a new spine of `Arc` pointers. Untouched records are
//! shared between the old and new snapshot, so "did this record change?" is a
//! pointer comparison.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::error::{HrError, HrResult};
use crate::types::{Department, Employee, LeaveRequest};

/// A record with a unique key inside its collection.
///
/// No two records in one [`Collection`] share an `id()`.
pub trait Record {
    fn id(&self) -> &str;
}

impl Record for Employee {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for LeaveRequest {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Department {
    fn id(&self) -> &str {
        &self.name
    }
}

/// An ordered, immutable snapshot of records.
///
/// Cloning is cheap (one reference count bump).
#[derive(Debug)]
pub struct Collection<T> {
    items: Arc<[Arc<T>]>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Collection {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Collection {
            items: Arc::from(Vec::new()),
        }
    }
}

impl<T: Record> Collection<T> {
    /// Builds a snapshot from `records`, kept in the given order.
    ///
    /// ## Errors
    /// `HrError::DuplicateId` naming the first id that appears twice.
    pub fn new(records: Vec<T>) -> HrResult<Self> {
        if let Some(id) = first_duplicate(&records) {
            return Err(HrError::DuplicateId(id.to_string()));
        }
        Ok(Self::from_unique(records))
    }

    /// Builds a snapshot from records whose ids are already known to be
    /// distinct (fixed seed data).
    pub(crate) fn from_unique(records: Vec<T>) -> Self {
        let items: Vec<Arc<T>> = records.into_iter().map(Arc::new).collect();
        Collection {
            items: items.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().map(|r| r.as_ref())
    }

    /// Shared handles to every record, in order.
    pub fn records(&self) -> &[Arc<T>] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.iter().find(|r| r.id() == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|r| r.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// True when both snapshots are the same value (no mutation in between).
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    /// New snapshot with `record` appended.
    pub(crate) fn pushed(&self, record: T) -> Self {
        let mut items: Vec<Arc<T>> = self.items.to_vec();
        items.push(Arc::new(record));
        Collection {
            items: items.into(),
        }
    }

    /// New snapshot with the record at `index` swapped for `record`.
    pub(crate) fn replaced(&self, index: usize, record: T) -> Self {
        let mut items: Vec<Arc<T>> = self.items.to_vec();
        items[index] = Arc::new(record);
        Collection {
            items: items.into(),
        }
    }

    /// New snapshot without the record at `index`.
    pub(crate) fn removed(&self, index: usize) -> Self {
        let mut items: Vec<Arc<T>> = self.items.to_vec();
        items.remove(index);
        Collection {
            items: items.into(),
        }
    }

    /// Records matching `predicate`, in collection order.
    pub fn filtered<P>(&self, mut predicate: P) -> Vec<Arc<T>>
    where
        P: FnMut(&T) -> bool,
    {
        self.items
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }
}

fn first_duplicate<T: Record>(records: &[T]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(records.len());
    records.iter().map(|r| r.id()).find(|id| !seen.insert(*id))
}

impl<T: Serialize> Serialize for Collection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter().map(|r| r.as_ref()))
    }
}

impl<T: PartialEq> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len()
            && self
                .items
                .iter()
                .zip(other.items.iter())
                .all(|(a, b)| a.as_ref() == b.as_ref())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
