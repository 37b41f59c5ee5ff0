//! Device name cache
//!
//! Names rarely change on a configured panel, so every decoded name record
//! is kept for the lifetime of the client session. Entries are never
//! invalidated. Clones share the same entries.

use std::collections::HashMap;
use std::sync::Arc;

use integra_core::NameRecord;
use parking_lot::RwLock;

/// Cache key: (device kind code, device number)
pub type NameKey = (u8, u8);

/// Name records keyed by device kind and number
#[derive(Debug, Clone, Default)]
pub struct NameCache {
    inner: Arc<RwLock<HashMap<NameKey, NameRecord>>>,
}

impl NameCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Cached record for `kind`/`number`
    pub fn get(&self, kind: u8, number: u8) -> Option<NameRecord> {
        self.inner.read().get(&(kind, number)).cloned()
    }
    
    /// Store a record; an existing entry for the key is kept
    pub fn insert(&self, kind: u8, number: u8, record: NameRecord) -> NameRecord {
        self.inner
            .write()
            .entry((kind, number))
            .or_insert(record)
            .clone()
    }
    
    /// Check if a record is cached
    pub fn contains(&self, kind: u8, number: u8) -> bool {
        self.inner.read().contains_key(&(kind, number))
    }
    
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
