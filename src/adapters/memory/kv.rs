//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::ports::kv::{KeyValueStore, KvError};

/// `HashMap`-backed store with switchable failure injection.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    values: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryKeyValueStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one raw value.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        store
    }

    /// Makes every subsequent `get` fail.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::Relaxed);
    }

    /// Makes every subsequent `set` and `remove` fail.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }

    fn values(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, KvError> {
        self.values.lock().map_err(|_| "memory store lock poisoned".into())
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        if self.fail_reads.load(Ordering::Relaxed) {
            return Err(format!("injected read failure for {key}").into());
        }
        Ok(self.values()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(format!("injected write failure for {key}").into());
        }
        self.values()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), KvError> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(format!("injected remove failure for {key}").into());
        }
        self.values()?.remove(key);
        Ok(())
    }
}
