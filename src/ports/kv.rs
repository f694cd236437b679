//! Key-value port for the local storage medium.

/// Error type returned by storage adapters.
pub type KvError = Box<dyn std::error::Error + Send + Sync>;

/// A flat string-to-string store, one blob per key.
///
/// The barcode store serializes each list it owns into a single value. Writes
/// must replace the whole value or leave the previous one in place.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`, or `None` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, KvError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn set(&self, key: &str, value: &str) -> Result<(), KvError>;

    /// Removes the value stored under `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium refuses the removal.
    fn remove(&self, key: &str) -> Result<(), KvError>;
}
