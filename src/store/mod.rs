//! Persistence boundary.
//!
//! The calculator treats storage as a synchronous, local key-value store of
//! strings. Two implementations ship with the crate: `MemoryStore` for tests
//! and ephemeral sessions, and `FileStore` which keeps one file per key.

pub mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// A best-effort durable string store.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if absent.
    fn read_string(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn write_string(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn read_string(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read_string(key)
    }

    fn write_string(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write_string(key, value)
    }
}
