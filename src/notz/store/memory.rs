use super::KvBackend;
use crate::error::{NotzError, Result};
use std::collections::HashMap;

/// In-memory key-value store for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryBackend {
    entries: HashMap<String, String>,
    reads_poisoned: bool,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `get` fail, to exercise fail-soft loading.
    pub fn poison_reads(&mut self) {
        self.reads_poisoned = true;
    }

    /// Let reads succeed again after [`Self::poison_reads`].
    pub fn heal_reads(&mut self) {
        self.reads_poisoned = false;
    }
}

impl KvBackend for InMemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.reads_poisoned {
            return Err(NotzError::Store(format!("read failed for key: {}", key)));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---
