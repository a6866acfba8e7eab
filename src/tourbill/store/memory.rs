use super::StorageBackend;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory backend for tests. No persistence.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::TourbillError;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Faults {
        all_writes: bool,
        keyed: Option<String>,
    }

    /// Shared switch for flipping [`FlakyBackend`] faults on and off after
    /// the backend has been moved into a store. Faults can hit every write
    /// or only writes to one key, which exercises the partial-failure
    /// branches (e.g. list persisted, counter commit fails).
    #[derive(Clone, Default)]
    pub struct FaultSwitch(Arc<Mutex<Faults>>);

    impl FaultSwitch {
        pub fn fail_writes(&self, on: bool) {
            self.0.lock().unwrap().all_writes = on;
        }

        /// Fail writes to exactly this key; `None` clears the fault.
        pub fn fail_writes_to(&self, key: Option<&str>) {
            self.0.lock().unwrap().keyed = key.map(|k| k.to_string());
        }

        fn write_fails(&self, key: &str) -> bool {
            let faults = self.0.lock().unwrap();
            faults.all_writes || faults.keyed.as_deref() == Some(key)
        }
    }

    /// Memory backend whose writes can be made to fail, for exercising the
    /// error-surfacing paths of the store.
    pub struct FlakyBackend {
        inner: MemoryBackend,
        switch: FaultSwitch,
    }

    impl FlakyBackend {
        pub fn new() -> (Self, FaultSwitch) {
            let switch = FaultSwitch::default();
            let backend = Self {
                inner: MemoryBackend::new(),
                switch: switch.clone(),
            };
            (backend, switch)
        }
    }

    impl StorageBackend for FlakyBackend {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            if self.switch.write_fails(key) {
                return Err(TourbillError::Store(format!(
                    "injected write failure for {}",
                    key
                )));
            }
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            if self.switch.write_fails(key) {
                return Err(TourbillError::Store(format!(
                    "injected write failure for {}",
                    key
                )));
            }
            self.inner.remove(key)
        }
    }
}
