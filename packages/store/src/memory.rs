use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::session::SessionStore;

#[derive(Clone, Debug)]
struct Entry {
    value: String,
    expires: DateTime<Utc>,
}

/// In-memory SessionStore for testing and native builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, name: &str) -> Option<String> {
        let mut entries = self.entries.lock().ok()?;
        match entries.get(name) {
            Some(entry) if entry.expires > Utc::now() => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(name);
                None
            }
            None => None,
        }
    }

    fn set(&self, name: &str, value: &str, expires: DateTime<Utc>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                name.to_string(),
                Entry {
                    value: value.to_string(),
                    expires,
                },
            );
        }
    }

    fn remove(&self, name: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(name);
        }
    }
}
