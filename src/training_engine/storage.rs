//! Persistence seam. Progress lives in an opaque string key/value store; the
//! trainer only ever gets, sets and removes whole values.

use std::collections::HashMap;
use serde::{de::DeserializeOwned, Serialize};

use crate::training_engine::error::TrainerError;

pub const KEY_CUSTOM_RANGE: &str = "poker_custom_range";
pub const KEY_STREAK: &str = "poker_streak";
pub const KEY_HAND_STATS: &str = "poker_hand_stats";
pub const KEY_CAMPAIGN_LEVEL: &str = "poker_campaign_level";
pub const KEY_TOTAL_HANDS: &str = "poker_total_hands";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<(), TrainerError>;
    fn remove(&mut self, key: &str);
}

/// Process-local store, used by tests and as an offline fallback.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), TrainerError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// Decode a JSON value stored under `key`. A missing key is `Ok(None)`.
pub fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>, TrainerError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key) {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn store_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), TrainerError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, raw)
}
