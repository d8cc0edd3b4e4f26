//! In-memory document store
//!
//! Collections hold JSON documents keyed by a string id, in insertion order.
//! One `MemoryStore` is created by the composition root and handed to every
//! repository as an `Arc`; there is no process-wide instance.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use agendaia_domain::{AgendaError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::InfraError;

/// One stored document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct StoredDocument {
    id: String,
    document: Value,
}

/// On-disk form of a whole store
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    database_name: String,
    collections: BTreeMap<String, Vec<StoredDocument>>,
}

type Collections = BTreeMap<String, Vec<StoredDocument>>;

/// Named collections of JSON documents behind a single lock
#[derive(Debug)]
pub struct MemoryStore {
    database_name: String,
    collections: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new(database_name: impl Into<String>) -> Self {
        Self { database_name: database_name.into(), collections: RwLock::new(BTreeMap::new()) }
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    fn read(&self) -> RwLockReadGuard<'_, Collections> {
        match self.collections.read() {
            Ok(guard) => guard,
            Err(poison_err) => {
                tracing::warn!(database = %self.database_name, "store lock poisoned, recovering");
                poison_err.into_inner()
            }
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        match self.collections.write() {
            Ok(guard) => guard,
            Err(poison_err) => {
                tracing::warn!(database = %self.database_name, "store lock poisoned, recovering");
                poison_err.into_inner()
            }
        }
    }

    /// Insert a new document. Ids are unique per collection.
    pub fn insert<T: Serialize>(&self, collection: &str, id: &str, document: &T) -> Result<()> {
        let document = serde_json::to_value(document).map_err(InfraError::from)?;
        let mut collections = self.write();
        let docs = collections.entry(collection.to_string()).or_default();
        if docs.iter().any(|doc| doc.id == id) {
            return Err(AgendaError::AlreadyExists(format!("{collection}/{id}")));
        }
        docs.push(StoredDocument { id: id.to_string(), document });
        Ok(())
    }

    pub fn get<T: DeserializeOwned>(&self, collection: &str, id: &str) -> Result<Option<T>> {
        let collections = self.read();
        let found = collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id))
            .map(|doc| decode(&doc.document))
            .transpose()?;
        Ok(found)
    }

    /// Every document of `collection` accepted by `predicate`, in insertion
    /// order
    pub fn find<T, F>(&self, collection: &str, predicate: F) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        F: Fn(&T) -> bool,
    {
        let collections = self.read();
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        let mut matches = Vec::new();
        for doc in docs {
            let value: T = decode(&doc.document)?;
            if predicate(&value) {
                matches.push(value);
            }
        }
        Ok(matches)
    }

    /// Replace an existing document in place; `false` when the id is unknown
    pub fn replace<T: Serialize>(&self, collection: &str, id: &str, document: &T) -> Result<bool> {
        let document = serde_json::to_value(document).map_err(InfraError::from)?;
        let mut collections = self.write();
        let slot = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == id));

        match slot {
            Some(stored) => {
                stored.document = document;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn remove(&self, collection: &str, id: &str) -> bool {
        let mut collections = self.write();
        let Some(docs) = collections.get_mut(collection) else {
            return false;
        };
        let before = docs.len();
        docs.retain(|doc| doc.id != id);
        docs.len() != before
    }

    pub fn count(&self, collection: &str) -> usize {
        self.read().get(collection).map_or(0, Vec::len)
    }

    /// Write the whole store to `path` as pretty JSON
    pub fn save_snapshot(&self, path: &Path) -> Result<()> {
        let snapshot = Snapshot {
            database_name: self.database_name.clone(),
            collections: self.read().clone(),
        };
        let json = serde_json::to_string_pretty(&snapshot).map_err(InfraError::from)?;
        std::fs::write(path, json).map_err(InfraError::from)?;

        tracing::info!(
            database = %self.database_name,
            path = %path.display(),
            collections = snapshot.collections.len(),
            "store snapshot written"
        );
        Ok(())
    }

    /// Rebuild a store from a file written by [`MemoryStore::save_snapshot`]
    pub fn load_snapshot(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(InfraError::from)?;
        let snapshot: Snapshot = serde_json::from_str(&contents).map_err(InfraError::from)?;

        tracing::info!(
            database = %snapshot.database_name,
            path = %path.display(),
            "store snapshot loaded"
        );
        Ok(Self {
            database_name: snapshot.database_name,
            collections: RwLock::new(snapshot.collections),
        })
    }
}

fn decode<T: DeserializeOwned>(value: &Value) -> Result<T> {
    Ok(T::deserialize(value).map_err(InfraError::from)?)
}
