//! In-memory backend used by tests and single-process runs.

use crate::{ExecutionDataStore, StoreResult};
use chrono::Utc;
use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, RwLock},
};
use sweep_core::{ExecutionDataRecord, NewExecutionDataRecord, StoreError};
use uuid::Uuid;

#[derive(Default)]
struct Inner {
    /// Append-only log; index order is producer order
    records: Vec<ExecutionDataRecord>,
    by_id: HashMap<String, usize>,
    /// Unique index over (plan_execution_id, name, scope_key)
    occupied: HashSet<(String, String, String)>,
}

/// Reference store: a single `RwLock` guards the log and both indexes, so
/// the uniqueness check and the append are one atomic step.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("records", &self.inner.read().unwrap().records.len())
            .finish()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held, across all plan executions.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ExecutionDataStore for MemoryStore {
    fn insert_unique(&self, record: NewExecutionDataRecord) -> StoreResult<String> {
        let mut inner = self.inner.write().unwrap();
        let key = (
            record.plan_execution_id.clone(),
            record.name.clone(),
            record.scope_key.clone(),
        );
        if inner.occupied.contains(&key) {
            return Err(StoreError::AlreadyExists {
                name: record.name,
                scope_key: record.scope_key,
            });
        }
        let id = Uuid::new_v4().to_string();
        let persisted = record.into_record(id.clone(), Utc::now());
        inner.occupied.insert(key);
        let index = inner.records.len();
        inner.by_id.insert(id.clone(), index);
        inner.records.push(persisted);
        Ok(id)
    }

    fn query_by_scope_keys(
        &self,
        plan_execution_id: &str,
        name: &str,
        scope_keys: &[String],
    ) -> StoreResult<Vec<ExecutionDataRecord>> {
        let inner = self.inner.read().unwrap();
        Ok(inner
            .records
            .iter()
            .filter(|r| {
                r.plan_execution_id == plan_execution_id
                    && r.name == name
                    && scope_keys.contains(&r.scope_key)
            })
            .cloned()
            .collect())
    }

    fn query_by_producer(
        &self,
        plan_execution_id: &str,
        runtime_id: &str,
        graph_only: bool,
    ) -> StoreResult<Vec<ExecutionDataRecord>> {
        let inner = self.inner.read().unwrap();
        Ok(inner
            .records
            .iter()
            .filter(|r| {
                r.plan_execution_id == plan_execution_id
                    && r.produced_by_runtime_id == runtime_id
                    && (!graph_only || r.is_graph_outcome)
            })
            .cloned()
            .collect())
    }

    fn fetch_by_ids(&self, ids: &[String]) -> StoreResult<Vec<ExecutionDataRecord>> {
        let inner = self.inner.read().unwrap();
        ids.iter()
            .map(|id| {
                inner
                    .by_id
                    .get(id)
                    .map(|&i| inner.records[i].clone())
                    .ok_or_else(|| StoreError::UnknownId(id.clone()))
            })
            .collect()
    }
}
