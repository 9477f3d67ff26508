//! Storage-adapter contract for execution-data records, plus the in-memory
//! reference backend.
//!
//! One store instance models one collection. Sweeping outputs and outcomes
//! are handed separate instances so their name spaces never collide.

mod memory;

pub use memory::MemoryStore;

use std::sync::Arc;
use sweep_core::{ExecutionDataRecord, NewExecutionDataRecord, StoreError};

pub type StoreResult<T> = Result<T, StoreError>;
pub type DynStore = Arc<dyn ExecutionDataStore>;

/// Contract every backing store must satisfy. Any store with an atomic
/// conditional insert (document store with a unique index, KV store with
/// CAS, relational unique constraint) qualifies.
pub trait ExecutionDataStore: Send + Sync {
    /// Insert a record, assigning its identity. Fails with
    /// [`StoreError::AlreadyExists`] when the
    /// `(plan_execution_id, name, scope_key)` triple is occupied; the check
    /// and the insert are one atomic step.
    fn insert_unique(&self, record: NewExecutionDataRecord) -> StoreResult<String>;

    /// All records matching the name under any of the given scope keys.
    fn query_by_scope_keys(
        &self,
        plan_execution_id: &str,
        name: &str,
        scope_keys: &[String],
    ) -> StoreResult<Vec<ExecutionDataRecord>>;

    /// All records produced by one exact execution node, in producer order.
    /// `graph_only` filters to records flagged for graph rendering.
    fn query_by_producer(
        &self,
        plan_execution_id: &str,
        runtime_id: &str,
        graph_only: bool,
    ) -> StoreResult<Vec<ExecutionDataRecord>>;

    /// Direct retrieval by storage identity. Fails with
    /// [`StoreError::UnknownId`] on the first id with no record.
    fn fetch_by_ids(&self, ids: &[String]) -> StoreResult<Vec<ExecutionDataRecord>>;
}
