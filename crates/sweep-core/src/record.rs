//! The persisted unit: one write-once record per published value.

use crate::ambiance::Level;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A record handed to the storage adapter for insertion. The adapter assigns
/// the id and the creation timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExecutionDataRecord {
    pub plan_execution_id: String,
    /// Producer-chosen name, unique within `(plan_execution_id, name, scope_key)`
    pub name: String,
    /// Opaque payload; never inspected by the resolver
    pub value: Value,
    /// Visibility boundary, fixed at creation and never re-evaluated
    pub scope_key: String,
    /// Snapshot of the truncated level sequence the scope key was derived
    /// from, retained for provenance
    pub levels: Vec<Level>,
    /// Runtime id of the full, untruncated current level at write time —
    /// kept even when the storage scope was truncated to an ancestor group
    pub produced_by_runtime_id: String,
    /// Pass-through flag consumed by the execution-graph renderer
    pub is_graph_outcome: bool,
}

/// A persisted record. Immutable once created; never updated or deleted by
/// this subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionDataRecord {
    /// Storage-assigned identity
    pub id: String,
    pub plan_execution_id: String,
    pub name: String,
    pub value: Value,
    pub scope_key: String,
    pub levels: Vec<Level>,
    pub produced_by_runtime_id: String,
    pub is_graph_outcome: bool,
    pub created_at: DateTime<Utc>,
}

impl NewExecutionDataRecord {
    /// Promote to a persisted record with storage-assigned identity.
    pub fn into_record(self, id: String, created_at: DateTime<Utc>) -> ExecutionDataRecord {
        ExecutionDataRecord {
            id,
            plan_execution_id: self.plan_execution_id,
            name: self.name,
            value: self.value,
            scope_key: self.scope_key,
            levels: self.levels,
            produced_by_runtime_id: self.produced_by_runtime_id,
            is_graph_outcome: self.is_graph_outcome,
            created_at,
        }
    }
}
