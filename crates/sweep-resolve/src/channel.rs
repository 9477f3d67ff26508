//! The shared scope-selection core both concrete resolvers wrap.

use serde_json::Value;
use sweep_core::{
    scope_key, visible_prefixes, Ambiance, ExecutionDataRecord, NewExecutionDataRecord,
    ScopeSelector, StoreError, SweepError,
};
use sweep_store::DynStore;
use tracing::debug;

/// Select the write ambiance for a publish: the (possibly truncated) level
/// sequence the record's scope key is derived from.
pub(crate) fn select_write_ambiance(
    ambiance: &Ambiance,
    selector: &ScopeSelector,
) -> Result<Ambiance, SweepError> {
    match selector {
        ScopeSelector::CurrentScope => Ok(ambiance.clone()),
        ScopeSelector::GlobalScope => Ok(ambiance.truncate(0)),
        ScopeSelector::NamedGroup(group) => {
            // Innermost-first: nested groups of the same kind repeat, and the
            // nearest enclosing match is the intended target.
            for (i, level) in ambiance.levels().iter().enumerate().rev() {
                if level.group.as_deref() == Some(group.as_str()) {
                    return Ok(ambiance.truncate(i + 1));
                }
            }
            Err(SweepError::GroupNotFound(group.clone()))
        }
    }
}

/// Stateless publish/resolve core shared by the sweeping-output and outcome
/// resolvers. All coordination happens at the storage adapter; the channel
/// adds no locking, caching, or retries.
pub(crate) struct ScopedChannel {
    store: DynStore,
}

impl ScopedChannel {
    pub(crate) fn new(store: DynStore) -> Self {
        Self { store }
    }

    pub(crate) fn store(&self) -> &DynStore {
        &self.store
    }

    /// Publish one value under the selected scope. Returns the
    /// storage-assigned record id.
    pub(crate) fn consume(
        &self,
        ambiance: &Ambiance,
        name: &str,
        value: Value,
        selector: &ScopeSelector,
        is_graph_outcome: bool,
    ) -> Result<String, SweepError> {
        // Provenance always points at the full current level, even when the
        // storage scope is truncated to an ancestor group.
        let produced_by = ambiance
            .current_level()
            .map(|l| l.runtime_id.clone())
            .unwrap_or_default();
        let write_ambiance = select_write_ambiance(ambiance, selector)?;
        let record = NewExecutionDataRecord {
            plan_execution_id: ambiance.plan_execution_id().to_string(),
            name: name.to_string(),
            value,
            scope_key: scope_key(write_ambiance.levels()),
            levels: write_ambiance.levels().to_vec(),
            produced_by_runtime_id: produced_by,
            is_graph_outcome,
        };
        debug!(
            "publishing '{}' at scope '{}' in plan {}",
            name, record.scope_key, record.plan_execution_id
        );
        match self.store.insert_unique(record) {
            Ok(id) => Ok(id),
            Err(StoreError::AlreadyExists { name, scope_key }) => {
                Err(SweepError::DuplicateName { name, scope_key })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Most specific record visible from `ambiance` under an exact name.
    pub(crate) fn resolve_exact(
        &self,
        ambiance: &Ambiance,
        name: &str,
    ) -> Result<Option<ExecutionDataRecord>, SweepError> {
        let prefixes = visible_prefixes(ambiance);
        let hits =
            self.store
                .query_by_scope_keys(ambiance.plan_execution_id(), name, &prefixes)?;
        // Deepest prefix wins. Depth comes from the known prefix ordering,
        // never from parsing scope keys back into levels. The unique insert
        // guarantees at most one record per depth, so there are no ties.
        Ok(prefixes
            .iter()
            .rev()
            .find_map(|key| hits.iter().find(|r| &r.scope_key == key))
            .cloned())
    }
}
