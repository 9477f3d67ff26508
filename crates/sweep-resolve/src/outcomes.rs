//! Outcomes: the step-result channel.
//!
//! Always exact-name addressed. Beyond scope resolution, outcomes answer a
//! second question the graph renderer asks: "what did this exact node
//! produce" — a direct equality lookup on the producing runtime id, not a
//! scope-prefix query.

use crate::channel::ScopedChannel;
use serde_json::Value;
use sweep_core::{Ambiance, ScopeSelector, SweepError};
use sweep_store::DynStore;

pub struct OutcomeResolver {
    channel: ScopedChannel,
}

impl OutcomeResolver {
    pub fn new(store: DynStore) -> Self {
        Self {
            channel: ScopedChannel::new(store),
        }
    }

    /// Publish a named outcome under the selected scope. `is_graph_outcome`
    /// is carried through opaquely for the execution-graph renderer.
    pub fn publish(
        &self,
        ambiance: &Ambiance,
        name: &str,
        value: Value,
        selector: &ScopeSelector,
        is_graph_outcome: bool,
    ) -> Result<String, SweepError> {
        self.channel
            .consume(ambiance, name, value, selector, is_graph_outcome)
    }

    /// Most specific outcome visible from the caller's position.
    pub fn resolve(&self, ambiance: &Ambiance, name: &str) -> Result<Value, SweepError> {
        self.resolve_optional(ambiance, name)?
            .ok_or_else(|| SweepError::NotFound(name.to_string()))
    }

    pub fn resolve_optional(
        &self,
        ambiance: &Ambiance,
        name: &str,
    ) -> Result<Option<Value>, SweepError> {
        Ok(self
            .channel
            .resolve_exact(ambiance, name)?
            .map(|record| record.value))
    }

    /// Record ids of everything one exact node produced, in producer order.
    pub fn find_all_by_runtime_id(
        &self,
        plan_execution_id: &str,
        runtime_id: &str,
        graph_only: bool,
    ) -> Result<Vec<String>, SweepError> {
        let records =
            self.channel
                .store()
                .query_by_producer(plan_execution_id, runtime_id, graph_only)?;
        Ok(records.into_iter().map(|r| r.id).collect())
    }

    /// Direct retrieval by storage identity, bypassing name/scope resolution.
    pub fn fetch_outcome(&self, id: &str) -> Result<Value, SweepError> {
        let mut values = self.fetch_outcomes(&[id.to_string()])?;
        Ok(values.remove(0))
    }

    pub fn fetch_outcomes(&self, ids: &[String]) -> Result<Vec<Value>, SweepError> {
        let records = self.channel.store().fetch_by_ids(ids)?;
        Ok(records.into_iter().map(|r| r.value).collect())
    }
}
