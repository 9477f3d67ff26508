//! Sweep Resolve: scoped execution-data resolution for pipeline steps
//!
//! Concurrently running steps of one plan execution publish and read named
//! values that are visible only within a well-defined portion of the
//! execution tree — lexical scoping, applied at runtime. A value published
//! at a node is visible to that node and every descendant; a value anchored
//! at a named ancestor group is shared across the group's subtree; a global
//! value is visible throughout the run. Reads pick the most specific
//! visible match.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use serde_json::json;
//! use sweep_core::{Ambiance, Level, ScopeSelector};
//! use sweep_resolve::ExecutionData;
//! use sweep_store::MemoryStore;
//!
//! let data = ExecutionData::new(
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(MemoryStore::new()),
//!     evaluator,
//! );
//!
//! let step = Ambiance::new("plan-1", vec![
//!     Level::with_group("s1", "STAGE"),
//!     Level::new("t1"),
//! ]);
//! data.publish_output(&step, "image", json!("nginx:1.0"), &ScopeSelector::CurrentScope)?;
//!
//! // any descendant of t1 sees it; siblings of t1 do not
//! let value = data.resolve_output(&step.push(Level::new("t2")), "image")?;
//! ```

mod channel;
pub mod outcomes;
pub mod outputs;

pub use outcomes::OutcomeResolver;
pub use outputs::{
    ExactNameLookup, ExpressionEvaluator, SweepingOutputResolver, EXPRESSION_DELIMITER,
};

use serde_json::Value;
use std::sync::Arc;
use sweep_core::{Ambiance, ScopeSelector, SweepError};
use sweep_store::DynStore;

/// Version of the resolution engine
pub const ENGINE_VERSION: &str = "1.0.0";

/// The surface handed to step implementations: both channels behind one
/// handle. Outputs and outcomes live in separate collections, so the same
/// name may exist on both channels without colliding.
pub struct ExecutionData {
    outputs: SweepingOutputResolver,
    outcomes: OutcomeResolver,
}

impl ExecutionData {
    pub fn new(
        output_store: DynStore,
        outcome_store: DynStore,
        evaluator: Arc<dyn ExpressionEvaluator>,
    ) -> Self {
        Self {
            outputs: SweepingOutputResolver::new(output_store, evaluator),
            outcomes: OutcomeResolver::new(outcome_store),
        }
    }

    pub fn publish_output(
        &self,
        ambiance: &Ambiance,
        name: &str,
        value: Value,
        selector: &ScopeSelector,
    ) -> Result<String, SweepError> {
        self.outputs.publish(ambiance, name, value, selector)
    }

    pub fn publish_outcome(
        &self,
        ambiance: &Ambiance,
        name: &str,
        value: Value,
        selector: &ScopeSelector,
        is_graph_outcome: bool,
    ) -> Result<String, SweepError> {
        self.outcomes
            .publish(ambiance, name, value, selector, is_graph_outcome)
    }

    /// Resolve an output by flat name or compound expression.
    pub fn resolve_output(
        &self,
        ambiance: &Ambiance,
        name_or_expression: &str,
    ) -> Result<Value, SweepError> {
        self.outputs.resolve(ambiance, name_or_expression)
    }

    pub fn resolve_output_optional(
        &self,
        ambiance: &Ambiance,
        name_or_expression: &str,
    ) -> Result<Option<Value>, SweepError> {
        self.outputs.resolve_optional(ambiance, name_or_expression)
    }

    /// Resolve an outcome by exact name.
    pub fn resolve_outcome(&self, ambiance: &Ambiance, name: &str) -> Result<Value, SweepError> {
        self.outcomes.resolve(ambiance, name)
    }

    pub fn resolve_outcome_optional(
        &self,
        ambiance: &Ambiance,
        name: &str,
    ) -> Result<Option<Value>, SweepError> {
        self.outcomes.resolve_optional(ambiance, name)
    }

    /// Outcome values one exact node produced, in producer order. Feeds the
    /// execution-graph renderer.
    pub fn outcomes_produced_by(
        &self,
        plan_execution_id: &str,
        runtime_id: &str,
        graph_only: bool,
    ) -> Result<Vec<Value>, SweepError> {
        let ids = self
            .outcomes
            .find_all_by_runtime_id(plan_execution_id, runtime_id, graph_only)?;
        self.outcomes.fetch_outcomes(&ids)
    }

    pub fn outputs(&self) -> &SweepingOutputResolver {
        &self.outputs
    }

    pub fn outcomes(&self) -> &OutcomeResolver {
        &self.outcomes
    }
}
