//! Sweeping outputs: the general-purpose shared data channel between steps.
//!
//! Consumers may address an output by its flat name or by a compound
//! expression like `stepName.output.field`. Expression handling (tokenizing,
//! field projection) belongs entirely to the external evaluator; this
//! resolver only detects the reserved delimiter and hands the whole string
//! over, exposing a single flat-name lookup capability back to it.

use crate::channel::ScopedChannel;
use serde_json::Value;
use std::sync::Arc;
use sweep_core::{Ambiance, ScopeSelector, SweepError};
use sweep_store::DynStore;

/// Reserved delimiter marking a name as an expression.
pub const EXPRESSION_DELIMITER: char = '.';

/// Flat-name lookup the evaluator leans on as a leaf primitive while walking
/// a compound expression. The only capability the resolver exposes to it.
pub trait ExactNameLookup {
    fn resolve_exact_name(
        &self,
        ambiance: &Ambiance,
        name: &str,
    ) -> Result<Option<Value>, SweepError>;
}

/// External expression-language evaluator collaborator. The resolver never
/// calls back into it recursively.
pub trait ExpressionEvaluator: Send + Sync {
    fn evaluate(
        &self,
        ambiance: &Ambiance,
        expression: &str,
        lookup: &dyn ExactNameLookup,
    ) -> Result<Value, SweepError>;
}

/// General-purpose mutable shared data channel between concurrently running
/// steps of one plan execution.
pub struct SweepingOutputResolver {
    channel: ScopedChannel,
    evaluator: Arc<dyn ExpressionEvaluator>,
}

impl SweepingOutputResolver {
    pub fn new(store: DynStore, evaluator: Arc<dyn ExpressionEvaluator>) -> Self {
        Self {
            channel: ScopedChannel::new(store),
            evaluator,
        }
    }

    /// Publish a named output under the selected scope. Returns the record
    /// id. Names containing the expression delimiter are rejected up front:
    /// a read could never address them.
    pub fn publish(
        &self,
        ambiance: &Ambiance,
        name: &str,
        value: Value,
        selector: &ScopeSelector,
    ) -> Result<String, SweepError> {
        if name.contains(EXPRESSION_DELIMITER) {
            return Err(SweepError::ReservedName(name.to_string()));
        }
        self.channel.consume(ambiance, name, value, selector, false)
    }

    /// Resolve a flat name or a compound expression from the caller's
    /// position. Expressions are delegated wholly to the evaluator.
    pub fn resolve(&self, ambiance: &Ambiance, name: &str) -> Result<Value, SweepError> {
        if name.contains(EXPRESSION_DELIMITER) {
            return self.evaluator.evaluate(ambiance, name, self);
        }
        self.resolve_exact_name(ambiance, name)?
            .ok_or_else(|| SweepError::NotFound(name.to_string()))
    }

    /// Same lookup as [`resolve`](Self::resolve) with "maybe absent"
    /// semantics instead of a hard failure.
    pub fn resolve_optional(
        &self,
        ambiance: &Ambiance,
        name: &str,
    ) -> Result<Option<Value>, SweepError> {
        if name.contains(EXPRESSION_DELIMITER) {
            return match self.evaluator.evaluate(ambiance, name, self) {
                Ok(value) => Ok(Some(value)),
                Err(SweepError::NotFound(_)) => Ok(None),
                Err(e) => Err(e),
            };
        }
        self.resolve_exact_name(ambiance, name)
    }
}

impl ExactNameLookup for SweepingOutputResolver {
    fn resolve_exact_name(
        &self,
        ambiance: &Ambiance,
        name: &str,
    ) -> Result<Option<Value>, SweepError> {
        Ok(self
            .channel
            .resolve_exact(ambiance, name)?
            .map(|record| record.value))
    }
}
