//! Unified error model for the execution-data subsystem.
//!
//! Every failure is a synchronous return value. The resolvers never retry,
//! log-and-recover, or degrade; each error is a decision for the calling
//! step executor.

use thiserror::Error;

/// Failures surfaced by the storage adapter.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The unique `(plan_execution_id, name, scope_key)` triple is already
    /// occupied. Any backend with an atomic conditional insert can report
    /// this deterministically.
    #[error("STORE/record already exists for '{name}' at scope '{scope_key}'")]
    AlreadyExists { name: String, scope_key: String },

    #[error("STORE/unknown record id '{0}'")]
    UnknownId(String),

    /// Transport or backend failure, passed through unchanged.
    #[error("STORE/backend failure: {0}")]
    Backend(String),
}

/// Failures surfaced to producing and consuming steps.
#[derive(Error, Debug)]
pub enum SweepError {
    /// The named group does not exist on the current execution path. An
    /// authoring error in the pipeline definition, never retried.
    #[error("SCOPE/group '{0}' not present in the current ambiance")]
    GroupNotFound(String),

    /// Two branches published the same name into the same scope. The first
    /// write stands; this call lost the race or repeated the name.
    #[error("SCOPE/name '{name}' already bound at scope '{scope_key}'")]
    DuplicateName { name: String, scope_key: String },

    /// No record with this name is visible from the calling ambiance.
    #[error("RESOLVE/no visible value named '{0}'")]
    NotFound(String),

    /// A publish used a name containing the reserved expression delimiter;
    /// reads could never address it.
    #[error("SCOPE/name '{0}' contains the reserved expression delimiter")]
    ReservedName(String),

    /// Raised by the external expression evaluator.
    #[error("EXPR/{0}")]
    Expression(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
