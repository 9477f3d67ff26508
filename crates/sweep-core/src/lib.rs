//! Sweep Core: execution-position model, scope keys, and record types
//!
//! Shared vocabulary of the scoped execution-data subsystem: the `Ambiance`
//! a step executor hands to every publish/resolve call, the scope keys that
//! bound visibility, and the write-once record persisted per published value.

pub mod ambiance;
pub mod error;
pub mod record;
pub mod scope;

pub use ambiance::{Ambiance, Level};
pub use error::{StoreError, SweepError};
pub use record::{ExecutionDataRecord, NewExecutionDataRecord};
pub use scope::{scope_key, visible_prefixes, ScopeSelector, GLOBAL_SCOPE_KEY, SCOPE_SEPARATOR};
