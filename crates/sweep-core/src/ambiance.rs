//! Execution position: Level frames and the Ambiance value type.

use serde::{Deserialize, Serialize};

/// One frame of the execution tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Globally unique id of this execution node instance
    pub runtime_id: String,
    /// Structural label ("STAGE", "STEP_GROUP", ...); not unique, may repeat
    /// across sibling subtrees
    pub group: Option<String>,
}

impl Level {
    pub fn new(runtime_id: impl Into<String>) -> Self {
        Self {
            runtime_id: runtime_id.into(),
            group: None,
        }
    }

    pub fn with_group(runtime_id: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            runtime_id: runtime_id.into(),
            group: Some(group.into()),
        }
    }
}

/// Hierarchical execution position passed to every publish/resolve call.
///
/// Levels run from the outermost frame (pipeline) to the innermost (the node
/// currently producing or resolving data). Ambiances are immutable value
/// objects: truncation and child derivation return new values, the original
/// is never touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ambiance {
    plan_execution_id: String,
    levels: Vec<Level>,
}

impl Ambiance {
    pub fn new(plan_execution_id: impl Into<String>, levels: Vec<Level>) -> Self {
        Self {
            plan_execution_id: plan_execution_id.into(),
            levels,
        }
    }

    pub fn plan_execution_id(&self) -> &str {
        &self.plan_execution_id
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// The frame of the node currently executing, or `None` for the empty
    /// (global) ambiance.
    pub fn current_level(&self) -> Option<&Level> {
        self.levels.last()
    }

    /// A new ambiance keeping only the first `n` levels. `n = 0` yields the
    /// global scope; `n >= depth` is a full copy.
    pub fn truncate(&self, n: usize) -> Ambiance {
        let n = n.min(self.levels.len());
        Ambiance {
            plan_execution_id: self.plan_execution_id.clone(),
            levels: self.levels[..n].to_vec(),
        }
    }

    /// Derive the position of a child node one frame below this one.
    pub fn push(&self, level: Level) -> Ambiance {
        let mut levels = self.levels.clone();
        levels.push(level);
        Ambiance {
            plan_execution_id: self.plan_execution_id.clone(),
            levels,
        }
    }
}
