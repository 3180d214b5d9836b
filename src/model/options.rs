use crate::error::ModelError;
use serde::{Deserialize, Serialize};

/// Decides which statement becomes the `parent` of a newly attached child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParentBinding {
    /// Every insertion binds the child to the container it was inserted into.
    #[default]
    Container,
    /// Compatibility mode for documents produced by older tooling.
    ///
    /// Only appending an action, or an indexed action insert that falls back
    /// to appending, binds the container. Indexed action inserts, every
    /// control statement attachment and every `add_loop`/`add_if` form bind
    /// the container's own parent instead.
    Legacy,
}

/// Tunables for an [`ActionSequence`](super::ActionSequence).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SequenceOptions {
    pub parent_binding: ParentBinding,
}

impl SequenceOptions {
    /// Parses options from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        serde_json::from_str(json).map_err(|e| ModelError::OptionsParseError(e.to_string()))
    }
}
