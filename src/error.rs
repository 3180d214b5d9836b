use crate::model::StatementId;
use thiserror::Error;

/// Errors raised by the statement tree when a mutation or lookup is rejected.
///
/// Every mutating operation validates its arguments before touching the tree,
/// so receiving one of these errors means the tree is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Statement {0} is not part of this action sequence")]
    UnknownStatement(StatementId),

    #[error(
        "Statement {statement} does not resolve to a root action sequence (chain stopped at {stopped_at})"
    )]
    UnresolvedParent {
        statement: StatementId,
        stopped_at: StatementId,
    },

    #[error("Failed to parse sequence options JSON: {0}")]
    OptionsParseError(String),
}

/// Errors that can occur while classifying serialized elements into actions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecognitionError {
    #[error("Element '{element}' does not match any registered action variant")]
    UnrecognizedElement { element: String },

    #[error("Command identifier '{command}' is already registered")]
    DuplicateCommand { command: String },
}
