use crate::action::Action;
use std::fmt;

/// Handle to a statement stored in an [`ActionSequence`](super::ActionSequence).
///
/// Ids are only meaningful for the sequence that allocated them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatementId(pub(crate) usize);

impl StatementId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StatementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything that can appear as a child of a control statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementKind {
    /// A leaf scheduler command.
    Action(Action),
    /// A plain ordered block. The root of every action sequence is one.
    Sequence,
    /// Repeats its children once per element of the `loop_on` variable.
    Loop { loop_on: String },
    /// Runs its children only when `condition` holds.
    If { condition: String },
}

impl StatementKind {
    pub fn is_control_statement(&self) -> bool {
        !matches!(self, StatementKind::Action(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatementKind::Action(_) => "action",
            StatementKind::Sequence => "sequence",
            StatementKind::Loop { .. } => "loop",
            StatementKind::If { .. } => "if",
        }
    }
}

/// A node of the statement arena.
#[derive(Debug, Clone)]
pub struct Statement {
    pub(crate) kind: StatementKind,
    pub(crate) parent: Option<StatementId>,
    // The container whose child list actually holds this node.
    pub(crate) owner: Option<StatementId>,
    pub(crate) children: Vec<StatementId>,
}

impl Statement {
    pub(crate) fn new(kind: StatementKind) -> Self {
        Self {
            kind,
            parent: None,
            owner: None,
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> &StatementKind {
        &self.kind
    }

    /// The logical parent reference, as bound by the sequence's parent-binding policy.
    pub fn parent(&self) -> Option<StatementId> {
        self.parent
    }

    /// The container that lists this statement among its children.
    pub fn owner(&self) -> Option<StatementId> {
        self.owner
    }

    pub fn children(&self) -> &[StatementId] {
        &self.children
    }

    pub fn as_action(&self) -> Option<&Action> {
        match &self.kind {
            StatementKind::Action(action) => Some(action),
            _ => None,
        }
    }
}
