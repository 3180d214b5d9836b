use super::sequence::ActionSequence;
use super::statement::{StatementId, StatementKind};
use std::fmt;

/// Renders a statement and its descendants as a box-drawing tree.
///
/// ```text
/// └── sequence
///     ├── loop on items
///     │   └── action suspendJob(jobName)
///     └── if x > 0
/// ```
pub struct DisplayStatement<'a> {
    pub(crate) sequence: &'a ActionSequence,
    pub(crate) statement: StatementId,
}

impl<'a> fmt::Display for DisplayStatement<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_as_tree(self.statement, f, "", true)
    }
}

impl<'a> DisplayStatement<'a> {
    fn fmt_as_tree(
        &self,
        id: StatementId,
        f: &mut fmt::Formatter<'_>,
        prefix: &str,
        is_last: bool,
    ) -> fmt::Result {
        let node_marker = if is_last { "└── " } else { "├── " };
        write!(f, "{}{}", prefix, node_marker)?;

        let Ok(statement) = self.sequence.get(id) else {
            return writeln!(f, "<unknown statement {}>", id);
        };
        match statement.kind() {
            StatementKind::Action(action) => writeln!(f, "action {}", action)?,
            StatementKind::Sequence => writeln!(f, "sequence")?,
            StatementKind::Loop { loop_on } => writeln!(f, "loop on {}", loop_on)?,
            StatementKind::If { condition } => writeln!(f, "if {}", condition)?,
        }

        let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        let children = statement.children();
        for (i, child) in children.iter().enumerate() {
            self.fmt_as_tree(*child, f, &child_prefix, i + 1 == children.len())?;
        }
        Ok(())
    }
}
