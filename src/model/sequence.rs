use super::display::DisplayStatement;
use super::options::{ParentBinding, SequenceOptions};
use super::statement::{Statement, StatementId, StatementKind};
use crate::action::Action;
use crate::error::ModelError;
use itertools::Itertools;
use tracing::debug;

/// How a child is being attached. Each form has its own parent-binding rule
/// under [`ParentBinding::Legacy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attachment {
    AppendedAction,
    InsertedAction,
    ControlStatement,
}

/// The statement tree of one action-sequence document.
///
/// All statements live in an arena owned by the sequence and are addressed by
/// [`StatementId`]. The root is a plain [`StatementKind::Sequence`] created with
/// the document. Every mutation is validated first and then applied, so a
/// returned error always leaves the tree untouched.
#[derive(Debug, Clone)]
pub struct ActionSequence {
    statements: Vec<Statement>,
    root: StatementId,
    options: SequenceOptions,
}

pub struct ActionSequenceBuilder {
    options: SequenceOptions,
}

impl ActionSequenceBuilder {
    pub fn new() -> Self {
        Self {
            options: SequenceOptions::default(),
        }
    }

    pub fn parent_binding(mut self, binding: ParentBinding) -> Self {
        self.options.parent_binding = binding;
        self
    }

    pub fn options(mut self, options: SequenceOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> ActionSequence {
        ActionSequence {
            statements: vec![Statement::new(StatementKind::Sequence)],
            root: StatementId(0),
            options: self.options,
        }
    }
}

impl Default for ActionSequenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for ActionSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionSequence {
    /// Creates an empty document using [`ParentBinding::Container`].
    pub fn new() -> Self {
        ActionSequenceBuilder::new().build()
    }

    pub fn builder() -> ActionSequenceBuilder {
        ActionSequenceBuilder::new()
    }

    pub fn root(&self) -> StatementId {
        self.root
    }

    pub fn options(&self) -> &SequenceOptions {
        &self.options
    }

    /// Number of allocated statements, attached or not, including the root.
    pub fn statement_count(&self) -> usize {
        self.statements.len()
    }

    pub fn get(&self, id: StatementId) -> Result<&Statement, ModelError> {
        self.statements
            .get(id.0)
            .ok_or(ModelError::UnknownStatement(id))
    }

    pub fn kind(&self, id: StatementId) -> Result<&StatementKind, ModelError> {
        self.get(id).map(Statement::kind)
    }

    /// The action stored at `id`, or `None` if `id` is unknown or a control statement.
    pub fn action(&self, id: StatementId) -> Option<&Action> {
        self.statements.get(id.0).and_then(Statement::as_action)
    }

    /// The children of `id` in definition order.
    pub fn children(&self, id: StatementId) -> Result<&[StatementId], ModelError> {
        self.get(id).map(Statement::children)
    }

    pub fn parent(&self, id: StatementId) -> Result<Option<StatementId>, ModelError> {
        self.get(id).map(Statement::parent)
    }

    /// Rebinds the parent reference of `id`. Child lists are not touched.
    pub fn set_parent(
        &mut self,
        id: StatementId,
        parent: Option<StatementId>,
    ) -> Result<(), ModelError> {
        self.get(id)?;
        if let Some(parent) = parent {
            self.require_container(parent)?;
        }
        self.statements[id.0].parent = parent;
        debug!(statement = %id, parent = ?parent, "rebound parent reference");
        Ok(())
    }

    /// Allocates a detached plain sequence.
    pub fn create_sequence(&mut self) -> StatementId {
        self.allocate(StatementKind::Sequence)
    }

    /// Allocates a detached loop over `loop_on`.
    pub fn create_loop(&mut self, loop_on: impl Into<String>) -> StatementId {
        self.allocate(StatementKind::Loop {
            loop_on: loop_on.into(),
        })
    }

    /// Allocates a detached conditional guarded by `condition`.
    pub fn create_if(&mut self, condition: impl Into<String>) -> StatementId {
        self.allocate(StatementKind::If {
            condition: condition.into(),
        })
    }

    /// Adds `action` as the last child of `container`, which becomes its parent.
    pub fn append(
        &mut self,
        container: StatementId,
        action: Action,
    ) -> Result<StatementId, ModelError> {
        self.require_container(container)?;
        let id = self.allocate(StatementKind::Action(action));
        self.attach(container, id, None, Attachment::AppendedAction);
        Ok(id)
    }

    /// Inserts `action` so that it ends up at `index` among the children of
    /// `container`. An `index` at or past the end appends.
    pub fn insert_at(
        &mut self,
        container: StatementId,
        action: Action,
        index: usize,
    ) -> Result<StatementId, ModelError> {
        self.require_container(container)?;
        let id = self.allocate(StatementKind::Action(action));
        if index >= self.statements[container.0].children.len() {
            self.attach(container, id, None, Attachment::AppendedAction);
        } else {
            self.attach(container, id, Some(index), Attachment::InsertedAction);
        }
        Ok(id)
    }

    /// Adds a detached control statement as the last child of `container`.
    pub fn append_control_statement(
        &mut self,
        container: StatementId,
        statement: StatementId,
    ) -> Result<(), ModelError> {
        self.require_attachable(container, statement)?;
        self.attach(container, statement, None, Attachment::ControlStatement);
        Ok(())
    }

    /// Inserts a detached control statement at `index` among the children of
    /// `container`. An `index` at or past the end appends.
    pub fn insert_control_statement_at(
        &mut self,
        container: StatementId,
        statement: StatementId,
        index: usize,
    ) -> Result<(), ModelError> {
        self.require_attachable(container, statement)?;
        let position = self.position_for(container, index);
        self.attach(container, statement, position, Attachment::ControlStatement);
        Ok(())
    }

    /// Creates a loop over `loop_on` and appends it to `container`.
    pub fn add_loop(
        &mut self,
        container: StatementId,
        loop_on: impl Into<String>,
    ) -> Result<StatementId, ModelError> {
        self.require_container(container)?;
        let id = self.create_loop(loop_on);
        self.attach(container, id, None, Attachment::ControlStatement);
        Ok(id)
    }

    /// Creates a loop over `loop_on` and inserts it at `index` (appending if out of range).
    pub fn add_loop_at(
        &mut self,
        container: StatementId,
        loop_on: impl Into<String>,
        index: usize,
    ) -> Result<StatementId, ModelError> {
        self.require_container(container)?;
        let id = self.create_loop(loop_on);
        let position = self.position_for(container, index);
        self.attach(container, id, position, Attachment::ControlStatement);
        Ok(id)
    }

    /// Creates a conditional and appends it to `container`.
    pub fn add_if(
        &mut self,
        container: StatementId,
        condition: impl Into<String>,
    ) -> Result<StatementId, ModelError> {
        self.require_container(container)?;
        let id = self.create_if(condition);
        self.attach(container, id, None, Attachment::ControlStatement);
        Ok(id)
    }

    /// Creates a conditional and inserts it at `index` (appending if out of range).
    pub fn add_if_at(
        &mut self,
        container: StatementId,
        condition: impl Into<String>,
        index: usize,
    ) -> Result<StatementId, ModelError> {
        self.require_container(container)?;
        let id = self.create_if(condition);
        let position = self.position_for(container, index);
        self.attach(container, id, position, Attachment::ControlStatement);
        Ok(id)
    }

    /// Resolves the document root by following parent references upward.
    ///
    /// Fails with [`ModelError::UnresolvedParent`] when the chain ends (or
    /// loops) without reaching the root.
    pub fn root_document(&self, id: StatementId) -> Result<StatementId, ModelError> {
        self.get(id)?;
        let mut current = id;
        for _ in 0..self.statements.len() {
            if current == self.root {
                return Ok(current);
            }
            match self.statements[current.0].parent {
                Some(parent) => current = parent,
                None => break,
            }
        }
        Err(ModelError::UnresolvedParent {
            statement: id,
            stopped_at: current,
        })
    }

    pub fn loop_on(&self, id: StatementId) -> Result<&str, ModelError> {
        match self.kind(id)? {
            StatementKind::Loop { loop_on } => Ok(loop_on.as_str()),
            other => Err(Self::wrong_kind(id, "loop", other)),
        }
    }

    pub fn set_loop_on(
        &mut self,
        id: StatementId,
        name: impl Into<String>,
    ) -> Result<(), ModelError> {
        let statement = self
            .statements
            .get_mut(id.0)
            .ok_or(ModelError::UnknownStatement(id))?;
        match &mut statement.kind {
            StatementKind::Loop { loop_on } => {
                *loop_on = name.into();
                Ok(())
            }
            other => Err(Self::wrong_kind(id, "loop", other)),
        }
    }

    pub fn condition(&self, id: StatementId) -> Result<&str, ModelError> {
        match self.kind(id)? {
            StatementKind::If { condition } => Ok(condition.as_str()),
            other => Err(Self::wrong_kind(id, "if", other)),
        }
    }

    pub fn set_condition(
        &mut self,
        id: StatementId,
        text: impl Into<String>,
    ) -> Result<(), ModelError> {
        let statement = self
            .statements
            .get_mut(id.0)
            .ok_or(ModelError::UnknownStatement(id))?;
        match &mut statement.kind {
            StatementKind::If { condition } => {
                *condition = text.into();
                Ok(())
            }
            other => Err(Self::wrong_kind(id, "if", other)),
        }
    }

    /// Every action at or below `from`, depth first, in definition order.
    pub fn actions(&self, from: StatementId) -> Result<Vec<StatementId>, ModelError> {
        self.get(from)?;
        let mut found = Vec::new();
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            let statement = &self.statements[id.0];
            if statement.as_action().is_some() {
                found.push(id);
            }
            stack.extend(statement.children.iter().rev().copied());
        }
        Ok(found)
    }

    /// Reserved inputs of every action at or below `from`, de-duplicated in
    /// first-seen order.
    pub fn reserved_input_names(
        &self,
        from: StatementId,
    ) -> Result<Vec<&'static str>, ModelError> {
        Ok(self
            .actions(from)?
            .into_iter()
            .filter_map(|id| self.action(id))
            .flat_map(|action| action.reserved_input_names().iter().copied())
            .unique()
            .collect())
    }

    /// A tree rendering of `id` and its descendants.
    pub fn display(&self, id: StatementId) -> Result<DisplayStatement<'_>, ModelError> {
        self.get(id)?;
        Ok(DisplayStatement {
            sequence: self,
            statement: id,
        })
    }

    fn allocate(&mut self, kind: StatementKind) -> StatementId {
        let id = StatementId(self.statements.len());
        self.statements.push(Statement::new(kind));
        id
    }

    fn require_container(&self, id: StatementId) -> Result<(), ModelError> {
        let statement = self.get(id)?;
        if !statement.kind.is_control_statement() {
            return Err(ModelError::InvalidArgument(format!(
                "statement {} is an action and cannot hold children",
                id
            )));
        }
        Ok(())
    }

    /// Checks that `statement` may be attached under `container` without
    /// breaking the tree.
    fn require_attachable(
        &self,
        container: StatementId,
        statement: StatementId,
    ) -> Result<(), ModelError> {
        self.require_container(container)?;
        let candidate = self.get(statement)?;
        if !candidate.kind.is_control_statement() {
            return Err(ModelError::InvalidArgument(format!(
                "statement {} is an action; attach actions with append or insert_at",
                statement
            )));
        }
        if statement == self.root {
            return Err(ModelError::InvalidArgument(
                "the root sequence cannot be attached to another statement".to_string(),
            ));
        }
        if let Some(owner) = candidate.owner {
            return Err(ModelError::InvalidArgument(format!(
                "statement {} is already a child of {}",
                statement, owner
            )));
        }
        let mut ancestor = Some(container);
        while let Some(current) = ancestor {
            if current == statement {
                return Err(ModelError::InvalidArgument(format!(
                    "attaching {} under {} would make it its own descendant",
                    statement, container
                )));
            }
            ancestor = self.statements[current.0].owner;
        }
        Ok(())
    }

    fn position_for(&self, container: StatementId, index: usize) -> Option<usize> {
        (index < self.statements[container.0].children.len()).then_some(index)
    }

    fn bound_parent(&self, container: StatementId, attachment: Attachment) -> Option<StatementId> {
        match (self.options.parent_binding, attachment) {
            (ParentBinding::Container, _) | (ParentBinding::Legacy, Attachment::AppendedAction) => {
                Some(container)
            }
            (ParentBinding::Legacy, Attachment::InsertedAction | Attachment::ControlStatement) => {
                self.statements[container.0].parent
            }
        }
    }

    /// Links an already validated child into `container`.
    fn attach(
        &mut self,
        container: StatementId,
        child: StatementId,
        position: Option<usize>,
        attachment: Attachment,
    ) {
        let parent = self.bound_parent(container, attachment);
        let node = &mut self.statements[child.0];
        node.parent = parent;
        node.owner = Some(container);

        let children = &mut self.statements[container.0].children;
        let index = match position {
            Some(index) => {
                children.insert(index, child);
                index
            }
            None => {
                children.push(child);
                children.len() - 1
            }
        };
        debug!(
            container = %container,
            child = %child,
            index,
            parent = ?parent,
            "attached statement"
        );
    }

    fn wrong_kind(id: StatementId, expected: &str, found: &StatementKind) -> ModelError {
        ModelError::InvalidArgument(format!(
            "statement {} is not a {} (found {})",
            id,
            expected,
            found.label()
        ))
    }
}
