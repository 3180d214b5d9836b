use super::variant::{
    ACTION_DEFINITION_ELEMENT, ActionKind, COMPONENT_NAME_ELEMENT, JOB_ACTION_PATH,
    JOB_SCHEDULER_COMPONENT,
};
use crate::element::Element;
use itertools::Itertools;
use std::fmt;

/// A leaf statement of an action sequence: one scheduler command.
///
/// An action either owns a freshly built definition element or is bound to the
/// element it was recognized from. Both carry the variant's command identifier
/// in the same place, so either can be handed to a serializer unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    kind: ActionKind,
    definition: Element,
    bound: bool,
}

impl Action {
    /// Creates a new, unbound action with a default definition for `kind`.
    pub fn new(kind: ActionKind) -> Self {
        let mut definition = Element::new(ACTION_DEFINITION_ELEMENT);
        definition.set_text_at(COMPONENT_NAME_ELEMENT, JOB_SCHEDULER_COMPONENT);
        definition.set_text_at(JOB_ACTION_PATH, kind.command_id());
        Self {
            kind,
            definition,
            bound: false,
        }
    }

    /// Binds an action to an existing element without re-checking its shape.
    ///
    /// Callers are expected to have run [`ActionKind::accepts`] (or gone through
    /// an [`ActionRegistry`](super::ActionRegistry)) first.
    pub fn from_element(kind: ActionKind, element: Element) -> Self {
        Self {
            kind,
            definition: element,
            bound: true,
        }
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn command_id(&self) -> &'static str {
        self.kind.command_id()
    }

    pub fn reserved_input_names(&self) -> &'static [&'static str] {
        self.kind.reserved_input_names()
    }

    /// The element this action was parsed from, if any.
    pub fn bound_element(&self) -> Option<&Element> {
        self.bound.then_some(&self.definition)
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// The element a serializer would persist for this action.
    pub fn definition(&self) -> &Element {
        &self.definition
    }

    pub fn into_element(self) -> Element {
        self.definition
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({})",
            self.command_id(),
            self.reserved_input_names().iter().join(", ")
        )
    }
}
