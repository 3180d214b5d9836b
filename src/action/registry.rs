use super::{Action, ActionKind};
use crate::element::{Element, SerializedElement};
use crate::error::RecognitionError;
use ahash::AHashMap;
use tracing::{debug, trace, warn};

/// A structural predicate that overrides a variant's built-in recognizer.
pub type RecognizerFn = fn(&Element) -> bool;

#[derive(Debug, Clone, Copy)]
struct Recognizer {
    kind: ActionKind,
    predicate: Option<RecognizerFn>,
}

impl Recognizer {
    fn matches(&self, element: &Element) -> bool {
        match self.predicate {
            Some(predicate) => predicate(element),
            None => self.kind.accepts(element),
        }
    }
}

/// Ordered dispatch table that classifies elements into action variants.
///
/// Recognizers are tried in registration order and the first one that accepts
/// an element wins. The default registry holds every built-in variant in
/// [`ActionKind::ALL`] order.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    recognizers: Vec<Recognizer>,
    commands: AHashMap<&'static str, ActionKind>,
}

#[derive(Debug, Default)]
pub struct ActionRegistryBuilder {
    recognizers: Vec<Recognizer>,
    commands: AHashMap<&'static str, ActionKind>,
}

impl ActionRegistryBuilder {
    /// Starts from an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every built-in variant that is not registered yet.
    pub fn with_builtin_variants(mut self) -> Self {
        for kind in ActionKind::ALL {
            if !self.commands.contains_key(kind.command_id()) {
                self.push_variant(*kind);
            }
        }
        self
    }

    /// Appends a variant using its built-in recognizer.
    ///
    /// Command identifiers are the wire-level discriminator, so registering the
    /// same one twice is rejected.
    pub fn with_variant(mut self, kind: ActionKind) -> Result<Self, RecognitionError> {
        if self.commands.contains_key(kind.command_id()) {
            warn!(command = kind.command_id(), "rejected duplicate action variant");
            return Err(RecognitionError::DuplicateCommand {
                command: kind.command_id().to_string(),
            });
        }
        self.push_variant(kind);
        Ok(self)
    }

    /// Appends a custom predicate that constructs `kind` when it matches.
    ///
    /// Useful for alternative layouts of an existing command. The predicate
    /// takes part in first-match ordering like any other recognizer.
    pub fn with_recognizer(mut self, kind: ActionKind, predicate: RecognizerFn) -> Self {
        self.recognizers.push(Recognizer {
            kind,
            predicate: Some(predicate),
        });
        self
    }

    pub fn build(self) -> ActionRegistry {
        ActionRegistry {
            recognizers: self.recognizers,
            commands: self.commands,
        }
    }

    fn push_variant(&mut self, kind: ActionKind) {
        self.commands.insert(kind.command_id(), kind);
        self.recognizers.push(Recognizer {
            kind,
            predicate: None,
        });
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        ActionRegistryBuilder::new().with_builtin_variants().build()
    }
}

impl ActionRegistry {
    pub fn builder() -> ActionRegistryBuilder {
        ActionRegistryBuilder::new()
    }

    /// Returns the variant of the first recognizer that accepts `element`.
    pub fn recognize(&self, element: &Element) -> Option<ActionKind> {
        let found = self.recognizers.iter().find(|recognizer| {
            let accepted = recognizer.matches(element);
            trace!(
                element = element.name(),
                candidate = recognizer.kind.command_id(),
                accepted,
                "tried action recognizer"
            );
            accepted
        });
        match found {
            Some(recognizer) => {
                debug!(command = recognizer.kind.command_id(), "recognized action element");
                Some(recognizer.kind)
            }
            None => {
                debug!(element = element.name(), "no action variant accepted element");
                None
            }
        }
    }

    /// Classifies `element` and binds a new action to it.
    pub fn bind(&self, element: Element) -> Result<Action, RecognitionError> {
        let kind = self
            .recognize(&element)
            .ok_or_else(|| RecognitionError::UnrecognizedElement {
                element: element.name().to_string(),
            })?;
        Ok(Action::from_element(kind, element))
    }

    /// Looks up a built-in variant registered under `command`.
    pub fn kind_for_command(&self, command: &str) -> Option<ActionKind> {
        self.commands.get(command).copied()
    }

    /// Registered variants in dispatch order.
    pub fn kinds(&self) -> impl Iterator<Item = ActionKind> + '_ {
        self.recognizers.iter().map(|r| r.kind)
    }

    pub fn len(&self) -> usize {
        self.recognizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recognizers.is_empty()
    }
}
