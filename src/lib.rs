//! # actionseq - Editable Action Sequence Model
//!
//! **actionseq** is an in-memory model for action-sequence workflow documents: an
//! ordered pipeline of actions, interspersed with loops and conditionals, that
//! typically ends in job scheduler commands. It lets tooling build, inspect and
//! edit such workflows without touching their serialized element tree directly.
//!
//! ## Core Pieces
//!
//! 1.  **Elements**: [`element::SerializedElement`] is the read-only query surface
//!     recognizers work against. [`element::Element`] is the owned implementation
//!     actions are bound to.
//! 2.  **Actions**: [`action::ActionKind`] is the closed catalog of scheduler
//!     commands. Each kind knows its command identifier, its reserved inputs and
//!     how to recognize its own element shape.
//! 3.  **Registry**: [`action::ActionRegistry`] tries recognizers in order and
//!     binds the first match.
//! 4.  **Statement tree**: [`model::ActionSequence`] stores every statement in an
//!     arena and provides the ordered add/insert operations.
//!
//! ## Quick Start
//!
//! ```rust
//! use actionseq::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut sequence = ActionSequence::new();
//!     let root = sequence.root();
//!
//!     // Build: loop over items, then put a guard in front of it.
//!     let each_item = sequence.add_loop(root, "items")?;
//!     sequence.append(each_item, Action::new(ActionKind::SuspendScheduledJob))?;
//!     let guard = sequence.add_if_at(root, "x > 0", 0)?;
//!     assert_eq!(sequence.children(root)?, &[guard, each_item]);
//!
//!     // Classify a serialized element.
//!     let element = Element::new("action-definition")
//!         .with_child(Element::new("component-name").with_text("JobSchedulerComponent"))
//!         .with_child(
//!             Element::new("component-definition")
//!                 .with_child(Element::new("jobAction").with_text("resumeJob")),
//!         );
//!     let registry = ActionRegistry::default();
//!     let action = registry.bind(element)?;
//!     assert_eq!(action.kind(), ActionKind::ResumeScheduledJob);
//!     sequence.append(guard, action)?;
//!
//!     println!("{}", sequence.display(root)?);
//!     Ok(())
//! }
//! ```

pub mod action;
pub mod element;
pub mod error;
pub mod model;
pub mod prelude;
