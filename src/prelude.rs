//! Prelude module for convenient imports
//!
//! Re-exports the types most tooling needs to build and classify action
//! sequences.
//!
//! ```rust
//! use actionseq::prelude::*;
//!
//! # fn run() -> Result<()> {
//! let mut sequence = ActionSequence::builder()
//!     .parent_binding(ParentBinding::Container)
//!     .build();
//! let root = sequence.root();
//! sequence.add_if(root, "jobCount > 0")?;
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```

// Statement tree
pub use crate::model::{
    ActionSequence, ActionSequenceBuilder, ParentBinding, SequenceOptions, Statement,
    StatementId, StatementKind,
};

// Actions and recognition
pub use crate::action::{Action, ActionKind, ActionRegistry, ActionRegistryBuilder};

// Elements
pub use crate::element::{Element, SerializedElement};

// Error types
pub use crate::error::{ModelError, RecognitionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
