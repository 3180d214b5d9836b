pub mod definition;
pub mod registry;
pub mod variant;

pub use definition::*;
pub use registry::*;
pub use variant::*;
