pub mod display;
pub mod options;
pub mod sequence;
pub mod statement;

pub use display::*;
pub use options::*;
pub use sequence::*;
pub use statement::*;
