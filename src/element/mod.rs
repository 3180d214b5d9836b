pub mod node;
pub mod query;

pub use node::*;
pub use query::*;
