pub mod node;
pub mod snapshot;
pub mod store;

pub use node::*;
pub use snapshot::*;
pub use store::*;
