pub mod environment;
pub mod registry;

pub use environment::*;
pub use registry::*;
