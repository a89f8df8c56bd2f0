// handlers/mod.rs - one module per resource, one file per endpoint
pub mod category;

pub use category::*;
