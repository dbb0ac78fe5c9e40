//! Model artifact domain - the file whose presence gates analysis

mod store;

pub use store::{ModelStatus, ModelStore};

#[cfg(test)]
pub use store::mock;
