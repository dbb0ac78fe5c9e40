//! Infrastructure layer - Implementations of domain traits

pub mod analysis;
pub mod filesystem;
pub mod logging;
pub mod observability;
