//! Filesystem infrastructure - model artifact and scratch uploads

mod model_store;
mod scratch;

pub use model_store::FsModelStore;
pub use scratch::{ScratchDir, ScratchFile};
