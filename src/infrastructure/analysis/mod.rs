//! Analysis infrastructure - preprocessing and the random placeholder analyzer

mod preprocess;
mod random_analyzer;

pub use preprocess::{ImagePreprocessor, PreprocessError, PreprocessedImage};
pub use random_analyzer::RandomAnalyzer;
