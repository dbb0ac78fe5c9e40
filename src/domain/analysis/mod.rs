//! Analysis domain - classification results and the analyzer seam

mod analyzer;
mod result;

pub use analyzer::Analyzer;
pub use result::{AnalysisResult, Outcome};

#[cfg(test)]
pub use analyzer::mock;
