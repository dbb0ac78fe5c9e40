//! Analyze command - classifies one local image with the configured analyzer

use std::path::PathBuf;

use clap::Args;

use crate::domain::Analyzer;
use crate::infrastructure::analysis::RandomAnalyzer;
use crate::infrastructure::filesystem::FsModelStore;
use crate::infrastructure::logging::init_logging;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Image to analyze
    pub path: PathBuf,
}

/// Print the analysis result for `args.path` as pretty JSON
pub async fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let config = super::load_config()?;
    init_logging(&config.logging);

    if !args.path.is_file() {
        anyhow::bail!("{} is not a file", args.path.display());
    }

    let model_store = std::sync::Arc::new(FsModelStore::from_config(&config.model));
    let analyzer = RandomAnalyzer::from_config(model_store, &config.analysis);

    let result = analyzer.analyze(&args.path).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
