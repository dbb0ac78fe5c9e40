//! CLI module for Osteoscan
//!
//! - `serve`: run the web service (default)
//! - `analyze`: classify a single local image

pub mod analyze;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;

/// Osteoscan - X-ray osteoporosis screening service
#[derive(Parser)]
#[command(name = "osteoscan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the web service (default mode)
    Serve(serve::ServeArgs),

    /// Analyze one image and print the result as JSON
    Analyze(analyze::AnalyzeArgs),
}

impl Default for Command {
    fn default() -> Self {
        Self::Serve(serve::ServeArgs::default())
    }
}

/// Loads `.env`, then the layered configuration, then validates it
pub(crate) fn load_config() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["osteoscan"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(Command::default(), Command::Serve(_)));
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from(["osteoscan", "serve", "--host", "127.0.0.1", "--port", "9000"])
            .unwrap();

        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
                assert_eq!(args.port, Some(9000));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_analyze_requires_path() {
        assert!(Cli::try_parse_from(["osteoscan", "analyze"]).is_err());

        let cli = Cli::try_parse_from(["osteoscan", "analyze", "scan.png"]).unwrap();
        match cli.command {
            Some(Command::Analyze(args)) => assert_eq!(args.path.to_str(), Some("scan.png")),
            _ => panic!("expected analyze"),
        }
    }
}
