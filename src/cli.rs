//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(
    name = "catalog-view",
    version,
    about = "Search, filter, sort and page through a content catalog"
)]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the catalog endpoint URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Shareable link query to start from, e.g. "filters=Paid,Free&search=cat&sort=low"
    #[arg(long, short, value_name = "QUERY")]
    pub query: Option<String>,

    /// Number of pages to reveal
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,

    /// Print the grid as JSON
    #[arg(long, conflicts_with = "interactive")]
    pub json: bool,

    /// Read filter commands from stdin
    #[arg(long, short)]
    pub interactive: bool,
}

impl Cli {
    /// Loads the config file and applies command-line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(url) = &self.url {
            config.source.url = url.clone();
            config.validate()?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_one_page() {
        let cli = Cli::try_parse_from(["catalog-view"]).unwrap();
        assert_eq!(cli.pages, 1);
        assert!(!cli.json);
        assert!(!cli.interactive);
        assert!(cli.query.is_none());
    }

    #[test]
    fn zero_pages_is_rejected() {
        assert!(Cli::try_parse_from(["catalog-view", "--pages", "0"]).is_err());
    }

    #[test]
    fn json_conflicts_with_interactive() {
        assert!(Cli::try_parse_from(["catalog-view", "--json", "-i"]).is_err());
    }

    #[test]
    fn url_override_is_validated() {
        let cli = Cli::try_parse_from([
            "catalog-view",
            "--config",
            "/nonexistent/catalog-view.toml",
            "--url",
            "not a url",
        ])
        .unwrap();
        assert!(matches!(
            cli.load_config(),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
