use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cborg")]
#[command(about = "Track CBORG models and spend, showing what changed since the last run")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CBORG_DASHBOARD_GIT_SHA"), ")"))]
pub struct Cli {
    /// Config file (defaults to <config dir>/cborg-dashboard/config.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding per-key records (overrides config)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// API base URL (overrides config)
    #[arg(long)]
    pub base_url: Option<String>,

    /// List all tracked API keys instead of running the dashboard
    #[arg(long)]
    pub list_keys: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "cborg",
            "--data-dir",
            "/tmp/cborg",
            "--base-url",
            "http://localhost:4000",
            "--list-keys",
            "--debug",
        ]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/cborg")));
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:4000"));
        assert!(cli.list_keys);
        assert!(cli.debug);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["cborg"]);
        assert!(!cli.list_keys);
        assert!(!cli.debug);
        assert!(cli.data_dir.is_none());
    }
}
