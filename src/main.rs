use anyhow::Result;
use cborg_dashboard::api_client::CborgClient;
use cborg_dashboard::app::cli::Cli;
use cborg_dashboard::app::{render_key_list, render_report, run_dashboard, RunOutcome};
use cborg_dashboard::config::DashboardConfig;
use cborg_dashboard::identity::TrackedKey;
use cborg_dashboard::logging::setup_logging;
use cborg_dashboard::tracking::registry::list_tracked_keys;
use cborg_dashboard::tracking::store::RecordStore;
use clap::Parser;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let mut config = DashboardConfig::resolve(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    tracing::debug!("Using data directory {}", config.data_dir.display());

    let store = RecordStore::open(&config.data_dir);
    let now = chrono::Utc::now();

    if cli.list_keys {
        let keys = list_tracked_keys(&store)?;
        print!("{}", render_key_list(&keys, now));
        return Ok(ExitCode::SUCCESS);
    }

    let api_key = match config.api_key() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let key = TrackedKey::from_api_key(&api_key);
    let client = CborgClient::new(&api_key, &config.base_url, config.timeout());

    match run_dashboard(&client, &store, &key) {
        RunOutcome::Completed(report) => {
            print!("{}", render_report(&report, now));
            Ok(ExitCode::SUCCESS)
        }
        RunOutcome::ConnectionFailed => {
            eprintln!("Failed to connect to CBORG API at {}", config.base_url);
            eprintln!("Check your API key and internet connection");
            Ok(ExitCode::FAILURE)
        }
    }
}
