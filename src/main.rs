mod api;
mod cli_messages;
mod config;
mod consts;
mod dashboard;
mod events;
mod format;
mod logging;
mod models;
mod render;
mod session;
mod ui;

use crate::api::error::ApiError;
use crate::config::{Config, api_url_from_env, get_config_path, get_log_path, resolve_api_url};
use crate::consts::cli_consts::DEFAULT_DATE_FORMAT;
use crate::dashboard::{DrillDown, Tab};
use crate::session::{
    SessionData, SnapshotOptions, run_snapshot_mode, run_tui_mode, setup_session,
};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Admin dashboard for the Wheel of Life bot",
    long_about = None
)]
struct Args {
    /// Base URL of the admin API (overrides WHEEL_ADMIN_API_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Command to execute; defaults to the interactive dashboard
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive terminal dashboard
    Dashboard {
        /// Paint a dark background behind the dashboard
        #[arg(long, default_value_t = false)]
        with_background: bool,
    },
    /// Load one view and print it as an HTML document
    Snapshot {
        /// Tab to render: users, wheels or statistics
        #[arg(long, value_name = "TAB")]
        tab: Option<Tab>,

        /// User whose wheels to show
        #[arg(long, value_name = "USER_ID")]
        user_id: Option<i64>,

        /// Drill-down to open: new-users, wheel-creators or inactive-users
        #[arg(long, value_name = "KIND")]
        drill_down: Option<DrillDown>,

        /// Write the page to this file instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Save the admin API URL to the config file
    SetApiUrl {
        /// Base URL, e.g. http://localhost:3150
        url: String,
    },
    /// Delete the config file
    ResetConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_path = get_config_path()?;

    let command = args.command.unwrap_or(Command::Dashboard {
        with_background: false,
    });
    match command {
        Command::Dashboard { with_background } => {
            logging::init_file_logger(&get_log_path()?)?;
            let session = open_session(args.api_url.as_deref(), &config_path)?;
            run_tui_mode(session, with_background).await
        }
        Command::Snapshot {
            tab,
            user_id,
            drill_down,
            output,
        } => {
            logging::init_stderr_logger();
            let session = open_session(args.api_url.as_deref(), &config_path)?;
            let options = SnapshotOptions::new(tab, user_id, drill_down);
            run_snapshot_mode(session, options, output).await
        }
        Command::SetApiUrl { url } => set_api_url(&config_path, &url),
        Command::ResetConfig => reset_config(&config_path),
    }
}

/// The saved configuration, if any. A broken file is reported and ignored.
fn load_config(path: &Path) -> Option<Config> {
    match Config::load_optional(path) {
        Ok(config) => config,
        Err(e) => {
            print_cmd_warn!(
                "Ignoring config file",
                "{} could not be read: {}",
                path.display(),
                e
            );
            None
        }
    }
}

/// Resolve the API URL and date format, then build the session.
fn open_session(api_url_flag: Option<&str>, config_path: &Path) -> Result<SessionData, ApiError> {
    let config = load_config(config_path);
    let env_url = api_url_from_env();
    let api_url = resolve_api_url(api_url_flag, env_url.as_deref(), config.as_ref());
    let date_format = config
        .as_ref()
        .map(Config::date_format)
        .unwrap_or(DEFAULT_DATE_FORMAT);
    setup_session(&api_url, date_format)
}

fn set_api_url(config_path: &Path, url: &str) -> Result<(), Box<dyn Error>> {
    let parsed = reqwest::Url::parse(url).map_err(|e| format!("Invalid API URL {}: {}", url, e))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Box::from(format!(
            "Invalid API URL {}: scheme must be http or https",
            url
        )));
    }

    let config = match load_config(config_path) {
        Some(mut config) => {
            config.api_url = url.to_string();
            config
        }
        None => Config::new(url.to_string()),
    };
    config
        .save(config_path)
        .map_err(|e| format!("Failed to save config: {}", e))?;
    print_cmd_success!("API URL saved", "{} in {}", url, config_path.display());
    Ok(())
}

fn reset_config(config_path: &Path) -> Result<(), Box<dyn Error>> {
    if Config::clear(config_path)? {
        print_cmd_success!("Configuration reset", "removed {}", config_path.display());
    } else {
        print_cmd_info!(
            "Nothing to reset",
            "no config file found at {}",
            config_path.display()
        );
    }
    Ok(())
}
