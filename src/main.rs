//! stockpile — local-first inventory tracker with an interactive terminal
//! menu.

use clap::Parser;
use color_eyre::eyre::Result;
use std::path::PathBuf;
use stockpile::config::{self, load_user_config, resolve_inventory_path, UserConfig};
use stockpile::logging::{self, init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use stockpile::menu::Menu;
use stockpile::store::Store;
use tracing::{info, warn};

/// Stockpile - Local-first inventory tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the inventory file (default: ./inventory.json, or the
    /// `[inventory] file` entry in ~/.stockpile/config.toml)
    #[arg(short, long, env = "STOCKPILE_INVENTORY_FILE")]
    file: Option<PathBuf>,

    /// Enable JSON log format (for log aggregation)
    #[arg(long, env = "STOCKPILE_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "STOCKPILE_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,

    /// Custom log directory (default: ~/.stockpile/logs)
    #[arg(long, env = "STOCKPILE_LOG_DIR")]
    log_dir: Option<String>,
}

fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    // Configure and initialize logging
    let log_dir = args
        .log_dir
        .map(PathBuf::from)
        .unwrap_or_else(|| config::stockpile_home().join("logs"));

    let log_file = log_dir.join(LOG_FILENAME);
    logging::set_log_file_path(log_file.to_string_lossy().to_string());

    let log_config = LogConfig {
        log_dir,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    };

    if let Err(e) = init_logging(log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!();
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    // Load user-level config (~/.stockpile/config.toml); file is optional.
    let user_cfg = load_user_config().unwrap_or_else(|e| {
        warn!("Failed to load user config, using defaults: {e}");
        UserConfig::default()
    });

    let inventory_path = resolve_inventory_path(args.file.as_deref(), &user_cfg);
    info!("Using inventory file {}", inventory_path.display());

    let store = Store::open(inventory_path);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut menu = Menu::new(store, stdin.lock(), stdout.lock());
    menu.run()?;

    Ok(())
}
