//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `ecosmart_core` linkage outside the browser.
//! - Replay one headless page session and print what the page would show.

mod session;

use chrono::Datelike;
use clap::Parser;
use ecosmart_core::{JsonFilePreferenceStore, SiteConfig};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ecosmart", version, about = "EcoSmart page behaviour smoke runner")]
struct Args {
    /// Area name submitted to the pickup schedule form.
    #[arg(long)]
    area: Option<String>,

    /// Number of theme toggle clicks to replay.
    #[arg(long, default_value_t = 0)]
    toggles: u32,

    /// JSON file used as the durable preference store.
    #[arg(long, env = "ECOSMART_PREFS_PATH")]
    prefs: Option<PathBuf>,

    /// Directory for rolling log files (absolute).
    #[arg(long, env = "ECOSMART_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Optional JSON config override.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let log_dir = args
        .log_dir
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("ecosmart-logs"));
    if let Err(err) = ecosmart_core::init_logging(
        ecosmart_core::default_log_level(),
        &log_dir.to_string_lossy(),
    ) {
        eprintln!("logging disabled: {err}");
    }

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    println!("ecosmart_core ping={}", ecosmart_core::ping());
    println!("ecosmart_core version={}", ecosmart_core::core_version());

    let counters = session::run_counters(
        &config,
        &session::dashboard_counters(),
        rand::random::<f64>,
    );
    for result in counters {
        println!(
            "counter label=\"{}\" value={} frames={}",
            result.label, result.text, result.frames
        );
    }

    match session::lookup_schedule(&config, args.area.as_deref()) {
        Some(message) => println!("schedule {message}"),
        None => println!("schedule skipped"),
    }

    let prefs = args
        .prefs
        .unwrap_or_else(|| std::env::temp_dir().join("ecosmart-prefs.json"));
    let theme = session::cycle_theme(&config, JsonFilePreferenceStore::new(&prefs), args.toggles);
    println!(
        "theme mode={} glyph={} store={}",
        theme.as_str(),
        theme.toggle_glyph(),
        prefs.display()
    );

    println!(
        "footer year={}",
        session::footer_text(chrono::Local::now().year())
    );
}

fn load_config(path: Option<&std::path::Path>) -> Result<SiteConfig, String> {
    let Some(path) = path else {
        return Ok(SiteConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
    SiteConfig::from_json(&raw).map_err(|err| format!("invalid config `{}`: {err}", path.display()))
}
