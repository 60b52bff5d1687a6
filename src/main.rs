use clap::Parser;
use koob::core::config::{self, CliOverrides, KoobConfig};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "koob", about = "Search the Google Books catalog from your terminal")]
struct Args {
    /// Volumes endpoint to query instead of Google Books
    #[arg(long)]
    endpoint: Option<String>,

    /// How long to keep the loading screen up after results arrive
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Number of volumes to request (1-40)
    #[arg(long, value_name = "N")]
    max_results: Option<u32>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to koob.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("koob.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("koob: {e}, using defaults");
            log::warn!("Config load failed: {}", e);
            KoobConfig::default()
        }
    };

    let overrides = CliOverrides {
        endpoint: args.endpoint,
        delay_ms: args.delay_ms,
        max_results: args.max_results,
    };
    let resolved = config::resolve(&file_config, &overrides);

    log::info!(
        "koob starting up: endpoint={} max_results={} delay={:?}",
        resolved.base_url,
        resolved.max_results,
        resolved.display_delay
    );

    koob::tui::run(resolved)
}
