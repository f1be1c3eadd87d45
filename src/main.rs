use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use sentiview::core::config::{self, CliOverrides, ConfigReport};
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(name = "sentiview", about = "Terminal viewer for Reddit sentiment data")]
struct Args {
    /// Feed endpoint to fetch posts from
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Where to write the log file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let mut report = ConfigReport::default();
    let file_config = config::load_or_default(config::config_path().as_deref(), &mut report);
    let cli = CliOverrides {
        endpoint: args.endpoint,
        log_file: args.log_file,
    };
    let resolved = config::resolve(&file_config, &cli, &mut report);

    // The terminal belongs to the UI, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }
    report.replay();

    log::info!("sentiview starting up, endpoint: {}", resolved.endpoint);

    sentiview::tui::run(resolved)
}
