use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

/// No flags are defined: the walkthrough is entirely keyboard-driven and
/// its topics are compiled in. The parser still provides --help/--version.
#[derive(Parser)]
#[command(name = "primer", version, about = "A terminal walkthrough of short Python topics")]
struct Args {}

fn main() -> std::io::Result<()> {
    Args::parse();

    // Initialize file logger - writes to primer.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("primer.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Primer starting up");

    primer::tui::run()
}
