//! Ball extractor
//!
//! Writes the masked ball and its thumbnails next to the logo.
//!
//! Usage:
//!   cargo run                                  # Default logo and outputs
//!   cargo run -- --input logo.png --output out/ball.png
//!   cargo run -- --settings config/custom.json
//!   cargo run -- --debug-log                   # Verbose output

use ballcrop::{ExtractSettings, logging};
use tracing::{error, info};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    logging::init(logging::enabled_from_args(&args));

    let settings = ExtractSettings::from_arg_list(&args);

    match ballcrop::run(&settings) {
        Ok(report) => {
            info!("Wrote {} files", report.written.len());
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
