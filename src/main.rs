use anyhow::Result;
use clap::Parser;

// ──────────────────────────────────────────────────────────────
//  Entry point
// ──────────────────────────────────────────────────────────────
fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::init();

    let args = defaultgen::ui::cli::Cli::parse();
    defaultgen::app_controller::run(args)
}
