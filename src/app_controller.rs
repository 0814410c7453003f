use anyhow::{Context, Result};
use log::debug;

use crate::{
    GenSession,
    engine::config_file::{self, ConfigFile},
    ui::{cli::Cli, config::build_config_builder, output},
};

/// The primary orchestration function for the application.
pub fn run(args: Cli) -> Result<()> {
    let cfg_file = if args.no_config {
        ConfigFile::default()
    } else {
        config_file::load_or_default()
    };
    debug!("Loaded config file: {cfg_file:?}");

    let config = build_config_builder(&args, &cfg_file)
        .build()
        .context("Failed to build configuration for session")?;

    let mut session = GenSession::new(config);
    let rendered = session.generate()?;

    output::OutputHandler::new(&rendered, &session.config).handle()
}
