use crate::engine::{config::GenConfigBuilder, config_file::ConfigFile};
use crate::ui::cli::Cli;

/// Merges CLI arguments over the config file over built-in defaults.
pub fn build_config_builder(args: &Cli, cfg_file: &ConfigFile) -> GenConfigBuilder {
    let mut b = GenConfigBuilder::default();
    b.input(args.input.clone()).echo_stdout(!args.no_stdout);

    if let Some(path) = args.output_file.clone().or_else(|| cfg_file.output_file.clone()) {
        b.output_file(path);
    }
    if let Some(strategy) = args.strategy.or(cfg_file.strategy) {
        b.strategy(strategy);
    }
    b
}
