// src/ui/cli.rs

use crate::engine::extract::KeyStrategy;
use clap::Parser;
use std::path::PathBuf;

// ~~~ CLI Arguments ~~~
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION")
)]
pub struct Cli {
    /// Read `key: value` lines from this file instead of the built-in voucher list
    #[clap(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file path (default: default.txt)
    #[clap(short = 'O', long = "output-file")]
    pub output_file: Option<PathBuf>,

    /// Key extraction strategy.
    ///
    /// "line" takes the text before the first colon of each line,
    /// "quoted" captures every double-quoted token of the input file.
    #[clap(short = 's', long = "strategy")]
    pub strategy: Option<KeyStrategy>,

    /// Don't echo the generated records to stdout
    #[clap(long)]
    pub no_stdout: bool,

    /// Skip loading the user config file
    #[clap(long)]
    pub no_config: bool,
}
