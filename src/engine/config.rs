// src/engine/config.rs

use crate::engine::extract::KeyStrategy;
use derive_builder::Builder;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_FILE: &str = "default.txt";

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(name = "build_internal"))]
pub struct GenConfig {
    /// Read the blob from this file instead of the built-in one.
    #[builder(default)]
    pub input: Option<PathBuf>,

    #[builder(default = "PathBuf::from(DEFAULT_OUTPUT_FILE)")]
    pub output_file: PathBuf,

    #[builder(default)]
    pub strategy: KeyStrategy,

    #[builder(default = "true")]
    pub echo_stdout: bool,
}

impl GenConfigBuilder {
    pub fn build(&self) -> Result<GenConfig, GenConfigBuilderError> {
        self.build_internal()
    }
}
