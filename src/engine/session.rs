use std::borrow::Cow;

use anyhow::{Result, bail};
use log::info;

use crate::engine::{
    blob::{BuiltinInputSource, FileInputSource, InputSource},
    config::{GenConfig, GenConfigBuilder},
    extract::KeyStrategy,
    transform::render_records,
};

/// Holds configuration and generated output for one run.
#[derive(Debug)]
pub struct GenSession {
    pub config: GenConfig,
    pub record_count: usize,
}

impl GenSession {
    pub fn new(config: GenConfig) -> Self {
        Self {
            config,
            record_count: 0,
        }
    }

    pub fn from_builder(builder: GenConfigBuilder) -> Result<Self> {
        Ok(Self::new(builder.build()?))
    }

    pub fn load_input(&self) -> Result<Cow<'static, str>> {
        match (&self.config.input, self.config.strategy) {
            (Some(path), _) => FileInputSource { path: path.clone() }.load(),
            (None, KeyStrategy::Quoted) => {
                bail!("The 'quoted' strategy needs an input file, pass one with --input")
            }
            (None, KeyStrategy::Line) => BuiltinInputSource.load(),
        }
    }

    /// Loads the input and renders it with the configured strategy.
    pub fn generate(&mut self) -> Result<String> {
        let blob = self.load_input()?;
        let keys = self.config.strategy.extract(&blob);
        self.record_count = keys.len();
        info!(
            "Extracted {} keys with the '{}' strategy",
            self.record_count, self.config.strategy
        );
        Ok(render_records(keys))
    }
}
