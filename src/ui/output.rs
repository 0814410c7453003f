use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
#[cfg(feature = "colors")]
use colored::Colorize;
use log::info;

use crate::engine::config::GenConfig;

/// Handles the file and console side effects of a run.
pub struct OutputHandler<'a> {
    rendered: &'a str,
    config: &'a GenConfig,
}

impl<'a> OutputHandler<'a> {
    pub fn new(rendered: &'a str, config: &'a GenConfig) -> Self {
        Self { rendered, config }
    }

    /// Writes the file first, then echoes to stdout, so a failed write prints nothing.
    pub fn handle(&self) -> Result<()> {
        self.handle_with(&mut std::io::stdout().lock())
    }

    /// Same as [`handle`](Self::handle) with the console echo going to `console`.
    pub fn handle_with(&self, console: &mut impl Write) -> Result<()> {
        write_to_file(&self.config.output_file, self.rendered)?;
        if self.config.echo_stdout {
            writeln!(console, "{}", self.rendered).context("Failed to write to stdout")?;
        }
        Ok(())
    }
}

/// Truncates `output_path` and replaces its contents with `rendered`.
pub fn write_to_file(output_path: &Path, rendered: &str) -> Result<()> {
    let file = std::fs::File::create(output_path)
        .with_context(|| format!("Failed to create output file: {}", output_path.display()))?;
    let mut writer = std::io::BufWriter::new(file);
    writer
        .write_all(rendered.as_bytes())
        .and_then(|()| writer.flush())
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    info!("Wrote {} bytes to {}", rendered.len(), output_path.display());
    print_status(output_path);
    Ok(())
}

#[cfg(feature = "colors")]
fn print_status(output_path: &Path) {
    eprintln!(
        "{}{}{} {}",
        "[".bold().white(),
        "✓".bold().green(),
        "]".bold().white(),
        format!("Records written to file: {}", output_path.display()).green()
    );
}

#[cfg(not(feature = "colors"))]
fn print_status(output_path: &Path) {
    eprintln!("[✓] Records written to file: {}", output_path.display());
}
