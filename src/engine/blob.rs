//! Input sources for the generator: the built-in voucher blob, or a file.

use std::borrow::Cow;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::debug;

/// Voucher flags as they appear in a fully unlocked profile.
pub const DEFAULT_BLOB: &str = "v_blank: true
v_overstock_norm: true
v_reroll_surplus: true
v_palette: true
v_planet_tycoon: true
v_nacho_tong: true
v_telescope: true
v_seed_money: true
v_retcon: true
v_grabber: true
v_omen_globe: true
v_petroglyph: true
v_overstock_plus: true
v_liquidation: true
v_hieroglyph: true
v_crystal_ball: true
v_wasteful: true
v_planet_merchant: true
v_reroll_glut: true
v_paint_brush: true
v_tarot_merchant: true
v_antimatter: true
v_magic_trick: true
v_recyclomancy: true
v_tarot_tycoon: true
v_observatory: true
v_directors_cut: true
v_illusion: true
v_glow_up: true
v_hone: true
v_clearance_sale: true
v_money_tree: true";

/// A trait for sources that can provide the text to generate records from.
pub trait InputSource {
    fn load(&self) -> Result<Cow<'static, str>>;
}

pub struct FileInputSource {
    pub path: PathBuf,
}

impl InputSource for FileInputSource {
    fn load(&self) -> Result<Cow<'static, str>> {
        debug!("Reading input from {}", self.path.display());
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read input file: {}", self.path.display()))?;
        Ok(content.into())
    }
}

pub struct BuiltinInputSource;

impl InputSource for BuiltinInputSource {
    fn load(&self) -> Result<Cow<'static, str>> {
        debug!("Using built-in voucher blob");
        Ok(DEFAULT_BLOB.into())
    }
}
