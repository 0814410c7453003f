// src/lib.rs

//! Generates `("key", false, false, false),` default-table rows from `key: value` lines.

pub mod app_controller;
pub mod engine;
pub mod ui;

// Re-export a narrow, testable API surface
pub use engine::{
    config::{GenConfig, GenConfigBuilder},
    extract::KeyStrategy,
    record::Record,
    session::GenSession,
    transform::{render_records, transform, transform_with},
};
