// src/engine/mod.rs
pub mod blob;
pub mod config;
pub mod config_file;
pub mod extract;
pub mod record;
pub mod session;
pub mod transform;
