//! Utility modules: build info, settings, JSON persistence.

pub mod build_info;
pub mod config;
pub mod persistence;

pub use config::Settings;
