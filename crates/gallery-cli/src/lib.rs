//! CLI library components for the photo gallery.

pub mod cli;
pub mod config;
pub mod logging;
pub mod render;
pub mod script;
