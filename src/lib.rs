pub mod common;
pub mod config;
pub mod content;
pub mod frontend;
