#![recursion_limit = "256"]

pub mod config;
pub use config::*;
