//! Turn Nassi–Shneiderman diagram descriptions into typed trees.

pub mod cli;
pub mod config;
pub mod dsl;
pub mod error;
pub mod export;
pub mod logging;

pub use error::{Error, Result};
