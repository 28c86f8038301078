//! Core configuration and utilities for reviewkit

pub mod config;
pub mod error;
pub mod logging;

pub use config::{Config, ReviewConfig};
pub use error::{CoreError, CoreResult};
