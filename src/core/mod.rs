//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Unified result model (ResultItem)
//! - Rendering functions for different output formats
//! - Cache layout path helpers
//! - Error taxonomy and YAML loading
//! - Tracing subscriber setup
//! - Common utilities and constants

pub mod constants;
pub mod error;
pub mod logging;
pub mod model;
pub mod paths;
pub mod render;
pub mod util;
pub mod yaml;
