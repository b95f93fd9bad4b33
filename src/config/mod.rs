//! Config module - Resolves the options every mocking operation receives
//!
//! Provides:
//! - Options: the immutable value passed to each operation
//! - FileConfig: keys read from the YAML config file
//! - Merging of config file, environment and command-line values

mod file;
mod options;

pub use file::{find_config, load_file_config, FileConfig};
pub use options::{Options, OptionsBuilder};
