//! Input loading and configuration for pulseparse.
//!
//! Reads board exports from:
//! - a single JSON file holding an item or an array of items
//! - a directory, walked recursively for `*.json` files
//! - any reader (stdin)
//!
//! Configuration lives in `.pulseparse.yml` and sets the envelope placeholders.

pub mod config;
pub mod error;
pub mod input;

pub use config::ParserConfig;
pub use error::{FsError, Result};
pub use input::{load_dir, load_file, load_path, load_reader, parse_items};
