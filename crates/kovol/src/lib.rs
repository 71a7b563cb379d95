//! # Kovol Shared Rust Library
//!
//! Infrastructure shared by the Kovol binaries:
//! - **error**: Common error type wrapping I/O, JSON, and engine errors
//! - **tracing**: Logging setup (stderr, RUST_LOG aware) with segment prefixes
//! - **config**: Loading comparison settings and elicitation data from disk
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kovol::config::{load_compare_config, load_rows};
//! use kovol::error::Error;
//! ```

pub mod config;
pub mod error;
pub mod tracing;

pub use error::{Error, Result};
