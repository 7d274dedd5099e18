//! Error types for the Fabula story bot.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use fabula_error::{ConfigError, FabulaResult};
//!
//! fn load_key() -> FabulaResult<String> {
//!     Err(ConfigError::new("XAI_API_KEY is not set"))?
//! }
//!
//! assert!(load_key().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generation;
mod social;

pub use config::ConfigError;
pub use error::{FabulaError, FabulaErrorKind, FabulaResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use social::{SocialError, SocialErrorKind};
