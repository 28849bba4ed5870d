//! # Twigsnake Types
//!
//! Core types, traits, and enums shared by the twigsnake crates.
//!
//! This crate provides:
//!
//! - The eight RFC 5424 severities and their ordering
//! - Output flags controlling the metadata written before each line
//! - Logger configuration that can be deserialized with serde
//! - Error types and result aliases
//!
//! ## Example
//!
//! ```
//! use twigsnake_types::{Flags, Severity};
//!
//! let level: Severity = "warn".parse().unwrap();
//! assert_eq!(level, Severity::Warning);
//! assert_eq!(level.ordinal(), 4);
//! assert!(Severity::Error < Severity::Warning);
//!
//! assert!(Flags::DEFAULT.contains(Flags::MSG_PREFIX));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod enums;
pub mod flags;
pub mod traits;
pub mod config;

// Re-export common types for convenience
pub use errors::{TwigsnakeError, Result};
pub use enums::{Flag, Severity};
pub use flags::Flags;
pub use traits::IntoSeverity;
pub use config::LoggerConfig;
