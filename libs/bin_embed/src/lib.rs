//! Embeds binary files into Go source code as byte array declarations.
//!
//! The two building blocks are [`Identifier::derive`], which turns a file path
//! into a `camelCase` name, and [`encode`], which renders a byte stream as a
//! line-wrapped array literal. [`Batch`] ties them together for a set of
//! files.
//!
//! # Examples
//!
//! ```
//! use bin_embed::{EncodingConfig, Identifier};
//!
//! let name = Identifier::derive("assets/logo.bin").unwrap();
//! let mut out = Vec::new();
//! bin_embed::encode(&b"\x89PNG"[..], &name, &EncodingConfig::default(), &mut out).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "\nvar assetsLogoBin = [...]byte{\n\t0x89, 0x50, 0x4e, 0x47,\n}\n",
//! );
//! ```

// for integration tests
#[cfg(test)]
use {proptest as _, tempfile as _};

pub mod batch;
mod config;
mod encode;
pub mod error;
mod ident;
mod source;

pub use batch::{Batch, Observer, OutputMode, Plan, Report};
pub use config::{ArrayKind, EncodingConfig};
pub use encode::{ByteLiteral, EncodeSummary, GENERATED_MARKER, encode, write_header};
pub use error::Error;
pub use ident::Identifier;
pub use source::{Source, Stamped};

/// Result type with [`Error`](error::Error) error variant.
pub type Result<T, E = Error> = std::result::Result<T, E>;
