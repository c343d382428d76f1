//! tscfg-core - synthesizes the compiler-configuration document for a
//! Bazel-driven TypeScript compilation.
//!
//! This crate provides functionality to:
//! - Reconcile the workspace root, generated-sources directory, binary-output
//!   directory, and the config file's own location into consistent relative paths
//! - Derive the conditional compiler-option and tool-option sets from build
//!   attributes and file sets
//! - Produce the typed `tsconfig`-shaped document handed to the compiler wrapper
//!
//! The core is pure: no I/O, no shared state. Serialization and file writing
//! belong to the caller.

pub mod document;
pub mod error;
pub mod options;
pub mod paths;
pub mod synthesizer;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use document::{BazelOptions, CompilerOptions, LanguageTarget, TsConfig};
pub use error::{Error, Result};
pub use synthesizer::ConfigSynthesizer;
pub use types::*;
