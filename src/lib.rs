//! tscfg - facade crate re-exporting the synthesis core.
//!
//! Depend on this crate for library use; the `tscfg-cli` crate provides the
//! command-line front-end.

pub use tscfg_core::*;
