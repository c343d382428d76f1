pub mod synthesize;
pub mod validate;

pub use synthesize::synthesize_command;
pub use validate::validate_command;

use anyhow::{Context, Result};
use std::path::Path;
use tscfg_core::SynthesisRequest;

pub(crate) fn read_request(path: &Path) -> Result<SynthesisRequest> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file: {}", path.display()))?;
    SynthesisRequest::from_json_str(&raw)
        .with_context(|| format!("Malformed synthesis request: {}", path.display()))
}
