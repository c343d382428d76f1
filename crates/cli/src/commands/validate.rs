use anyhow::Result;
use std::path::Path;
use tracing::debug;
use tscfg_core::ConfigSynthesizer;

use super::read_request;

pub fn validate_command(request_path: &Path) -> Result<()> {
    let request = read_request(request_path)?;

    ConfigSynthesizer::validate(&request.files, &request.output_targets, &request.flags)?;

    debug!("Request is valid: {}", request_path.display());
    println!("ok: {}", request.context.target);
    Ok(())
}
