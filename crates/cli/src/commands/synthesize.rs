use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;
use tscfg_core::ConfigSynthesizer;

use super::read_request;

pub fn synthesize_command(request_path: &Path, out: Option<&Path>, compact: bool) -> Result<()> {
    debug!("Reading synthesis request: {}", request_path.display());
    let request = read_request(request_path)?;

    let document = ConfigSynthesizer::synthesize(
        &request.context,
        &request.files,
        &request.output_targets,
        &request.flags,
    )?;

    let rendered = if compact {
        serde_json::to_string(&document)?
    } else {
        serde_json::to_string_pretty(&document)?
    };

    match out {
        Some(path) => {
            std::fs::write(path, format!("{rendered}\n"))
                .with_context(|| format!("Failed to write document: {}", path.display()))?;
            debug!("Wrote document to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
