use serde::{Deserialize, Serialize};

use super::{BuildContext, FileSet, Flags, OutputTargets};

/// A complete synthesis request as produced by the orchestrator, grouping
/// the four input records. This is the wire form the CLI accepts as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisRequest {
    pub context: BuildContext,
    pub files: FileSet,
    pub output_targets: OutputTargets,
    #[serde(default)]
    pub flags: Flags,
}

impl SynthesisRequest {
    /// Parse the orchestrator's JSON wire form
    pub fn from_json_str(raw: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
