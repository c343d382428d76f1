use serde::{Deserialize, Serialize};

/// Locations the build writes to. Only `config_path` is required; the
/// optional paths switch devmode and tsickle externs generation on.
///
/// Absent paths are `None`, never an empty string. The empty-string encoding
/// the downstream consumer expects is applied when the document is assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputTargets {
    /// Where the configuration document will be written. Only the directory
    /// depth matters to the core; nothing is written by it.
    pub config_path: String,

    /// Manifest of files emitted by an es5 devmode build
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_mode_manifest_path: Option<String>,

    /// Closure externs file produced by tsickle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub externs_path: Option<String>,
}
