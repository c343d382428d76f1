use serde::{Deserialize, Serialize};

/// The file sets a compilation sees: the full transitive inputs, the sources
/// actually being compiled, the strict-deps allow-list, and the paths whose
/// declared types are excluded from emitted declarations.
///
/// `direct_sources` must be an order-preserving subsequence of `all_inputs`;
/// the synthesizer rejects requests where it is not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSet {
    /// Full transitive compiler inputs, in compilation order
    #[serde(default)]
    pub all_inputs: Vec<String>,

    /// The sources compiled/type-checked by this target
    #[serde(default)]
    pub direct_sources: Vec<String>,

    /// Paths callers may depend on under strict-deps checking
    #[serde(default)]
    pub allowed_dependencies: Vec<String>,

    /// Paths whose declared types are dropped from generated declarations
    #[serde(default)]
    pub type_blacklist: Vec<String>,
}
