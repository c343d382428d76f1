use serde::{Deserialize, Serialize};

/// Caller-tunable knobs that are not part of the target's own attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    /// Override for the compiler's output directory; defaults to the
    /// context's `bin_dir`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,

    /// Disable strict-deps checking. When set, the allow-list is withheld
    /// from the emitted document.
    #[serde(default)]
    pub disable_strict_deps: bool,

    /// Additional module-resolution roots, searched before the defaults
    #[serde(default)]
    pub extra_root_dirs: Vec<String>,

    /// Where the compiler wrapper should write a performance trace.
    /// Diagnostics are off by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perf_trace_path: Option<String>,
}
