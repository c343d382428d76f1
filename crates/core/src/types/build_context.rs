use serde::{Deserialize, Serialize};

use super::RuntimeKind;

/// Per-target facts supplied by the build orchestrator: identity, output
/// directory layout, and build-attribute flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildContext {
    /// Opaque target label, e.g. `//app/ts:lib`
    pub target: String,

    /// Binary-output directory, workspace-relative
    pub bin_dir: String,

    /// Generated-sources directory, workspace-relative
    pub gen_files_dir: String,

    #[serde(default)]
    pub runtime_kind: RuntimeKind,

    /// Whether tsickle should generate externs when it runs (default: true)
    #[serde(default = "default_generate_externs")]
    pub generate_externs: bool,

    /// Whether tsickle runs with type annotation support
    #[serde(default)]
    pub tsickle_typed: bool,

    #[serde(default)]
    pub enable_conformance: bool,
}

fn default_generate_externs() -> bool {
    true
}

impl Default for BuildContext {
    fn default() -> Self {
        Self {
            target: String::new(),
            bin_dir: String::new(),
            gen_files_dir: String::new(),
            runtime_kind: RuntimeKind::Other,
            generate_externs: true,
            tsickle_typed: false,
            enable_conformance: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_externs_defaults_on() {
        let context: BuildContext = serde_json::from_str(
            r#"{"target": "//a:b", "bin_dir": "bazel-bin", "gen_files_dir": "bazel-genfiles"}"#,
        )
        .unwrap();
        assert!(context.generate_externs);
        assert_eq!(context.runtime_kind, RuntimeKind::Other);
        assert!(!context.tsickle_typed);
    }

    #[test]
    fn test_runtime_kind_case_insensitive() {
        let context: BuildContext = serde_json::from_str(
            r#"{"target": "//a:b", "bin_dir": "b", "gen_files_dir": "g", "runtime_kind": "NodeJS"}"#,
        )
        .unwrap();
        assert_eq!(context.runtime_kind, RuntimeKind::NodeJs);
    }
}
