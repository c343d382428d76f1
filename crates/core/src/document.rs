//! The typed configuration document handed to the compiler wrapper.
//!
//! Field names follow the consumer's camelCase contract. Every path is
//! relative to the directory containing the document, with forward slashes
//! on all platforms. Absent optional paths are encoded as `""`, which is
//! what the wrapper expects.

use serde::{Deserialize, Serialize};

/// Language level the compiler emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageTarget {
    #[serde(rename = "es5")]
    Es5,
    #[serde(rename = "es6")]
    Es6,
}

/// The full document: exactly these four top-level keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TsConfig {
    pub compiler_options: CompilerOptions,
    pub bazel_options: BazelOptions,
    pub files: Vec<String>,
    /// Always false; the build system owns recompilation
    pub compile_on_save: bool,
}

/// Options consumed by the compiler front-end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompilerOptions {
    pub module: String,
    pub module_resolution: String,
    pub target: LanguageTarget,
    pub downlevel_iteration: bool,
    pub out_dir: String,
    pub root_dir: String,
    /// Module-resolution roots; order is significant (longest-prefix match
    /// with first-listed-wins tie-breaking happens downstream)
    pub root_dirs: Vec<String>,
    pub skip_default_lib_check: bool,
    pub declaration: bool,
    pub strip_internal: bool,
    pub inline_source_map: bool,
    pub inline_sources: bool,
    pub preserve_const_enums: bool,
    pub experimental_decorators: bool,
    pub emit_decorator_metadata: bool,
    pub jsx: String,
    pub jsx_factory: String,
    pub no_emit_on_error: bool,
    pub no_emit_helpers: bool,
}

/// Options consumed by the build-integration layer of the compiler wrapper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BazelOptions {
    /// Label of the target this document was synthesized for
    pub target: String,
    /// Rewrite module declarations for the browser module loader
    pub module_substitution: bool,
    pub es5_mode: bool,
    pub manifest_path: String,
    pub tsickle_enabled: bool,
    pub externs_path: String,
    pub tsickle_generate_externs: bool,
    pub tsickle_untyped: bool,
    pub type_blacklist_paths: Vec<String>,
    pub compilation_target_src: Vec<String>,
    pub disable_strict_deps: bool,
    /// Empty whenever strict deps are disabled
    pub allowed_strict_deps: Vec<String>,
    pub enable_conformance: bool,
    pub perf_trace_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> TsConfig {
        TsConfig {
            compiler_options: CompilerOptions {
                module: "commonjs".to_string(),
                module_resolution: "node".to_string(),
                target: LanguageTarget::Es6,
                downlevel_iteration: false,
                out_dir: "../bazel-bin".to_string(),
                root_dir: "..".to_string(),
                root_dirs: vec!["..".to_string(), "../bazel-bin".to_string()],
                skip_default_lib_check: true,
                declaration: true,
                strip_internal: true,
                inline_source_map: true,
                inline_sources: true,
                preserve_const_enums: false,
                experimental_decorators: true,
                emit_decorator_metadata: true,
                jsx: "react".to_string(),
                jsx_factory: "React.createElement".to_string(),
                no_emit_on_error: false,
                no_emit_helpers: false,
            },
            bazel_options: BazelOptions {
                target: "//app:lib".to_string(),
                module_substitution: false,
                es5_mode: false,
                manifest_path: String::new(),
                tsickle_enabled: false,
                externs_path: String::new(),
                tsickle_generate_externs: true,
                tsickle_untyped: true,
                type_blacklist_paths: vec![],
                compilation_target_src: vec!["app/lib.ts".to_string()],
                disable_strict_deps: false,
                allowed_strict_deps: vec![],
                enable_conformance: false,
                perf_trace_path: String::new(),
            },
            files: vec!["../app/lib.ts".to_string()],
            compile_on_save: false,
        }
    }

    #[test]
    fn test_document_uses_camel_case_keys() {
        let json = serde_json::to_value(sample_document()).unwrap();
        let top = json.as_object().unwrap();
        assert_eq!(top.len(), 4);
        for key in ["compilerOptions", "bazelOptions", "files", "compileOnSave"] {
            assert!(top.contains_key(key), "missing top-level key {key}");
        }
        assert_eq!(json["compilerOptions"]["moduleResolution"], "node");
        assert_eq!(json["compilerOptions"]["target"], "es6");
        assert_eq!(json["bazelOptions"]["compilationTargetSrc"][0], "app/lib.ts");
        assert_eq!(json["bazelOptions"]["manifestPath"], "");
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let mut json = serde_json::to_value(sample_document()).unwrap();
        json["bazelOptions"]["surprise"] = serde_json::Value::Bool(true);
        let result: Result<TsConfig, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_document_roundtrip() {
        let document = sample_document();
        let json = serde_json::to_string(&document).unwrap();
        let parsed: TsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, document);
    }
}
