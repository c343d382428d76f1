//! Derives the compiler-option and tool-option sections from build
//! attributes and file sets.

use crate::{
    document::{BazelOptions, CompilerOptions, LanguageTarget},
    paths,
    types::{BuildContext, FileSet, Flags, OutputTargets},
};

/// Assembles the two option groups and the fully-qualified file list
pub struct OptionAssembler;

impl OptionAssembler {
    /// Options for the compiler front-end. The conditional entries are the
    /// language level (devmode manifests and nodejs loads stay at es5 with
    /// iteration downleveling) and helper emission (suppressed in browsers,
    /// where helpers are provided once by the module loader).
    pub fn derive_compiler_options(
        context: &BuildContext,
        flags: &Flags,
        outputs: &OutputTargets,
        workspace_path: &str,
        root_dirs: Vec<String>,
    ) -> CompilerOptions {
        let devmode = outputs.dev_mode_manifest_path.is_some();
        let (target, downlevel_iteration) = if devmode || context.runtime_kind.is_nodejs() {
            (LanguageTarget::Es5, true)
        } else {
            (LanguageTarget::Es6, false)
        };
        tracing::debug!(
            language_target = ?target,
            downlevel_iteration,
            devmode,
            "derived language level"
        );

        let out_dir = flags.out_dir.as_deref().unwrap_or(&context.bin_dir);

        CompilerOptions {
            module: "commonjs".to_string(),
            module_resolution: "node".to_string(),
            target,
            downlevel_iteration,
            out_dir: paths::join(workspace_path, out_dir),
            root_dir: workspace_path.to_string(),
            root_dirs,
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
            no_emit_helpers: context.runtime_kind.is_browser(),
        }
    }

    /// Options for the build-integration layer of the compiler wrapper
    pub fn derive_bazel_options(
        context: &BuildContext,
        files: &FileSet,
        flags: &Flags,
        outputs: &OutputTargets,
    ) -> BazelOptions {
        // The allow-list never appears in a document that disabled the check
        let allowed_strict_deps = if flags.disable_strict_deps {
            Vec::new()
        } else {
            files.allowed_dependencies.clone()
        };

        BazelOptions {
            target: context.target.clone(),
            module_substitution: context.runtime_kind.is_browser(),
            es5_mode: outputs.dev_mode_manifest_path.is_some(),
            manifest_path: outputs.dev_mode_manifest_path.clone().unwrap_or_default(),
            tsickle_enabled: outputs.externs_path.is_some(),
            externs_path: outputs.externs_path.clone().unwrap_or_default(),
            tsickle_generate_externs: context.generate_externs,
            tsickle_untyped: !context.tsickle_typed,
            type_blacklist_paths: files.type_blacklist.clone(),
            compilation_target_src: files.direct_sources.clone(),
            disable_strict_deps: flags.disable_strict_deps,
            allowed_strict_deps,
            enable_conformance: context.enable_conformance,
            perf_trace_path: flags.perf_trace_path.clone().unwrap_or_default(),
        }
    }

    /// Every transitive input, qualified relative to the document's directory
    pub fn assemble_files(files: &FileSet, workspace_path: &str) -> Vec<String> {
        files
            .all_inputs
            .iter()
            .map(|f| paths::join(workspace_path, f))
            .collect()
    }
}
