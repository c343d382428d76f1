//! Validation and top-level assembly of the configuration document.

use crate::{
    document::TsConfig,
    error::{Error, Result},
    options::OptionAssembler,
    paths,
    types::{BuildContext, FileSet, Flags, OutputTargets},
};

/// Single entry point: validate the request, then assemble the document.
/// Pure and stateless; callers on any number of threads may share nothing.
pub struct ConfigSynthesizer;

impl ConfigSynthesizer {
    pub fn synthesize(
        context: &BuildContext,
        files: &FileSet,
        outputs: &OutputTargets,
        flags: &Flags,
    ) -> Result<TsConfig> {
        Self::validate(files, outputs, flags)?;

        let workspace_path = paths::compute_workspace_path(&outputs.config_path);
        tracing::debug!(
            label = %context.target,
            config_path = %outputs.config_path,
            workspace_path = %workspace_path,
            "synthesizing configuration"
        );

        let root_dirs = paths::assemble_root_dirs(
            &workspace_path,
            &flags.extra_root_dirs,
            &context.gen_files_dir,
            &context.bin_dir,
        );
        let compiler_options = OptionAssembler::derive_compiler_options(
            context,
            flags,
            outputs,
            &workspace_path,
            root_dirs,
        );
        let bazel_options = OptionAssembler::derive_bazel_options(context, files, flags, outputs);
        let files = OptionAssembler::assemble_files(files, &workspace_path);

        Ok(TsConfig {
            compiler_options,
            bazel_options,
            files,
            compile_on_save: false,
        })
    }

    /// Every check runs before any part of the document is constructed;
    /// there is no partial output.
    pub fn validate(files: &FileSet, outputs: &OutputTargets, flags: &Flags) -> Result<()> {
        if outputs.config_path.is_empty() {
            return Err(Error::InvalidInput("config_path is empty".to_string()));
        }
        if is_absolute(&outputs.config_path) {
            return Err(Error::InvalidInput(format!(
                "config_path '{}' is absolute; all paths must be workspace-relative",
                outputs.config_path
            )));
        }
        if let Some(input) = files.all_inputs.iter().find(|p| is_absolute(p)) {
            return Err(Error::InvalidInput(format!(
                "input '{input}' is absolute; all paths must be workspace-relative"
            )));
        }
        if let Some(dir) = flags.extra_root_dirs.iter().find(|p| is_absolute(p)) {
            return Err(Error::InvalidInput(format!(
                "extra root dir '{dir}' is absolute; all paths must be workspace-relative"
            )));
        }
        if !is_subsequence(&files.direct_sources, &files.all_inputs) {
            return Err(Error::InvalidInput(
                "direct_sources is not an ordered subsequence of all_inputs".to_string(),
            ));
        }
        Ok(())
    }
}

fn is_absolute(path: &str) -> bool {
    path.starts_with('/')
}

fn is_subsequence(needle: &[String], haystack: &[String]) -> bool {
    let mut remaining = haystack.iter();
    needle.iter().all(|item| remaining.any(|other| other == item))
}
