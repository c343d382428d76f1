//! Path arithmetic reconciling the workspace root, the output trees, and the
//! location the configuration document is written to.
//!
//! Everything operates on forward-slash strings; the document must look the
//! same on every platform.

/// Relative path from the config document's directory back to the workspace
/// root: one `..` per directory segment. A document at the root gets the
/// empty path.
pub fn compute_workspace_path(config_path: &str) -> String {
    let dir = match config_path.rsplit_once('/') {
        Some((dir, _file)) => dir,
        None => return String::new(),
    };
    let depth = dir
        .split('/')
        .filter(|seg| !seg.is_empty() && *seg != ".")
        .count();
    vec![".."; depth].join("/")
}

/// Join two forward-slash path fragments; an empty side drops out
pub fn join(base: &str, path: &str) -> String {
    if base.is_empty() {
        path.to_string()
    } else if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{path}")
    }
}

/// Ordered module-resolution roots: caller-supplied extras, then the
/// workspace root, the gen-files tree, and the bin tree. Downstream
/// resolution is longest-prefix with first-listed-wins among ties, so the
/// order is part of the contract.
pub fn assemble_root_dirs(
    workspace_path: &str,
    extra_root_dirs: &[String],
    gen_files_dir: &str,
    bin_dir: &str,
) -> Vec<String> {
    let mut root_dirs = Vec::with_capacity(extra_root_dirs.len() + 3);
    for dir in extra_root_dirs {
        root_dirs.push(join(workspace_path, dir));
    }
    root_dirs.push(workspace_path.to_string());
    root_dirs.push(join(workspace_path, gen_files_dir));
    root_dirs.push(join(workspace_path, bin_dir));
    root_dirs
}
