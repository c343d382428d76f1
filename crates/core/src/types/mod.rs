pub mod build_context;
pub mod file_set;
pub mod flags;
pub mod output_targets;
pub mod request;

use crate::impl_case_insensitive_deserialize;
use serde::Serialize;

/// Runtime the compiled output is loaded into. Drives module substitution,
/// emit-helper suppression and the devmode language-level downgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeKind {
    Browser,
    NodeJs,
    #[default]
    Other,
}

// Orchestrators disagree on attribute casing ("nodejs", "NodeJS", ...)
impl_case_insensitive_deserialize!(
    RuntimeKind,
    Browser => "browser",
    NodeJs => "nodejs",
    Other => "other"
);

impl RuntimeKind {
    pub fn is_browser(self) -> bool {
        self == Self::Browser
    }

    pub fn is_nodejs(self) -> bool {
        self == Self::NodeJs
    }
}

// Re-export commonly used types
pub use build_context::BuildContext;
pub use file_set::FileSet;
pub use flags::Flags;
pub use output_targets::OutputTargets;
pub use request::SynthesisRequest;
