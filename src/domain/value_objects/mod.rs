//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod artifact;
mod build_mode;
mod config_warning;
mod hash;

pub use artifact::ArtifactFile;
pub use build_mode::BuildMode;
pub use config_warning::ConfigWarning;
pub use hash::ContentHash;
