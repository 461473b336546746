//! Application Layer
//!
//! Use cases that orchestrate the build flow.
//! This layer:
//! - Depends on the Domain layer (ports, value objects)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BundleUseCase` - Validate, compile, copy static assets, emit artifacts
//! - `WatchUseCase` - Rebuild on source and asset changes
//! - `clean_output` - Remove the output directory

pub mod bundle;
pub mod clean;
pub mod watch;

#[cfg(test)]
mod testing;

pub use bundle::{compose_script, resolve_entry, run, BuildArtifacts, BundleUseCase};
pub use clean::{clean_output, CleanResult};
pub use watch::{
    watch_targets, ContentTracker, WatchEvent, WatchTarget, WatchUseCase, WatcherState,
    DEBOUNCE_MS,
};
