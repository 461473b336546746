//! Watch Use Case
//!
//! Rebuilds the bundle whenever the crate sources, the manifest, the entry
//! module or the static assets change:
//! - Debouncing (100ms)
//! - Content-hash filtering of editor noise
//! - Graceful Ctrl+C shutdown
//! - NDJSON output for CI

mod cache;
mod event;
mod use_case;


pub use cache::ContentTracker;
pub use event::{WatchEvent, WatcherState, DEBOUNCE_MS};
pub use use_case::{watch_targets, WatchTarget, WatchUseCase};
