//! Watch Use Case implementation

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::{Duration, Instant};

use ignore::WalkBuilder;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::bundle::BundleUseCase;
use crate::config::BuildConfig;
use crate::domain::ports::WasmBackend;
use crate::error::BundleResult;

use super::cache::ContentTracker;
use super::event::{WatchEvent, WatcherState};

/// A path registered with the file watcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchTarget {
    pub path: PathBuf,
    pub recursive: bool,
}

/// Paths to register for `config`
///
/// The manifest and the entry module are watched through their parent
/// directories because editors replace files on save, which drops a watch
/// placed on the file itself. Missing paths are skipped.
pub fn watch_targets(config: &BuildConfig) -> Vec<WatchTarget> {
    let mut targets = vec![
        WatchTarget {
            path: config.crate_dir.join("src"),
            recursive: true,
        },
        WatchTarget {
            path: config.static_dir.clone(),
            recursive: true,
        },
        WatchTarget {
            path: config.crate_dir.clone(),
            recursive: false,
        },
    ];
    if let Some(parent) = config.entry.parent() {
        targets.push(WatchTarget {
            path: parent.to_path_buf(),
            recursive: false,
        });
    }

    let mut unique: Vec<WatchTarget> = Vec::new();
    for target in targets.into_iter().filter(|t| t.path.exists()) {
        if !unique.contains(&target) {
            unique.push(target);
        }
    }
    unique
}

/// Canonical form of a path that may not exist yet
fn canonical(path: &Path) -> PathBuf {
    let mut existing = path;
    let mut rest = Vec::new();
    while let (Err(_), Some(parent), Some(name)) =
        (existing.canonicalize(), existing.parent(), existing.file_name())
    {
        rest.push(name.to_os_string());
        existing = parent;
    }
    match existing.canonicalize() {
        Ok(mut base) => {
            base.extend(rest.iter().rev());
            base
        }
        Err(_) => path.to_path_buf(),
    }
}

/// Canonicalized view of the paths that matter for a rebuild
#[derive(Debug)]
struct RelevantPaths {
    sources: PathBuf,
    static_dir: PathBuf,
    manifest: PathBuf,
    entry_stem: PathBuf,
    output_dir: PathBuf,
    target_dir: PathBuf,
}

impl RelevantPaths {
    fn new(config: &BuildConfig) -> Self {
        Self {
            sources: canonical(&config.crate_dir.join("src")),
            static_dir: canonical(&config.static_dir),
            manifest: canonical(&config.manifest_path()),
            entry_stem: canonical(&config.entry),
            output_dir: canonical(&config.output_dir),
            target_dir: canonical(&config.crate_dir.join("target")),
        }
    }

    fn is_relevant(&self, path: &Path) -> bool {
        if path.starts_with(&self.output_dir) || path.starts_with(&self.target_dir) {
            return false;
        }
        path.starts_with(&self.sources)
            || path.starts_with(&self.static_dir)
            || path == self.manifest
            || is_entry(path, &self.entry_stem)
    }
}

/// The entry may be configured without its extension
fn is_entry(path: &Path, entry: &Path) -> bool {
    if path == entry {
        return true;
    }
    match (path.file_stem(), path.parent()) {
        (Some(stem), Some(parent)) => {
            entry.parent() == Some(parent)
                && entry.file_name() == Some(stem)
                && matches!(
                    path.extension().and_then(|e| e.to_str()),
                    Some("js" | "mjs")
                )
        }
        _ => false,
    }
}

/// Hash every relevant file that exists when watching starts
///
/// Without a baseline the first touch of each file would look like a change.
fn baseline(targets: &[WatchTarget], relevant: &RelevantPaths) -> ContentTracker {
    let mut tracker = ContentTracker::new();
    for target in targets {
        let walker = WalkBuilder::new(&target.path)
            .standard_filters(false)
            .follow_links(true)
            .max_depth(if target.recursive { None } else { Some(1) })
            .build();

        for entry in walker.flatten() {
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = canonical(entry.path());
            if relevant.is_relevant(&path) {
                tracker.changed(&path);
            }
        }
    }
    tracker
}

/// Watch Use Case
///
/// Orchestrates continuous rebuilding. This is the main entry point for the
/// `yewpack watch` command and for `yewpack serve --watch`.
#[derive(Debug)]
pub struct WatchUseCase<B>
where
    B: WasmBackend,
{
    bundle: BundleUseCase<B>,
    config: BuildConfig,
    initial_build: bool,
}

impl<B> WatchUseCase<B>
where
    B: WasmBackend,
{
    pub fn new(backend: B, config: BuildConfig) -> Self {
        Self {
            bundle: BundleUseCase::new(backend),
            config,
            initial_build: true,
        }
    }

    /// Skip the build that normally runs before watching starts
    pub fn without_initial_build(mut self) -> Self {
        self.initial_build = false;
        self
    }

    /// Start watching (blocking)
    ///
    /// Blocks until `running` is cleared. Build failures are reported through
    /// `on_event` and do not stop the loop; only watcher setup errors are
    /// returned.
    pub fn start<F>(&self, running: Arc<AtomicBool>, on_event: F) -> BundleResult<()>
    where
        F: Fn(WatchEvent),
    {
        let targets = watch_targets(&self.config);
        on_event(WatchEvent::WatchStarted {
            paths: targets
                .iter()
                .map(|t| t.path.display().to_string())
                .collect(),
        });

        if self.initial_build {
            self.rebuild(&on_event);
        }

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    if matches!(event.kind, EventKind::Access(_)) {
                        return;
                    }
                    for path in event.paths {
                        let _ = tx.send(path);
                    }
                }
            },
            Config::default(),
        )?;

        for target in &targets {
            let mode = if target.recursive {
                RecursiveMode::Recursive
            } else {
                RecursiveMode::NonRecursive
            };
            watcher.watch(&target.path, mode)?;
        }

        let relevant = RelevantPaths::new(&self.config);
        let mut tracker = baseline(&targets, &relevant);
        let mut state = WatcherState::new();

        // notify sometimes replays events for existing files right after
        // registration
        let cooldown_end = Instant::now() + Duration::from_millis(500);
        while Instant::now() < cooldown_end && running.load(Ordering::SeqCst) {
            let _ = rx.recv_timeout(Duration::from_millis(50));
        }

        while running.load(Ordering::SeqCst) {
            if let Ok(path) = rx.recv_timeout(Duration::from_millis(50)) {
                let path = canonical(&path);
                if relevant.is_relevant(&path) {
                    state.add_change(path);
                }
            }

            if state.should_rebuild() {
                // Hashed once the debounce settles so a half-written file is never compared
                let changed: Vec<PathBuf> = state
                    .take_changes()
                    .into_iter()
                    .filter(|path| tracker.changed(path))
                    .collect();
                if changed.is_empty() {
                    continue;
                }
                for path in changed {
                    on_event(WatchEvent::FileChanged {
                        path: path.display().to_string(),
                    });
                }
                self.rebuild(&on_event);
            }
        }

        on_event(WatchEvent::Shutdown);
        Ok(())
    }

    fn rebuild(&self, on_event: &impl Fn(WatchEvent)) {
        on_event(WatchEvent::BuildStarted);
        match self.bundle.run(&self.config) {
            Ok(artifacts) => on_event(WatchEvent::BuildComplete {
                files: artifacts.files().count(),
                bytes: artifacts.total_bytes(),
            }),
            Err(e) => {
                tracing::error!("build failed: {}", e);
                on_event(WatchEvent::Error {
                    message: e.to_string(),
                });
            }
        }
    }
}

#[cfg(test)]
pub(super) fn relevant_for_test(config: &BuildConfig, path: &Path) -> bool {
    RelevantPaths::new(config).is_relevant(&canonical(path))
}
