//! Watch command handler

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context as _, Result};

use yewpack::{WasmPackBackend, WatchEvent, WatchUseCase};

use super::{format_bytes, Context};
use crate::cli::BuildArgs;

/// Execute the watch command
pub fn cmd_watch(ctx: &Context, args: &BuildArgs) -> Result<()> {
    let config = ctx.build_config(&args.overrides())?;
    let backend = WasmPackBackend::new(config.backend_program.clone());
    let use_case = WatchUseCase::new(backend, config);

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install the Ctrl+C handler")?;

    let json = ctx.json;
    use_case.start(running, |event| print_event(json, &event))?;
    Ok(())
}

/// Print one watch event as NDJSON or a timestamped line
pub fn print_event(json: bool, event: &WatchEvent) {
    if json {
        println!("{}", event.to_json());
        return;
    }

    let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
    let line = render_event(&timestamp, event);
    match event {
        WatchEvent::Error { .. } => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}

pub fn render_event(timestamp: &str, event: &WatchEvent) -> String {
    let message = match event {
        WatchEvent::WatchStarted { paths } => {
            format!("Watching {} (Ctrl+C to stop)", paths.join(", "))
        }
        WatchEvent::FileChanged { path } => format!("Changed {}", path),
        WatchEvent::BuildStarted => "Building...".to_string(),
        WatchEvent::BuildComplete { files, bytes } => {
            format!("Built {} files ({})", files, format_bytes(*bytes))
        }
        WatchEvent::Error { message } => format!("Build failed: {}", message),
        WatchEvent::Shutdown => "Stopped".to_string(),
    };
    format!("[{}] {}", timestamp, message)
}
