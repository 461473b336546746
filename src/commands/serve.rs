//! Serve command handler
//!
//! Runs the development server on a tokio runtime. With `--watch` the watch
//! loop runs on its own thread and shares only the stop flag.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use tokio::net::TcpListener;

use yewpack::{Overrides, WasmPackBackend, WatchUseCase};

use super::build::render_artifacts;
use super::watch::print_event;
use super::Context;
use crate::cli::BuildArgs;

/// Execute the serve command
pub fn cmd_serve(
    ctx: &Context,
    args: &BuildArgs,
    port: Option<u16>,
    no_build: bool,
    watch: bool,
) -> Result<()> {
    let overrides = Overrides {
        port,
        ..args.overrides()
    };
    let config = ctx.build_config(&overrides)?;

    if !no_build {
        let artifacts = yewpack::run(&config)?;
        if !ctx.json {
            print!("{}", render_artifacts(&artifacts));
        }
    } else if !config.output_dir.is_dir() {
        anyhow::bail!(
            "{} does not exist; run 'yewpack build' first",
            config.output_dir.display()
        );
    }

    let running = Arc::new(AtomicBool::new(true));

    let watcher = if watch {
        let backend = WasmPackBackend::new(config.backend_program.clone());
        let use_case = WatchUseCase::new(backend, config.clone()).without_initial_build();
        let running = running.clone();
        let json = ctx.json;
        Some(std::thread::spawn(move || {
            use_case.start(running, |event| print_event(json, &event))
        }))
    } else {
        None
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let root = config.output_dir.clone();
    let json = ctx.json;
    let shutdown_flag = running.clone();

    let served = runtime.block_on(async move {
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("cannot listen on {}", addr))?;

        if json {
            println!(
                "{}",
                serde_json::json!({ "event": "serving", "url": format!("http://{}", addr) })
            );
        } else {
            println!("Serving {} at http://{}", root.display(), addr);
        }

        let shutdown = async move {
            let _ = tokio::signal::ctrl_c().await;
            shutdown_flag.store(false, Ordering::SeqCst);
        };
        yewpack::server::serve(listener, &root, shutdown).await?;
        anyhow::Ok(())
    });

    running.store(false, Ordering::SeqCst);
    if let Some(handle) = watcher {
        match handle.join() {
            Ok(result) => result?,
            Err(_) => anyhow::bail!("watch thread panicked"),
        }
    }
    served
}
