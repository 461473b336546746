//! yewpack CLI - WebAssembly bundle builder
//!
//! Usage: yewpack <COMMAND>
//!
//! Commands:
//!   build   Compile the crate and write the bundle
//!   watch   Rebuild on change
//!   serve   Serve the output directory
//!   clean   Remove the output directory
//!   config  Show the resolved configuration

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();
    yewpack::logging::init(cli.verbose);

    let ctx = Context::new(cli.json, cli.config)?;

    match cli.command {
        Commands::Build { build } => commands::build::cmd_build(&ctx, &build),
        Commands::Watch { build } => commands::watch::cmd_watch(&ctx, &build),
        Commands::Serve {
            build,
            port,
            no_build,
            watch,
        } => commands::serve::cmd_serve(&ctx, &build, port, no_build, watch),
        Commands::Clean { out_dir } => commands::clean::cmd_clean(&ctx, out_dir),
        Commands::Config => commands::config::cmd_config(&ctx),
    }
}
