//! Clean command handler

use std::path::PathBuf;

use anyhow::Result;

use yewpack::Overrides;

use super::Context;

/// Execute the clean command
pub fn cmd_clean(ctx: &Context, out_dir: Option<PathBuf>) -> Result<()> {
    let config = ctx.build_config(&Overrides {
        output_dir: out_dir,
        ..Overrides::default()
    })?;
    let result = yewpack::clean_output(&config)?;

    if ctx.json {
        println!("{}", serde_json::to_string(&result)?);
    } else if result.removed {
        println!("Removed {}", result.path.display());
    } else {
        println!("Nothing to clean: {} does not exist", result.path.display());
    }
    Ok(())
}
