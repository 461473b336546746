//! Config command handler
//!
//! Prints the configuration after file discovery and environment overrides.

use anyhow::Result;

use yewpack::config::ConfigSource;

use super::Context;

fn describe(source: &ConfigSource) -> String {
    match source {
        ConfigSource::Project(path) => path.display().to_string(),
        ConfigSource::User(path) => format!("{} (user)", path.display()),
        ConfigSource::Defaults => "built-in defaults".to_string(),
    }
}

/// Execute the config command
pub fn cmd_config(ctx: &Context) -> Result<()> {
    let loaded = ctx.load()?;
    loaded.config.validate()?;

    if ctx.json {
        let output = serde_json::json!({
            "source": describe(&loaded.source),
            "config": loaded.config,
            "warnings": loaded.warnings.iter().map(|w| w.to_string()).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("# source: {}", describe(&loaded.source));
        print!("{}", toml::to_string_pretty(&loaded.config)?);
    }
    Ok(())
}
