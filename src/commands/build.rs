//! Build command handler

use anyhow::Result;

use yewpack::BuildArtifacts;

use super::{format_bytes, Context};
use crate::cli::BuildArgs;

/// Execute the build command
pub fn cmd_build(ctx: &Context, args: &BuildArgs) -> Result<()> {
    let config = ctx.build_config(&args.overrides())?;
    let artifacts = yewpack::run(&config)?;

    if ctx.json {
        println!("{}", artifacts.to_json());
    } else {
        print!("{}", render_artifacts(&artifacts));
    }
    Ok(())
}

pub fn render_artifacts(artifacts: &BuildArtifacts) -> String {
    let mut out = format!(
        "Built {} ({})\n",
        artifacts.output_dir.display(),
        artifacts.mode
    );
    let width = artifacts.files().map(|f| f.path.len()).max().unwrap_or(0);
    for file in artifacts.files() {
        out.push_str(&format!(
            "  {:<width$}  {}\n",
            file.path,
            format_bytes(file.size),
            width = width
        ));
    }
    out.push_str(&format!(
        "{} files, {}\n",
        artifacts.files().count(),
        format_bytes(artifacts.total_bytes())
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use yewpack::{ArtifactFile, BuildMode};

    #[test]
    fn test_render_artifacts() {
        let artifacts = BuildArtifacts {
            output_dir: PathBuf::from("dist"),
            mode: BuildMode::Production,
            script: ArtifactFile::new(Path::new("yewchat.js"), b"let wasm_bindgen;"),
            wasm: ArtifactFile::new(Path::new("yewchat_bg.wasm"), b"\0asm\x01\0\0\0"),
            assets: vec![ArtifactFile::new(Path::new("index.html"), b"<html></html>")],
        };
        insta::assert_snapshot!(render_artifacts(&artifacts), @r"
        Built dist (production)
          index.html       13 B
          yewchat.js       17 B
          yewchat_bg.wasm  8 B
        3 files, 38 B
        ");
    }
}
