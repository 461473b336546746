use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use yewpack::{BuildMode, Overrides};

/// yewpack - package a wasm-pack crate and its static assets into dist/
#[derive(Parser, Debug)]
#[command(name = "yewpack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./yewpack.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every command that builds
#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Build mode: production, development or profiling
    #[arg(long)]
    pub mode: Option<BuildMode>,

    /// Output directory
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Static asset directory copied into the output
    #[arg(long, value_name = "DIR")]
    pub static_dir: Option<PathBuf>,

    /// Crate features passed to the compiler (comma-separated, empty for none)
    #[arg(long, value_delimiter = ',')]
    pub features: Option<Vec<String>>,
}

impl BuildArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            mode: self.mode,
            output_dir: self.out_dir.clone(),
            static_dir: self.static_dir.clone(),
            features: self.features.as_ref().map(|features| {
                features
                    .iter()
                    .map(|f| f.trim().to_string())
                    .filter(|f| !f.is_empty())
                    .collect()
            }),
            port: None,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile the crate and write the bundle
    Build {
        #[command(flatten)]
        build: BuildArgs,
    },

    /// Rebuild whenever sources or static assets change
    Watch {
        #[command(flatten)]
        build: BuildArgs,
    },

    /// Serve the output directory over HTTP
    Serve {
        #[command(flatten)]
        build: BuildArgs,

        /// Port to listen on (defaults to dev_server.port)
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
        port: Option<u16>,

        /// Serve the existing output without building first
        #[arg(long, conflicts_with = "watch")]
        no_build: bool,

        /// Rebuild on change while serving
        #[arg(long)]
        watch: bool,
    },

    /// Remove the output directory
    Clean {
        /// Output directory
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },

    /// Show the resolved configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_build_flags() {
        let cli = Cli::try_parse_from([
            "yewpack",
            "build",
            "--mode",
            "dev",
            "--out-dir",
            "public",
            "--features",
            "wee_alloc,console",
        ])
        .unwrap();
        let Commands::Build { build } = cli.command else {
            panic!("Expected Build command");
        };
        assert_eq!(build.mode, Some(BuildMode::Development));
        assert_eq!(build.out_dir, Some(PathBuf::from("public")));
        assert_eq!(
            build.features,
            Some(vec!["wee_alloc".to_string(), "console".to_string()])
        );
    }

    #[test]
    fn test_cli_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["yewpack", "build", "--mode", "fast"]).is_err());
    }

    #[test]
    fn test_empty_features_flag_clears_features() {
        let cli = Cli::try_parse_from(["yewpack", "build", "--features", ""]).unwrap();
        let Commands::Build { build } = cli.command else {
            panic!("Expected Build command");
        };
        assert_eq!(build.overrides().features, Some(Vec::new()));
    }

    #[test]
    fn test_cli_parse_serve() {
        let cli = Cli::try_parse_from(["yewpack", "serve", "--port", "9000", "--watch"]).unwrap();
        if let Commands::Serve {
            port,
            watch,
            no_build,
            ..
        } = cli.command
        {
            assert_eq!(port, Some(9000));
            assert!(watch);
            assert!(!no_build);
        } else {
            panic!("Expected Serve command");
        }
    }

    #[test]
    fn test_cli_rejects_port_zero() {
        assert!(Cli::try_parse_from(["yewpack", "serve", "--port", "0"]).is_err());
    }

    #[test]
    fn test_cli_no_build_conflicts_with_watch() {
        assert!(Cli::try_parse_from(["yewpack", "serve", "--no-build", "--watch"]).is_err());
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["yewpack", "config", "--json", "-vv", "--config", "ci.toml"])
            .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("ci.toml")));
        assert!(matches!(cli.command, Commands::Config));
    }
}
