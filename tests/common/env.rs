//! Test environment builder for isolated yewpack testing.
//!
//! Every command runs with the project directory as its working directory,
//! a private user config directory and no inherited `YEWPACK_*` overrides.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::OnceLock;

use tempfile::TempDir;

use super::fixtures::*;

/// Result of running a yewpack CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Fake backends shared by every test in this binary
///
/// Written once, before any test spawns a process, so no child can inherit
/// a write handle to a script that is about to be executed.
struct FakeBackends {
    ok: PathBuf,
    failing: PathBuf,
}

fn fake_backends() -> &'static FakeBackends {
    static BACKENDS: OnceLock<FakeBackends> = OnceLock::new();
    BACKENDS.get_or_init(|| {
        let dir = Path::new(env!("CARGO_TARGET_TMPDIR"))
            .join(format!("fake-wasm-pack-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("Failed to create fake backend dir");
        FakeBackends {
            ok: write_script(&dir.join("wasm-pack"), FAKE_WASM_PACK),
            failing: write_script(&dir.join("wasm-pack-failing"), FAILING_WASM_PACK),
        }
    })
}

#[cfg(unix)]
fn write_script(path: &Path, content: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    std::fs::write(path, content).expect("Failed to write fake backend");
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to mark fake backend executable");
    path.to_path_buf()
}

#[cfg(not(unix))]
fn write_script(path: &Path, content: &str) -> PathBuf {
    std::fs::write(path, content).expect("Failed to write fake backend");
    path.to_path_buf()
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Temporary directory standing in for the user config dir
    pub config_home: TempDir,
    backend: PathBuf,
}

impl TestEnv {
    /// Empty project using the working fake backend
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            config_home: TempDir::new().expect("Failed to create config home"),
            backend: fake_backends().ok.clone(),
        }
    }

    /// Project with a manifest, `bootstrap.js`, `static/index.html` and the
    /// scenario `yewpack.toml`
    pub fn scenario() -> Self {
        let env = Self::new();
        env.write_project_file("Cargo.toml", MANIFEST);
        env.write_project_file("src/lib.rs", "");
        env.write_project_file("bootstrap.js", BOOTSTRAP);
        env.write_project_file("static/index.html", INDEX_HTML);
        env.write_project_file("yewpack.toml", SCENARIO_CONFIG);
        env
    }

    /// Switch to the backend that always fails
    pub fn with_failing_backend(mut self) -> Self {
        self.backend = fake_backends().failing.clone();
        self
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// File the fake backend appends its arguments to
    pub fn backend_log(&self) -> PathBuf {
        self.config_home.path().join("wasm-pack.log")
    }

    /// Arguments of every backend invocation, one line each
    pub fn backend_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.backend_log())
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Run yewpack in this environment from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run yewpack from project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_yewpack"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("YEWPACK_WASM_PACK", &self.backend)
            .env("YEWPACK_CONFIG_HOME", self.config_home.path())
            .env("FAKE_WASM_PACK_LOG", self.backend_log())
            .env_remove("YEWPACK_MODE")
            .env_remove("YEWPACK_OUT_DIR")
            .env_remove("YEWPACK_PORT")
            .env_remove("YEWPACK_FEATURES")
            .env_remove("YEWPACK_LOG")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute yewpack");
        output_to_result(output)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Write the user-level config file
    pub fn write_user_config(&self, content: &str) {
        let path = self.config_home.path().join("yewpack").join("config.toml");
        std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create directories");
        std::fs::write(path, content).expect("Failed to write file");
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// List all files under `dir`, relative and sorted
pub fn list_files(dir: &Path) -> Vec<String> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<String>) {
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    walk(root, &path, out);
                } else if let Ok(relative) = path.strip_prefix(root) {
                    out.push(relative.to_string_lossy().replace('\\', "/"));
                }
            }
        }
    }
    let mut files = Vec::new();
    walk(dir, dir, &mut files);
    files.sort();
    files
}
