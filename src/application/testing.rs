//! Shared test doubles for the application layer

use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::{tempdir, TempDir};

use crate::config::{BuildConfig, Config};
use crate::domain::ports::{BackendError, CompileRequest, CompiledModule, WasmBackend};

pub(crate) const LOADER: &str = "let wasm_bindgen = (function(){ /* glue */ })();";
pub(crate) const WASM: &[u8] = b"\0asm\x01\0\0\0";
pub(crate) const ENTRY: &str = "wasm_bindgen('./app_bg.wasm');\n";

/// Backend double that writes canned outputs or fails
#[derive(Debug, Default)]
pub(crate) struct FakeBackend {
    pub(crate) failure: Option<String>,
    /// Calls that still fail; `None` fails every call
    pub(crate) failures_left: Cell<Option<usize>>,
    pub(crate) skip_wasm: bool,
    pub(crate) requests: RefCell<Vec<CompileRequest>>,
}

impl FakeBackend {
    pub(crate) fn failing(diagnostic: &str) -> Self {
        Self {
            failure: Some(diagnostic.to_string()),
            ..Self::default()
        }
    }

    /// Fails the first `times` calls, then compiles normally
    pub(crate) fn failing_times(diagnostic: &str, times: usize) -> Self {
        Self {
            failures_left: Cell::new(Some(times)),
            ..Self::failing(diagnostic)
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl WasmBackend for FakeBackend {
    fn name(&self) -> &str {
        "fake"
    }

    fn compile(&self, request: &CompileRequest) -> Result<CompiledModule, BackendError> {
        self.requests.borrow_mut().push(request.clone());

        if let Some(diagnostic) = &self.failure {
            let fail = match self.failures_left.get() {
                None => true,
                Some(0) => false,
                Some(n) => {
                    self.failures_left.set(Some(n - 1));
                    true
                }
            };
            if fail {
                return Err(BackendError::Failed {
                    status: Some(101),
                    diagnostic: diagnostic.clone(),
                });
            }
        }

        fs::create_dir_all(&request.out_dir).unwrap();
        fs::write(request.expected_loader(), LOADER).unwrap();
        if !self.skip_wasm {
            fs::write(request.expected_wasm(), WASM).unwrap();
        }

        CompiledModule {
            loader: request.expected_loader(),
            wasm: request.expected_wasm(),
            log: String::new(),
        }
        .verify()
    }
}

/// Project with a manifest, an entry module and `static/index.html`
pub(crate) fn project() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("Cargo.toml"),
        "[package]\nname = \"app\"\nversion = \"0.1.0\"\n\n[features]\nwee_alloc = []\n",
    )
    .unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src").join("lib.rs"), "").unwrap();
    fs::write(dir.path().join("bootstrap.js"), ENTRY).unwrap();
    fs::create_dir_all(dir.path().join("static")).unwrap();
    fs::write(dir.path().join("static").join("index.html"), "<html></html>").unwrap();
    dir
}

/// Entry `./bootstrap`, output `./dist` with `app.js` and `app_bg.wasm`
pub(crate) fn scenario_config(root: &Path) -> BuildConfig {
    let mut config = Config::default();
    config.entry = PathBuf::from("./bootstrap");
    config.output.dir = PathBuf::from("./dist");
    config.output.script = "app.js".to_string();
    config.output.wasm = "app_bg.wasm".to_string();
    config.static_assets.dir = PathBuf::from("./static");
    config.resolve(root).unwrap()
}
