//! Test fixtures - reusable content constants for tests.

/// Crate manifest declaring the `wee_alloc` feature
pub const MANIFEST: &str = r#"[package]
name = "yewchat"
version = "0.1.0"
edition = "2021"

[features]
wee_alloc = []

[dependencies]
console_error_panic_hook = { version = "0.1", optional = true }
"#;

/// Entry module appended to the generated loader
pub const BOOTSTRAP: &str = "wasm_bindgen('./app_bg.wasm').then(() => console.log('ready'));\n";

pub const INDEX_HTML: &str = "<!doctype html><html><body><script src=\"app.js\"></script></body></html>\n";

/// Configuration used by the bundling scenarios
pub const SCENARIO_CONFIG: &str = r#"entry = "./bootstrap"

[output]
dir = "./dist"
script = "app.js"
wasm = "app_bg.wasm"

[static_assets]
dir = "./static"
"#;

/// Loader module written by the fake backend
pub const FAKE_LOADER: &str = "let wasm_bindgen = (function(){ return {}; })();";

/// Fake `wasm-pack`: records its arguments and writes `<name>.js` and
/// `<name>_bg.wasm` into `--out-dir`
pub const FAKE_WASM_PACK: &str = r#"#!/bin/sh
if [ -n "$FAKE_WASM_PACK_LOG" ]; then
  printf '%s\n' "$*" >> "$FAKE_WASM_PACK_LOG"
fi
out_dir=""
out_name=""
while [ $# -gt 0 ]; do
  case "$1" in
    --out-dir) out_dir="$2"; shift 2 ;;
    --out-name) out_name="$2"; shift 2 ;;
    *) shift ;;
  esac
done
mkdir -p "$out_dir"
printf '%s' 'let wasm_bindgen = (function(){ return {}; })();' > "$out_dir/$out_name.js"
printf '\000asm\001\000\000\000' > "$out_dir/${out_name}_bg.wasm"
echo "[INFO]: Your wasm pkg is ready to publish at $out_dir."
"#;

/// Fake `wasm-pack` that fails like a rustc type error
pub const FAILING_WASM_PACK: &str = r#"#!/bin/sh
if [ -n "$FAKE_WASM_PACK_LOG" ]; then
  printf '%s\n' "$*" >> "$FAKE_WASM_PACK_LOG"
fi
echo "error[E0308]: mismatched types" >&2
exit 101
"#;
