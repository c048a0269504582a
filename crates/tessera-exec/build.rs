use std::env;
use std::path::PathBuf;

#[path = "src/build_config.rs"]
#[allow(dead_code)]
mod build_config;

use build_config::{parse_block_size, Backend, EXEC_BLOCK_SIZE_VAR, REDUCE_BLOCK_SIZE_VAR};

fn main() {
    println!("cargo:rerun-if-changed=src/build_config.rs");
    println!("cargo:rerun-if-env-changed={EXEC_BLOCK_SIZE_VAR}");
    println!("cargo:rerun-if-env-changed={REDUCE_BLOCK_SIZE_VAR}");

    let threaded_host = env::var_os("CARGO_FEATURE_THREADED_HOST").is_some();
    let accelerator = env::var_os("CARGO_FEATURE_BLOCK_PARALLEL_ACCELERATOR").is_some();
    let backend = Backend::from_features(threaded_host, accelerator)
        .unwrap_or_else(|e| panic!("tessera-exec build configuration error: {e}"));

    let exec_block = tunable(EXEC_BLOCK_SIZE_VAR);
    let reduce_block = tunable(REDUCE_BLOCK_SIZE_VAR);

    let settings = format!(
        "/// Backend bound by this build's cargo features.\n\
         pub const ACTIVE_BACKEND: Backend = Backend::{backend:?};\n\
         /// Lanes per block for accelerator parallel loops.\n\
         pub const EXEC_BLOCK_SIZE: usize = {exec_block};\n\
         /// Lanes per block for accelerator reductions.\n\
         pub const REDUCE_BLOCK_SIZE: usize = {reduce_block};\n"
    );

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    std::fs::write(out_dir.join("build_settings.rs"), settings)
        .expect("failed to write build_settings.rs");
}

fn tunable(variable: &str) -> usize {
    let raw = env::var(variable).ok();
    parse_block_size(variable, raw.as_deref())
        .unwrap_or_else(|e| panic!("tessera-exec build configuration error: {e}"))
}
