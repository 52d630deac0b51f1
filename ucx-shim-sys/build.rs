//! Build script for the UCX macro shim
//!
//! With the `native` feature this script:
//! 1. Locates UCX through pkg-config
//! 2. Generates bindgen bindings for `csrc/ucx_shim.h` (UCX API + shim)
//! 3. Compiles `csrc/ucx_shim.c` into a static library
//! 4. Exposes the UCX include path to dependents as `DEP_UCP_INCLUDE`
//!
//! Without it nothing is compiled, so the pure-Rust crates build on hosts
//! that have no UCX installed.

#[cfg(feature = "native")]
use std::env;
#[cfg(feature = "native")]
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=csrc/ucx_shim.h");
    println!("cargo:rerun-if-changed=csrc/ucx_shim.c");

    #[cfg(feature = "native")]
    build_native();
}

#[cfg(feature = "native")]
fn build_native() {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    let csrc = manifest_dir.join("csrc");

    // pkg-config emits the rustc-link-lib lines for ucp/uct/ucs/ucm itself
    let ucx = pkg_config::Config::new()
        .atleast_version("1.12")
        .probe("ucx")
        .unwrap_or_else(|e| {
            panic!(
                "Could not find UCX >= 1.12 through pkg-config: {}\n\
                 Install UCX or set PKG_CONFIG_PATH, or build without the `native` feature.",
                e
            )
        });

    // --- Bindings ---
    let header = csrc.join("ucx_shim.h");
    let bindings = bindgen::Builder::default()
        .header(header.to_str().expect("non-UTF-8 manifest path"))
        .clang_args(
            ucx.include_paths
                .iter()
                .map(|p| format!("-I{}", p.display())),
        )
        .allowlist_function("ucp_.*|ucs_.*|rust_.*")
        .allowlist_type("ucp_.*|ucs_.*")
        .allowlist_var("UCP_.*|UCS_.*")
        .prepend_enum_name(false)
        .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()))
        .generate()
        .expect("Failed to generate UCX bindings");
    bindings
        .write_to_file(out_dir.join("bindings.rs"))
        .expect("Failed to write UCX bindings");

    // --- Shim ---
    cc::Build::new()
        .file(csrc.join("ucx_shim.c"))
        .include(&csrc)
        .includes(&ucx.include_paths)
        .compile("ucx_shim");

    // --- Expose include path to downstream crates ---
    // links = "ucp" -> DEP_UCP_INCLUDE
    let include = env::join_paths(ucx.include_paths.iter().chain(std::iter::once(&csrc)))
        .expect("UCX include path contains a separator");
    println!("cargo:include={}", include.to_string_lossy());
}
