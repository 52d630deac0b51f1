//! Build script for ABI compatibility testing
//!
//! With the `native` feature this script generates a C translation unit
//! against the installed UCX headers that reports type sizes, field offsets
//! and the values of macros the shim does not forward, then compiles it so
//! the tests can compare the Rust definitions against it.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    #[cfg(feature = "native")]
    generate_reference_c_code();
}

#[cfg(feature = "native")]
fn generate_reference_c_code() {
    use std::env;
    use std::path::PathBuf;

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));

    // Exported by ucx-shim-sys (links = "ucp")
    let include = env::var_os("DEP_UCP_INCLUDE")
        .expect("DEP_UCP_INCLUDE not set; ucx-shim-sys must be built with `native`");

    let c_code = r#"
#include <stddef.h>
#include <stdint.h>
#include <ucp/api/ucp.h>

/* Reference UCX layouts for ABI verification */

size_t ucx_ref_status_size(void) { return sizeof(ucs_status_t); }
size_t ucx_ref_datatype_size(void) { return sizeof(ucp_datatype_t); }

size_t ucx_ref_params_size(void) { return sizeof(ucp_params_t); }
size_t ucx_ref_params_align(void) { return _Alignof(ucp_params_t); }
size_t ucx_ref_params_field_mask_offset(void) { return offsetof(ucp_params_t, field_mask); }
size_t ucx_ref_params_features_offset(void) { return offsetof(ucp_params_t, features); }
size_t ucx_ref_params_request_size_offset(void) { return offsetof(ucp_params_t, request_size); }
size_t ucx_ref_params_tag_sender_mask_offset(void) { return offsetof(ucp_params_t, tag_sender_mask); }
size_t ucx_ref_params_mt_workers_shared_offset(void) { return offsetof(ucp_params_t, mt_workers_shared); }
size_t ucx_ref_params_estimated_num_eps_offset(void) { return offsetof(ucp_params_t, estimated_num_eps); }
size_t ucx_ref_params_estimated_num_ppn_offset(void) { return offsetof(ucp_params_t, estimated_num_ppn); }

/* Macros outside the shim's forwarding surface */
uintptr_t ucx_ref_status_ptr(int status) { return (uintptr_t)UCS_STATUS_PTR((ucs_status_t)status); }
int ucx_ref_status_is_err(int status) { return UCS_STATUS_IS_ERR((ucs_status_t)status); }
uint64_t ucx_ref_dt_make_iov(void) { return ucp_dt_make_iov(); }

int VERIFY_UCS_ERR_LAST = UCS_ERR_LAST;
int VERIFY_UCP_DATATYPE_SHIFT = UCP_DATATYPE_SHIFT;
"#;

    let c_file = out_dir.join("ucx_reference.c");
    std::fs::write(&c_file, c_code).expect("Failed to write C reference code");

    cc::Build::new()
        .file(&c_file)
        .includes(env::split_paths(&include))
        .warnings(false)
        .compile("ucx_reference");
}
