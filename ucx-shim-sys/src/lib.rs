//! Raw bindings to UCX and to the C macro shim
//!
//! UCX exposes `UCS_PTR_IS_PTR`, `UCS_PTR_IS_ERR`, `UCS_PTR_STATUS` and
//! `ucp_dt_make_contig` as preprocessor macros and `ucp_init` as a header
//! inline, none of which bindgen can bind. `csrc/ucx_shim.c` turns each of
//! them into a real symbol (`rust_*`) with identical semantics.
//!
//! Everything here is generated and only exists with the `native` feature.

#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]
#![allow(non_snake_case)]
#![allow(dead_code)]
#![allow(clippy::all)]

#[cfg(feature = "native")]
include!(concat!(env!("OUT_DIR"), "/bindings.rs"));
