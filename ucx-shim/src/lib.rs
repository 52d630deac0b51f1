//! Rust side of the UCX macro-forwarding shim
//!
//! UCX puts a handful of its public API in preprocessor macros and header
//! inlines. This crate gives Rust callers those operations:
//!
//! - [`ptr`]: pointer-or-status classification (`UCS_PTR_IS_PTR`,
//!   `UCS_PTR_IS_ERR`, `UCS_PTR_STATUS`)
//! - [`datatype`]: contiguous datatype descriptors (`ucp_dt_make_contig`)
//! - [`Context`]: `ucp_init` forwarded through the C shim (`native` feature)
//!
//! # Architecture
//!
//! ```text
//! Binding consumers
//!      ↓
//! ucx-shim (this crate) - typed, owned, bit-exact re-expressions
//!      ↓
//! ucx-shim-sys - C shim + bindgen bindings (native only)
//!      ↓
//! libucp / libucs
//! ```
//!
//! The classification and datatype helpers are pure Rust and match the
//! header macros bit for bit, so they work without UCX installed. Anything
//! that needs a live library sits behind the `native` feature.

pub mod config;
pub mod datatype;
mod error;
pub mod params;
pub mod ptr;

#[cfg(feature = "native")]
mod context;
#[cfg(feature = "native")]
mod ucp_config;

pub use config::{ConfigError, ShimConfig};
pub use datatype::{Datatype, DatatypeClass};
pub use error::{Error, Result};
pub use params::{ContextParams, Features, ParamField, ThreadMode};
pub use ucx_shim_ffi::Status;

#[cfg(feature = "native")]
pub use context::{init_raw, version, Context, ContextAttr};
#[cfg(feature = "native")]
pub use ucp_config::UcpConfig;
