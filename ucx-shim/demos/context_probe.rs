//! Create a UCP context from shim configuration and report what UCX gave us.
//!
//! ```text
//! UCX_SHIM_LOG=debug UCX_SHIM_FEATURES=tag,stream cargo run --features native --example context_probe
//! ```

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ucx_shim::{ptr, Context, Datatype, ShimConfig};

/// Initialize tracing with the UCX_SHIM_LOG environment variable.
///
/// Defaults to "info" level if UCX_SHIM_LOG is not set.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("UCX_SHIM_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn run() -> ucx_shim::Result<()> {
    let config = ShimConfig::load()?;
    info!(features = ?config.context.feature_flags(), "loaded shim config");

    let (major, minor, release) = ucx_shim::version();
    info!("UCX {}.{}.{}", major, minor, release);

    let context = Context::from_config(&config)?;
    let attr = context.query()?;
    info!(
        request_size = attr.request_size,
        thread_mode = ?attr.thread_mode,
        "context ready"
    );

    let handle = context.as_raw() as *const std::ffi::c_void;
    info!(
        is_ptr = ptr::is_ptr(handle),
        is_err = ptr::is_err(handle),
        status = %ptr::status(handle),
        "context handle classification"
    );
    info!(descriptor = ?Datatype::contig_of::<u64>(), "u64 descriptor");

    Ok(())
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        error!("context probe failed: {}", e);
        std::process::exit(1);
    }
}
