//! Owned UCP context, created through the C shim

use std::mem::{self, MaybeUninit};
use std::ptr::{self, NonNull};

use tracing::debug;
use ucx_shim_ffi::{Status, UCP_ATTR_FIELD_REQUEST_SIZE, UCP_ATTR_FIELD_THREAD_MODE};
use ucx_shim_sys::{
    rust_ucp_init, ucp_cleanup, ucp_config_t, ucp_context, ucp_context_attr_t, ucp_context_h,
    ucp_context_query, ucp_get_version, ucp_params_t,
};

use crate::config::ShimConfig;
use crate::params::{ContextParams, ThreadMode};
use crate::ucp_config::UcpConfig;
use crate::{Error, Result};

/// Forward to `ucp_init` through the shim.
///
/// This is the unchecked pass-through: the status is whatever UCX returned
/// and `*context_p` is only written on success.
///
/// # Safety
/// `params` must point to a valid `ucp_params_t`, `config` must be null or a
/// live config handle, and `context_p` must be writable.
#[inline]
pub unsafe fn init_raw(
    params: *const ucp_params_t,
    config: *const ucp_config_t,
    context_p: *mut ucp_context_h,
) -> Status {
    Status::from_raw(rust_ucp_init(params, config, context_p))
}

/// Attributes reported by `ucp_context_query`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ContextAttr {
    pub request_size: usize,
    pub thread_mode: Option<ThreadMode>,
}

/// A UCP context, cleaned up on drop.
pub struct Context {
    handle: NonNull<ucp_context>,
}

// UCX contexts may move between threads; sharing depends on the thread mode
unsafe impl Send for Context {}

impl Context {
    /// Create a context. `config` of `None` lets UCX read its defaults.
    pub fn new(params: &ContextParams, config: Option<&UcpConfig>) -> Result<Context> {
        let raw_params = params.to_raw();
        let mut handle: ucp_context_h = ptr::null_mut();

        let status = unsafe {
            init_raw(
                &raw_params,
                config.map_or(ptr::null(), UcpConfig::as_ptr),
                &mut handle,
            )
        };
        status.into_result()?;

        let handle = NonNull::new(handle).ok_or(Error::NullHandle("ucp_init"))?;

        let (major, minor, release) = version();
        debug!(
            ucx_version = %format_args!("{}.{}.{}", major, minor, release),
            features = ?params.features,
            "created UCP context"
        );
        Ok(Context { handle })
    }

    /// Create a context from shim configuration.
    pub fn from_config(config: &ShimConfig) -> Result<Context> {
        let ucp_config = UcpConfig::from_settings(&config.ucx)?;
        Self::new(&config.context.params(), Some(&ucp_config))
    }

    /// Take ownership of a handle obtained elsewhere.
    ///
    /// # Safety
    /// `handle` must be a live context that nothing else will clean up.
    pub unsafe fn from_raw(handle: ucp_context_h) -> Option<Context> {
        NonNull::new(handle).map(|handle| Context { handle })
    }

    #[inline]
    pub fn as_raw(&self) -> ucp_context_h {
        self.handle.as_ptr()
    }

    /// Give the handle back without cleaning it up.
    pub fn into_raw(self) -> ucp_context_h {
        let handle = self.handle.as_ptr();
        mem::forget(self);
        handle
    }

    /// `ucp_context_query` for request size and thread mode.
    pub fn query(&self) -> Result<ContextAttr> {
        let mut attr: ucp_context_attr_t = unsafe { MaybeUninit::zeroed().assume_init() };
        attr.field_mask = UCP_ATTR_FIELD_REQUEST_SIZE | UCP_ATTR_FIELD_THREAD_MODE;

        let status = unsafe { ucp_context_query(self.as_raw(), &mut attr) };
        Status::from_raw(status).into_result()?;

        Ok(ContextAttr {
            request_size: attr.request_size,
            thread_mode: ThreadMode::from_raw(attr.thread_mode),
        })
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        debug!("cleaning up UCP context");
        unsafe { ucp_cleanup(self.handle.as_ptr()) };
    }
}

/// Version of the UCX library linked at runtime.
pub fn version() -> (u32, u32, u32) {
    let (mut major, mut minor, mut release) = (0, 0, 0);
    unsafe { ucp_get_version(&mut major, &mut minor, &mut release) };
    (major, minor, release)
}
