//! Owned `ucp_config_t`

use std::ffi::CString;
use std::ptr::{self, NonNull};

use tracing::{debug, warn};
use ucx_shim_ffi::Status;
use ucx_shim_sys::{ucp_config_modify, ucp_config_read, ucp_config_release, ucp_config_t};

use crate::config::UcxConfig;
use crate::{Error, Result};

/// A UCX configuration handle, released on drop.
pub struct UcpConfig {
    raw: NonNull<ucp_config_t>,
}

// The handle is plain heap data owned by this value
unsafe impl Send for UcpConfig {}

impl UcpConfig {
    /// `ucp_config_read`. `None` for either argument means UCX's default.
    pub fn read(env_prefix: Option<&str>, file: Option<&str>) -> Result<UcpConfig> {
        let env_prefix = env_prefix.map(CString::new).transpose()?;
        let file = file.map(CString::new).transpose()?;

        let mut raw: *mut ucp_config_t = ptr::null_mut();
        let status = unsafe {
            ucp_config_read(
                env_prefix.as_ref().map_or(ptr::null(), |s| s.as_ptr()),
                file.as_ref().map_or(ptr::null(), |s| s.as_ptr()),
                &mut raw,
            )
        };
        Status::from_raw(status).into_result()?;

        let raw = NonNull::new(raw).ok_or(Error::NullHandle("ucp_config_read"))?;
        Ok(UcpConfig { raw })
    }

    /// Read the configuration described by `settings` and apply its overrides.
    pub fn from_settings(settings: &UcxConfig) -> Result<UcpConfig> {
        let mut config = Self::read(settings.env_prefix.as_deref(), settings.file.as_deref())?;
        for (name, value) in &settings.overrides {
            config.modify(name, value)?;
        }
        Ok(config)
    }

    /// `ucp_config_modify`
    pub fn modify(&mut self, name: &str, value: &str) -> Result<()> {
        let c_name = CString::new(name)?;
        let c_value = CString::new(value)?;

        let status = unsafe { ucp_config_modify(self.raw.as_ptr(), c_name.as_ptr(), c_value.as_ptr()) };
        match Status::from_raw(status).into_result() {
            Ok(()) => {
                debug!(name, value, "modified UCX config");
                Ok(())
            }
            Err(status) => {
                warn!(name, value, %status, "UCX rejected config override");
                Err(status.into())
            }
        }
    }

    #[inline]
    pub fn as_ptr(&self) -> *const ucp_config_t {
        self.raw.as_ptr()
    }
}

impl Drop for UcpConfig {
    fn drop(&mut self) {
        unsafe { ucp_config_release(self.raw.as_ptr()) };
    }
}
