//! Error types for the safe API

use std::ffi::NulError;

use ucx_shim_ffi::Status;

use crate::config::ConfigError;

/// Errors surfaced by the safe wrappers.
///
/// UCX failures are carried as the untouched `Status` the library returned.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("UCX call failed: {0}")]
    Ucs(Status),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("string cannot be passed to UCX: {0}")]
    Nul(#[from] NulError),

    /// UCX returned `UCS_OK` but left the out-handle null.
    #[error("{0} succeeded without returning a handle")]
    NullHandle(&'static str),
}

impl From<Status> for Error {
    fn from(status: Status) -> Self {
        Error::Ucs(status)
    }
}

impl Error {
    /// The UCX status behind this error, if it came from UCX.
    pub fn status(&self) -> Option<Status> {
        match self {
            Error::Ucs(status) => Some(*status),
            _ => None,
        }
    }
}

/// Result type for the safe API
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_passes_through() {
        let err: Error = Status::ERR_NO_DEVICE.into();
        assert_eq!(err.status(), Some(Status::ERR_NO_DEVICE));
        assert_eq!(err.to_string(), "UCX call failed: No such device");
    }

    #[test]
    fn test_nul_error() {
        let nul = std::ffi::CString::new("TL\0S").unwrap_err();
        let err: Error = nul.into();
        assert!(err.status().is_none());
        assert!(err.to_string().starts_with("string cannot be passed to UCX"));
    }

    #[test]
    fn test_null_handle_carries_no_status() {
        let err = Error::NullHandle("ucp_init");
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "ucp_init succeeded without returning a handle");
    }
}
