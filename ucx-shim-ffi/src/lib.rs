//! C-ABI types and constants mirroring the UCX public headers
//!
//! This crate provides the raw vocabulary shared by the C shim and the Rust
//! re-expressions of the UCX header macros. Every value here must match the
//! installed `ucs/type/status.h` and `ucp/api/ucp_def.h` / `ucp.h` exactly;
//! `ucx-shim-abi-test` checks them against the real headers.

#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]

use core::ffi::c_void;

pub use libc::{c_char, c_int, c_uint, size_t};

mod status;
pub use status::Status;

/// `ucs_status_t`. UCX declares the enum `UCS_S_PACKED`, so it is one byte.
pub type ucs_status_t = i8;

/// `ucp_datatype_t`
pub type ucp_datatype_t = u64;

/// `ucs_thread_mode_t`
pub type ucs_thread_mode_t = c_uint;

/// Opaque word that is either a handle or an encoded status
pub type UcsPtr = *const c_void;

static_assertions::assert_eq_size!(ucs_status_t, u8);
static_assertions::assert_eq_size!(Status, ucs_status_t);
static_assertions::assert_eq_size!(ucp_datatype_t, u64);

// Status codes (ucs/type/status.h)
pub const UCS_OK: ucs_status_t = 0;
pub const UCS_INPROGRESS: ucs_status_t = 1;
pub const UCS_ERR_NO_MESSAGE: ucs_status_t = -1;
pub const UCS_ERR_NO_RESOURCE: ucs_status_t = -2;
pub const UCS_ERR_IO_ERROR: ucs_status_t = -3;
pub const UCS_ERR_NO_MEMORY: ucs_status_t = -4;
pub const UCS_ERR_INVALID_PARAM: ucs_status_t = -5;
pub const UCS_ERR_UNREACHABLE: ucs_status_t = -6;
pub const UCS_ERR_INVALID_ADDR: ucs_status_t = -7;
pub const UCS_ERR_NOT_IMPLEMENTED: ucs_status_t = -8;
pub const UCS_ERR_MESSAGE_TRUNCATED: ucs_status_t = -9;
pub const UCS_ERR_NO_PROGRESS: ucs_status_t = -10;
pub const UCS_ERR_BUFFER_TOO_SMALL: ucs_status_t = -11;
pub const UCS_ERR_NO_ELEM: ucs_status_t = -12;
pub const UCS_ERR_SOME_CONNECTS_FAILED: ucs_status_t = -13;
pub const UCS_ERR_NO_DEVICE: ucs_status_t = -14;
pub const UCS_ERR_BUSY: ucs_status_t = -15;
pub const UCS_ERR_CANCELED: ucs_status_t = -16;
pub const UCS_ERR_SHMEM_SEGMENT: ucs_status_t = -17;
pub const UCS_ERR_ALREADY_EXISTS: ucs_status_t = -18;
pub const UCS_ERR_OUT_OF_RANGE: ucs_status_t = -19;
pub const UCS_ERR_TIMED_OUT: ucs_status_t = -20;
pub const UCS_ERR_EXCEEDS_LIMIT: ucs_status_t = -21;
pub const UCS_ERR_UNSUPPORTED: ucs_status_t = -22;
pub const UCS_ERR_REJECTED: ucs_status_t = -23;
pub const UCS_ERR_NOT_CONNECTED: ucs_status_t = -24;
pub const UCS_ERR_CONNECTION_RESET: ucs_status_t = -25;
pub const UCS_ERR_FIRST_LINK_FAILURE: ucs_status_t = -40;
pub const UCS_ERR_LAST_LINK_FAILURE: ucs_status_t = -59;
pub const UCS_ERR_FIRST_ENDPOINT_FAILURE: ucs_status_t = -60;
pub const UCS_ERR_ENDPOINT_TIMEOUT: ucs_status_t = -80;
pub const UCS_ERR_LAST_ENDPOINT_FAILURE: ucs_status_t = -89;
pub const UCS_ERR_LAST: ucs_status_t = -100;

// Datatype tagging (ucp/api/ucp.h)
pub const UCP_DATATYPE_CONTIG: ucp_datatype_t = 0;
pub const UCP_DATATYPE_STRIDED: ucp_datatype_t = 1;
pub const UCP_DATATYPE_IOV: ucp_datatype_t = 2;
pub const UCP_DATATYPE_GENERIC: ucp_datatype_t = 7;
pub const UCP_DATATYPE_SHIFT: u32 = 3;
pub const UCP_DATATYPE_CLASS_MASK: ucp_datatype_t = (1 << UCP_DATATYPE_SHIFT) - 1;

// enum ucp_feature
pub const UCP_FEATURE_TAG: u64 = 1 << 0;
pub const UCP_FEATURE_RMA: u64 = 1 << 1;
pub const UCP_FEATURE_AMO32: u64 = 1 << 2;
pub const UCP_FEATURE_AMO64: u64 = 1 << 3;
pub const UCP_FEATURE_WAKEUP: u64 = 1 << 4;
pub const UCP_FEATURE_STREAM: u64 = 1 << 5;
pub const UCP_FEATURE_AM: u64 = 1 << 6;

// enum ucp_params_field
pub const UCP_PARAM_FIELD_FEATURES: u64 = 1 << 0;
pub const UCP_PARAM_FIELD_REQUEST_SIZE: u64 = 1 << 1;
pub const UCP_PARAM_FIELD_REQUEST_INIT: u64 = 1 << 2;
pub const UCP_PARAM_FIELD_REQUEST_CLEANUP: u64 = 1 << 3;
pub const UCP_PARAM_FIELD_TAG_SENDER_MASK: u64 = 1 << 4;
pub const UCP_PARAM_FIELD_MT_WORKERS_SHARED: u64 = 1 << 5;
pub const UCP_PARAM_FIELD_ESTIMATED_NUM_EPS: u64 = 1 << 6;
pub const UCP_PARAM_FIELD_ESTIMATED_NUM_PPN: u64 = 1 << 7;

// enum ucp_context_attr_field
pub const UCP_ATTR_FIELD_REQUEST_SIZE: u64 = 1 << 0;
pub const UCP_ATTR_FIELD_THREAD_MODE: u64 = 1 << 1;

// ucs_thread_mode_t
pub const UCS_THREAD_MODE_SINGLE: ucs_thread_mode_t = 0;
pub const UCS_THREAD_MODE_SERIALIZED: ucs_thread_mode_t = 1;
pub const UCS_THREAD_MODE_MULTI: ucs_thread_mode_t = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datatype_class_mask() {
        assert_eq!(UCP_DATATYPE_CLASS_MASK, 7);
        assert_eq!(UCP_DATATYPE_GENERIC & UCP_DATATYPE_CLASS_MASK, UCP_DATATYPE_GENERIC);
    }

    #[test]
    fn test_error_ranges_are_ordered() {
        assert!(UCS_ERR_CONNECTION_RESET > UCS_ERR_FIRST_LINK_FAILURE);
        assert!(UCS_ERR_LAST_LINK_FAILURE > UCS_ERR_FIRST_ENDPOINT_FAILURE);
        assert!(UCS_ERR_LAST_ENDPOINT_FAILURE > UCS_ERR_LAST);
    }
}
