//! UCX status wrapping

use core::fmt;

use crate::*;

/// A `ucs_status_t` carried verbatim.
///
/// Codes the table below does not know about (for example the interior of
/// the link and endpoint failure ranges) are kept as-is and still compare
/// and classify correctly.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Status(pub ucs_status_t);

impl Status {
    pub const OK: Status = Status(UCS_OK);
    pub const INPROGRESS: Status = Status(UCS_INPROGRESS);
    pub const ERR_NO_MESSAGE: Status = Status(UCS_ERR_NO_MESSAGE);
    pub const ERR_NO_RESOURCE: Status = Status(UCS_ERR_NO_RESOURCE);
    pub const ERR_IO_ERROR: Status = Status(UCS_ERR_IO_ERROR);
    pub const ERR_NO_MEMORY: Status = Status(UCS_ERR_NO_MEMORY);
    pub const ERR_INVALID_PARAM: Status = Status(UCS_ERR_INVALID_PARAM);
    pub const ERR_UNREACHABLE: Status = Status(UCS_ERR_UNREACHABLE);
    pub const ERR_INVALID_ADDR: Status = Status(UCS_ERR_INVALID_ADDR);
    pub const ERR_NOT_IMPLEMENTED: Status = Status(UCS_ERR_NOT_IMPLEMENTED);
    pub const ERR_MESSAGE_TRUNCATED: Status = Status(UCS_ERR_MESSAGE_TRUNCATED);
    pub const ERR_NO_PROGRESS: Status = Status(UCS_ERR_NO_PROGRESS);
    pub const ERR_BUFFER_TOO_SMALL: Status = Status(UCS_ERR_BUFFER_TOO_SMALL);
    pub const ERR_NO_ELEM: Status = Status(UCS_ERR_NO_ELEM);
    pub const ERR_SOME_CONNECTS_FAILED: Status = Status(UCS_ERR_SOME_CONNECTS_FAILED);
    pub const ERR_NO_DEVICE: Status = Status(UCS_ERR_NO_DEVICE);
    pub const ERR_BUSY: Status = Status(UCS_ERR_BUSY);
    pub const ERR_CANCELED: Status = Status(UCS_ERR_CANCELED);
    pub const ERR_SHMEM_SEGMENT: Status = Status(UCS_ERR_SHMEM_SEGMENT);
    pub const ERR_ALREADY_EXISTS: Status = Status(UCS_ERR_ALREADY_EXISTS);
    pub const ERR_OUT_OF_RANGE: Status = Status(UCS_ERR_OUT_OF_RANGE);
    pub const ERR_TIMED_OUT: Status = Status(UCS_ERR_TIMED_OUT);
    pub const ERR_EXCEEDS_LIMIT: Status = Status(UCS_ERR_EXCEEDS_LIMIT);
    pub const ERR_UNSUPPORTED: Status = Status(UCS_ERR_UNSUPPORTED);
    pub const ERR_REJECTED: Status = Status(UCS_ERR_REJECTED);
    pub const ERR_NOT_CONNECTED: Status = Status(UCS_ERR_NOT_CONNECTED);
    pub const ERR_CONNECTION_RESET: Status = Status(UCS_ERR_CONNECTION_RESET);
    pub const ERR_ENDPOINT_TIMEOUT: Status = Status(UCS_ERR_ENDPOINT_TIMEOUT);
    pub const ERR_LAST: Status = Status(UCS_ERR_LAST);

    /// Create a status from the raw data type.
    #[inline]
    pub const fn from_raw(status: ucs_status_t) -> Status {
        Status(status)
    }

    #[inline]
    pub const fn into_raw(self) -> ucs_status_t {
        self.0
    }

    /// `UCS_STATUS_IS_ERR`
    #[inline]
    pub const fn is_err(self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn is_ok(self) -> bool {
        self.0 == UCS_OK
    }

    /// `UCS_OK` becomes `Ok(())`, every other code is returned unchanged.
    #[inline]
    pub fn into_result(self) -> Result<(), Status> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Whether the code lies in the link failure range.
    pub const fn is_link_failure(self) -> bool {
        self.0 <= UCS_ERR_FIRST_LINK_FAILURE && self.0 >= UCS_ERR_LAST_LINK_FAILURE
    }

    /// Whether the code lies in the endpoint failure range.
    pub const fn is_endpoint_failure(self) -> bool {
        self.0 <= UCS_ERR_FIRST_ENDPOINT_FAILURE && self.0 >= UCS_ERR_LAST_ENDPOINT_FAILURE
    }

    /// Message text as printed by `ucs_status_string()`, if the code is named.
    pub fn message(self) -> Option<&'static str> {
        let msg = match self.0 {
            UCS_OK => "Success",
            UCS_INPROGRESS => "Operation in progress",
            UCS_ERR_NO_MESSAGE => "No pending message",
            UCS_ERR_NO_RESOURCE => "No resources are available to initiate the operation",
            UCS_ERR_IO_ERROR => "Input/output error",
            UCS_ERR_NO_MEMORY => "Out of memory",
            UCS_ERR_INVALID_PARAM => "Invalid parameter",
            UCS_ERR_UNREACHABLE => "Destination is unreachable",
            UCS_ERR_INVALID_ADDR => "Address not valid",
            UCS_ERR_NOT_IMPLEMENTED => "Function not implemented",
            UCS_ERR_MESSAGE_TRUNCATED => "Message truncated",
            UCS_ERR_NO_PROGRESS => "No progress",
            UCS_ERR_BUFFER_TOO_SMALL => "Provided buffer is too small",
            UCS_ERR_NO_ELEM => "No such element",
            UCS_ERR_SOME_CONNECTS_FAILED => "Failed to connect some of the requested endpoints",
            UCS_ERR_NO_DEVICE => "No such device",
            UCS_ERR_BUSY => "Device is busy",
            UCS_ERR_CANCELED => "Request canceled",
            UCS_ERR_SHMEM_SEGMENT => "Shared memory error",
            UCS_ERR_ALREADY_EXISTS => "Element already exists",
            UCS_ERR_OUT_OF_RANGE => "Index out of range",
            UCS_ERR_TIMED_OUT => "Operation timed out",
            UCS_ERR_EXCEEDS_LIMIT => "User-defined limit was reached",
            UCS_ERR_UNSUPPORTED => "Unsupported operation",
            UCS_ERR_REJECTED => "Operation rejected by remote peer",
            UCS_ERR_NOT_CONNECTED => "Endpoint is not connected",
            UCS_ERR_CONNECTION_RESET => "Connection reset by remote peer",
            UCS_ERR_FIRST_LINK_FAILURE => "First link failure",
            UCS_ERR_LAST_LINK_FAILURE => "Last link failure",
            UCS_ERR_FIRST_ENDPOINT_FAILURE => "First endpoint failure",
            UCS_ERR_ENDPOINT_TIMEOUT => "Endpoint timeout",
            UCS_ERR_LAST_ENDPOINT_FAILURE => "Last endpoint failure",
            UCS_ERR_LAST => "Last error code",
            _ => return None,
        };
        Some(msg)
    }
}

impl From<ucs_status_t> for Status {
    fn from(status: ucs_status_t) -> Self {
        Status(status)
    }
}

impl From<Status> for ucs_status_t {
    fn from(status: Status) -> Self {
        status.0
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(msg) => f.write_str(msg),
            None => write!(f, "Unknown error {}", self.0),
        }
    }
}

impl fmt::Debug for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status({} [\"{}\"])", self.0, self)
    }
}

impl std::error::Error for Status {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_result() {
        assert_eq!(Status::OK.into_result(), Ok(()));
        assert_eq!(Status::ERR_NO_MEMORY.into_result(), Err(Status::ERR_NO_MEMORY));
        // In-progress is not success, but it is not an error either
        assert_eq!(Status::INPROGRESS.into_result(), Err(Status::INPROGRESS));
        assert!(!Status::INPROGRESS.is_err());
    }

    #[test]
    fn test_unknown_codes_kept_verbatim() {
        let status = Status::from_raw(-45);
        assert_eq!(status.into_raw(), -45);
        assert!(status.is_err());
        assert!(status.is_link_failure());
        assert_eq!(status.message(), None);
        assert_eq!(status.to_string(), "Unknown error -45");
        assert_eq!(Status::from_raw(-30).to_string(), "Unknown error -30");
        assert_eq!(Status::from_raw(-90).to_string(), "Unknown error -90");
    }

    #[test]
    fn test_display_range_boundaries() {
        assert_eq!(Status::from_raw(-40).to_string(), "First link failure");
        assert_eq!(Status::from_raw(-59).to_string(), "Last link failure");
        assert_eq!(Status::from_raw(-60).to_string(), "First endpoint failure");
        assert_eq!(Status::from_raw(-89).to_string(), "Last endpoint failure");
        assert_eq!(Status::ERR_LAST.to_string(), "Last error code");
        assert!(Status::from_raw(-40).is_link_failure());
        assert!(Status::from_raw(-89).is_endpoint_failure());
    }

    #[test]
    fn test_display_known() {
        assert_eq!(Status::OK.to_string(), "Success");
        assert_eq!(Status::ERR_INVALID_PARAM.to_string(), "Invalid parameter");
        assert_eq!(
            format!("{:?}", Status::ERR_NO_MEMORY),
            "Status(-4 [\"Out of memory\"])"
        );
    }

    #[test]
    fn test_endpoint_range() {
        assert!(Status::ERR_ENDPOINT_TIMEOUT.is_endpoint_failure());
        assert!(!Status::ERR_ENDPOINT_TIMEOUT.is_link_failure());
        assert!(!Status::ERR_LAST.is_endpoint_failure());
    }
}
