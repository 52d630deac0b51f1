//! Pointer-or-status words
//!
//! Several UCX calls return a single machine word that is either a handle,
//! `NULL` (completed immediately), or a `ucs_status_t` sign-extended into the
//! top of the address space. These functions reproduce the header macros
//! bit for bit:
//!
//! ```c
//! #define UCS_PTR_IS_ERR(_ptr)     (((uintptr_t)(_ptr)) >= ((uintptr_t)UCS_ERR_LAST))
//! #define UCS_PTR_IS_PTR(_ptr)     (((uintptr_t)(_ptr) - 1) < ((uintptr_t)UCS_ERR_LAST - 1))
//! #define UCS_PTR_RAW_STATUS(_ptr) ((ucs_status_t)(intptr_t)(_ptr))
//! #define UCS_PTR_STATUS(_ptr)     (UCS_PTR_IS_PTR(_ptr) ? UCS_INPROGRESS : UCS_PTR_RAW_STATUS(_ptr))
//! #define UCS_STATUS_PTR(_status)  ((void*)(intptr_t)(_status))
//! ```

use core::ffi::c_void;
use core::ptr::NonNull;

use ucx_shim_ffi::{Status, UcsPtr, UCS_ERR_LAST};

/// `(uintptr_t)UCS_ERR_LAST`: the status sign-extended to pointer width.
const ERR_LAST_WORD: usize = UCS_ERR_LAST as isize as usize;

/// `UCS_PTR_IS_PTR`: true for a live handle, false for `NULL` and error words.
#[inline]
pub fn is_ptr(ptr: UcsPtr) -> bool {
    (ptr as usize).wrapping_sub(1) < ERR_LAST_WORD.wrapping_sub(1)
}

/// `UCS_PTR_IS_ERR`
#[inline]
pub fn is_err(ptr: UcsPtr) -> bool {
    ptr as usize >= ERR_LAST_WORD
}

/// `UCS_PTR_RAW_STATUS`: truncate the word to a status without classifying it.
#[inline]
pub fn raw_status(ptr: UcsPtr) -> Status {
    Status::from_raw(ptr as isize as i8)
}

/// `UCS_PTR_STATUS`
///
/// A live handle yields `UCS_INPROGRESS`, `NULL` yields `UCS_OK`, and an
/// error word yields the exact status it encodes.
#[inline]
pub fn status(ptr: UcsPtr) -> Status {
    if is_ptr(ptr) {
        Status::INPROGRESS
    } else {
        raw_status(ptr)
    }
}

/// `UCS_STATUS_PTR`: encode a status as a pointer-or-status word.
#[inline]
pub fn status_ptr(status: Status) -> *mut c_void {
    status.into_raw() as isize as *mut c_void
}

/// Classify a request word the way callers of the non-blocking UCX calls do.
///
/// - `NULL`: the operation completed in place, `Ok(None)`
/// - a handle: still in flight, `Ok(Some(handle))`
/// - an error word: `Err(status)` with the encoded status
pub fn check(ptr: *mut c_void) -> Result<Option<NonNull<c_void>>, Status> {
    if is_err(ptr) {
        Err(status(ptr))
    } else {
        // Anything below the error range that is not NULL is a handle
        Ok(NonNull::new(ptr))
    }
}
