//! ABI Compatibility Testing for the UCX shim
//!
//! This crate checks that the Rust mirrors of UCX types, constants and
//! macros are binary-compatible with the installed UCX headers. Without the
//! `native` feature the checks run against the documented header values;
//! with it they also run against the compiled C shim and a C reference
//! translation unit.

#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]
#![allow(dead_code)]

use core::ffi::c_void;
use core::mem::{align_of, size_of};

/// Macro to verify type size matches expected value
#[macro_export]
macro_rules! verify_size {
    ($rust_type:ty, $expected_size:expr) => {
        const _: () = {
            const SIZE: usize = ::core::mem::size_of::<$rust_type>();
            const EXPECTED: usize = $expected_size;

            // This will fail at compile time if sizes don't match
            assert!(SIZE == EXPECTED, "Size mismatch");
        };
    };
}

/// Structure to hold ABI compatibility test results
#[derive(Debug, PartialEq, Eq)]
pub struct AbiCompatResult {
    pub type_name: &'static str,
    pub size_match: bool,
    pub align_match: bool,
}

impl AbiCompatResult {
    pub fn is_compatible(&self) -> bool {
        self.size_match && self.align_match
    }
}

/// Compare a Rust type's layout against sizes reported by C
pub fn verify_layout<T>(
    name: &'static str,
    expected_size: usize,
    expected_align: usize,
) -> AbiCompatResult {
    AbiCompatResult {
        type_name: name,
        size_match: size_of::<T>() == expected_size,
        align_match: align_of::<T>() == expected_align,
    }
}

/// Words worth probing every pointer-or-status implementation with: the
/// edges of the pointer range, the whole error range, and a few ordinary
/// addresses.
pub fn probe_words() -> Vec<*const c_void> {
    let err_last = ucx_shim_ffi::UCS_ERR_LAST as isize as usize;
    let mut words: Vec<usize> = vec![
        0,
        1,
        2,
        0x1000,
        0x7fff_ffff_f000,
        usize::MAX / 2,
        err_last - 2,
        err_last - 1,
        usize::MAX,
    ];
    words.extend((ucx_shim_ffi::UCS_ERR_LAST..0).map(|code| code as isize as usize));
    words.into_iter().map(|w| w as *const c_void).collect()
}

/// Element sizes worth probing datatype constructors with.
pub fn probe_sizes() -> Vec<usize> {
    vec![0, 1, 2, 3, 4, 7, 8, 16, 64, 4096, 1 << 20, (1 << 40) + 3, usize::MAX >> 3]
}
