//! Property tests for the macro re-expressions

use proptest::prelude::*;
use ucx_shim::datatype::{make_contig, MAX_CONTIG_ELEM_SIZE};
use ucx_shim::{ptr, Datatype, Status};

const ERR_LAST_WORD: usize = -100isize as usize;

proptest! {
    #[test]
    fn pointers_below_error_range_are_pointers(addr in 1usize..ERR_LAST_WORD) {
        let word = addr as *const std::ffi::c_void;
        prop_assert!(ptr::is_ptr(word));
        prop_assert!(!ptr::is_err(word));
        prop_assert_eq!(ptr::status(word), Status::INPROGRESS);
    }

    #[test]
    fn error_words_round_trip(code in -99i8..0) {
        let word = ptr::status_ptr(Status::from_raw(code));
        prop_assert!(ptr::is_err(word));
        prop_assert!(!ptr::is_ptr(word));
        prop_assert_eq!(ptr::status(word).into_raw(), code);
    }

    #[test]
    fn pointer_and_error_are_exclusive(word in any::<usize>()) {
        let word = word as *const std::ffi::c_void;
        prop_assert!(!(ptr::is_ptr(word) && ptr::is_err(word)));
    }

    #[test]
    fn contig_is_deterministic(size in any::<usize>()) {
        prop_assert_eq!(make_contig(size), make_contig(size));
    }

    #[test]
    fn contig_is_injective(a in 0..=MAX_CONTIG_ELEM_SIZE, b in 0..=MAX_CONTIG_ELEM_SIZE) {
        prop_assume!(a != b);
        prop_assert_ne!(make_contig(a as usize), make_contig(b as usize));
    }

    #[test]
    fn contig_decodes_back(size in 0..=MAX_CONTIG_ELEM_SIZE) {
        let dt = Datatype::contig(size as usize);
        prop_assert!(dt.is_contig());
        prop_assert_eq!(dt.contig_elem_size(), Some(size));
    }
}
