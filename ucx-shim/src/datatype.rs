//! Datatype descriptors
//!
//! A `ucp_datatype_t` keeps its class in the low `UCP_DATATYPE_SHIFT` bits
//! and, for contiguous data, the element size in the bits above them.

use core::fmt;

use ucx_shim_ffi::{
    ucp_datatype_t, UCP_DATATYPE_CLASS_MASK, UCP_DATATYPE_CONTIG, UCP_DATATYPE_GENERIC,
    UCP_DATATYPE_IOV, UCP_DATATYPE_SHIFT, UCP_DATATYPE_STRIDED,
};

/// Largest element size that survives the shift without losing bits.
pub const MAX_CONTIG_ELEM_SIZE: u64 = u64::MAX >> UCP_DATATYPE_SHIFT;

/// `ucp_dt_make_contig`
#[inline]
pub const fn make_contig(elem_size: usize) -> ucp_datatype_t {
    ((elem_size as ucp_datatype_t) << UCP_DATATYPE_SHIFT) | UCP_DATATYPE_CONTIG
}

/// Datatype class, the low bits of a descriptor
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DatatypeClass {
    Contig,
    Strided,
    Iov,
    Generic,
    Unknown(u64),
}

/// A `ucp_datatype_t` value
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Datatype(pub ucp_datatype_t);

impl Datatype {
    /// `ucp_dt_make_iov()`
    pub const IOV: Datatype = Datatype(UCP_DATATYPE_IOV);

    /// Contiguous buffer of `elem_size`-byte elements.
    #[inline]
    pub const fn contig(elem_size: usize) -> Datatype {
        Datatype(make_contig(elem_size))
    }

    /// Contiguous descriptor for `T`.
    #[inline]
    pub const fn contig_of<T>() -> Datatype {
        Datatype::contig(core::mem::size_of::<T>())
    }

    #[inline]
    pub const fn into_raw(self) -> ucp_datatype_t {
        self.0
    }

    pub const fn class(self) -> DatatypeClass {
        match self.0 & UCP_DATATYPE_CLASS_MASK {
            UCP_DATATYPE_CONTIG => DatatypeClass::Contig,
            UCP_DATATYPE_STRIDED => DatatypeClass::Strided,
            UCP_DATATYPE_IOV => DatatypeClass::Iov,
            UCP_DATATYPE_GENERIC => DatatypeClass::Generic,
            other => DatatypeClass::Unknown(other),
        }
    }

    /// `UCP_DT_IS_CONTIG`
    #[inline]
    pub const fn is_contig(self) -> bool {
        self.0 & UCP_DATATYPE_CLASS_MASK == UCP_DATATYPE_CONTIG
    }

    /// Element size of a contiguous descriptor, `None` for other classes.
    pub const fn contig_elem_size(self) -> Option<u64> {
        if self.is_contig() {
            Some(self.0 >> UCP_DATATYPE_SHIFT)
        } else {
            None
        }
    }
}

impl From<Datatype> for ucp_datatype_t {
    fn from(dt: Datatype) -> Self {
        dt.0
    }
}

impl fmt::Debug for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.contig_elem_size() {
            Some(size) => write!(f, "Datatype(contig, {} bytes)", size),
            None => write!(f, "Datatype({:?}, {:#x})", self.class(), self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size() {
        assert_eq!(make_contig(0), UCP_DATATYPE_CONTIG);
        assert_eq!(make_contig(0), 0);
        assert_eq!(Datatype::contig(0).contig_elem_size(), Some(0));
    }

    #[test]
    fn test_known_sizes() {
        assert_eq!(make_contig(1), 0x8);
        assert_eq!(make_contig(4), 0x20);
        assert_eq!(make_contig(8), 0x40);
        assert_eq!(Datatype::contig_of::<u32>(), Datatype::contig(4));
    }

    #[test]
    fn test_class() {
        assert_eq!(Datatype::contig(16).class(), DatatypeClass::Contig);
        assert_eq!(Datatype::IOV.class(), DatatypeClass::Iov);
        assert!(!Datatype::IOV.is_contig());
        assert_eq!(Datatype::IOV.contig_elem_size(), None);
        assert_eq!(Datatype(3).class(), DatatypeClass::Unknown(3));
    }

    #[test]
    fn test_max_size_decodes() {
        let dt = Datatype(make_contig(MAX_CONTIG_ELEM_SIZE as usize));
        assert_eq!(dt.contig_elem_size(), Some(MAX_CONTIG_ELEM_SIZE));
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Datatype::contig(8)), "Datatype(contig, 8 bytes)");
        assert_eq!(format!("{:?}", Datatype::IOV), "Datatype(Iov, 0x2)");
    }
}
