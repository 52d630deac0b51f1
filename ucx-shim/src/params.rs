//! Context initialization parameters
//!
//! `ContextParams` is the subset of `ucp_params_t` the binding layer fills
//! in. The field mask is derived from which fields are set, so the shim
//! never hands UCX a field it did not mean to.

use bitflags::bitflags;
use ucx_shim_ffi::*;

bitflags! {
    /// `enum ucp_feature`
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct Features: u64 {
        const TAG = UCP_FEATURE_TAG;
        const RMA = UCP_FEATURE_RMA;
        const AMO32 = UCP_FEATURE_AMO32;
        const AMO64 = UCP_FEATURE_AMO64;
        const WAKEUP = UCP_FEATURE_WAKEUP;
        const STREAM = UCP_FEATURE_STREAM;
        const AM = UCP_FEATURE_AM;
    }
}

bitflags! {
    /// `enum ucp_params_field`
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct ParamField: u64 {
        const FEATURES = UCP_PARAM_FIELD_FEATURES;
        const REQUEST_SIZE = UCP_PARAM_FIELD_REQUEST_SIZE;
        const REQUEST_INIT = UCP_PARAM_FIELD_REQUEST_INIT;
        const REQUEST_CLEANUP = UCP_PARAM_FIELD_REQUEST_CLEANUP;
        const TAG_SENDER_MASK = UCP_PARAM_FIELD_TAG_SENDER_MASK;
        const MT_WORKERS_SHARED = UCP_PARAM_FIELD_MT_WORKERS_SHARED;
        const ESTIMATED_NUM_EPS = UCP_PARAM_FIELD_ESTIMATED_NUM_EPS;
        const ESTIMATED_NUM_PPN = UCP_PARAM_FIELD_ESTIMATED_NUM_PPN;
    }
}

/// `ucs_thread_mode_t`
#[repr(u32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ThreadMode {
    Single = UCS_THREAD_MODE_SINGLE,
    Serialized = UCS_THREAD_MODE_SERIALIZED,
    Multi = UCS_THREAD_MODE_MULTI,
}

impl ThreadMode {
    pub fn from_raw(mode: ucs_thread_mode_t) -> Option<ThreadMode> {
        match mode {
            UCS_THREAD_MODE_SINGLE => Some(ThreadMode::Single),
            UCS_THREAD_MODE_SERIALIZED => Some(ThreadMode::Serialized),
            UCS_THREAD_MODE_MULTI => Some(ThreadMode::Multi),
            _ => None,
        }
    }

    #[inline]
    pub fn into_raw(self) -> ucs_thread_mode_t {
        self as ucs_thread_mode_t
    }
}

/// Parameters for `ucp_init`.
///
/// Request init/cleanup callbacks are not exposed; the Rust side keeps its
/// own per-request state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextParams {
    pub features: Option<Features>,
    pub request_size: Option<usize>,
    pub tag_sender_mask: Option<u64>,
    pub mt_workers_shared: Option<bool>,
    pub estimated_num_eps: Option<usize>,
    pub estimated_num_ppn: Option<usize>,
}

impl ContextParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn features(mut self, features: Features) -> Self {
        self.features = Some(features);
        self
    }

    pub fn request_size(mut self, size: usize) -> Self {
        self.request_size = Some(size);
        self
    }

    pub fn tag_sender_mask(mut self, mask: u64) -> Self {
        self.tag_sender_mask = Some(mask);
        self
    }

    pub fn mt_workers_shared(mut self, shared: bool) -> Self {
        self.mt_workers_shared = Some(shared);
        self
    }

    pub fn estimated_num_eps(mut self, eps: usize) -> Self {
        self.estimated_num_eps = Some(eps);
        self
    }

    pub fn estimated_num_ppn(mut self, ppn: usize) -> Self {
        self.estimated_num_ppn = Some(ppn);
        self
    }

    /// Field mask covering exactly the fields that were set.
    pub fn field_mask(&self) -> ParamField {
        let mut mask = ParamField::empty();
        mask.set(ParamField::FEATURES, self.features.is_some());
        mask.set(ParamField::REQUEST_SIZE, self.request_size.is_some());
        mask.set(ParamField::TAG_SENDER_MASK, self.tag_sender_mask.is_some());
        mask.set(ParamField::MT_WORKERS_SHARED, self.mt_workers_shared.is_some());
        mask.set(ParamField::ESTIMATED_NUM_EPS, self.estimated_num_eps.is_some());
        mask.set(ParamField::ESTIMATED_NUM_PPN, self.estimated_num_ppn.is_some());
        mask
    }

    /// Fill a zeroed `ucp_params_t`.
    #[cfg(feature = "native")]
    pub(crate) fn to_raw(&self) -> ucx_shim_sys::ucp_params_t {
        use core::mem::MaybeUninit;

        // All-zero is a valid ucp_params_t: null callbacks, empty mask
        let mut raw: ucx_shim_sys::ucp_params_t = unsafe { MaybeUninit::zeroed().assume_init() };
        raw.field_mask = self.field_mask().bits();
        if let Some(features) = self.features {
            raw.features = features.bits();
        }
        if let Some(size) = self.request_size {
            raw.request_size = size;
        }
        if let Some(mask) = self.tag_sender_mask {
            raw.tag_sender_mask = mask;
        }
        if let Some(shared) = self.mt_workers_shared {
            raw.mt_workers_shared = shared as _;
        }
        if let Some(eps) = self.estimated_num_eps {
            raw.estimated_num_eps = eps;
        }
        if let Some(ppn) = self.estimated_num_ppn {
            raw.estimated_num_ppn = ppn;
        }
        raw
    }
}
