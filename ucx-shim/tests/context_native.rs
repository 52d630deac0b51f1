//! Context lifecycle against a real UCX
#![cfg(feature = "native")]

use std::mem::MaybeUninit;
use std::ptr::null_mut;

use ucx_shim::{
    init_raw, ptr, Context, ContextParams, Datatype, Error, Features, ShimConfig, Status, UcpConfig,
};
use ucx_shim_sys::{
    ucp_cleanup, ucp_context_h, ucp_init_version, ucp_params_t, UCP_API_MAJOR, UCP_API_MINOR,
};

fn raw_params(field_mask: u64, features: u64) -> ucp_params_t {
    let mut params: ucp_params_t = unsafe { MaybeUninit::zeroed().assume_init() };
    params.field_mask = field_mask;
    params.features = features;
    params
}

/// `ucp_init` as the header inline spells it.
fn init_direct(params: &ucp_params_t, context_p: &mut ucp_context_h) -> Status {
    let status = unsafe {
        ucp_init_version(UCP_API_MAJOR as _, UCP_API_MINOR as _, params, std::ptr::null(), context_p)
    };
    Status::from_raw(status as _)
}

#[test]
fn test_minimal_context_round_trip() {
    let params = ContextParams::new().features(Features::TAG);
    let context = Context::new(&params, None).expect("ucp_init with minimal params");

    let handle = context.as_raw() as *const std::ffi::c_void;
    assert!(!handle.is_null());
    assert!(ptr::is_ptr(handle));
    assert!(!ptr::is_err(handle));
}

#[test]
fn test_init_raw_matches_direct_call() {
    let params = raw_params(ucx_shim_ffi::UCP_PARAM_FIELD_FEATURES, ucx_shim_ffi::UCP_FEATURE_TAG);

    let mut via_shim: ucp_context_h = null_mut();
    let shim_status = unsafe { init_raw(&params, std::ptr::null(), &mut via_shim) };

    let mut direct: ucp_context_h = null_mut();
    let direct_status = init_direct(&params, &mut direct);

    assert_eq!(shim_status, direct_status);
    assert_eq!(shim_status, Status::OK);
    assert!(ptr::is_ptr(via_shim as *const std::ffi::c_void));
    assert!(ptr::is_ptr(direct as *const std::ffi::c_void));
    assert_ne!(via_shim, direct);

    // Both handles are live contexts
    let via_shim = unsafe { Context::from_raw(via_shim) }.unwrap();
    let direct = unsafe { Context::from_raw(direct) }.unwrap();
    assert_eq!(via_shim.query().unwrap().thread_mode, direct.query().unwrap().thread_mode);
}

#[test]
fn test_init_failure_status_is_verbatim() {
    // FEATURES in the mask with an empty set: UCX refuses the context
    let params = raw_params(ucx_shim_ffi::UCP_PARAM_FIELD_FEATURES, 0);

    let mut via_shim: ucp_context_h = null_mut();
    let shim_status = unsafe { init_raw(&params, std::ptr::null(), &mut via_shim) };

    let mut direct: ucp_context_h = null_mut();
    let direct_status = init_direct(&params, &mut direct);

    // Release anything a lenient UCX might have created before asserting
    for handle in [via_shim, direct] {
        if !handle.is_null() {
            unsafe { ucp_cleanup(handle) };
        }
    }

    assert_eq!(shim_status, direct_status);
    assert!(shim_status.is_err(), "{:?}", shim_status);

    let err = Context::new(&ContextParams::new().features(Features::empty()), None)
        .err()
        .expect("empty feature set accepted");
    assert!(matches!(err, Error::Ucs(status) if status == direct_status), "{:?}", err);
}

#[test]
fn test_context_with_config() {
    let config = UcpConfig::read(None, None).expect("ucp_config_read");
    let params = ContextParams::new().features(Features::TAG | Features::STREAM);
    let context = Context::new(&params, Some(&config)).unwrap();

    let attr = context.query().unwrap();
    assert!(attr.thread_mode.is_some());
}

#[test]
fn test_unknown_config_option_is_passed_back() {
    let mut config = UcpConfig::read(None, None).unwrap();
    let err = config
        .modify("NO_SUCH_OPTION_FOR_SHIM_TEST", "1")
        .unwrap_err();
    // Whatever UCX says is handed back untouched
    assert!(err.status().is_some_and(Status::is_err));
}

#[test]
fn test_into_raw_and_back() {
    let context = Context::from_config(&ShimConfig::default()).unwrap();
    let raw = context.into_raw();
    let context = unsafe { Context::from_raw(raw) }.unwrap();
    assert_eq!(context.as_raw(), raw);
}

#[test]
fn test_zero_size_descriptor() {
    assert_eq!(Datatype::contig(0).into_raw(), 0);
}
