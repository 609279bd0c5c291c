//! Thin entry points into the codec the crate is linked against.
//!
//! On the wasm targets these resolve to the real `libopus` symbols and the
//! control calls go through the variadic `opus_encoder_ctl`. Everywhere else
//! they resolve to the stand-in in `host.rs`, so the crate builds and its
//! tests run without the native library being installed.
//!
//! Both variants deliberately share one signature per operation. The variadic
//! declaration accepts `(st, request, value)` with either an integer or a
//! pointer in the last slot, so the fixed-arity bodies below type-check
//! unchanged against it.

use core::ffi::{c_char, c_int};

/// Opaque encoder state owned by the codec.
///
/// Instances are only ever handled by pointer; the layout on the other side of
/// the FFI boundary is unknown to this crate.
#[repr(C)]
pub struct OpusEncoder {
    _private: [u8; 0],
}

/// Allocates and initializes an encoder for the given sampling rate, channel
/// count and application. On failure returns null and stores an error code in
/// `*error` when `error` is non-null.
///
/// # Safety
///
/// `error`, when non-null, must point to writable memory for one `c_int`.
#[cfg(not(host_codec))]
#[inline(always)]
pub unsafe fn encoder_create(
    fs: c_int,
    channels: c_int,
    application: c_int,
    error: *mut c_int,
) -> *mut OpusEncoder {
    extern "C" {
        fn opus_encoder_create(
            fs: c_int,
            channels: c_int,
            application: c_int,
            error: *mut c_int,
        ) -> *mut OpusEncoder;
    }
    opus_encoder_create(fs, channels, application, error)
}

/// Allocates and initializes an encoder for the given sampling rate, channel
/// count and application. On failure returns null and stores an error code in
/// `*error` when `error` is non-null.
///
/// # Safety
///
/// `error`, when non-null, must point to writable memory for one `c_int`.
#[cfg(host_codec)]
pub unsafe fn encoder_create(
    fs: c_int,
    channels: c_int,
    application: c_int,
    error: *mut c_int,
) -> *mut OpusEncoder {
    crate::host::encoder_create(fs, channels, application, error)
}

/// Frees an encoder. A null `st` is ignored.
///
/// # Safety
///
/// `st` must be null or a pointer obtained from [`encoder_create`] that has
/// not been destroyed yet.
#[cfg(not(host_codec))]
#[inline(always)]
pub unsafe fn encoder_destroy(st: *mut OpusEncoder) {
    extern "C" {
        fn opus_encoder_destroy(st: *mut OpusEncoder);
    }
    opus_encoder_destroy(st)
}

/// Frees an encoder. A null `st` is ignored.
///
/// # Safety
///
/// `st` must be null or a pointer obtained from [`encoder_create`] that has
/// not been destroyed yet.
#[cfg(host_codec)]
pub unsafe fn encoder_destroy(st: *mut OpusEncoder) {
    crate::host::encoder_destroy(st)
}

/// Issues a control request whose argument is a single `opus_int32`, i.e. the
/// SET family plus `OPUS_RESET_STATE`.
///
/// # Safety
///
/// `st` must be a live encoder pointer, and `request` must be a request that
/// takes an integer argument. Passing a GET request here hands the codec an
/// integer where it expects a pointer.
#[cfg(not(host_codec))]
#[inline(always)]
pub unsafe fn encoder_ctl_int(st: *mut OpusEncoder, request: c_int, value: c_int) -> c_int {
    extern "C" {
        fn opus_encoder_ctl(st: *mut OpusEncoder, request: c_int, ...) -> c_int;
    }
    opus_encoder_ctl(st, request, value)
}

/// Issues a control request whose argument is a single `opus_int32`, i.e. the
/// SET family plus `OPUS_RESET_STATE`.
///
/// # Safety
///
/// `st` must be a live encoder pointer, and `request` must be a request that
/// takes an integer argument. Passing a GET request here hands the codec an
/// integer where it expects a pointer.
#[cfg(host_codec)]
pub unsafe fn encoder_ctl_int(st: *mut OpusEncoder, request: c_int, value: c_int) -> c_int {
    crate::host::encoder_ctl_int(st, request, value)
}

/// Issues a control request whose argument is an `opus_int32*` out-parameter,
/// i.e. the GET family.
///
/// # Safety
///
/// `st` must be a live encoder pointer, `value` must be null or point to
/// writable memory for one `c_int`, and `request` must be a request that
/// takes an out-pointer argument.
#[cfg(not(host_codec))]
#[inline(always)]
pub unsafe fn encoder_ctl_out(st: *mut OpusEncoder, request: c_int, value: *mut c_int) -> c_int {
    extern "C" {
        fn opus_encoder_ctl(st: *mut OpusEncoder, request: c_int, ...) -> c_int;
    }
    opus_encoder_ctl(st, request, value)
}

/// Issues a control request whose argument is an `opus_int32*` out-parameter,
/// i.e. the GET family.
///
/// # Safety
///
/// `st` must be a live encoder pointer, `value` must be null or point to
/// writable memory for one `c_int`, and `request` must be a request that
/// takes an out-pointer argument.
#[cfg(host_codec)]
pub unsafe fn encoder_ctl_out(st: *mut OpusEncoder, request: c_int, value: *mut c_int) -> c_int {
    crate::host::encoder_ctl_out(st, request, value)
}

/// Translates an error code into a static, NUL-terminated message.
///
/// # Safety
///
/// The returned pointer borrows static storage and must not be freed.
#[cfg(not(host_codec))]
#[inline(always)]
pub unsafe fn strerror(error: c_int) -> *const c_char {
    extern "C" {
        fn opus_strerror(error: c_int) -> *const c_char;
    }
    opus_strerror(error)
}

/// Translates an error code into a static, NUL-terminated message.
///
/// # Safety
///
/// The returned pointer borrows static storage and must not be freed.
#[cfg(host_codec)]
pub unsafe fn strerror(error: c_int) -> *const c_char {
    crate::host::strerror(error)
}
