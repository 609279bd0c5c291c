//! Fixed-arity forwarders for the variadic `libopus` control entry point.
//!
//! `opus_encoder_ctl` is a C variadic function. When Emscripten compiles it to
//! WebAssembly the variadic arguments do not travel as wasm parameters: the
//! caller packs them into a stack buffer and passes a pointer to that buffer
//! as a trailing argument. A compiler targeting the same ABI emits that
//! calling sequence automatically; a foreign-function binder that resolves
//! wasm exports by signature, like Dart's `wasm_ffi`, cannot. Binding the
//! variadic export as `(i32, i32, i32) -> i32` and calling it hands the codec
//! a stray integer where it expects its argument buffer, and the request reads
//! garbage.
//!
//! The way out is to give the module a fixed-arity entry point that makes the
//! variadic call *inside* the module, where the compiler builds the argument
//! buffer correctly. [`opus_encoder_ctl_int`] is that entry point for every
//! control request whose argument is a single `opus_int32`, which covers the
//! whole SET family plus `OPUS_RESET_STATE`.
//!
//! # Linking
//!
//! Build the crate as a `staticlib` for a wasm target and hand the archive to
//! the same `emcc` link step that consumes `libopus.a`, keeping
//! `_opus_encoder_ctl_int` in `EXPORTED_FUNCTIONS`. On the binder side,
//! resolve `opus_encoder_ctl_int` instead of `opus_encoder_ctl` and call it
//! with three scalars:
//!
//! ```text
//! ret = opus_encoder_ctl_int(enc, OPUS_SET_BITRATE_REQUEST, 64000);
//! ```
//!
//! The return value is whatever the codec returned, `OPUS_OK` or one of the
//! negative error codes from [`ctl`].
//!
//! # Coverage
//!
//! Only integer-argument requests go through this entry point. The GET family
//! takes an `opus_int32*` out-parameter in the variadic slot and needs a
//! pointer-shaped forwarder of its own; in-module callers can use
//! [`raw::encoder_ctl_out`] in the meantime.
//!
//! # Building without the codec
//!
//! On targets other than wasm the crate swaps the `libopus` symbols for a
//! small stand-in that models the control surface of a fresh encoder, so
//! `cargo test` runs without the native library installed. See `src/host.rs`.

#![cfg_attr(not(host_codec), no_std)]
#![warn(missing_docs)]

#[cfg(host_codec)]
extern crate alloc;

pub mod ctl;
#[cfg(host_codec)]
mod host;
pub mod raw;

pub use raw::OpusEncoder;

use core::ffi::c_int;

/// Forwards an integer-argument control request to `opus_encoder_ctl`,
/// returning the codec's return code unchanged.
///
/// `request` selects the control, `value` is the argument the variadic call
/// carries to it. `OPUS_RESET_STATE` takes no argument; the slot is ignored.
///
/// # Safety
///
/// `st` must be a live encoder obtained from `opus_encoder_create`, and
/// `request` must be a request that takes an `opus_int32` argument. Out-shaped
/// requests must not be routed through here: the codec would reinterpret
/// `value` as a pointer.
#[no_mangle]
pub unsafe extern "C" fn opus_encoder_ctl_int(
    st: *mut OpusEncoder,
    request: c_int,
    value: c_int,
) -> c_int {
    raw::encoder_ctl_int(st, request, value)
}

// The staticlib carries no std on the wasm targets; a panic becomes a wasm
// trap.
#[cfg(not(host_codec))]
#[panic_handler]
fn panic(_: &core::panic::PanicInfo) -> ! {
    core::arch::wasm32::unreachable()
}
