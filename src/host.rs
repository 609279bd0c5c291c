//! Control-surface stand-in used where the real codec is not linked.
//!
//! Models the slice of `opus_encoder.c` that is reachable through the control
//! entry points: argument validation, clamping, and the getter values of a
//! freshly initialized encoder. No signal processing happens here; requests
//! that only influence encode decisions are validated and acknowledged.
//!
//! The one deliberate divergence is null handling: the real library crashes
//! on a null encoder pointer, the stand-in reports `OPUS_BAD_ARG`.

use core::ffi::{c_char, c_int};

use alloc::boxed::Box;

use crate::ctl::*;
use crate::raw::OpusEncoder;

/// Recommended packet ceiling the bitrate conversion assumes before any frame
/// has been encoded.
const MAX_PACKET_BYTES: c_int = 1276;

/// The user-settable state of one encoder, with `opus_encoder_init` defaults.
struct Encoder {
    fs: c_int,
    channels: c_int,
    application: c_int,
    user_bitrate: c_int,
    complexity: c_int,
    use_vbr: c_int,
    vbr_constraint: c_int,
    inband_fec: c_int,
    use_dtx: c_int,
    packet_loss_perc: c_int,
    signal_type: c_int,
    max_bandwidth: c_int,
    force_channels: c_int,
    lsb_depth: c_int,
    frame_duration: c_int,
    prediction_disabled: c_int,
    phase_inversion_disabled: c_int,
}

impl Encoder {
    fn new(fs: c_int, channels: c_int, application: c_int) -> Self {
        Encoder {
            fs,
            channels,
            application,
            user_bitrate: OPUS_AUTO,
            complexity: 9,
            use_vbr: 1,
            vbr_constraint: 1,
            inband_fec: 0,
            use_dtx: 0,
            packet_loss_perc: 0,
            signal_type: OPUS_AUTO,
            max_bandwidth: OPUS_BANDWIDTH_FULLBAND,
            force_channels: OPUS_AUTO,
            lsb_depth: 24,
            frame_duration: OPUS_FRAMESIZE_ARG,
            prediction_disabled: 0,
            phase_inversion_disabled: 0,
        }
    }

    /// Handles the integer-argument requests, mirroring the validation and
    /// clamping rules of the real control dispatcher.
    fn ctl_int(&mut self, request: c_int, value: c_int) -> c_int {
        match request {
            OPUS_SET_APPLICATION_REQUEST => {
                if !matches!(
                    value,
                    OPUS_APPLICATION_VOIP
                        | OPUS_APPLICATION_AUDIO
                        | OPUS_APPLICATION_RESTRICTED_LOWDELAY
                ) {
                    return OPUS_BAD_ARG;
                }
                self.application = value;
            }
            OPUS_SET_BITRATE_REQUEST => {
                let mut rate = value;
                if rate != OPUS_AUTO && rate != OPUS_BITRATE_MAX {
                    if rate <= 0 {
                        return OPUS_BAD_ARG;
                    }
                    rate = rate.clamp(500, 300_000 * self.channels);
                }
                self.user_bitrate = rate;
            }
            OPUS_SET_MAX_BANDWIDTH_REQUEST => {
                if !(OPUS_BANDWIDTH_NARROWBAND..=OPUS_BANDWIDTH_FULLBAND).contains(&value) {
                    return OPUS_BAD_ARG;
                }
                self.max_bandwidth = value;
            }
            OPUS_SET_BANDWIDTH_REQUEST => {
                if !(OPUS_BANDWIDTH_NARROWBAND..=OPUS_BANDWIDTH_FULLBAND).contains(&value)
                    && value != OPUS_AUTO
                {
                    return OPUS_BAD_ARG;
                }
                // Constrains mode decisions during encode; with no encode
                // path there is nothing to store.
            }
            OPUS_SET_VBR_REQUEST => {
                if !matches!(value, 0 | 1) {
                    return OPUS_BAD_ARG;
                }
                self.use_vbr = value;
            }
            OPUS_SET_VBR_CONSTRAINT_REQUEST => {
                if !matches!(value, 0 | 1) {
                    return OPUS_BAD_ARG;
                }
                self.vbr_constraint = value;
            }
            OPUS_SET_COMPLEXITY_REQUEST => {
                if !(0..=10).contains(&value) {
                    return OPUS_BAD_ARG;
                }
                self.complexity = value;
            }
            OPUS_SET_INBAND_FEC_REQUEST => {
                if !matches!(value, 0 | 1) {
                    return OPUS_BAD_ARG;
                }
                self.inband_fec = value;
            }
            OPUS_SET_PACKET_LOSS_PERC_REQUEST => {
                if !(0..=100).contains(&value) {
                    return OPUS_BAD_ARG;
                }
                self.packet_loss_perc = value;
            }
            OPUS_SET_DTX_REQUEST => {
                if !matches!(value, 0 | 1) {
                    return OPUS_BAD_ARG;
                }
                self.use_dtx = value;
            }
            OPUS_SET_FORCE_CHANNELS_REQUEST => {
                if (value < 1 || value > self.channels) && value != OPUS_AUTO {
                    return OPUS_BAD_ARG;
                }
                self.force_channels = value;
            }
            OPUS_SET_SIGNAL_REQUEST => {
                if !matches!(value, OPUS_AUTO | OPUS_SIGNAL_VOICE | OPUS_SIGNAL_MUSIC) {
                    return OPUS_BAD_ARG;
                }
                self.signal_type = value;
            }
            OPUS_SET_LSB_DEPTH_REQUEST => {
                if !(8..=24).contains(&value) {
                    return OPUS_BAD_ARG;
                }
                self.lsb_depth = value;
            }
            OPUS_SET_EXPERT_FRAME_DURATION_REQUEST => {
                if !(OPUS_FRAMESIZE_ARG..=OPUS_FRAMESIZE_120_MS).contains(&value) {
                    return OPUS_BAD_ARG;
                }
                self.frame_duration = value;
            }
            OPUS_SET_PREDICTION_DISABLED_REQUEST => {
                if !matches!(value, 0 | 1) {
                    return OPUS_BAD_ARG;
                }
                self.prediction_disabled = value;
            }
            OPUS_SET_PHASE_INVERSION_DISABLED_REQUEST => {
                if !matches!(value, 0 | 1) {
                    return OPUS_BAD_ARG;
                }
                self.phase_inversion_disabled = value;
            }
            OPUS_RESET_STATE => {
                // Clears runtime stream state in the real codec; everything
                // set through the control surface survives, so nothing the
                // stand-in models changes.
            }
            _ if is_out_request(request) => return OPUS_BAD_ARG,
            _ => return OPUS_UNIMPLEMENTED,
        }
        OPUS_OK
    }

    /// Handles the out-pointer requests, producing the value a fresh
    /// `OpusEncoder` with these settings would report.
    fn query(&self, request: c_int) -> Result<c_int, c_int> {
        let value = match request {
            OPUS_GET_APPLICATION_REQUEST => self.application,
            OPUS_GET_BITRATE_REQUEST => self.bitrate(),
            OPUS_GET_MAX_BANDWIDTH_REQUEST => self.max_bandwidth,
            OPUS_GET_VBR_REQUEST => self.use_vbr,
            // The in-use bandwidth only moves while frames are encoded; it
            // never leaves the post-init value here.
            OPUS_GET_BANDWIDTH_REQUEST => OPUS_BANDWIDTH_FULLBAND,
            OPUS_GET_COMPLEXITY_REQUEST => self.complexity,
            OPUS_GET_INBAND_FEC_REQUEST => self.inband_fec,
            OPUS_GET_PACKET_LOSS_PERC_REQUEST => self.packet_loss_perc,
            OPUS_GET_DTX_REQUEST => self.use_dtx,
            OPUS_GET_VBR_CONSTRAINT_REQUEST => self.vbr_constraint,
            OPUS_GET_FORCE_CHANNELS_REQUEST => self.force_channels,
            OPUS_GET_SIGNAL_REQUEST => self.signal_type,
            OPUS_GET_LOOKAHEAD_REQUEST => self.lookahead(),
            OPUS_GET_SAMPLE_RATE_REQUEST => self.fs,
            // Zero until a first frame runs through the range coder.
            OPUS_GET_FINAL_RANGE_REQUEST => 0,
            OPUS_GET_LSB_DEPTH_REQUEST => self.lsb_depth,
            OPUS_GET_EXPERT_FRAME_DURATION_REQUEST => self.frame_duration,
            OPUS_GET_PREDICTION_DISABLED_REQUEST => self.prediction_disabled,
            OPUS_GET_PHASE_INVERSION_DISABLED_REQUEST => self.phase_inversion_disabled,
            // DTX engages only after a run of silent frames.
            OPUS_GET_IN_DTX_REQUEST => 0,
            _ if is_int_request(request) => return Err(OPUS_BAD_ARG),
            _ => return Err(OPUS_UNIMPLEMENTED),
        };
        Ok(value)
    }

    fn bitrate(&self) -> c_int {
        // With no frame encoded yet the conversion sees the 2.5 ms minimum
        // frame and the recommended packet ceiling.
        let frame_size = self.fs / 400;
        match self.user_bitrate {
            OPUS_AUTO => 60 * self.fs / frame_size + self.fs * self.channels,
            OPUS_BITRATE_MAX => MAX_PACKET_BYTES * 8 * self.fs / frame_size,
            rate => rate,
        }
    }

    fn lookahead(&self) -> c_int {
        let mut samples = self.fs / 400;
        if self.application != OPUS_APPLICATION_RESTRICTED_LOWDELAY {
            samples += self.fs / 250;
        }
        samples
    }
}

/// Requests whose argument travels as a single `opus_int32`.
fn is_int_request(request: c_int) -> bool {
    matches!(
        request,
        OPUS_SET_APPLICATION_REQUEST
            | OPUS_SET_BITRATE_REQUEST
            | OPUS_SET_MAX_BANDWIDTH_REQUEST
            | OPUS_SET_BANDWIDTH_REQUEST
            | OPUS_SET_VBR_REQUEST
            | OPUS_SET_VBR_CONSTRAINT_REQUEST
            | OPUS_SET_COMPLEXITY_REQUEST
            | OPUS_SET_INBAND_FEC_REQUEST
            | OPUS_SET_PACKET_LOSS_PERC_REQUEST
            | OPUS_SET_DTX_REQUEST
            | OPUS_SET_FORCE_CHANNELS_REQUEST
            | OPUS_SET_SIGNAL_REQUEST
            | OPUS_SET_LSB_DEPTH_REQUEST
            | OPUS_SET_EXPERT_FRAME_DURATION_REQUEST
            | OPUS_SET_PREDICTION_DISABLED_REQUEST
            | OPUS_SET_PHASE_INVERSION_DISABLED_REQUEST
            | OPUS_RESET_STATE
    )
}

/// Requests whose argument travels as an `opus_int32*` out-parameter.
fn is_out_request(request: c_int) -> bool {
    matches!(
        request,
        OPUS_GET_APPLICATION_REQUEST
            | OPUS_GET_BITRATE_REQUEST
            | OPUS_GET_MAX_BANDWIDTH_REQUEST
            | OPUS_GET_BANDWIDTH_REQUEST
            | OPUS_GET_VBR_REQUEST
            | OPUS_GET_VBR_CONSTRAINT_REQUEST
            | OPUS_GET_COMPLEXITY_REQUEST
            | OPUS_GET_INBAND_FEC_REQUEST
            | OPUS_GET_PACKET_LOSS_PERC_REQUEST
            | OPUS_GET_DTX_REQUEST
            | OPUS_GET_FORCE_CHANNELS_REQUEST
            | OPUS_GET_SIGNAL_REQUEST
            | OPUS_GET_LOOKAHEAD_REQUEST
            | OPUS_GET_SAMPLE_RATE_REQUEST
            | OPUS_GET_FINAL_RANGE_REQUEST
            | OPUS_GET_LSB_DEPTH_REQUEST
            | OPUS_GET_EXPERT_FRAME_DURATION_REQUEST
            | OPUS_GET_PREDICTION_DISABLED_REQUEST
            | OPUS_GET_PHASE_INVERSION_DISABLED_REQUEST
            | OPUS_GET_IN_DTX_REQUEST
    )
}

pub(crate) unsafe fn encoder_create(
    fs: c_int,
    channels: c_int,
    application: c_int,
    error: *mut c_int,
) -> *mut OpusEncoder {
    if !matches!(fs, 8000 | 12000 | 16000 | 24000 | 48000)
        || !matches!(channels, 1 | 2)
        || !matches!(
            application,
            OPUS_APPLICATION_VOIP | OPUS_APPLICATION_AUDIO | OPUS_APPLICATION_RESTRICTED_LOWDELAY
        )
    {
        if !error.is_null() {
            *error = OPUS_BAD_ARG;
        }
        return core::ptr::null_mut();
    }
    if !error.is_null() {
        *error = OPUS_OK;
    }
    Box::into_raw(Box::new(Encoder::new(fs, channels, application))).cast()
}

pub(crate) unsafe fn encoder_destroy(st: *mut OpusEncoder) {
    if !st.is_null() {
        drop(Box::from_raw(st.cast::<Encoder>()));
    }
}

pub(crate) unsafe fn encoder_ctl_int(st: *mut OpusEncoder, request: c_int, value: c_int) -> c_int {
    match st.cast::<Encoder>().as_mut() {
        Some(enc) => enc.ctl_int(request, value),
        None => OPUS_BAD_ARG,
    }
}

pub(crate) unsafe fn encoder_ctl_out(
    st: *mut OpusEncoder,
    request: c_int,
    value: *mut c_int,
) -> c_int {
    let enc = match st.cast::<Encoder>().as_ref() {
        Some(enc) => enc,
        None => return OPUS_BAD_ARG,
    };
    match enc.query(request) {
        Ok(looked_up) => {
            // The null check sits inside the per-request handlers in the real
            // dispatcher, so an unknown request wins over a null pointer.
            if value.is_null() {
                return OPUS_BAD_ARG;
            }
            *value = looked_up;
            OPUS_OK
        }
        Err(err) => err,
    }
}

pub(crate) fn strerror(error: c_int) -> *const c_char {
    const ERROR_STRINGS: [&[u8]; 8] = [
        b"success\0",
        b"invalid argument\0",
        b"buffer too small\0",
        b"internal error\0",
        b"corrupted stream\0",
        b"request not implemented\0",
        b"invalid state\0",
        b"memory allocation failed\0",
    ];
    if error > 0 || error < -7 {
        b"unknown error\0".as_ptr().cast()
    } else {
        ERROR_STRINGS[-error as usize].as_ptr().cast()
    }
}

#[cfg(test)]
mod tests {
    use core::ffi::CStr;

    use super::*;

    fn with_encoder(
        fs: c_int,
        channels: c_int,
        application: c_int,
        f: impl FnOnce(*mut OpusEncoder),
    ) {
        unsafe {
            let mut error = OPUS_INVALID_STATE;
            let enc = encoder_create(fs, channels, application, &mut error);
            assert_eq!(error, OPUS_OK);
            assert!(!enc.is_null());
            f(enc);
            encoder_destroy(enc);
        }
    }

    fn get(enc: *mut OpusEncoder, request: c_int) -> c_int {
        let mut value = 0;
        let ret = unsafe { encoder_ctl_out(enc, request, &mut value) };
        assert_eq!(ret, OPUS_OK, "getter {} failed", request);
        value
    }

    #[test]
    fn create_validates_its_arguments() {
        unsafe {
            for (fs, channels, application) in [
                (44_100, 2, OPUS_APPLICATION_AUDIO),
                (48_000, 3, OPUS_APPLICATION_AUDIO),
                (48_000, 2, 2050),
            ] {
                let mut error = OPUS_OK;
                let enc = encoder_create(fs, channels, application, &mut error);
                assert!(enc.is_null());
                assert_eq!(error, OPUS_BAD_ARG);
            }
            // The error out-parameter is optional.
            let enc = encoder_create(44_100, 2, OPUS_APPLICATION_AUDIO, core::ptr::null_mut());
            assert!(enc.is_null());
        }
    }

    #[test]
    fn fresh_encoder_reports_init_defaults() {
        with_encoder(48_000, 2, OPUS_APPLICATION_AUDIO, |enc| {
            assert_eq!(get(enc, OPUS_GET_APPLICATION_REQUEST), OPUS_APPLICATION_AUDIO);
            assert_eq!(get(enc, OPUS_GET_COMPLEXITY_REQUEST), 9);
            assert_eq!(get(enc, OPUS_GET_VBR_REQUEST), 1);
            assert_eq!(get(enc, OPUS_GET_VBR_CONSTRAINT_REQUEST), 1);
            assert_eq!(get(enc, OPUS_GET_INBAND_FEC_REQUEST), 0);
            assert_eq!(get(enc, OPUS_GET_DTX_REQUEST), 0);
            assert_eq!(get(enc, OPUS_GET_PACKET_LOSS_PERC_REQUEST), 0);
            assert_eq!(get(enc, OPUS_GET_SIGNAL_REQUEST), OPUS_AUTO);
            assert_eq!(get(enc, OPUS_GET_MAX_BANDWIDTH_REQUEST), OPUS_BANDWIDTH_FULLBAND);
            assert_eq!(get(enc, OPUS_GET_BANDWIDTH_REQUEST), OPUS_BANDWIDTH_FULLBAND);
            assert_eq!(get(enc, OPUS_GET_FORCE_CHANNELS_REQUEST), OPUS_AUTO);
            assert_eq!(get(enc, OPUS_GET_LSB_DEPTH_REQUEST), 24);
            assert_eq!(get(enc, OPUS_GET_EXPERT_FRAME_DURATION_REQUEST), OPUS_FRAMESIZE_ARG);
            assert_eq!(get(enc, OPUS_GET_PREDICTION_DISABLED_REQUEST), 0);
            assert_eq!(get(enc, OPUS_GET_PHASE_INVERSION_DISABLED_REQUEST), 0);
            assert_eq!(get(enc, OPUS_GET_SAMPLE_RATE_REQUEST), 48_000);
            assert_eq!(get(enc, OPUS_GET_FINAL_RANGE_REQUEST), 0);
            assert_eq!(get(enc, OPUS_GET_IN_DTX_REQUEST), 0);
        });
    }

    #[test]
    fn auto_bitrate_matches_the_unencoded_conversion() {
        // 60*Fs/(Fs/400) + Fs*channels
        with_encoder(48_000, 2, OPUS_APPLICATION_AUDIO, |enc| {
            assert_eq!(get(enc, OPUS_GET_BITRATE_REQUEST), 24_000 + 96_000);
        });
        with_encoder(8_000, 1, OPUS_APPLICATION_VOIP, |enc| {
            assert_eq!(get(enc, OPUS_GET_BITRATE_REQUEST), 24_000 + 8_000);
        });
    }

    #[test]
    fn bitrate_max_scales_with_the_packet_ceiling() {
        with_encoder(48_000, 2, OPUS_APPLICATION_AUDIO, |enc| {
            let ret = unsafe { encoder_ctl_int(enc, OPUS_SET_BITRATE_REQUEST, OPUS_BITRATE_MAX) };
            assert_eq!(ret, OPUS_OK);
            // 1276 bytes * 8 bits over a 2.5 ms frame
            assert_eq!(get(enc, OPUS_GET_BITRATE_REQUEST), 1276 * 8 * 400);
        });
    }

    #[test]
    fn bitrate_is_clamped_not_rejected() {
        with_encoder(48_000, 2, OPUS_APPLICATION_AUDIO, |enc| {
            unsafe {
                assert_eq!(encoder_ctl_int(enc, OPUS_SET_BITRATE_REQUEST, 100), OPUS_OK);
                assert_eq!(get(enc, OPUS_GET_BITRATE_REQUEST), 500);

                assert_eq!(encoder_ctl_int(enc, OPUS_SET_BITRATE_REQUEST, 10_000_000), OPUS_OK);
                assert_eq!(get(enc, OPUS_GET_BITRATE_REQUEST), 600_000);

                assert_eq!(encoder_ctl_int(enc, OPUS_SET_BITRATE_REQUEST, 0), OPUS_BAD_ARG);
                assert_eq!(encoder_ctl_int(enc, OPUS_SET_BITRATE_REQUEST, -3), OPUS_BAD_ARG);
            }
        });
    }

    #[test]
    fn rejected_values_leave_the_previous_setting() {
        with_encoder(48_000, 2, OPUS_APPLICATION_AUDIO, |enc| {
            unsafe {
                assert_eq!(encoder_ctl_int(enc, OPUS_SET_COMPLEXITY_REQUEST, 11), OPUS_BAD_ARG);
                assert_eq!(get(enc, OPUS_GET_COMPLEXITY_REQUEST), 9);

                assert_eq!(encoder_ctl_int(enc, OPUS_SET_SIGNAL_REQUEST, 3000), OPUS_BAD_ARG);
                assert_eq!(get(enc, OPUS_GET_SIGNAL_REQUEST), OPUS_AUTO);
            }
        });
    }

    #[test]
    fn force_channels_is_bounded_by_the_channel_count() {
        with_encoder(48_000, 1, OPUS_APPLICATION_VOIP, |enc| {
            unsafe {
                assert_eq!(encoder_ctl_int(enc, OPUS_SET_FORCE_CHANNELS_REQUEST, 2), OPUS_BAD_ARG);
                assert_eq!(encoder_ctl_int(enc, OPUS_SET_FORCE_CHANNELS_REQUEST, 1), OPUS_OK);
                assert_eq!(
                    encoder_ctl_int(enc, OPUS_SET_FORCE_CHANNELS_REQUEST, OPUS_AUTO),
                    OPUS_OK
                );
            }
        });
    }

    #[test]
    fn lookahead_depends_on_the_application() {
        with_encoder(48_000, 2, OPUS_APPLICATION_AUDIO, |enc| {
            assert_eq!(get(enc, OPUS_GET_LOOKAHEAD_REQUEST), 120 + 192);
        });
        with_encoder(48_000, 2, OPUS_APPLICATION_RESTRICTED_LOWDELAY, |enc| {
            assert_eq!(get(enc, OPUS_GET_LOOKAHEAD_REQUEST), 120);
        });
    }

    #[test]
    fn requests_carried_in_the_wrong_shape_are_rejected() {
        with_encoder(48_000, 2, OPUS_APPLICATION_AUDIO, |enc| {
            unsafe {
                // A getter code through the integer shape would make the real
                // codec treat 64000 as a pointer.
                assert_eq!(
                    encoder_ctl_int(enc, OPUS_GET_BITRATE_REQUEST, 64_000),
                    OPUS_BAD_ARG
                );
                let mut out = 0;
                assert_eq!(
                    encoder_ctl_out(enc, OPUS_SET_BITRATE_REQUEST, &mut out),
                    OPUS_BAD_ARG
                );
            }
        });
    }

    #[test]
    fn unknown_requests_are_unimplemented() {
        with_encoder(48_000, 2, OPUS_APPLICATION_AUDIO, |enc| {
            unsafe {
                assert_eq!(encoder_ctl_int(enc, 4999, 1), OPUS_UNIMPLEMENTED);
                let mut out = 0;
                assert_eq!(encoder_ctl_out(enc, 4999, &mut out), OPUS_UNIMPLEMENTED);
                // The unknown request is diagnosed before the out-pointer.
                assert_eq!(
                    encoder_ctl_out(enc, 4999, core::ptr::null_mut()),
                    OPUS_UNIMPLEMENTED
                );
                assert_eq!(
                    encoder_ctl_out(enc, OPUS_GET_BITRATE_REQUEST, core::ptr::null_mut()),
                    OPUS_BAD_ARG
                );
            }
        });
    }

    #[test]
    fn null_encoders_are_rejected() {
        unsafe {
            let null = core::ptr::null_mut();
            assert_eq!(encoder_ctl_int(null, OPUS_SET_BITRATE_REQUEST, 64_000), OPUS_BAD_ARG);
            let mut out = 0;
            assert_eq!(encoder_ctl_out(null, OPUS_GET_BITRATE_REQUEST, &mut out), OPUS_BAD_ARG);
        }
    }

    #[test]
    fn reset_state_keeps_user_parameters() {
        with_encoder(48_000, 2, OPUS_APPLICATION_AUDIO, |enc| {
            unsafe {
                assert_eq!(encoder_ctl_int(enc, OPUS_SET_BITRATE_REQUEST, 64_000), OPUS_OK);
                assert_eq!(encoder_ctl_int(enc, OPUS_RESET_STATE, 0), OPUS_OK);
                assert_eq!(get(enc, OPUS_GET_BITRATE_REQUEST), 64_000);
            }
        });
    }

    #[test]
    fn strerror_matches_the_reference_strings() {
        let text = |code| unsafe { CStr::from_ptr(strerror(code)) }.to_str().unwrap();
        assert_eq!(text(OPUS_OK), "success");
        assert_eq!(text(OPUS_BAD_ARG), "invalid argument");
        assert_eq!(text(OPUS_UNIMPLEMENTED), "request not implemented");
        assert_eq!(text(OPUS_ALLOC_FAIL), "memory allocation failed");
        assert_eq!(text(1), "unknown error");
        assert_eq!(text(-8), "unknown error");
    }
}
