//! Request codes, argument values and error codes of the encoder control
//! surface, as pinned by `opus_defines.h`.
//!
//! The numbers are ABI: they travel through the forwarder unchanged and must
//! match the ones compiled into the linked `libopus` exactly. Requests come in
//! SET/GET pairs where the GET code is the SET code plus one; `OPUS_RESET_STATE`
//! and the probe-only getters sit in the same number space without a partner.

use core::ffi::c_int;

/// No error.
pub const OPUS_OK: c_int = 0;
/// One or more invalid/out of range arguments.
pub const OPUS_BAD_ARG: c_int = -1;
/// Not enough bytes allocated in the buffer.
pub const OPUS_BUFFER_TOO_SMALL: c_int = -2;
/// An internal error was detected.
pub const OPUS_INTERNAL_ERROR: c_int = -3;
/// The compressed data passed is corrupted.
pub const OPUS_INVALID_PACKET: c_int = -4;
/// Invalid/unsupported request number.
pub const OPUS_UNIMPLEMENTED: c_int = -5;
/// An encoder or decoder structure is invalid or already freed.
pub const OPUS_INVALID_STATE: c_int = -6;
/// Memory allocation has failed.
pub const OPUS_ALLOC_FAIL: c_int = -7;

/// Selects voice-optimized encoding.
pub const OPUS_APPLICATION_VOIP: c_int = 2048;
/// Selects music/mixed-content encoding.
pub const OPUS_APPLICATION_AUDIO: c_int = 2049;
/// Disables modes that add lookahead, for low-latency links.
pub const OPUS_APPLICATION_RESTRICTED_LOWDELAY: c_int = 2051;

/// Lets the encoder pick a value itself.
pub const OPUS_AUTO: c_int = -1000;
/// Makes the bitrate as high as the packet size allows.
pub const OPUS_BITRATE_MAX: c_int = -1;

/// Signal hint: the input is speech.
pub const OPUS_SIGNAL_VOICE: c_int = 3001;
/// Signal hint: the input is music.
pub const OPUS_SIGNAL_MUSIC: c_int = 3002;

/// 4 kHz audio bandpass.
pub const OPUS_BANDWIDTH_NARROWBAND: c_int = 1101;
/// 6 kHz audio bandpass.
pub const OPUS_BANDWIDTH_MEDIUMBAND: c_int = 1102;
/// 8 kHz audio bandpass.
pub const OPUS_BANDWIDTH_WIDEBAND: c_int = 1103;
/// 12 kHz audio bandpass.
pub const OPUS_BANDWIDTH_SUPERWIDEBAND: c_int = 1104;
/// 20 kHz audio bandpass.
pub const OPUS_BANDWIDTH_FULLBAND: c_int = 1105;

/// Frame duration: pick from the argument of the encode call.
pub const OPUS_FRAMESIZE_ARG: c_int = 5000;
/// 2.5 ms frames.
pub const OPUS_FRAMESIZE_2_5_MS: c_int = 5001;
/// 5 ms frames.
pub const OPUS_FRAMESIZE_5_MS: c_int = 5002;
/// 10 ms frames.
pub const OPUS_FRAMESIZE_10_MS: c_int = 5003;
/// 20 ms frames.
pub const OPUS_FRAMESIZE_20_MS: c_int = 5004;
/// 40 ms frames.
pub const OPUS_FRAMESIZE_40_MS: c_int = 5005;
/// 60 ms frames.
pub const OPUS_FRAMESIZE_60_MS: c_int = 5006;
/// 80 ms frames.
pub const OPUS_FRAMESIZE_80_MS: c_int = 5007;
/// 100 ms frames.
pub const OPUS_FRAMESIZE_100_MS: c_int = 5008;
/// 120 ms frames.
pub const OPUS_FRAMESIZE_120_MS: c_int = 5009;

/// Configures the intended application (`opus_int32` argument).
pub const OPUS_SET_APPLICATION_REQUEST: c_int = 4000;
/// Reads back the configured application (`opus_int32*` argument).
pub const OPUS_GET_APPLICATION_REQUEST: c_int = 4001;
/// Configures the bitrate in bits per second (`opus_int32` argument).
pub const OPUS_SET_BITRATE_REQUEST: c_int = 4002;
/// Reads back the configured bitrate (`opus_int32*` argument).
pub const OPUS_GET_BITRATE_REQUEST: c_int = 4003;
/// Configures the maximum audio bandpass (`opus_int32` argument).
pub const OPUS_SET_MAX_BANDWIDTH_REQUEST: c_int = 4004;
/// Reads back the maximum audio bandpass (`opus_int32*` argument).
pub const OPUS_GET_MAX_BANDWIDTH_REQUEST: c_int = 4005;
/// Configures VBR on or off (`opus_int32` argument).
pub const OPUS_SET_VBR_REQUEST: c_int = 4006;
/// Reads back the VBR flag (`opus_int32*` argument).
pub const OPUS_GET_VBR_REQUEST: c_int = 4007;
/// Forces a specific audio bandpass, or `OPUS_AUTO` (`opus_int32` argument).
pub const OPUS_SET_BANDWIDTH_REQUEST: c_int = 4008;
/// Reads the audio bandpass currently in use (`opus_int32*` argument).
pub const OPUS_GET_BANDWIDTH_REQUEST: c_int = 4009;
/// Configures computational complexity, 0-10 (`opus_int32` argument).
pub const OPUS_SET_COMPLEXITY_REQUEST: c_int = 4010;
/// Reads back the complexity (`opus_int32*` argument).
pub const OPUS_GET_COMPLEXITY_REQUEST: c_int = 4011;
/// Enables or disables in-band forward error correction (`opus_int32` argument).
pub const OPUS_SET_INBAND_FEC_REQUEST: c_int = 4012;
/// Reads back the in-band FEC flag (`opus_int32*` argument).
pub const OPUS_GET_INBAND_FEC_REQUEST: c_int = 4013;
/// Configures the expected packet loss percentage, 0-100 (`opus_int32` argument).
pub const OPUS_SET_PACKET_LOSS_PERC_REQUEST: c_int = 4014;
/// Reads back the expected packet loss percentage (`opus_int32*` argument).
pub const OPUS_GET_PACKET_LOSS_PERC_REQUEST: c_int = 4015;
/// Enables or disables discontinuous transmission (`opus_int32` argument).
pub const OPUS_SET_DTX_REQUEST: c_int = 4016;
/// Reads back the DTX flag (`opus_int32*` argument).
pub const OPUS_GET_DTX_REQUEST: c_int = 4017;
/// Configures constrained VBR (`opus_int32` argument).
pub const OPUS_SET_VBR_CONSTRAINT_REQUEST: c_int = 4020;
/// Reads back the constrained VBR flag (`opus_int32*` argument).
pub const OPUS_GET_VBR_CONSTRAINT_REQUEST: c_int = 4021;
/// Forces mono or stereo, or `OPUS_AUTO` (`opus_int32` argument).
pub const OPUS_SET_FORCE_CHANNELS_REQUEST: c_int = 4022;
/// Reads back the forced channel count (`opus_int32*` argument).
pub const OPUS_GET_FORCE_CHANNELS_REQUEST: c_int = 4023;
/// Configures the signal type hint (`opus_int32` argument).
pub const OPUS_SET_SIGNAL_REQUEST: c_int = 4024;
/// Reads back the signal type hint (`opus_int32*` argument).
pub const OPUS_GET_SIGNAL_REQUEST: c_int = 4025;
/// Reads the total lookahead of the encoder in samples (`opus_int32*` argument).
pub const OPUS_GET_LOOKAHEAD_REQUEST: c_int = 4027;
/// Resets the codec state; takes no argument.
pub const OPUS_RESET_STATE: c_int = 4028;
/// Reads the sampling rate the instance was created with (`opus_int32*` argument).
pub const OPUS_GET_SAMPLE_RATE_REQUEST: c_int = 4029;
/// Reads the final range coder state of the last frame (`opus_uint32*` argument).
pub const OPUS_GET_FINAL_RANGE_REQUEST: c_int = 4031;
/// Configures the depth of the input signal in bits, 8-24 (`opus_int32` argument).
pub const OPUS_SET_LSB_DEPTH_REQUEST: c_int = 4036;
/// Reads back the input signal depth (`opus_int32*` argument).
pub const OPUS_GET_LSB_DEPTH_REQUEST: c_int = 4037;
/// Pins the frame duration instead of taking it from the encode call (`opus_int32` argument).
pub const OPUS_SET_EXPERT_FRAME_DURATION_REQUEST: c_int = 4040;
/// Reads back the pinned frame duration (`opus_int32*` argument).
pub const OPUS_GET_EXPERT_FRAME_DURATION_REQUEST: c_int = 4041;
/// Disables or re-enables long-term prediction (`opus_int32` argument).
pub const OPUS_SET_PREDICTION_DISABLED_REQUEST: c_int = 4042;
/// Reads back the prediction-disabled flag (`opus_int32*` argument).
pub const OPUS_GET_PREDICTION_DISABLED_REQUEST: c_int = 4043;
/// Disables or re-enables stereo phase inversion (`opus_int32` argument).
pub const OPUS_SET_PHASE_INVERSION_DISABLED_REQUEST: c_int = 4046;
/// Reads back the phase-inversion-disabled flag (`opus_int32*` argument).
pub const OPUS_GET_PHASE_INVERSION_DISABLED_REQUEST: c_int = 4047;
/// Reads whether the encoder is in DTX at the moment (`opus_int32*` argument).
pub const OPUS_GET_IN_DTX_REQUEST: c_int = 4049;
