//! The shared polyphase resampling loop.
//!
//! One generic routine serves all three canonical sample domains. The
//! [`PcmSample`] seam supplies the per-domain input fetch, output
//! quantization, and dither policy; monomorphization produces one
//! specialized loop per domain.
//!
//! # Algorithm
//!
//! For each output frame the engine selects one of the kernel table's 128
//! phase rows from the fractional position of the output sample between two
//! input samples, sharpens it by linearly interpolating toward the adjacent
//! row, and convolves it with the last W input frames held in a circular
//! delay line. A small integer phase accumulator (step = reduced input
//! rate, modulus = reduced output rate) decides after each output frame how
//! many new input frames to shift into the line. Integer outputs pass
//! through first-order error-diffusion dither: the rounding residual of
//! each frame is folded into the next rounding decision, whitening the
//! quantization noise.
//!
//! The delay line is zero-padded for the first `W/2 − 1` frames and fed
//! silence once the input runs dry, so the filter ramps in and out cleanly
//! at the signal boundaries.

#[cfg(not(feature = "std"))]
use alloc::vec;

use libm::roundf;

use crate::design::FilterDesign;
use crate::kernel::{KernelTable, LUT_PHASES};
use crate::ratio::RateRatio;

/// Hooks the resampling loop uses to move samples between their stored
/// domain and the float filtering domain.
pub trait PcmSample: Copy {
    /// Widen one stored sample into the filter's float domain.
    fn to_float(self) -> f32;

    /// Quantize one filtered value back to storage. `error` is the
    /// channel's running error-diffusion state; formats without dither
    /// leave it untouched.
    fn quantize(value: f32, error: &mut f32) -> Self;
}

/// Unsigned 8-bit offset-binary: silence is 128, full scale 0/255.
impl PcmSample for u8 {
    #[inline]
    fn to_float(self) -> f32 {
        f32::from(self) - 128.0
    }

    #[inline]
    fn quantize(value: f32, error: &mut f32) -> Self {
        let r = roundf(value + *error);
        *error += value - r;
        if r > 127.0 {
            255
        } else if r < -128.0 {
            0
        } else {
            (r + 128.0) as u8
        }
    }
}

/// Signed 16-bit two's-complement.
impl PcmSample for i16 {
    #[inline]
    fn to_float(self) -> f32 {
        f32::from(self)
    }

    #[inline]
    fn quantize(value: f32, error: &mut f32) -> Self {
        let r = roundf(value + *error);
        *error += value - r;
        if r > 32767.0 {
            32767
        } else if r < -32768.0 {
            -32768
        } else {
            r as i16
        }
    }
}

/// Normalized float: clipped to [-1, 1], no dither.
impl PcmSample for f32 {
    #[inline]
    fn to_float(self) -> f32 {
        self
    }

    #[inline]
    fn quantize(value: f32, _error: &mut f32) -> Self {
        value.clamp(-1.0, 1.0)
    }
}

/// Copy one interleaved frame from `input` into a delay-line slot,
/// substituting silence once the input is exhausted.
#[inline]
fn fetch_frame<S: PcmSample>(input: &[S], in_pos: &mut usize, slot: &mut [f32]) {
    for value in slot.iter_mut() {
        *value = match input.get(*in_pos) {
            Some(&sample) => {
                *in_pos += 1;
                sample.to_float()
            }
            None => 0.0,
        };
    }
}

/// Resample `input` into `output` at the slice level.
///
/// Both slices hold whole interleaved frames; `output.len()` determines how
/// many frames are produced (the dispatcher sizes it from
/// [`RateRatio::output_frames`]). Equal rates take the fast path: a direct
/// copy of `min(input.len(), output.len())` samples with no filtering.
///
/// The kernel table, delay line, and dither state are local to the call
/// and released on return.
pub fn resample_buffer<S: PcmSample>(
    input: &[S],
    output: &mut [S],
    channels: usize,
    in_rate: u32,
    out_rate: u32,
) {
    // Fast path: no resampling necessary.
    if in_rate == out_rate {
        let n = input.len().min(output.len());
        output[..n].copy_from_slice(&input[..n]);
        return;
    }
    if output.is_empty() || channels == 0 {
        return;
    }

    let design = FilterDesign::for_rates(in_rate, out_rate);
    let table = KernelTable::build(in_rate, &design);
    let window = table.taps();

    let ratio = RateRatio::reduce(in_rate, out_rate);
    let step = u64::from(ratio.down);
    let modulus = u64::from(ratio.up);
    let out_period = 1.0 / ratio.up as f32;

    // Delay line: W interleaved frames, zero-padded on the left for the
    // first half window, then pre-filled from the input.
    let mut line = vec![0.0f32; window * channels];
    let mut in_pos = 0usize;
    let lead = window / 2 - 1;
    for slot in lead..window {
        fetch_frame(input, &mut in_pos, &mut line[slot * channels..(slot + 1) * channels]);
    }

    let mut dither = vec![0.0f32; channels];
    let mut acc = vec![0.0f32; channels];
    let mut subpos = 0u64;
    let mut next = 0usize;

    for frame in output.chunks_exact_mut(channels) {
        // Sub-sample position of this output frame between two input
        // frames, mapped onto the table's phase axis.
        let position = 1.0 - subpos as f32 * out_period;
        let interp = position * (LUT_PHASES - 1) as f32;
        let phase = interp as usize;
        let frac = interp - phase as f32;
        let row = table.row(phase);

        // Walk the ring in two contiguous passes.
        acc.fill(0.0);
        let mut tap = 0usize;
        for slot in next..window {
            let entry = row[tap];
            let scale = entry.value + entry.delta * frac;
            let base = slot * channels;
            for (channel, sum) in acc.iter_mut().enumerate() {
                *sum += line[base + channel] * scale;
            }
            tap += 1;
        }
        for slot in 0..next {
            let entry = row[tap];
            let scale = entry.value + entry.delta * frac;
            let base = slot * channels;
            for (channel, sum) in acc.iter_mut().enumerate() {
                *sum += line[base + channel] * scale;
            }
            tap += 1;
        }

        for (channel, out) in frame.iter_mut().enumerate() {
            *out = S::quantize(acc[channel], &mut dither[channel]);
        }

        // Advance the polyphase walk, shifting in one input frame per
        // accumulator wrap.
        subpos += step;
        while subpos >= modulus {
            subpos -= modulus;
            fetch_frame(
                input,
                &mut in_pos,
                &mut line[next * channels..(next + 1) * channels],
            );
            next = (next + 1) % window;
        }
    }
}
