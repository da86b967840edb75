//! Depth-tag dispatch for resampling and bit-depth conversion.
//!
//! The entry points route on the signal's [`BitDepth`] tag: 8- and 16-bit
//! signals run the integer engines, and both float-backed depths share the
//! float engine. The dispatcher owns the default allocator capability and
//! sizes every output in frames through [`RateRatio`], never raw bytes.

use crate::allocator::{BufferAlloc, SystemAlloc, alloc_samples};
use crate::convert::{convert_f32, convert_i16, convert_u8};
use crate::engine::resample_buffer;
use crate::error::{Error, Result};
use crate::ratio::RateRatio;
use crate::signal::{BitDepth, SampleBuffer, Signal};

/// Resample a signal to `out_rate` Hz, preserving its bit depth, using the
/// default system allocator.
pub fn resample(input: &Signal, out_rate: u32) -> Result<Signal> {
    resample_with(input, out_rate, &mut SystemAlloc)
}

/// Resample a signal through a caller-supplied allocator capability.
///
/// The output holds `in_frames · L / M` frames for the reduced rate ratio
/// `L/M`, evaluated in 64-bit integers. Equal input and output rates take
/// the byte-copy fast path. A refused allocation returns
/// [`Error::AllocationFailure`] with no output produced.
pub fn resample_with(
    input: &Signal,
    out_rate: u32,
    alloc: &mut dyn BufferAlloc,
) -> Result<Signal> {
    if out_rate == 0 {
        return Err(Error::InvalidArgument("output sample rate must be positive"));
    }

    let channels = usize::from(input.channels());
    let in_rate = input.sample_rate();
    let ratio = RateRatio::reduce(in_rate, out_rate);
    let out_frames = usize::try_from(ratio.output_frames(input.frames() as u64))
        .map_err(|_| Error::InvalidArgument("output frame count overflows the address space"))?;
    let out_len = out_frames * channels;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        in_rate,
        out_rate,
        up = ratio.up,
        down = ratio.down,
        out_frames,
        "resampling"
    );

    let samples = match input.samples() {
        SampleBuffer::U8(data) => {
            let mut out = alloc_samples::<u8>(alloc, out_len, "resample output (8-bit)")?;
            resample_buffer(data, &mut out, channels, in_rate, out_rate);
            SampleBuffer::U8(out)
        }
        SampleBuffer::I16(data) => {
            let mut out = alloc_samples::<i16>(alloc, out_len, "resample output (16-bit)")?;
            resample_buffer(data, &mut out, channels, in_rate, out_rate);
            SampleBuffer::I16(out)
        }
        SampleBuffer::F32(data) => {
            let mut out = alloc_samples::<f32>(alloc, out_len, "resample output (float)")?;
            resample_buffer(data, &mut out, channels, in_rate, out_rate);
            SampleBuffer::F32(out)
        }
    };

    Signal::new(samples, out_rate, input.channels(), input.depth())
}

/// Convert a signal to the target bit depth using the default system
/// allocator.
pub fn convert(input: &Signal, depth: BitDepth) -> Result<Signal> {
    convert_with(input, depth, &mut SystemAlloc)
}

/// Convert a signal's bit depth through a caller-supplied allocator
/// capability. Rate and channel count carry over unchanged.
pub fn convert_with(
    input: &Signal,
    depth: BitDepth,
    alloc: &mut dyn BufferAlloc,
) -> Result<Signal> {
    let samples = match input.samples() {
        SampleBuffer::U8(data) => convert_u8(data, depth, alloc)?,
        SampleBuffer::I16(data) => convert_i16(data, depth, alloc)?,
        SampleBuffer::F32(data) => convert_f32(data, depth, alloc)?,
    };

    Signal::new(samples, input.sample_rate(), input.channels(), depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_rate_returns_equal_samples() {
        let signal = Signal::new(
            SampleBuffer::I16(vec![0; 2000]),
            44100,
            2,
            BitDepth::Bits16,
        )
        .unwrap();
        let out = resample(&signal, 44100).unwrap();
        assert_eq!(out.samples(), signal.samples());
        assert_eq!(out.sample_rate(), 44100);
        assert_eq!(out.depth(), BitDepth::Bits16);
    }

    #[test]
    fn float_depth_tag_survives_resampling() {
        let signal = Signal::new(
            SampleBuffer::F32(vec![0.0; 1000]),
            48000,
            1,
            BitDepth::Bits24,
        )
        .unwrap();
        let out = resample(&signal, 24000).unwrap();
        assert_eq!(out.depth(), BitDepth::Bits24);
        assert_eq!(out.frames(), 500);
    }

    #[test]
    fn zero_output_rate_is_rejected() {
        let signal = Signal::new(SampleBuffer::U8(vec![128; 10]), 44100, 1, BitDepth::Bits8)
            .unwrap();
        assert!(matches!(
            resample(&signal, 0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn zero_frames_in_zero_frames_out() {
        let signal =
            Signal::new(SampleBuffer::I16(vec![]), 48000, 2, BitDepth::Bits16).unwrap();
        let out = resample(&signal, 96000).unwrap();
        assert_eq!(out.frames(), 0);
    }

    #[test]
    fn convert_keeps_rate_and_channels() {
        let signal = Signal::new(
            SampleBuffer::U8(vec![128; 440]),
            22050,
            2,
            BitDepth::Bits8,
        )
        .unwrap();
        let out = convert(&signal, BitDepth::Bits32).unwrap();
        assert_eq!(out.sample_rate(), 22050);
        assert_eq!(out.channels(), 2);
        assert_eq!(out.depth(), BitDepth::Bits32);
        assert_eq!(out.frames(), 220);
    }

    #[test]
    fn refused_allocation_surfaces_with_no_output() {
        struct NoAlloc;
        impl BufferAlloc for NoAlloc {
            fn grant(&mut self, _bytes: usize) -> bool {
                false
            }
        }

        let signal = Signal::new(
            SampleBuffer::I16(vec![100; 1000]),
            48000,
            1,
            BitDepth::Bits16,
        )
        .unwrap();
        let err = resample_with(&signal, 24000, &mut NoAlloc).unwrap_err();
        assert!(matches!(err, Error::AllocationFailure(_)));
    }
}
