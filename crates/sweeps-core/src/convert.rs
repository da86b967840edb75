//! Loss-aware bit-depth conversion between the canonical domains.
//!
//! Conversions run directly between the stored forms: integer widths map
//! through exact shifts and offsets, and anything touching the float domain
//! is computed in single precision. The rounding conventions are pinned
//! here and in the unit tests:
//!
//! - 16 → 8 floors (`(s + 32768) >> 8`), the value the offset-and-scale
//!   float expression produces for every 16-bit input.
//! - float → integer truncates toward zero and saturates at the domain
//!   limits (the semantics of Rust's float-to-int cast).

use crate::allocator::{BufferAlloc, alloc_samples};
use crate::error::Result;
use crate::signal::{BitDepth, SampleBuffer};

/// Convert unsigned 8-bit samples to the target depth.
pub fn convert_u8(
    input: &[u8],
    depth: BitDepth,
    alloc: &mut dyn BufferAlloc,
) -> Result<SampleBuffer> {
    match depth {
        BitDepth::Bits8 => {
            let mut out = alloc_samples::<u8>(alloc, input.len(), "convert output (8-bit)")?;
            out.copy_from_slice(input);
            Ok(SampleBuffer::U8(out))
        }
        BitDepth::Bits16 => {
            let mut out = alloc_samples::<i16>(alloc, input.len(), "convert output (16-bit)")?;
            for (out, &sample) in out.iter_mut().zip(input) {
                *out = (i16::from(sample) - 128) * 256;
            }
            Ok(SampleBuffer::I16(out))
        }
        BitDepth::Bits24 | BitDepth::Bits32 => {
            let mut out = alloc_samples::<f32>(alloc, input.len(), "convert output (float)")?;
            for (out, &sample) in out.iter_mut().zip(input) {
                *out = f32::from(sample) / 127.0 - 1.0;
            }
            Ok(SampleBuffer::F32(out))
        }
    }
}

/// Convert signed 16-bit samples to the target depth.
pub fn convert_i16(
    input: &[i16],
    depth: BitDepth,
    alloc: &mut dyn BufferAlloc,
) -> Result<SampleBuffer> {
    match depth {
        BitDepth::Bits8 => {
            let mut out = alloc_samples::<u8>(alloc, input.len(), "convert output (8-bit)")?;
            for (out, &sample) in out.iter_mut().zip(input) {
                *out = ((i32::from(sample) + 32768) >> 8) as u8;
            }
            Ok(SampleBuffer::U8(out))
        }
        BitDepth::Bits16 => {
            let mut out = alloc_samples::<i16>(alloc, input.len(), "convert output (16-bit)")?;
            out.copy_from_slice(input);
            Ok(SampleBuffer::I16(out))
        }
        BitDepth::Bits24 | BitDepth::Bits32 => {
            let mut out = alloc_samples::<f32>(alloc, input.len(), "convert output (float)")?;
            for (out, &sample) in out.iter_mut().zip(input) {
                *out = f32::from(sample) / 32768.0;
            }
            Ok(SampleBuffer::F32(out))
        }
    }
}

/// Convert normalized float samples to the target depth.
pub fn convert_f32(
    input: &[f32],
    depth: BitDepth,
    alloc: &mut dyn BufferAlloc,
) -> Result<SampleBuffer> {
    match depth {
        BitDepth::Bits8 => {
            let mut out = alloc_samples::<u8>(alloc, input.len(), "convert output (8-bit)")?;
            for (out, &sample) in out.iter_mut().zip(input) {
                *out = ((sample + 1.0) * 127.5) as u8;
            }
            Ok(SampleBuffer::U8(out))
        }
        BitDepth::Bits16 => {
            let mut out = alloc_samples::<i16>(alloc, input.len(), "convert output (16-bit)")?;
            for (out, &sample) in out.iter_mut().zip(input) {
                *out = (sample * 32767.0) as i16;
            }
            Ok(SampleBuffer::I16(out))
        }
        BitDepth::Bits24 | BitDepth::Bits32 => {
            let mut out = alloc_samples::<f32>(alloc, input.len(), "convert output (float)")?;
            out.copy_from_slice(input);
            Ok(SampleBuffer::F32(out))
        }
    }
}
