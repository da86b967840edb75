//! WAV file reading and writing.
//!
//! Accepted on load: format tag 1 (integer PCM) at 8, 16, 24, or 32 bits,
//! and format tag 3 (IEEE float) at 32 bits. 32-bit integer PCM is scaled
//! by 2⁻³¹ into the float domain; 24-bit samples follow the same rule with
//! their top 24 bits, which is equivalent to dividing the sign-extended
//! sample by 2²³.
//!
//! On save, 8- and 16-bit signals are written as integer PCM, 24-bit packs
//! the top 24 bits of `round(f · 2³¹)` little-endian, and 32-bit is written
//! as IEEE float (tag 3). Header bookkeeping (`avgBytesPerSec`,
//! `blockAlign`, chunk sizes, RIFF padding) is the container library's
//! concern.

use crate::{Error, Result};
use hound::{SampleFormat, WavReader, WavWriter};
use std::io;
use std::path::Path;
use sweeps_core::{BitDepth, SampleBuffer, Signal};

/// Scale between the 32-bit integer sample domain and normalized floats.
const INT32_SCALE: f64 = 2_147_483_648.0;

/// WAV audio encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// Linear PCM (integer samples), format tag 1.
    Pcm,
    /// IEEE 754 floating-point samples, format tag 3.
    IeeeFloat,
}

/// WAV file metadata extracted without decoding sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample as stored in the container.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Audio encoding format.
    pub format: WavFormat,
}

/// Read WAV metadata without decoding sample data.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let total_samples = u64::from(reader.len());
    let num_frames = total_samples / u64::from(spec.channels);

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs: num_frames as f64 / f64::from(spec.sample_rate),
        format: match spec.sample_format {
            SampleFormat::Float => WavFormat::IeeeFloat,
            SampleFormat::Int => WavFormat::Pcm,
        },
    })
}

/// Read a WAV file into the canonical signal model.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<Signal> {
    decode(WavReader::open(path)?)
}

/// Read a WAV stream from any byte source into the canonical signal model.
///
/// The source can be an open file, an in-memory block
/// (`io::Cursor<Vec<u8>>` or `&[u8]`), or any virtual-filesystem reader.
pub fn read_wav_from<R: io::Read>(reader: R) -> Result<Signal> {
    decode(WavReader::new(reader)?)
}

fn decode<R: io::Read>(reader: WavReader<R>) -> Result<Signal> {
    let spec = reader.spec();
    let Some(depth) = BitDepth::from_bits(spec.bits_per_sample) else {
        return Err(Error::UnsupportedBitDepth(spec.bits_per_sample));
    };

    tracing::debug!(
        channels = spec.channels,
        sample_rate = spec.sample_rate,
        bits = spec.bits_per_sample,
        format = ?spec.sample_format,
        "decoding WAV"
    );

    let samples = match (spec.sample_format, depth) {
        (SampleFormat::Int, BitDepth::Bits8) => {
            // hound removes the unsigned offset; restore offset-binary.
            let data: Vec<u8> = reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| (v + 128) as u8))
                .collect::<std::result::Result<_, _>>()?;
            SampleBuffer::U8(data)
        }
        (SampleFormat::Int, BitDepth::Bits16) => {
            let data: Vec<i16> = reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as i16))
                .collect::<std::result::Result<_, _>>()?;
            SampleBuffer::I16(data)
        }
        (SampleFormat::Int, BitDepth::Bits24) => {
            // Top 24 bits over 2³¹ ≡ the sign-extended sample over 2²³.
            let data: Vec<f32> = reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / 8_388_608.0))
                .collect::<std::result::Result<_, _>>()?;
            SampleBuffer::F32(data)
        }
        (SampleFormat::Int, BitDepth::Bits32) => {
            let data: Vec<f32> = reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| (f64::from(v) / INT32_SCALE) as f32))
                .collect::<std::result::Result<_, _>>()?;
            SampleBuffer::F32(data)
        }
        (SampleFormat::Float, BitDepth::Bits32) => {
            let data: Vec<f32> = reader
                .into_samples::<f32>()
                .collect::<std::result::Result<_, _>>()?;
            SampleBuffer::F32(data)
        }
        (SampleFormat::Float, _) => {
            return Err(Error::UnsupportedBitDepth(spec.bits_per_sample));
        }
    };

    Ok(Signal::new(
        samples,
        spec.sample_rate,
        spec.channels,
        depth,
    )?)
}

/// Write a signal to a WAV file at `path`.
pub fn write_wav<P: AsRef<Path>>(path: P, signal: &Signal) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_wav_to(io::BufWriter::new(file), signal)
}

/// Write a signal as a WAV stream to any seekable byte sink.
pub fn write_wav_to<W: io::Write + io::Seek>(writer: W, signal: &Signal) -> Result<()> {
    let depth = signal.depth();
    let spec = hound::WavSpec {
        channels: signal.channels(),
        sample_rate: signal.sample_rate(),
        bits_per_sample: depth.bits(),
        sample_format: if depth == BitDepth::Bits32 {
            SampleFormat::Float
        } else {
            SampleFormat::Int
        },
    };

    tracing::debug!(
        channels = spec.channels,
        sample_rate = spec.sample_rate,
        bits = spec.bits_per_sample,
        frames = signal.frames(),
        "encoding WAV"
    );

    let mut writer = WavWriter::new(writer, spec)?;
    match signal.samples() {
        SampleBuffer::U8(data) => {
            for &sample in data {
                writer.write_sample((i16::from(sample) - 128) as i8)?;
            }
        }
        SampleBuffer::I16(data) => {
            for &sample in data {
                writer.write_sample(sample)?;
            }
        }
        SampleBuffer::F32(data) => {
            if depth == BitDepth::Bits24 {
                for &sample in data {
                    // Top 24 bits of round(f · 2³¹), handed to the
                    // container writer for little-endian packing.
                    let wide = (f64::from(sample) * INT32_SCALE)
                        .round()
                        .clamp(-INT32_SCALE, INT32_SCALE - 1.0)
                        as i32;
                    writer.write_sample(wide >> 8)?;
                }
            } else {
                for &sample in data {
                    writer.write_sample(sample)?;
                }
            }
        }
    }

    writer.finalize()?;
    Ok(())
}
