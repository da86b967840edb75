//! RIFF/WAVE load and save for the sweeps resampler.
//!
//! This crate moves audio between WAVE containers and the canonical
//! [`Signal`](sweeps_core::Signal) model the core operates on:
//!
//! - **File I/O**: [`read_wav`] and [`write_wav`] for paths
//! - **Byte-stream I/O**: [`read_wav_from`] and [`write_wav_to`] over any
//!   `io::Read` / `io::Write + io::Seek`, which covers in-memory byte
//!   blocks (`Cursor`) and virtual filesystems alike
//! - **Metadata**: [`read_wav_info`] probes a header without decoding
//!
//! Container parsing and writing is delegated to `hound`; this crate owns
//! the mapping between stored PCM widths and the canonical domains
//! (8-bit unsigned, 16-bit signed, 24/32-bit as normalized `f32`).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sweeps_io::{read_wav, write_wav};
//! use sweeps_core::resample;
//!
//! let signal = read_wav("input.wav")?;
//! let converted = resample(&signal, 48000)?;
//! write_wav("output.wav", &converted)?;
//! ```

mod wav;

pub use wav::{
    WavFormat, WavInfo, read_wav, read_wav_from, read_wav_info, write_wav, write_wav_to,
};

/// Error types for WAVE I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed or unsupported RIFF/WAVE structure.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The container declares a bit depth the resampler cannot process.
    #[error("invalid input bitdepth: {0}")]
    UnsupportedBitDepth(u16),

    /// The decoded stream violated a core signal invariant.
    #[error(transparent)]
    Core(#[from] sweeps_core::Error),

    /// Standard I/O error from the underlying stream.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for WAVE I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
