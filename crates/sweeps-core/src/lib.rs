//! Sweeps Core - offline windowed-sinc resampling and bit-depth conversion
//!
//! This crate converts uncompressed PCM audio between sample rates and bit
//! depths. It operates on complete buffers: the caller hands over a whole
//! decoded signal and receives a freshly allocated result.
//!
//! # Core Abstractions
//!
//! ## Canonical Signal Model
//!
//! - [`Signal`] - interleaved samples plus rate, channel count, and depth tag
//! - [`SampleBuffer`] - the three canonical domains: unsigned 8-bit,
//!   signed 16-bit, and normalized `f32` (backing both 24- and 32-bit audio)
//! - [`BitDepth`] - the depth tag the dispatcher routes on
//!
//! ## Resampling
//!
//! - [`resample`] / [`resample_with`] - rate conversion preserving bit depth
//! - [`FilterDesign`] - Kaiser lowpass parameters derived from the rate pair
//! - [`KernelTable`] - the per-call polyphase tap table with interpolation
//!   deltas
//! - [`PcmSample`] / [`resample_buffer`] - the slice-level engine beneath the
//!   dispatcher
//!
//! ## Bit-Depth Conversion
//!
//! - [`convert`] / [`convert_with`] - loss-aware mapping between the 8, 16,
//!   24, and 32 bit forms
//!
//! ## Allocation
//!
//! - [`BufferAlloc`] - the capability consulted before every output buffer
//!   allocation, defaulting to [`SystemAlloc`]
//!
//! # Example
//!
//! ```rust,ignore
//! use sweeps_core::{resample, convert, BitDepth, Signal};
//!
//! let narrow = resample(&signal, 22050)?;
//! let eight_bit = convert(&narrow, BitDepth::Bits8)?;
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! sweeps-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Single-threaded and synchronous**: one call fully processes one buffer
//! - **No shared mutable state**: the kernel table is built per call, so
//!   concurrent calls on different threads never race
//! - **No dependencies on std**: pure `no_std` with `libm` for math
//! - **Allocation as a capability**: output buffers go through the caller's
//!   allocator, never ambient global state

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod allocator;
pub mod convert;
pub mod design;
pub mod engine;
pub mod error;
pub mod kernel;
pub mod math;
pub mod ratio;
pub mod resample;
pub mod signal;

// Re-export main types at crate root
pub use allocator::{BufferAlloc, SystemAlloc};
pub use convert::{convert_f32, convert_i16, convert_u8};
pub use design::{
    DOWN_TRANSITION_WIDTH, FilterDesign, MAX_WINDOW_TAPS, SIDELOBE_ATTENUATION_DB,
    UP_TRANSITION_WIDTH,
};
pub use engine::{PcmSample, resample_buffer};
pub use error::{Error, Result};
pub use kernel::{KernelEntry, KernelTable, LUT_PHASES};
pub use math::{bessel_i0, kaiser, nsinc};
pub use ratio::{RateRatio, gcd};
pub use resample::{convert, convert_with, resample, resample_with};
pub use signal::{BitDepth, SampleBuffer, Signal};
