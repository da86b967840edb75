//! The precomputed polyphase kernel table.
//!
//! The resampler evaluates a Kaiser-windowed sinc at arbitrary sub-sample
//! offsets. Rather than recomputing the window per output frame, the table
//! samples the kernel at [`LUT_PHASES`] evenly spaced fractional offsets
//! spanning one input sample interval, and stores per-tap forward
//! differences so a phase between two rows costs one multiply-add of linear
//! interpolation per tap.
//!
//! The table is owned by a single resampling call: it is built, used, and
//! dropped inside that call, so concurrent resamplings never share state.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::design::FilterDesign;
use crate::math::{kaiser, nsinc};

/// Number of sub-sample phases in the kernel table.
pub const LUT_PHASES: usize = 128;

/// One kernel cell: the tap value at this phase, plus the forward
/// difference to the same tap in the next phase (zero in the last phase).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KernelEntry {
    /// Normalized tap weight.
    pub value: f32,
    /// `next_phase.value − value`; linear-interpolation slope.
    pub delta: f32,
}

/// A Kaiser-windowed sinc lowpass sampled at [`LUT_PHASES`] sub-sample
/// offsets.
///
/// Each phase's taps are normalized to sum to one, making the filter's DC
/// gain exactly unity regardless of the fractional offset. The table is
/// valid only for the `(input rate, cutoff, taps, β)` tuple that built it
/// and must be rebuilt when any of those change.
pub struct KernelTable {
    taps: usize,
    entries: Vec<KernelEntry>,
}

impl KernelTable {
    /// Build the table for one filter design at the given input rate.
    pub fn build(in_rate: u32, design: &FilterDesign) -> Self {
        let taps = design.window_taps;
        let freq_adjust = design.cutoff_hz / f64::from(in_rate);

        let mut window = Vec::with_capacity(taps);
        for j in 0..taps {
            window.push(kaiser(j, taps, design.beta));
        }

        let mut entries = vec![KernelEntry::default(); LUT_PHASES * taps];
        let mut staged = vec![0.0f64; taps];
        for phase in 0..LUT_PHASES {
            // Sweep the kernel center across one input sample interval:
            // phase 0 sits at −W/2, phase P−1 one full sample later.
            let offset = phase as f64 / (LUT_PHASES - 1) as f64 - taps as f64 / 2.0;

            let mut sum = 0.0f64;
            for (j, tap) in staged.iter_mut().enumerate() {
                *tap = nsinc((j as f64 + offset) * freq_adjust) * window[j];
                sum += *tap;
            }

            // Unity DC gain per phase.
            let row = &mut entries[phase * taps..(phase + 1) * taps];
            if sum.abs() > 1e-12 {
                for (entry, &tap) in row.iter_mut().zip(staged.iter()) {
                    entry.value = (tap / sum) as f32;
                }
            } else {
                for (entry, &tap) in row.iter_mut().zip(staged.iter()) {
                    entry.value = tap as f32;
                }
            }
        }

        // Forward differences toward the next phase; the last phase keeps
        // its default zero deltas.
        for phase in 0..LUT_PHASES - 1 {
            for j in 0..taps {
                let next = entries[(phase + 1) * taps + j].value;
                let entry = &mut entries[phase * taps + j];
                entry.delta = next - entry.value;
            }
        }

        Self { taps, entries }
    }

    /// Window length in taps.
    pub fn taps(&self) -> usize {
        self.taps
    }

    /// The `taps`-long kernel row for one phase index.
    ///
    /// # Panics
    ///
    /// Panics if `phase >= LUT_PHASES`.
    #[inline]
    pub fn row(&self, phase: usize) -> &[KernelEntry] {
        &self.entries[phase * self.taps..(phase + 1) * self.taps]
    }
}
