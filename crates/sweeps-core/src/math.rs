//! Scalar math for Kaiser-windowed sinc filter design.
//!
//! Everything here is evaluated in `f64`: the kernel table is built once per
//! resampling call and stored as `f32`, so the design math can afford full
//! double precision. All functions are allocation-free and suitable for
//! `no_std`.
//!
//! - [`nsinc`] - normalized sinc, the ideal lowpass impulse response
//! - [`bessel_i0`] - modified Bessel function of the first kind, order zero
//! - [`kaiser`] - the Kaiser window, built on `I0`

use core::f64::consts::{FRAC_1_PI, PI};
use libm::{sin, sqrt};

/// Normalized sinc function.
///
/// Computes `sin(π·x) / (π·x)`, with the removable singularity at zero
/// defined as 1. This is the impulse response of an ideal lowpass filter
/// with cutoff at half the sampling rate.
///
/// # Example
/// ```rust
/// use sweeps_core::nsinc;
///
/// assert!((nsinc(0.0) - 1.0).abs() < 1e-15);
/// assert!(nsinc(1.0).abs() < 1e-15); // zero at every nonzero integer
/// ```
#[inline]
pub fn nsinc(x: f64) -> f64 {
    if x == 0.0 {
        return 1.0;
    }
    FRAC_1_PI / x * sin(PI * x)
}

/// Modified Bessel function of the first kind, order zero.
///
/// Evaluates the power series
///
/// ```text
/// I0(y) = Σ_{k≥0} (y²/4)^k / (k!)²
/// ```
///
/// accumulating terms until they stop contributing at double precision.
/// For the β values used by the filter designer (≈9.6) the series settles
/// well inside the iteration bound; 89 terms suffice for any f64 input the
/// window evaluation produces.
pub fn bessel_i0(y: f64) -> f64 {
    let q = y * y * 0.25;
    let mut sum = 1.0;
    let mut term = 1.0;
    let mut k = 1u32;
    while k < 128 {
        term *= q / f64::from(k * k);
        sum += term;
        if term < sum * 1e-17 {
            break;
        }
        k += 1;
    }
    sum
}

/// Kaiser window sample.
///
/// Evaluates tap `n` of a `length`-tap Kaiser window with shape parameter
/// `beta`:
///
/// ```text
/// w[n] = I0(β·√(1 − m²)) / I0(β),   m = 2n/(length−1) − 1
/// ```
///
/// `beta` trades main-lobe width against sidelobe attenuation; the filter
/// designer picks it from the stopband target. The window is symmetric:
/// `w[n] == w[length−1−n]`.
#[inline]
pub fn kaiser(n: usize, length: usize, beta: f64) -> f64 {
    let mid = 2.0 * n as f64 / (length - 1) as f64 - 1.0;
    bessel_i0(beta * sqrt(1.0 - mid * mid)) / bessel_i0(beta)
}
