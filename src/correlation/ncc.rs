//! The lazy, cached, windowed cross-correlation field.
//!
//! ## Purpose
//!
//! This module implements `CrossCorrelationField`: given two scalar fields
//! over the same domain and a per-axis window radius, it is itself a scalar
//! field whose value at `p` is the normalized cross-correlation (NCC) of the
//! radius-bounded, domain-clipped neighborhoods of `p` in both inputs.
//! Each value is computed on first read and memoized; repeat reads are O(1).
//!
//! ## Design notes
//!
//! * **Write-Once Cells**: The cache is one `OnceCell` per coordinate, which
//!   is exactly the "computed flag set only after the value write" contract.
//!   The cache belongs to the field instance and is shared by every cursor
//!   and every matrix cell aliasing the field.
//! * **Single-Threaded Cells**: `unsync` cells match the crate's default
//!   execution model. Under concurrent sharing the recompute-on-race would be
//!   idempotent (the value is a pure function of immutable inputs); promoting
//!   to synchronized cells is a hardening option, not required behavior.
//! * **Population Statistics**: Variances are divided by the window sample
//!   count and the covariance sum is divided once at the end, matching the
//!   reference formulation bit for bit. See `correlation::stats`.
//!
//! ## Key concepts
//!
//! * **Clipped Windows**: Near the boundary, windows shrink asymmetrically;
//!   no padding, no wrapping.
//! * **Numeric Degeneracy**: A zero-variance (constant) window makes the
//!   denominator zero; the resulting NaN or infinity is stored and propagated
//!   like any other value. Treat non-finite outputs as "no correlation signal
//!   available".
//!
//! ## Invariants
//!
//! * Both inputs share one domain, checked at construction.
//! * Once a coordinate is computed, its value is final; it is never
//!   recomputed or invalidated.
//!
//! ## Non-goals
//!
//! * Special-casing degenerate windows.
//! * Integral-image acceleration; windows are re-walked per query.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::boxed::Box;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use once_cell::unsync::OnceCell;

// Internal dependencies
use crate::correlation::stats::{
    count_as, window_covariance_sum, window_len, window_sum, window_sum_sq_diff,
};
use crate::field::scalar::{FieldDomain, ScalarField};
use crate::primitives::domain::Domain;
use crate::primitives::errors::XcorrError;

// ============================================================================
// CorrelationMode
// ============================================================================

/// How the per-window correlation coefficient is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorrelationMode {
    /// Plain normalized cross-correlation in `[-1, 1]`.
    #[default]
    Standard,

    /// Squared magnitude with the sign preserved:
    /// `cc < 0 ? -(cc*cc) : cc*cc`. Sharpens peaks while keeping
    /// anti-correlation distinguishable.
    SignedSquared,
}

// ============================================================================
// CrossCorrelationField
// ============================================================================

/// A lazy field of windowed NCC values between two aligned scalar fields.
#[derive(Debug)]
pub struct CrossCorrelationField<A, B, T> {
    a: A,
    b: B,
    radius: Vec<usize>,
    mode: CorrelationMode,
    domain: Domain,
    cache: Box<[OnceCell<T>]>,
}

impl<A, B, T> CrossCorrelationField<A, B, T>
where
    A: ScalarField<T>,
    B: ScalarField<T>,
    T: Float,
{
    /// Wrap two aligned fields with a per-axis window radius.
    ///
    /// Fails if the input domains differ or the radius rank does not match
    /// the domain rank.
    pub fn new(a: A, b: B, radius: &[usize], mode: CorrelationMode) -> Result<Self, XcorrError> {
        if a.domain() != b.domain() {
            return Err(XcorrError::DomainMismatch {
                left: a.domain().dims().to_vec(),
                right: b.domain().dims().to_vec(),
            });
        }
        let domain = a.domain().clone();
        if radius.len() != domain.ndim() {
            return Err(XcorrError::RankMismatch {
                got: radius.len(),
                expected: domain.ndim(),
            });
        }

        let cache: Box<[OnceCell<T>]> = (0..domain.len()).map(|_| OnceCell::new()).collect();

        Ok(Self {
            a,
            b,
            radius: radius.to_vec(),
            mode,
            domain,
            cache,
        })
    }

    /// The per-axis window radius.
    #[inline]
    pub fn radius(&self) -> &[usize] {
        &self.radius
    }

    /// The reporting mode.
    #[inline]
    pub fn mode(&self) -> CorrelationMode {
        self.mode
    }

    /// Whether the value at `pos` has already been computed and cached.
    pub fn is_computed(&self, pos: &[usize]) -> Result<bool, XcorrError> {
        self.domain.check(pos)?;
        Ok(self.cache[self.domain.linear_index(pos)].get().is_some())
    }

    /// Compute the windowed correlation at an in-domain coordinate.
    fn correlate(&self, pos: &[usize]) -> T {
        let (lo, hi) = self.domain.clipped(pos, &self.radius);
        let n = count_as::<T>(window_len(&lo, &hi));

        let mean_a = window_sum(&self.a, &lo, &hi) / n;
        let mean_b = window_sum(&self.b, &lo, &hi) / n;
        let var_a = window_sum_sq_diff(&self.a, &lo, &hi, mean_a) / n;
        let var_b = window_sum_sq_diff(&self.b, &lo, &hi, mean_b) / n;
        let cov = window_covariance_sum(&self.a, &self.b, &lo, &hi, mean_a, mean_b);

        // Zero-variance windows make this 0/0 or x/0; the non-finite result
        // is stored and propagated unchanged.
        let cc = cov / (var_a.sqrt() * var_b.sqrt() * n);

        match self.mode {
            CorrelationMode::Standard => cc,
            CorrelationMode::SignedSquared => {
                if cc < T::zero() {
                    -(cc * cc)
                } else {
                    cc * cc
                }
            }
        }
    }
}

impl<A, B, T> FieldDomain for CrossCorrelationField<A, B, T> {
    #[inline]
    fn domain(&self) -> &Domain {
        &self.domain
    }
}

impl<A, B, T> ScalarField<T> for CrossCorrelationField<A, B, T>
where
    A: ScalarField<T>,
    B: ScalarField<T>,
    T: Float,
{
    fn value_at(&self, pos: &[usize]) -> T {
        let idx = self.domain.linear_index(pos);
        *self.cache[idx].get_or_init(|| self.correlate(pos))
    }
}
