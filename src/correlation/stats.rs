//! Windowed statistics over scalar fields.
//!
//! ## Purpose
//!
//! This module provides the pure statistical accumulations the correlation
//! engine is built from: sum, sum of squared differences from a mean, and the
//! raw covariance sum of two fields over an inclusive coordinate box.
//!
//! ## Design notes
//!
//! * **Population Convention**: These functions return raw sums; the caller
//!   divides by the sample count. The engine divides variances by `n`
//!   (population variance) and leaves the covariance sum undivided, matching
//!   the reference formulation exactly. Downstream numeric agreement depends
//!   on this choice, so it must not be "corrected" to an unbiased estimator.
//! * **Deterministic Order**: Accumulation follows the domain traversal order
//!   (last axis fastest), so results are bit-reproducible across calls.
//!
//! ## Non-goals
//!
//! * Incremental or integral-image accumulation; windows are small relative
//!   to the field and are re-walked per query.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::field::scalar::ScalarField;
use crate::primitives::domain::Domain;

// ============================================================================
// Window Accumulations
// ============================================================================

/// Sum of a field over the inclusive box `[lo, hi]`.
pub fn window_sum<T, F>(field: &F, lo: &[usize], hi: &[usize]) -> T
where
    T: Float,
    F: ScalarField<T>,
{
    let mut sum = T::zero();
    Domain::for_each_in(lo, hi, |pos| {
        sum = sum + field.value_at(pos);
    });
    sum
}

/// Sum of squared differences from `mean` over the inclusive box `[lo, hi]`.
pub fn window_sum_sq_diff<T, F>(field: &F, lo: &[usize], hi: &[usize], mean: T) -> T
where
    T: Float,
    F: ScalarField<T>,
{
    let mut sum = T::zero();
    Domain::for_each_in(lo, hi, |pos| {
        let diff = field.value_at(pos) - mean;
        sum = sum + diff * diff;
    });
    sum
}

/// Raw covariance sum of two fields over the inclusive box `[lo, hi]`.
///
/// Accumulates `(a - mean_a) * (b - mean_b)` without dividing by the sample
/// count; the caller applies its own normalization.
pub fn window_covariance_sum<T, A, B>(
    a: &A,
    b: &B,
    lo: &[usize],
    hi: &[usize],
    mean_a: T,
    mean_b: T,
) -> T
where
    T: Float,
    A: ScalarField<T>,
    B: ScalarField<T>,
{
    let mut sum = T::zero();
    Domain::for_each_in(lo, hi, |pos| {
        sum = sum + (a.value_at(pos) - mean_a) * (b.value_at(pos) - mean_b);
    });
    sum
}

/// Lift a sample count into the float type.
///
/// Counts are bounded by the domain element count, which always fits the
/// float types this crate is used with.
#[inline]
pub fn count_as<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::max_value)
}

/// Inclusive-box sample count, re-exported from the domain layer for the
/// correlation engine.
#[inline]
pub fn window_len(lo: &[usize], hi: &[usize]) -> usize {
    Domain::box_len(lo, hi)
}
