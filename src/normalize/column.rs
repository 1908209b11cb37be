//! Mean/standard-deviation normalization of coordinate-column fields.
//!
//! ## Purpose
//!
//! This module rescales a finished coordinate-column field in place so that
//! its residuals against the identity mapping have zero mean and unit scale.
//! A coordinate-column field maps each position to an estimated coordinate
//! along its last axis; the statistics are therefore taken over the offsets
//! `value - position`, not over the raw values, and the position is restored
//! after standardization.
//!
//! ## Design notes
//!
//! * **Strategy Trait**: Normalizations are interchangeable behind
//!   `ColumnNormalization`; the mean/stddev variant is the one the reference
//!   workflow ships.
//! * **Variance Divisor**: The reference divides the squared-residual sum by
//!   `N * (N - 1)`; that convention is preserved exactly.
//! * **In Place**: Operates on mutable dense storage in linear order; the
//!   last axis varies fastest, so the per-element position offset is
//!   `index % dim(last)`.
//!
//! ## Invariants
//!
//! * The identity column (`value == position` everywhere) is a fixed point up
//!   to the degenerate zero-variance case.
//!
//! ## Non-goals
//!
//! * Special-casing zero-variance input; a constant offset column produces
//!   non-finite output, consistent with the crate's degeneracy policy.

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::correlation::stats::count_as;
use crate::field::dense::DenseField;
use crate::field::scalar::FieldDomain;
use crate::primitives::errors::XcorrError;

// ============================================================================
// ColumnNormalization Trait
// ============================================================================

/// A post-hoc rescaling strategy for coordinate-column fields.
pub trait ColumnNormalization {
    /// Normalize `field` in place.
    fn normalize<T: Float>(&self, field: &mut DenseField<T>) -> Result<(), XcorrError>;
}

// ============================================================================
// MeanStdNormalization
// ============================================================================

/// Standardize offsets against the last-axis position by their mean and
/// standard deviation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanStdNormalization;

impl ColumnNormalization for MeanStdNormalization {
    fn normalize<T: Float>(&self, field: &mut DenseField<T>) -> Result<(), XcorrError> {
        let n = field.domain().len();
        let last = field.domain().ndim() - 1;
        let column_len = field.domain().dim(last);
        let nf = count_as::<T>(n);

        // Offsets are value minus position along the last axis; in linear
        // order that position is index modulo the last-axis extent.
        let mut mean = T::zero();
        for (i, v) in field.data().iter().enumerate() {
            let pos = count_as::<T>(i % column_len);
            mean = mean + (*v - pos);
        }
        mean = mean / nf;

        let mut variance = T::zero();
        for (i, v) in field.data().iter().enumerate() {
            let pos = count_as::<T>(i % column_len);
            let diff = *v - pos - mean;
            variance = variance + diff * diff;
        }
        variance = variance / (nf * (nf - T::one()));
        let stddev = variance.sqrt();

        debug!("normalizing column field of {n} elements");

        for (i, v) in field.data_mut().iter_mut().enumerate() {
            let pos = count_as::<T>(i % column_len);
            *v = pos + (*v - pos - mean) / stddev;
        }

        Ok(())
    }
}
