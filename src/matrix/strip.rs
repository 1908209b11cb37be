//! Strip re-projection of the pairwise matrix.
//!
//! ## Purpose
//!
//! This module provides `StripView`: the matrix-of-fields viewed as a
//! field-of-matrices. Fixing one spatial coordinate `(x, y)` yields a `Z×Z`
//! scalar field whose `(z1, z2)` value is
//! `matrix.entry(z1, z2).get(&[x, y])` — the cut across the full pairwise
//! matrix an alignment solver consumes for one image column.
//!
//! ## Design notes
//!
//! * **Pure Re-Indexing**: The strip holds no cache of its own and delegates
//!   every read to the underlying entry, which caches one layer below. Reads
//!   through a strip therefore warm the same cache as direct matrix reads.
//! * **Cheap**: A strip holds a matrix reference and one coordinate; create
//!   and discard freely. It never outlives the matrix it references.
//! * **Validated Up Front**: The fixed coordinate is checked against the
//!   slice domain at construction, so reads only ever range-check the
//!   `(z1, z2)` pair.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::field::scalar::{FieldDomain, ScalarField};
use crate::matrix::pairwise::CorrelationMatrix;
use crate::primitives::domain::Domain;
use crate::primitives::errors::XcorrError;

// ============================================================================
// StripView
// ============================================================================

/// A `Z×Z` field of correlation values at one fixed spatial coordinate.
#[derive(Debug)]
pub struct StripView<'m, 'a, F, T> {
    matrix: &'m CorrelationMatrix<'a, F, T>,
    xy: Vec<usize>,
}

impl<'m, 'a, F, T> StripView<'m, 'a, F, T>
where
    F: ScalarField<T>,
    T: Float,
{
    /// Fix `xy` inside the slice domain of `matrix`.
    pub(crate) fn new(
        matrix: &'m CorrelationMatrix<'a, F, T>,
        xy: &[usize],
    ) -> Result<Self, XcorrError> {
        matrix.slice_domain().check(xy)?;
        Ok(Self {
            matrix,
            xy: xy.to_vec(),
        })
    }

    /// The fixed spatial coordinate.
    #[inline]
    pub fn xy(&self) -> &[usize] {
        &self.xy
    }
}

impl<F, T> FieldDomain for StripView<'_, '_, F, T> {
    #[inline]
    fn domain(&self) -> &Domain {
        self.matrix.pair_domain()
    }
}

impl<F, T> ScalarField<T> for StripView<'_, '_, F, T>
where
    F: ScalarField<T>,
    T: Float,
{
    #[inline]
    fn value_at(&self, pos: &[usize]) -> T {
        self.matrix
            .entry_unchecked(pos[0], pos[1])
            .value_at(&self.xy)
    }
}

impl<F, T> Clone for StripView<'_, '_, F, T> {
    fn clone(&self) -> Self {
        Self {
            matrix: self.matrix,
            xy: self.xy.clone(),
        }
    }
}
