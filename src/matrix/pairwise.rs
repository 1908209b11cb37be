//! The symmetric matrix of pairwise slice-correlation fields.
//!
//! ## Purpose
//!
//! This module defines the matrix produced by the builder: a virtual,
//! symmetric `Z×Z` grid (Z = number of slices) whose entries are themselves
//! lazy 2D scalar fields over the shared spatial domain of one slice.
//!
//! ## Design notes
//!
//! * **Flat Variant Entries**: An entry is either a constant field (1.0 on the
//!   diagonal, NaN beyond the computation range) or a lazy correlation
//!   engine. `PairField` is a two-arm enum behind the `ScalarField`
//!   capability; no inheritance chain.
//! * **Aliased Symmetric Cells**: Positions `(i,j)` and `(j,i)` hold clones of
//!   one `Rc`, so a single write-once cache serves both traversal orders.
//!   This aliasing is deliberate sharing, not a bug; entry identity is
//!   observable through `Rc::ptr_eq`.
//! * **Monotone Caches**: Entry caches grow on demand and are never cleared;
//!   the matrix lives as long as the slices it borrows from the stack.
//!
//! ## Invariants
//!
//! * `entry(i, i)` is the constant 1.0 field.
//! * `entry(i, j)` with `|i - j| > range` is the constant NaN field.
//! * `entry(i, j)` with `0 < |i - j| <= range` is a `CrossCorrelationField`
//!   over slices `i` and `j`, and is the same instance as `entry(j, i)`.
//!
//! ## Non-goals
//!
//! * Mutation after construction; the grid of entries is fixed at build time
//!   even though entry values materialize lazily.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::rc::Rc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::rc::Rc;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::correlation::ncc::CrossCorrelationField;
use crate::field::constant::ConstantField;
use crate::field::scalar::{FieldDomain, ScalarField};
use crate::field::view::SliceView;
use crate::matrix::strip::StripView;
use crate::primitives::domain::Domain;
use crate::primitives::errors::XcorrError;

// ============================================================================
// Entry Types
// ============================================================================

/// The correlation engine over two slice views of one stack.
pub type SliceCorrelation<'a, F, T> =
    CrossCorrelationField<SliceView<'a, F>, SliceView<'a, F>, T>;

/// One entry of the pairwise matrix: constant or lazily computed.
#[derive(Debug)]
pub enum PairField<'a, F, T> {
    /// A constant field (diagonal 1.0 or out-of-range NaN).
    Constant(ConstantField<T>),

    /// A lazy windowed cross-correlation between two slices.
    Correlation(SliceCorrelation<'a, F, T>),
}

impl<'a, F, T> PairField<'a, F, T> {
    /// Whether this entry is a constant field rather than a computed one.
    #[inline]
    pub fn is_constant(&self) -> bool {
        matches!(self, PairField::Constant(_))
    }
}

impl<'a, F, T> FieldDomain for PairField<'a, F, T> {
    #[inline]
    fn domain(&self) -> &Domain {
        match self {
            PairField::Constant(c) => c.domain(),
            PairField::Correlation(cc) => cc.domain(),
        }
    }
}

impl<'a, F, T> ScalarField<T> for PairField<'a, F, T>
where
    F: ScalarField<T>,
    T: Float,
{
    #[inline]
    fn value_at(&self, pos: &[usize]) -> T {
        match self {
            PairField::Constant(c) => c.value_at(pos),
            PairField::Correlation(cc) => cc.value_at(pos),
        }
    }
}

// ============================================================================
// CorrelationMatrix
// ============================================================================

/// A symmetric, range-limited `Z×Z` grid of lazy pairwise correlation fields.
#[derive(Debug)]
pub struct CorrelationMatrix<'a, F, T> {
    /// Row-major grid of shared entries, length `slices * slices`.
    entries: Vec<Rc<PairField<'a, F, T>>>,
    /// The `Z×Z` index domain of the grid itself.
    pair_domain: Domain,
    /// The spatial domain shared by every slice (and every entry).
    slice_domain: Domain,
    /// Window radius the computed entries were built with.
    radius: Vec<usize>,
    /// Maximum slice-index distance with a computed entry.
    range: usize,
}

// Shape and metadata need no scalar bounds; keeping them unbounded lets
// shape-only consumers (the strip's domain, for one) stay generic.
impl<'a, F, T> CorrelationMatrix<'a, F, T> {
    /// Assemble a matrix from builder output.
    pub(crate) fn from_parts(
        entries: Vec<Rc<PairField<'a, F, T>>>,
        pair_domain: Domain,
        slice_domain: Domain,
        radius: Vec<usize>,
        range: usize,
    ) -> Self {
        Self {
            entries,
            pair_domain,
            slice_domain,
            radius,
            range,
        }
    }

    /// Number of slices (the matrix is `slices() × slices()`).
    #[inline]
    pub fn slices(&self) -> usize {
        self.pair_domain.dim(0)
    }

    /// The window radius used for computed entries.
    #[inline]
    pub fn radius(&self) -> &[usize] {
        &self.radius
    }

    /// The maximum slice-index distance with a computed entry.
    #[inline]
    pub fn range(&self) -> usize {
        self.range
    }

    /// The spatial domain shared by every slice and every entry.
    #[inline]
    pub fn slice_domain(&self) -> &Domain {
        &self.slice_domain
    }

    /// The `Z×Z` index domain of the grid.
    #[inline]
    pub fn pair_domain(&self) -> &Domain {
        &self.pair_domain
    }

    /// The shared entry at `(z1, z2)`.
    ///
    /// Symmetric positions return the same instance; compare with
    /// `Rc::ptr_eq` to observe the aliasing.
    pub fn entry(&self, z1: usize, z2: usize) -> Result<&Rc<PairField<'a, F, T>>, XcorrError> {
        self.pair_domain.check(&[z1, z2])?;
        Ok(&self.entries[self.pair_domain.linear_index(&[z1, z2])])
    }

    /// Entry lookup without bounds checking, for in-crate re-indexing views.
    #[inline]
    pub(crate) fn entry_unchecked(&self, z1: usize, z2: usize) -> &Rc<PairField<'a, F, T>> {
        &self.entries[self.pair_domain.linear_index(&[z1, z2])]
    }
}

impl<'a, F, T> CorrelationMatrix<'a, F, T>
where
    F: ScalarField<T>,
    T: Float,
{
    /// Read the correlation of slices `z1` and `z2` at spatial position `xy`.
    pub fn get(&self, z1: usize, z2: usize, xy: &[usize]) -> Result<T, XcorrError> {
        self.entry(z1, z2)?.get(xy)
    }

    /// Re-project the matrix at a fixed spatial coordinate into a `Z×Z`
    /// scalar field of correlation values.
    pub fn strip(&self, xy: &[usize]) -> Result<StripView<'_, 'a, F, T>, XcorrError> {
        StripView::new(self, xy)
    }
}
