//! Non-copying derived views of scalar fields.
//!
//! ## Purpose
//!
//! This module provides the two derived views every field supports without
//! copying data:
//! - `WindowView`: clip to an axis-aligned inclusive sub-box, re-addressed
//!   from zero.
//! - `SliceView`: fix one axis to a constant index and drop it, reducing the
//!   dimensionality by one (e.g. a 2D slice of a 3D stack).
//!
//! ## Design notes
//!
//! * **Borrowed**: Views hold a shared reference to their source; their
//!   lifetime is bound to it and they never own scalar data.
//! * **Scratch Buffers**: Each read translates a view coordinate into a source
//!   coordinate. The translation buffer is allocated once per view and reused
//!   through a `RefCell`, so reads do not allocate.
//! * **Single-Threaded**: The scratch buffer makes views `!Sync`, matching the
//!   crate's single-threaded-by-default execution model.
//!
//! ## Invariants
//!
//! * A view's domain is always fully contained in (for windows) or derived
//!   from (for slices) the source domain, so `value_at` translations never
//!   leave the source domain.
//!
//! ## Non-goals
//!
//! * Axis permutation, striding, or interpolation; only clipping and
//!   axis-dropping are needed by the correlation layers.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cell::RefCell;
use num_traits::Float;

// Internal dependencies
use crate::field::scalar::{FieldDomain, ScalarField};
use crate::primitives::domain::Domain;
use crate::primitives::errors::XcorrError;

// ============================================================================
// WindowView
// ============================================================================

/// A bounded sub-box of a field, re-addressed from the origin.
#[derive(Debug)]
pub struct WindowView<'a, F> {
    inner: &'a F,
    lo: Vec<usize>,
    domain: Domain,
    scratch: RefCell<Vec<usize>>,
}

impl<'a, F> WindowView<'a, F> {
    /// Clip `inner` to the inclusive box `[lo, hi]`.
    ///
    /// Both corners must have the source's rank, satisfy `lo[d] <= hi[d]`,
    /// and lie inside the source domain.
    pub fn new(inner: &'a F, lo: &[usize], hi: &[usize]) -> Result<Self, XcorrError>
    where
        F: FieldDomain,
    {
        let src = inner.domain();
        if lo.len() != src.ndim() || hi.len() != src.ndim() {
            return Err(XcorrError::RankMismatch {
                got: lo.len(),
                expected: src.ndim(),
            });
        }
        src.check(hi)?;
        src.check(lo)?;

        let mut dims = Vec::with_capacity(src.ndim());
        for d in 0..src.ndim() {
            // An inverted corner pair saturates to a zero extent on that
            // axis; the domain constructor rejects it with the full extent
            // vector.
            dims.push((hi[d] + 1).saturating_sub(lo[d]));
        }
        let domain = Domain::new(&dims)?;
        let n = src.ndim();

        Ok(Self {
            inner,
            lo: lo.to_vec(),
            domain,
            scratch: RefCell::new(vec![0; n]),
        })
    }

    /// The window's lower corner in source coordinates.
    #[inline]
    pub fn offset(&self) -> &[usize] {
        &self.lo
    }
}

impl<F> FieldDomain for WindowView<'_, F> {
    #[inline]
    fn domain(&self) -> &Domain {
        &self.domain
    }
}

impl<T: Float, F: ScalarField<T>> ScalarField<T> for WindowView<'_, F> {
    fn value_at(&self, pos: &[usize]) -> T {
        let mut abs = self.scratch.borrow_mut();
        for (d, slot) in abs.iter_mut().enumerate() {
            *slot = self.lo[d] + pos[d];
        }
        self.inner.value_at(&abs)
    }
}

// ============================================================================
// SliceView
// ============================================================================

/// A dimension-reduced view fixing one axis of the source to a constant
/// index.
#[derive(Debug)]
pub struct SliceView<'a, F> {
    inner: &'a F,
    axis: usize,
    index: usize,
    domain: Domain,
    scratch: RefCell<Vec<usize>>,
}

impl<'a, F> SliceView<'a, F> {
    /// Fix `axis` of `inner` to `index`, dropping that axis.
    ///
    /// The source must have at least two axes, `axis` must be valid, and
    /// `index` must be inside the source extent along `axis`.
    pub fn new(inner: &'a F, axis: usize, index: usize) -> Result<Self, XcorrError>
    where
        F: FieldDomain,
    {
        let src = inner.domain();
        if axis >= src.ndim() {
            return Err(XcorrError::InvalidAxis {
                axis,
                ndim: src.ndim(),
            });
        }
        if src.ndim() < 2 {
            return Err(XcorrError::RankMismatch {
                got: src.ndim(),
                expected: 2,
            });
        }
        if index >= src.dim(axis) {
            return Err(XcorrError::OutOfDomain {
                position: vec![index],
                dims: vec![src.dim(axis)],
            });
        }

        let dims: Vec<usize> = src
            .dims()
            .iter()
            .enumerate()
            .filter(|&(d, _)| d != axis)
            .map(|(_, &s)| s)
            .collect();
        let domain = Domain::new(&dims)?;
        let n = src.ndim();

        Ok(Self {
            inner,
            axis,
            index,
            domain,
            scratch: RefCell::new(vec![0; n]),
        })
    }

    /// The dropped axis.
    #[inline]
    pub fn axis(&self) -> usize {
        self.axis
    }

    /// The fixed index along the dropped axis.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<F> FieldDomain for SliceView<'_, F> {
    #[inline]
    fn domain(&self) -> &Domain {
        &self.domain
    }
}

impl<T: Float, F: ScalarField<T>> ScalarField<T> for SliceView<'_, F> {
    fn value_at(&self, pos: &[usize]) -> T {
        let mut full = self.scratch.borrow_mut();
        for (d, slot) in full.iter_mut().enumerate() {
            *slot = match d.cmp(&self.axis) {
                core::cmp::Ordering::Less => pos[d],
                core::cmp::Ordering::Equal => self.index,
                core::cmp::Ordering::Greater => pos[d - 1],
            };
        }
        self.inner.value_at(&full)
    }
}
