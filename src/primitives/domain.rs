//! Axis-aligned integer coordinate domains.
//!
//! ## Purpose
//!
//! This module defines `Domain`, the validated index box `[0, dim - 1]` per
//! axis that every scalar field is addressed over. It owns the index
//! arithmetic shared by the whole crate: containment checks, row-major linear
//! indexing, radius-clipped window bounds, and odometer traversal of a box.
//!
//! ## Design notes
//!
//! * **Validated Construction**: A domain always has at least one axis, no
//!   zero-sized axes, and an element count that fits in `usize`.
//! * **Generic Dimensionality**: All arithmetic loops over an axis count fixed
//!   at construction; nothing is hard-coded to 2D or 3D.
//! * **Internal Iteration**: Box traversal is `for_each`-style with a single
//!   reused coordinate buffer, so walking a window allocates once, not per
//!   position.
//!
//! ## Key concepts
//!
//! * **Window Clipping**: `clipped` shrinks a radius-centered box at the
//!   boundary instead of padding or wrapping, so edge windows are asymmetric.
//! * **Traversal Order**: The last axis varies fastest, matching the row-major
//!   linear index.
//!
//! ## Invariants
//!
//! * `linear_index` is a bijection between in-domain positions and
//!   `0..len()`.
//! * `clipped` output always satisfies `lo[d] <= hi[d]` and lies inside the
//!   domain for any in-domain center.
//!
//! ## Non-goals
//!
//! * This module does not store scalar data; it is pure index arithmetic.
//! * Domains with a non-zero minimum corner are not modeled; fields that need
//!   an offset express it as a view.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::XcorrError;

// ============================================================================
// Domain
// ============================================================================

/// An axis-aligned box of integer coordinates, `[0, dim - 1]` per axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    /// Per-axis sizes.
    dims: Vec<usize>,
    /// Cached element count (product of all sizes).
    len: usize,
}

impl Domain {
    /// Create a domain from per-axis sizes.
    ///
    /// Rejects rank-zero domains, zero-sized axes, and element counts that
    /// overflow `usize`.
    pub fn new(dims: &[usize]) -> Result<Self, XcorrError> {
        if dims.is_empty() || dims.contains(&0) {
            return Err(XcorrError::EmptyDomain {
                dims: dims.to_vec(),
            });
        }

        let mut len = 1usize;
        for &d in dims {
            len = len
                .checked_mul(d)
                .ok_or_else(|| XcorrError::DomainTooLarge {
                    dims: dims.to_vec(),
                })?;
        }

        Ok(Self {
            dims: dims.to_vec(),
            len,
        })
    }

    /// Number of axes.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Size of axis `d`.
    #[inline]
    pub fn dim(&self, d: usize) -> usize {
        self.dims[d]
    }

    /// Per-axis sizes.
    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Largest valid coordinate along axis `d`.
    #[inline]
    pub fn max(&self, d: usize) -> usize {
        self.dims[d] - 1
    }

    /// Total number of addressable positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a valid domain holds at least one position.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `pos` is a valid coordinate of this domain.
    #[inline]
    pub fn contains(&self, pos: &[usize]) -> bool {
        pos.len() == self.dims.len() && pos.iter().zip(&self.dims).all(|(&p, &d)| p < d)
    }

    /// Check `pos` against the domain, producing the crate error on rejection.
    #[inline]
    pub fn check(&self, pos: &[usize]) -> Result<(), XcorrError> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(XcorrError::OutOfDomain {
                position: pos.to_vec(),
                dims: self.dims.clone(),
            })
        }
    }

    /// Row-major linear index of an in-domain position (last axis fastest).
    #[inline]
    pub fn linear_index(&self, pos: &[usize]) -> usize {
        let mut idx = 0usize;
        for (p, d) in pos.iter().zip(&self.dims) {
            idx = idx * d + p;
        }
        idx
    }

    /// Inclusive window bounds around `center` with per-axis `radius`,
    /// clipped to the domain.
    ///
    /// Near the boundary the window shrinks asymmetrically; it is never
    /// padded or wrapped.
    pub fn clipped(&self, center: &[usize], radius: &[usize]) -> (Vec<usize>, Vec<usize>) {
        let n = self.ndim();
        let mut lo = Vec::with_capacity(n);
        let mut hi = Vec::with_capacity(n);
        for d in 0..n {
            lo.push(center[d].saturating_sub(radius[d]));
            hi.push(core::cmp::min(self.max(d), center[d] + radius[d]));
        }
        (lo, hi)
    }

    /// Visit every position of the domain in linear-index order.
    #[inline]
    pub fn for_each<F: FnMut(&[usize])>(&self, f: F) {
        let lo = vec![0usize; self.ndim()];
        let hi: Vec<usize> = self.dims.iter().map(|&d| d - 1).collect();
        Self::for_each_in(&lo, &hi, f);
    }

    /// Visit every position of the inclusive box `[lo, hi]`, last axis
    /// fastest.
    ///
    /// Requires `lo[d] <= hi[d]` for every axis.
    pub fn for_each_in<F: FnMut(&[usize])>(lo: &[usize], hi: &[usize], mut f: F) {
        let n = lo.len();
        let mut pos = lo.to_vec();
        'traverse: loop {
            f(&pos);
            // Advance the odometer; a full carry past axis 0 means done.
            let mut d = n;
            while d > 0 {
                d -= 1;
                if pos[d] < hi[d] {
                    pos[d] += 1;
                    continue 'traverse;
                }
                pos[d] = lo[d];
            }
            break;
        }
    }

    /// Number of positions in the inclusive box `[lo, hi]`.
    #[inline]
    pub fn box_len(lo: &[usize], hi: &[usize]) -> usize {
        lo.iter().zip(hi).map(|(&l, &h)| h - l + 1).product()
    }
}
