//! Fluent builder for pairwise correlation matrices.
//!
//! ## Purpose
//!
//! This module assembles the `CorrelationMatrix` for a 3-axis stack (spatial
//! axes 0 and 1, slice axis 2): a symmetric `Z×Z` grid where diagonal entries
//! are a constant 1.0 field, pairs beyond the computation range share a
//! constant NaN field, and in-range pairs get one lazily computed
//! `CrossCorrelationField` aliased at both symmetric positions.
//!
//! ## Design notes
//!
//! * **Validate Before Allocating**: Stack rank, radius rank, and the `Z²`
//!   entry capacity are all checked before any field object exists, so a
//!   rejected build leaves nothing half-constructed.
//! * **Shared Constants**: One NaN entry and one 1.0 entry are created and
//!   the `Rc` cloned into every cell that needs them, mirroring the sharing
//!   of the computed entries.
//! * **Lazy Cost Model**: Building allocates `Z²` entry headers and one empty
//!   cache per in-range pair; no correlation value is computed until read.
//!
//! ## Key concepts
//!
//! * **Range**: The maximum slice-index distance for which a correlation is
//!   computed at all; beyond it entries read as NaN ("missing").
//!
//! ## Invariants
//!
//! * Capacity rejection happens before the assembly loop, never partway
//!   through it.
//!
//! ## Non-goals
//!
//! * Parallel scheduling of the build; assembly is cheap and sequential, and
//!   values materialize lazily afterwards.

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
use core::marker::PhantomData;
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::correlation::ncc::{CorrelationMode, CrossCorrelationField};
use crate::field::constant::ConstantField;
use crate::field::scalar::ScalarField;
use crate::field::view::SliceView;
use crate::matrix::pairwise::{CorrelationMatrix, PairField};
use crate::primitives::domain::Domain;
use crate::primitives::errors::XcorrError;

// ============================================================================
// Constants
// ============================================================================

/// Default cap on `Z²` matrix entries (entry headers, not materialized
/// values).
pub const DEFAULT_CAPACITY_LIMIT: usize = 1 << 26;

/// The slice axis of an input stack; axes 0 and 1 are spatial.
pub const SLICE_AXIS: usize = 2;

// ============================================================================
// CorrelationMatrixBuilder
// ============================================================================

/// Fluent, validated configuration for building a `CorrelationMatrix`.
#[derive(Debug, Clone)]
pub struct CorrelationMatrixBuilder<T> {
    radius: Vec<usize>,
    range: usize,
    mode: CorrelationMode,
    capacity_limit: usize,
    _out: PhantomData<T>,
}

impl<T: Float> Default for CorrelationMatrixBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> CorrelationMatrixBuilder<T> {
    /// A builder with the reference-workflow defaults: radius `[5, 5]`,
    /// range 10, `Standard` mode.
    pub fn new() -> Self {
        Self {
            radius: vec![5, 5],
            range: 10,
            mode: CorrelationMode::Standard,
            capacity_limit: DEFAULT_CAPACITY_LIMIT,
            _out: PhantomData,
        }
    }

    /// Per-axis window radius over the spatial axes.
    pub fn radius(mut self, radius: &[usize]) -> Self {
        self.radius = radius.to_vec();
        self
    }

    /// Maximum slice-index distance for which correlations are computed.
    pub fn range(mut self, range: usize) -> Self {
        self.range = range;
        self
    }

    /// Correlation reporting mode.
    pub fn mode(mut self, mode: CorrelationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Cap on `Z²` matrix entries, checked before assembly.
    pub fn capacity_limit(mut self, limit: usize) -> Self {
        self.capacity_limit = limit;
        self
    }

    /// Build the symmetric pairwise matrix over `stack`.
    ///
    /// The stack must have exactly three axes; its third axis is the slice
    /// axis. Fails with `CapacityExceeded` before any field is allocated if
    /// `Z²` exceeds the configured limit.
    pub fn build<'a, F>(&self, stack: &'a F) -> Result<CorrelationMatrix<'a, F, T>, XcorrError>
    where
        F: ScalarField<T>,
    {
        let stack_domain = stack.domain();
        if stack_domain.ndim() != 3 {
            return Err(XcorrError::RankMismatch {
                got: stack_domain.ndim(),
                expected: 3,
            });
        }
        if self.radius.len() != 2 {
            return Err(XcorrError::RankMismatch {
                got: self.radius.len(),
                expected: 2,
            });
        }

        let z = stack_domain.dim(SLICE_AXIS);
        let entries_needed = (z as u128) * (z as u128);
        if entries_needed > self.capacity_limit as u128 {
            return Err(XcorrError::CapacityExceeded {
                slices: z,
                limit: self.capacity_limit,
            });
        }

        let slice_domain = Domain::new(&[stack_domain.dim(0), stack_domain.dim(1)])?;
        let pair_domain = Domain::new(&[z, z])?;

        debug!(
            "assembling {z}x{z} correlation matrix (slice domain {:?}, radius {:?}, range {})",
            slice_domain.dims(),
            self.radius,
            self.range
        );

        let nan_entry = Rc::new(PairField::Constant(ConstantField::new(
            slice_domain.clone(),
            T::nan(),
        )));
        let one_entry = Rc::new(PairField::Constant(ConstantField::new(
            slice_domain.clone(),
            T::one(),
        )));

        let mut entries: Vec<Rc<PairField<'a, F, T>>> = vec![nan_entry; z * z];
        let mut pairs = 0usize;

        for z1 in 0..z {
            entries[pair_domain.linear_index(&[z1, z1])] = one_entry.clone();
            for z2 in (z1 + 1)..z {
                if z2 - z1 > self.range {
                    continue;
                }
                let img1 = SliceView::new(stack, SLICE_AXIS, z1)?;
                let img2 = SliceView::new(stack, SLICE_AXIS, z2)?;
                let cc = CrossCorrelationField::new(img1, img2, &self.radius, self.mode)?;
                let shared = Rc::new(PairField::Correlation(cc));
                entries[pair_domain.linear_index(&[z1, z2])] = shared.clone();
                entries[pair_domain.linear_index(&[z2, z1])] = shared;
                pairs += 1;
            }
        }

        debug!("matrix assembled with {pairs} lazy correlation pairs");

        Ok(CorrelationMatrix::from_parts(
            entries,
            pair_domain,
            slice_domain,
            self.radius.clone(),
            self.range,
        ))
    }
}
