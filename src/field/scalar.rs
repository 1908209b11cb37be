//! The scalar field capability and positional cursors.
//!
//! ## Purpose
//!
//! This module defines `ScalarField`, the one capability every field in this
//! crate exposes: a domain plus random positional reads of a real-valued
//! scalar. Constant fields, dense arrays, derived views, and lazy correlation
//! engines all sit behind this trait, which is what lets a matrix hold
//! heterogeneous entries without an inheritance chain.
//!
//! ## Design notes
//!
//! * **Checked vs Unchecked Reads**: `get` validates the coordinate and is the
//!   public contract; `value_at` assumes an in-domain coordinate and is the
//!   hot path used by window traversals that already know their bounds.
//! * **Interior Laziness**: `value_at` takes `&self` even for memoizing
//!   fields; caches are interior state of the field, not of any reader.
//! * **Cursors**: `FieldCursor` is a lightweight value type holding only a
//!   coordinate and a field reference. Cloning a cursor gives an independent
//!   position over the same shared field state.
//!
//! ## Invariants
//!
//! * For a fixed field, repeated reads of the same in-domain coordinate return
//!   identical values (memoizing fields are write-once per cell).
//! * `get` never clamps: an out-of-domain coordinate is an error, not a read
//!   of the nearest valid position.
//!
//! ## Non-goals
//!
//! * Mutation through the trait; fields are logically immutable. Writable
//!   storage (`DenseField`) exposes mutation on the concrete type only.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::marker::PhantomData;
use num_traits::Float;

// Internal dependencies
use crate::primitives::domain::Domain;
use crate::primitives::errors::XcorrError;

// ============================================================================
// Field Traits
// ============================================================================

/// Domain access, independent of the scalar type.
///
/// Split from [`ScalarField`] so that shape-only operations (view
/// construction, bounds validation) need no scalar type annotation.
pub trait FieldDomain {
    /// The coordinate domain this field is defined over.
    fn domain(&self) -> &Domain;
}

/// An immutable logical nD array of scalars addressed by integer coordinates.
pub trait ScalarField<T: Float>: FieldDomain {
    /// Read the value at an in-domain coordinate.
    ///
    /// Callers must guarantee `pos` lies inside `domain()`; use [`get`]
    /// for validated access.
    ///
    /// [`get`]: ScalarField::get
    fn value_at(&self, pos: &[usize]) -> T;

    /// Validated read: rejects out-of-domain coordinates with
    /// [`XcorrError::OutOfDomain`].
    fn get(&self, pos: &[usize]) -> Result<T, XcorrError> {
        self.domain().check(pos)?;
        Ok(self.value_at(pos))
    }

    /// A fresh cursor over this field, positioned at the origin.
    fn cursor(&self) -> FieldCursor<'_, Self, T>
    where
        Self: Sized,
    {
        FieldCursor::new(self)
    }
}

// Shared references are fields too, so engines can borrow their inputs.
impl<F: FieldDomain + ?Sized> FieldDomain for &F {
    #[inline]
    fn domain(&self) -> &Domain {
        (**self).domain()
    }
}

impl<T: Float, F: ScalarField<T> + ?Sized> ScalarField<T> for &F {
    #[inline]
    fn value_at(&self, pos: &[usize]) -> T {
        (**self).value_at(pos)
    }
}

// ============================================================================
// FieldCursor
// ============================================================================

/// An independent positional reader over a shared field.
///
/// Holds only a coordinate and a reference to the field; it never owns the
/// field's grids, so clones are cheap and every clone reads through the same
/// underlying (possibly memoized) state.
#[derive(Debug)]
pub struct FieldCursor<'a, F, T> {
    field: &'a F,
    pos: Vec<usize>,
    _out: PhantomData<T>,
}

impl<'a, F, T> FieldCursor<'a, F, T>
where
    F: ScalarField<T>,
    T: Float,
{
    /// Create a cursor at the origin of `field`.
    pub fn new(field: &'a F) -> Self {
        Self {
            field,
            pos: vec![0; field.domain().ndim()],
            _out: PhantomData,
        }
    }

    /// The current position.
    #[inline]
    pub fn position(&self) -> &[usize] {
        &self.pos
    }

    /// Move to an absolute position.
    ///
    /// The position is only rank-checked here; domain bounds are enforced at
    /// [`read`](FieldCursor::read), so a cursor may pass through coordinates
    /// it never reads.
    pub fn set_position(&mut self, pos: &[usize]) -> Result<(), XcorrError> {
        if pos.len() != self.pos.len() {
            return Err(XcorrError::RankMismatch {
                got: pos.len(),
                expected: self.pos.len(),
            });
        }
        self.pos.copy_from_slice(pos);
        Ok(())
    }

    /// Move by a signed offset along one axis, saturating at zero.
    pub fn move_axis(&mut self, axis: usize, delta: isize) -> Result<(), XcorrError> {
        if axis >= self.pos.len() {
            return Err(XcorrError::InvalidAxis {
                axis,
                ndim: self.pos.len(),
            });
        }
        if delta >= 0 {
            self.pos[axis] = self.pos[axis].saturating_add(delta as usize);
        } else {
            self.pos[axis] = self.pos[axis].saturating_sub(delta.unsigned_abs());
        }
        Ok(())
    }

    /// Read the field at the current position.
    #[inline]
    pub fn read(&self) -> Result<T, XcorrError> {
        self.field.get(&self.pos)
    }
}

impl<F, T> Clone for FieldCursor<'_, F, T> {
    fn clone(&self) -> Self {
        Self {
            field: self.field,
            pos: self.pos.clone(),
            _out: PhantomData,
        }
    }
}
