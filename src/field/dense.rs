//! Dense in-memory scalar fields.
//!
//! ## Purpose
//!
//! This module provides `DenseField`, the owned flat-storage field used for
//! raw image stacks, test fixtures, and normalization targets. Data is a
//! single `Vec<T>` in row-major order (last axis fastest), addressed through
//! the domain's linear index.
//!
//! ## Design notes
//!
//! * **Flat Storage**: One contiguous allocation per field; no per-row
//!   indirection.
//! * **Checked Construction**: Storage length must match the domain element
//!   count exactly.
//! * **Concrete Mutation**: Writes (`set`, `data_mut`) live on the concrete
//!   type, not on the `ScalarField` trait; every consumer of the trait sees
//!   an immutable field.
//!
//! ## Non-goals
//!
//! * Memory-mapped or chunked backends; anything that can implement
//!   `ScalarField` can stand in for this type.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::field::scalar::{FieldDomain, ScalarField};
use crate::primitives::domain::Domain;
use crate::primitives::errors::XcorrError;

// ============================================================================
// DenseField
// ============================================================================

/// An owned nD scalar array over a validated domain.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseField<T> {
    domain: Domain,
    data: Vec<T>,
}

impl<T: Float> DenseField<T> {
    /// Wrap existing row-major data (last axis fastest).
    pub fn from_vec(domain: Domain, data: Vec<T>) -> Result<Self, XcorrError> {
        if data.len() != domain.len() {
            return Err(XcorrError::StorageMismatch {
                expected: domain.len(),
                got: data.len(),
            });
        }
        Ok(Self { domain, data })
    }

    /// A field holding `value` at every position.
    pub fn filled(domain: Domain, value: T) -> Self {
        let data = vec![value; domain.len()];
        Self { domain, data }
    }

    /// Write a value at a validated position.
    pub fn set(&mut self, pos: &[usize], value: T) -> Result<(), XcorrError> {
        self.domain.check(pos)?;
        let idx = self.domain.linear_index(pos);
        self.data[idx] = value;
        Ok(())
    }

    /// The backing storage in row-major order.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable access to the backing storage.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> FieldDomain for DenseField<T> {
    #[inline]
    fn domain(&self) -> &Domain {
        &self.domain
    }
}

impl<T: Float> ScalarField<T> for DenseField<T> {
    #[inline]
    fn value_at(&self, pos: &[usize]) -> T {
        self.data[self.domain.linear_index(pos)]
    }
}
