//! Constant-valued scalar fields.
//!
//! ## Purpose
//!
//! This module provides `ConstantField`, a field returning the same scalar at
//! every position of its domain. The correlation matrix uses two of these:
//! a 1.0 field for diagonal entries (a slice correlated with itself) and a
//! NaN field for slice pairs beyond the computation range ("no signal").
//!
//! ## Design notes
//!
//! * **No Storage**: The field holds one value and a domain; reads are O(1)
//!   and allocation-free.
//! * **NaN Is a Value**: A NaN constant field is well-formed; non-finite
//!   values flow through the field contract unchanged.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::field::scalar::{FieldDomain, ScalarField};
use crate::primitives::domain::Domain;

// ============================================================================
// ConstantField
// ============================================================================

/// A field holding a single scalar at every position.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantField<T> {
    domain: Domain,
    value: T,
}

impl<T: Float> ConstantField<T> {
    /// Create a constant field over `domain`.
    pub fn new(domain: Domain, value: T) -> Self {
        Self { domain, value }
    }

    /// The constant value.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T> FieldDomain for ConstantField<T> {
    #[inline]
    fn domain(&self) -> &Domain {
        &self.domain
    }
}

impl<T: Float> ScalarField<T> for ConstantField<T> {
    #[inline]
    fn value_at(&self, _pos: &[usize]) -> T {
        self.value
    }
}
