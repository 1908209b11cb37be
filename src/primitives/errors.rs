//! Error types for field construction and access.
//!
//! ## Purpose
//!
//! This module defines the single error enum used across the crate. Errors
//! carry the offending values so that callers can report exactly what was
//! rejected without re-deriving context.
//!
//! ## Design notes
//!
//! * **Structured Variants**: Every variant carries the data needed to format
//!   a complete message.
//! * **no_std Friendly**: `Display` is implemented manually over `core::fmt`;
//!   `std::error::Error` is gated on the `std` feature.
//! * **Fail-Fast**: Domain and capacity violations abort the operation that
//!   triggered them; nothing is retried internally.
//!
//! ## Key concepts
//!
//! * **Domain Errors**: Out-of-domain reads are rejected immediately, never
//!   clamped.
//! * **Capacity Errors**: Matrix construction is rejected up front, before any
//!   field objects are allocated.
//!
//! ## Non-goals
//!
//! * Non-finite correlation values (zero-variance windows) are ordinary scalar
//!   results, not errors, and are deliberately absent from this enum.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;

// ============================================================================
// Error Enum
// ============================================================================

/// Errors produced by field construction and access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XcorrError {
    /// A coordinate read fell outside a field's declared domain.
    OutOfDomain {
        /// The rejected position.
        position: Vec<usize>,
        /// The per-axis sizes of the domain that rejected it.
        dims: Vec<usize>,
    },

    /// Two fields that must share a domain have different ones.
    DomainMismatch {
        /// Per-axis sizes of the first field.
        left: Vec<usize>,
        /// Per-axis sizes of the second field.
        right: Vec<usize>,
    },

    /// A coordinate or radius vector has the wrong number of axes.
    RankMismatch {
        /// Number of axes supplied.
        got: usize,
        /// Number of axes required.
        expected: usize,
    },

    /// An axis index is not valid for the field's dimensionality.
    InvalidAxis {
        /// The rejected axis.
        axis: usize,
        /// Number of axes in the field.
        ndim: usize,
    },

    /// A domain was declared with no axes or with a zero-sized axis.
    EmptyDomain {
        /// The rejected per-axis sizes.
        dims: Vec<usize>,
    },

    /// The element count of a domain does not fit in `usize`.
    DomainTooLarge {
        /// The rejected per-axis sizes.
        dims: Vec<usize>,
    },

    /// Backing storage length does not match the domain element count.
    StorageMismatch {
        /// Element count implied by the domain.
        expected: usize,
        /// Length of the supplied storage.
        got: usize,
    },

    /// Requested correlation matrix exceeds the configured capacity limit.
    CapacityExceeded {
        /// Number of slices in the stack.
        slices: usize,
        /// Configured limit on matrix entries.
        limit: usize,
    },
}

impl fmt::Display for XcorrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XcorrError::OutOfDomain { position, dims } => {
                write!(
                    f,
                    "Position {:?} lies outside domain of size {:?}",
                    position, dims
                )
            }
            XcorrError::DomainMismatch { left, right } => {
                write!(
                    f,
                    "Mismatched domains: left field has size {:?}, right field has size {:?}",
                    left, right
                )
            }
            XcorrError::RankMismatch { got, expected } => {
                write!(f, "Rank mismatch: got {} axes, expected {}", got, expected)
            }
            XcorrError::InvalidAxis { axis, ndim } => {
                write!(
                    f,
                    "Invalid axis {} for a field with {} dimensions",
                    axis, ndim
                )
            }
            XcorrError::EmptyDomain { dims } => {
                write!(
                    f,
                    "Invalid domain {:?}: at least one axis and no zero-sized axes required",
                    dims
                )
            }
            XcorrError::DomainTooLarge { dims } => {
                write!(
                    f,
                    "Domain {:?} has more elements than the address space allows",
                    dims
                )
            }
            XcorrError::StorageMismatch { expected, got } => {
                write!(
                    f,
                    "Storage mismatch: domain holds {} elements, storage has {}",
                    expected, got
                )
            }
            XcorrError::CapacityExceeded { slices, limit } => {
                let entries = (*slices as u128) * (*slices as u128);
                write!(
                    f,
                    "Correlation matrix for {} slices requires {} entries (limit {})",
                    slices, entries, limit
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for XcorrError {}
