//! # xcorr-rs — Lazy Windowed Cross-Correlation Fields for Rust
//!
//! Lazy, memoized, windowed normalized cross-correlation (NCC) between pairs
//! of N-dimensional scalar fields, and the assembly of such pairwise
//! correlations between the slices of a 3D stack into a virtual, symmetric,
//! range-limited correlation matrix whose entries are themselves lazy 2D
//! fields.
//!
//! This is the correlation building block of section-alignment pipelines for
//! layered image volumes (serial-section microscopy, for instance): the
//! matrix says how similar every pair of nearby slices is at every spatial
//! position, and a downstream solver turns that into relative offsets. The
//! solver itself, stack I/O, and visualization are out of scope here.
//!
//! ## How it works
//!
//! 1. A [`ScalarField`](prelude::ScalarField) is a logical nD array of reals
//!    with random positional reads and two non-copying derived views: a
//!    bounded sub-window and a dimension-dropping slice.
//! 2. A [`CrossCorrelationField`](prelude::CrossCorrelationField) wraps two
//!    aligned fields and a per-axis window radius. Reading coordinate `p`
//!    computes the NCC of the radius-bounded, domain-clipped neighborhoods of
//!    `p` in both inputs, then memoizes it; repeat reads are O(1).
//! 3. A [`CorrelationMatrixBuilder`](prelude::CorrelationMatrixBuilder) turns
//!    a 3-axis stack into a symmetric `Z×Z` grid of such fields: `1.0` on the
//!    diagonal, `NaN` beyond the slice range, and one shared lazy engine per
//!    in-range pair (aliased at both symmetric positions, so one cache serves
//!    both traversal orders).
//! 4. A [`StripView`](prelude::StripView) fixes a spatial coordinate and
//!    re-projects the matrix into a `Z×Z` field of correlation values — the
//!    cut an alignment solver consumes for one image column.
//!
//! ## Quick Start
//!
//! ```rust
//! use xcorr_rs::prelude::*;
//!
//! // A 4×4×3 stack: spatial axes 0 and 1, slice axis 2 (last axis fastest).
//! let domain = Domain::new(&[4, 4, 3])?;
//! let data: Vec<f64> = (0..48).map(|i| (i as f64 * 0.37).sin()).collect();
//! let stack = DenseField::from_vec(domain, data)?;
//!
//! let matrix = CorrelationMatrixBuilder::new()
//!     .radius(&[1, 1]) // 3×3 windows
//!     .range(1)        // only adjacent slices
//!     .build(&stack)?;
//!
//! // Diagonal entries are the constant 1.0 field.
//! assert_eq!(matrix.get(0, 0, &[2, 2])?, 1.0);
//!
//! // Pairs beyond the range read as NaN ("no signal").
//! assert!(matrix.get(0, 2, &[2, 2])?.is_nan());
//!
//! // A strip re-projects the matrix at one spatial coordinate; it shares
//! // the caches of the matrix entries.
//! let value = matrix.get(0, 1, &[2, 2])?;
//! let strip = matrix.strip(&[2, 2])?;
//! assert_eq!(strip.get(&[0, 1])?, value);
//! # Result::<(), XcorrError>::Ok(())
//! ```
//!
//! The engine can also be used directly on any two aligned fields:
//!
//! ```rust
//! use xcorr_rs::prelude::*;
//!
//! let domain = Domain::new(&[3, 3])?;
//! let ramp: Vec<f64> = (1..=9).map(f64::from).collect();
//! let a = DenseField::from_vec(domain.clone(), ramp.clone())?;
//! let b = DenseField::from_vec(domain, ramp)?;
//!
//! let cc = CrossCorrelationField::new(&a, &b, &[1, 1], Standard)?;
//!
//! // Self-correlation over the full 3×3 window is 1 up to rounding.
//! assert!((cc.get(&[1, 1])? - 1.0).abs() < 1e-12);
//! # Result::<(), XcorrError>::Ok(())
//! ```
//!
//! ## Semantics worth knowing
//!
//! * **Clipped windows**: near the boundary, windows shrink asymmetrically
//!   rather than being padded or wrapped.
//! * **Population statistics**: variances are divided by the window sample
//!   count and the covariance sum once at the end
//!   (`cc = cov / (sqrt(var_a) * sqrt(var_b) * n)`). This matches the
//!   reference formulation exactly; downstream numeric agreement depends on
//!   it.
//! * **Numeric degeneracy**: a zero-variance (constant) window yields NaN or
//!   an infinity. That is a value, not an error — it flows through caches,
//!   matrices, and strips unchanged, and downstream consumers must tolerate
//!   it.
//! * **Caching**: correlation caches are write-once per coordinate, owned by
//!   the field instance, shared by every cursor and both symmetric matrix
//!   cells, and never cleared.
//! * **Errors**: out-of-domain reads and over-capacity builds fail with
//!   [`XcorrError`](prelude::XcorrError); coordinates are never silently
//!   clamped.
//!
//! ## Execution model
//!
//! Everything is synchronous, bounded computation over in-memory scalar
//! data; the crate is single-threaded by default and fields are deliberately
//! not `Sync`. Correlation values are pure functions of immutable inputs, so
//! if a future fork shares fields across threads, a racing recompute would be
//! redundant work rather than corruption; synchronized cache cells are the
//! minimal hardening for that case.
//!
//! ## no_std
//!
//! The crate supports `no_std` environments (with `alloc`):
//!
//! ```toml
//! [dependencies]
//! xcorr-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Hanslovsky, P., Bogovic, J. A. & Saalfeld, S. (2015). "Post-acquisition
//!   image based compensation for thickness variation in microscopy section
//!   series"
//! - Lewis, J. P. (1995). "Fast Normalized Cross-Correlation"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - errors and coordinate domains.
//
// Contains the crate error enum (`XcorrError`) and the validated coordinate
// domain with its window/index arithmetic (`Domain`).
mod primitives;

// Layer 2: Field - the scalar field abstraction.
//
// Contains the `ScalarField` trait, positional cursors, dense and constant
// fields, and the non-copying window and slice views.
mod field;

// Layer 3: Correlation - the lazy NCC engine.
//
// Contains pure windowed statistics and the cached
// `CrossCorrelationField` with its `Standard`/`SignedSquared` modes.
mod correlation;

// Layer 4: Matrix - pairwise matrix assembly.
//
// Contains the fluent `CorrelationMatrixBuilder`, the symmetric
// `CorrelationMatrix` of shared lazy entries, and the `StripView`
// re-projection.
mod matrix;

// Layer 5: Normalize - post-hoc column rescaling.
//
// Contains the `ColumnNormalization` strategy trait and the
// mean/standard-deviation implementation.
mod normalize;

// ============================================================================
// Prelude
// ============================================================================

/// Standard xcorr prelude.
///
/// This module is intended to be wildcard-imported for convenient access to
/// the most commonly used types:
///
/// ```
/// use xcorr_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::correlation::ncc::{
        CorrelationMode,
        CorrelationMode::{SignedSquared, Standard},
        CrossCorrelationField,
    };
    pub use crate::field::constant::ConstantField;
    pub use crate::field::dense::DenseField;
    pub use crate::field::scalar::{FieldCursor, FieldDomain, ScalarField};
    pub use crate::field::view::{SliceView, WindowView};
    pub use crate::matrix::builder::{
        CorrelationMatrixBuilder, DEFAULT_CAPACITY_LIMIT, SLICE_AXIS,
    };
    pub use crate::matrix::pairwise::{CorrelationMatrix, PairField, SliceCorrelation};
    pub use crate::matrix::strip::StripView;
    pub use crate::normalize::column::{ColumnNormalization, MeanStdNormalization};
    pub use crate::primitives::domain::Domain;
    pub use crate::primitives::errors::XcorrError;
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal field types and views.
    pub mod field {
        pub use crate::field::*;
    }
    /// Internal correlation engine.
    pub mod correlation {
        pub use crate::correlation::*;
    }
    /// Internal matrix assembly.
    pub mod matrix {
        pub use crate::matrix::*;
    }
    /// Internal normalization strategies.
    pub mod normalize {
        pub use crate::normalize::*;
    }
}
