//! Layer 4: Matrix
//!
//! # Purpose
//!
//! This layer assembles pairwise slice correlations of a 3-axis stack into a
//! virtual, symmetric, range-limited matrix of lazy fields:
//! - The fluent, validated builder (`builder`)
//! - The matrix and its tagged entries (`pairwise`)
//! - The strip re-projection at a fixed spatial coordinate (`strip`)
//!
//! # Architecture
//!
//! ```text
//! Layer 5: Normalize
//!   ↓
//! Layer 4: Matrix ← You are here
//!   ↓
//! Layer 3: Correlation
//!   ↓
//! Layer 2: Field
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fluent builder for pairwise correlation matrices.
pub mod builder;

/// The symmetric matrix of pairwise slice-correlation fields.
pub mod pairwise;

/// Strip re-projection of the pairwise matrix.
pub mod strip;
