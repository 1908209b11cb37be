//! Layer 5: Normalize
//!
//! # Purpose
//!
//! This layer post-processes finished output columns. It consumes plain
//! scalar fields and has no dependency back into the correlation core:
//! - Mean/standard-deviation column rescaling (`column`)
//!
//! # Architecture
//!
//! ```text
//! Layer 5: Normalize ← You are here
//!   ↓
//! Layer 4: Matrix
//!   ↓
//! Layer 3: Correlation
//!   ↓
//! Layer 2: Field
//!   ↓
//! Layer 1: Primitives
//! ```

/// Mean/standard-deviation normalization of coordinate-column fields.
pub mod column;
