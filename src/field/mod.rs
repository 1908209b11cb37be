//! Layer 2: Field
//!
//! # Purpose
//!
//! This layer defines the scalar field abstraction and its concrete carriers:
//! - The `FieldDomain`/`ScalarField` traits and positional `FieldCursor`
//! - Dense in-memory storage (`DenseField`)
//! - Constant fields (`ConstantField`)
//! - Non-copying derived views (`WindowView`, `SliceView`)
//!
//! Everything above this layer reads scalar data exclusively through the
//! `ScalarField` seam.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: Normalize
//!   ↓
//! Layer 4: Matrix
//!   ↓
//! Layer 3: Correlation
//!   ↓
//! Layer 2: Field ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// The scalar field capability and positional cursors.
pub mod scalar;

/// Dense in-memory scalar fields.
pub mod dense;

/// Constant-valued scalar fields.
pub mod constant;

/// Non-copying derived views (window clip, axis-dropping slice).
pub mod view;
