//! Layer 3: Correlation
//!
//! # Purpose
//!
//! This layer turns two aligned scalar fields into a third, lazily computed
//! one:
//! - Pure windowed accumulations (`stats`)
//! - The cached normalized cross-correlation engine (`ncc`)
//!
//! # Architecture
//!
//! ```text
//! Layer 5: Normalize
//!   ↓
//! Layer 4: Matrix
//!   ↓
//! Layer 3: Correlation ← You are here
//!   ↓
//! Layer 2: Field
//!   ↓
//! Layer 1: Primitives
//! ```

/// Windowed statistics over scalar fields.
pub mod stats;

/// The lazy, cached, windowed cross-correlation field.
pub mod ncc;
