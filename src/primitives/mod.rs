//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the foundations shared by every other layer:
//! - The crate error enum (`XcorrError`)
//! - Validated coordinate domains and window/index arithmetic (`Domain`)
//!
//! These have no knowledge of correlation or matrices; they are reusable
//! index and error plumbing.
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
//! Layer 2: Field
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for field construction and access.
pub mod errors;

/// Axis-aligned integer coordinate domains.
pub mod domain;
