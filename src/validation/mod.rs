//! Validation module for accumulating errors
//!
//! This module provides:
//! - The core `Validation` type and its transformations
//! - Aggregation over many validations: `sequence`, `chain`, `par_sequence`
//! - Iterators over accumulated errors

mod aggregate;
pub mod core;
pub mod iter;

// Re-export core validation types
pub use self::core::*;
pub use iter::{IntoIter, Iter};
