//! # Schubert Calculus: cohomology of complex Grassmannians
//!
//! This library computes the integral cohomology ring of the complex
//! Grassmannian G(k, n+1) of k-planes in an (n+1)-dimensional space.
//!
//! ## Features
//!
//! - **Additive structure**: Schubert classes indexed by partitions in a
//!   k × (n+1−k) box, grouped by cohomological degree
//! - **Multiplication**: Pieri's formula for special classes, Giambelli's
//!   determinant for everything else
//! - **Formal sums**: reduced ℤ-linear combinations closing the ring under
//!   addition and multiplication
//! - **Serialization**: bases and multiplication tables round-trip through JSON

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Core algebraic structures and operations
pub mod algebra;

/// Ring parameters and the cohomology basis builder
pub mod core;

/// Utility functions and helpers
pub mod utils;

// Re-export commonly used types
pub use algebra::{
    determinant, evaluate, partitions, ExpansionTerm, FormalSum, Partition, RingElement,
    SchubertClass,
};
pub use core::{CohomologyBasis, Grassmannian, MultiplicationTable};

/// Error types for the library
#[derive(Debug, thiserror::Error)]
pub enum SchubertError {
    /// Partition is not weakly decreasing or leaves the k × (n+1−k) box
    #[error("Invalid partition {parts:?}: {reason}")]
    InvalidPartition {
        /// The offending parts, as supplied
        parts: Vec<usize>,
        /// Why the parts were rejected
        reason: String,
    },

    /// Operands live in different cohomology rings
    #[error("Ring mismatch: cannot multiply classes of {left} and {right}")]
    RingMismatch {
        /// Ring of the left operand
        left: Grassmannian,
        /// Ring of the right operand
        right: Grassmannian,
    },

    /// An integer coefficient left the range of i64
    #[error("Coefficient overflow: {0}")]
    CoefficientOverflow(String),

    /// Grassmannian parameters out of range
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, SchubertError>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        algebra::{FormalSum, Partition, RingElement, SchubertClass, CommutativeRing},
        core::{CohomologyBasis, Grassmannian, MultiplicationTable},
        Result, SchubertError,
    };
}
