//! Schubert calculus: partitions, classes, sums and determinants

mod partition;
mod schubert;
mod formal_sum;
mod determinant;
mod ring;

pub use partition::{partitions, Partition};
pub use schubert::SchubertClass;
pub use formal_sum::FormalSum;
pub use determinant::{determinant, evaluate, minor, ExpansionTerm};
pub use ring::{CommutativeRing, RingElement};
