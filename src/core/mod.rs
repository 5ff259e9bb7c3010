//! Ring parameters and the graded basis of the cohomology ring

mod grassmannian;
mod cohomology;

pub use grassmannian::Grassmannian;
pub use cohomology::{CohomologyBasis, MultiplicationTable};
