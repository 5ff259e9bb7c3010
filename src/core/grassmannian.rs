//! Ring parameters for the cohomology of G(k, n+1)

use crate::algebra::{Partition, SchubertClass};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The Grassmannian G(k, n+1) of k-planes in an (n+1)-dimensional space.
///
/// Every Schubert class carries one of these; two classes can only be
/// multiplied when their Grassmannians agree. Values built outside the
/// crate always satisfy 1 ≤ k ≤ n+1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawGrassmannian")]
pub struct Grassmannian {
    pub(crate) k: usize,
    pub(crate) n: usize,
}

/// Unvalidated wire form of [`Grassmannian`]
#[derive(Deserialize)]
struct RawGrassmannian {
    k: usize,
    n: usize,
}

impl TryFrom<RawGrassmannian> for Grassmannian {
    type Error = crate::SchubertError;

    fn try_from(raw: RawGrassmannian) -> crate::Result<Self> {
        Grassmannian::new(raw.k, raw.n)
    }
}

impl Grassmannian {
    /// G(k, n+1), validated
    pub fn new(k: usize, n: usize) -> crate::Result<Self> {
        let space = Grassmannian { k, n };
        space.validate().map_err(crate::SchubertError::InvalidParameters)?;
        Ok(space)
    }

    /// Projective space P^n = G(1, n+1)
    pub fn projective_space(n: usize) -> Self {
        Grassmannian { k: 1, n }
    }

    /// Lines in P^n, i.e. G(2, n+1); needs n ≥ 1
    pub fn lines_in(n: usize) -> crate::Result<Self> {
        Self::new(2, n)
    }

    /// Dimension of the subspaces
    pub fn k(&self) -> usize {
        self.k
    }

    /// One less than the dimension of the ambient space
    pub fn n(&self) -> usize {
        self.n
    }

    /// Validate the parameters
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.k == 0 {
            return Err("Subspace dimension k must be positive".to_string());
        }
        if self.k > self.n + 1 {
            return Err(format!(
                "Subspace dimension {} exceeds ambient dimension {}",
                self.k,
                self.n + 1
            ));
        }
        Ok(())
    }

    /// Largest allowed part of a partition, n+1−k (0 when k > n+1)
    pub fn part_bound(&self) -> usize {
        (self.n + 1).saturating_sub(self.k)
    }

    /// Exclusive bound on leading parts handed to the partition generator
    pub fn partition_bound(&self) -> usize {
        self.part_bound() + 1
    }

    /// Complex dimension k(n+1−k)
    pub fn dimension(&self) -> usize {
        self.k * self.part_bound()
    }

    /// Real degree of the top cohomology group
    pub fn top_grading(&self) -> usize {
        2 * self.dimension()
    }

    /// The unit class σ_0
    pub fn unit(&self) -> SchubertClass {
        SchubertClass::basis(Partition::zero(self.k), *self)
    }

    /// The point class σ_(n+1−k, …, n+1−k)
    pub fn top_class(&self) -> SchubertClass {
        SchubertClass::basis(Partition::rectangle(self.k, self.part_bound()), *self)
    }
}

impl Default for Grassmannian {
    fn default() -> Self {
        Grassmannian { k: 2, n: 3 }
    }
}

impl fmt::Display for Grassmannian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G({},{})", self.k, self.n + 1)
    }
}
