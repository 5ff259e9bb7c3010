//! Additive basis of H*(G(k, n+1)) graded by degree

use super::Grassmannian;
use crate::algebra::{partitions, FormalSum, SchubertClass};
use serde::{Deserialize, Serialize};

/// The Schubert basis of a Grassmannian's cohomology, bucketed by degree.
///
/// `groups()[d]` holds the basis of H^d; odd degrees are always empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohomologyBasis {
    space: Grassmannian,
    groups: Vec<Vec<SchubertClass>>,
}

impl CohomologyBasis {
    /// Enumerate every Schubert class of `space` and group it by grading
    pub fn build(space: Grassmannian) -> crate::Result<Self> {
        space
            .validate()
            .map_err(crate::SchubertError::InvalidParameters)?;

        let mut groups = vec![Vec::new(); space.top_grading() + 1];
        for partition in partitions(space.k, space.partition_bound()) {
            let class = SchubertClass::basis(partition, space);
            groups[class.grading()].push(class);
        }

        log::debug!(
            "built basis of H*({}): {} classes up to degree {}",
            space,
            groups.iter().map(Vec::len).sum::<usize>(),
            space.top_grading()
        );

        Ok(CohomologyBasis { space, groups })
    }

    /// The Grassmannian
    pub fn space(&self) -> Grassmannian {
        self.space
    }

    /// All degree groups, indexed by grading
    pub fn groups(&self) -> &[Vec<SchubertClass>] {
        &self.groups
    }

    /// Basis of H^degree (empty outside 0..=top)
    pub fn group(&self, degree: usize) -> &[SchubertClass] {
        self.groups.get(degree).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Rank of H^degree
    pub fn rank(&self, degree: usize) -> usize {
        self.group(degree).len()
    }

    /// Ranks of all groups
    pub fn betti_numbers(&self) -> Vec<usize> {
        self.groups.iter().map(Vec::len).collect()
    }

    /// Total rank, C(n+1, k)
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Never true for a valid Grassmannian
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every generator, in increasing degree
    pub fn generators(&self) -> impl Iterator<Item = &SchubertClass> {
        self.groups.iter().flatten()
    }

    /// Products of every ordered pair of generators
    pub fn multiplication_table(&self) -> crate::Result<MultiplicationTable> {
        let generators: Vec<SchubertClass> = self.generators().cloned().collect();
        let mut products = Vec::with_capacity(generators.len());

        for left in &generators {
            let row = generators
                .iter()
                .map(|right| left.multiply(right))
                .collect::<crate::Result<Vec<_>>>()?;
            products.push(row);
        }

        Ok(MultiplicationTable {
            generators,
            products,
        })
    }
}

/// The products σ_i · σ_j of a basis
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplicationTable {
    /// Row and column labels
    pub generators: Vec<SchubertClass>,
    /// `products[i][j] = generators[i] · generators[j]`
    pub products: Vec<Vec<FormalSum>>,
}

impl MultiplicationTable {
    /// Product of generators i and j
    pub fn get(&self, i: usize, j: usize) -> Option<&FormalSum> {
        self.products.get(i).and_then(|row| row.get(j))
    }

    /// Check σ_i · σ_j = σ_j · σ_i for every pair
    pub fn is_symmetric(&self) -> bool {
        self.products
            .iter()
            .enumerate()
            .all(|(i, row)| row.iter().enumerate().all(|(j, p)| self.get(j, i) == Some(p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_g24_basis() {
        let basis = CohomologyBasis::build(Grassmannian::lines_in(3).unwrap()).unwrap();
        assert_eq!(basis.betti_numbers(), vec![1, 0, 1, 0, 2, 0, 1, 0, 1]);
        assert_eq!(basis.len(), 6);
        assert_eq!(basis.rank(3), 0);
        assert_eq!(basis.rank(100), 0);
        assert!(basis.group(8).contains(&basis.space().top_class()));
    }

    #[test]
    fn test_basis_size_is_binomial() {
        // C(6,3) = 20 Schubert classes in G(3,6)
        let basis = CohomologyBasis::build(Grassmannian::new(3, 5).unwrap()).unwrap();
        assert_eq!(basis.len(), 20);
        assert_eq!(basis.groups().len(), 19);
        assert!(basis.generators().all(|c| c.grading() % 2 == 0));
    }

    #[test]
    fn test_projective_space() {
        let basis = CohomologyBasis::build(Grassmannian::projective_space(4)).unwrap();
        assert_eq!(basis.betti_numbers(), vec![1, 0, 1, 0, 1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_invalid_space() {
        assert!(CohomologyBasis::build(Grassmannian { k: 0, n: 2 }).is_err());
    }

    #[test]
    fn test_multiplication_table() {
        let basis = CohomologyBasis::build(Grassmannian::lines_in(3).unwrap()).unwrap();
        let table = basis.multiplication_table().unwrap();
        assert_eq!(table.generators.len(), 6);
        assert!(table.is_symmetric());
        // unit row reproduces the generators
        for (j, generator) in table.generators.iter().enumerate() {
            assert_eq!(table.get(0, j), Some(&FormalSum::from_class(generator.clone())));
        }
        assert!(table.get(6, 0).is_none());
    }
}
