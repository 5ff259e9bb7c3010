//! Cofactor expansion of matrices with Schubert class entries

use super::{FormalSum, SchubertClass};
use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};

/// One signed product in an unevaluated determinant
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionTerm {
    /// +1 or −1
    pub sign: i64,
    /// Factors, multiplied left to right
    pub factors: Vec<SchubertClass>,
}

impl ExpansionTerm {
    /// Create a new term
    pub fn new(sign: i64, factors: Vec<SchubertClass>) -> Self {
        ExpansionTerm { sign, factors }
    }

    /// True if some factor is the zero class
    pub fn vanishes(&self) -> bool {
        self.factors.iter().any(|f| f.is_zero())
    }

    /// The factors with the sign folded into the first one
    pub fn folded(&self) -> Vec<SchubertClass> {
        let mut factors = self.factors.clone();
        if let Some(first) = factors.first_mut() {
            *first = first.scaled(self.sign);
        }
        factors
    }
}

/// Expand the determinant of a square matrix along its first row.
///
/// The result is the unevaluated signed sum of products; entries are
/// cloned, never shared, so evaluating one term cannot affect another.
///
/// # Panics
///
/// Panics if the matrix is not square.
pub fn determinant(matrix: &Array2<SchubertClass>) -> Vec<ExpansionTerm> {
    let (rows, cols) = matrix.dim();
    assert_eq!(rows, cols, "determinant of a {}x{} matrix", rows, cols);

    match rows {
        0 => vec![ExpansionTerm::new(1, Vec::new())],
        1 => vec![ExpansionTerm::new(1, vec![matrix[[0, 0]].clone()])],
        2 => vec![
            ExpansionTerm::new(1, vec![matrix[[0, 0]].clone(), matrix[[1, 1]].clone()]),
            ExpansionTerm::new(-1, vec![matrix[[1, 0]].clone(), matrix[[0, 1]].clone()]),
        ],
        _ => {
            let mut terms = Vec::new();
            for column in 0..cols {
                let sign = if column % 2 == 0 { 1 } else { -1 };
                let lead = &matrix[[0, column]];
                for minor_term in determinant(&minor(matrix, 0, column)) {
                    let mut factors = Vec::with_capacity(rows);
                    factors.push(lead.clone());
                    factors.extend(minor_term.factors);
                    terms.push(ExpansionTerm::new(sign * minor_term.sign, factors));
                }
            }
            terms
        }
    }
}

/// The matrix with one row and one column removed
pub fn minor(matrix: &Array2<SchubertClass>, row: usize, column: usize) -> Array2<SchubertClass> {
    let (rows, cols) = matrix.dim();
    let kept_rows: Vec<usize> = (0..rows).filter(|&r| r != row).collect();
    let kept_cols: Vec<usize> = (0..cols).filter(|&c| c != column).collect();
    matrix
        .select(Axis(0), &kept_rows)
        .select(Axis(1), &kept_cols)
}

/// Evaluate an expansion against a seed.
///
/// Each term multiplies the seed by its factors left to right with the
/// ring product; the signed results are summed. Seeding with the unit
/// class evaluates the determinant itself.
pub fn evaluate(terms: &[ExpansionTerm], seed: &FormalSum) -> crate::Result<FormalSum> {
    let mut result = FormalSum::zero();
    for term in terms {
        if term.vanishes() {
            continue;
        }
        let mut product = seed.clone();
        for factor in &term.factors {
            if product.is_zero() {
                break;
            }
            product = product.multiply_class(factor)?;
        }
        result = result.checked_add(&product.checked_scale(term.sign)?)?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Grassmannian;

    fn special(m: isize, space: Grassmannian) -> SchubertClass {
        SchubertClass::special(m, space)
    }

    #[test]
    fn test_two_by_two_shape() {
        let space = Grassmannian::lines_in(3).unwrap();
        let matrix = SchubertClass::new(&[2, 1], space, 1)
            .unwrap()
            .giambelli_matrix();
        let terms = determinant(&matrix);
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0].sign, 1);
        assert_eq!(terms[1].sign, -1);
        assert_eq!(terms[1].factors, vec![matrix[[1, 0]].clone(), matrix[[0, 1]].clone()]);
        assert_eq!(terms[1].folded()[0].scalar(), -1);
    }

    #[test]
    fn test_expansion_size() {
        let space = Grassmannian::new(4, 7).unwrap();
        let matrix = Array2::from_shape_fn((4, 4), |(i, j)| special(j as isize - i as isize + 1, space));
        let terms = determinant(&matrix);
        assert_eq!(terms.len(), 24);
        assert!(terms.iter().all(|t| t.factors.len() == 4));
        assert_eq!(terms.iter().map(|t| t.sign).sum::<i64>(), 0);
    }

    #[test]
    fn test_minor() {
        let space = Grassmannian::new(3, 6).unwrap();
        let matrix = Array2::from_shape_fn((3, 3), |(i, j)| special((3 * i + j) as isize % 4, space));
        let m = minor(&matrix, 0, 1);
        assert_eq!(m.dim(), (2, 2));
        assert_eq!(m[[0, 0]], matrix[[1, 0]]);
        assert_eq!(m[[1, 1]], matrix[[2, 2]]);
    }

    #[test]
    fn test_evaluate_identity_matrix() {
        let space = Grassmannian::new(3, 5).unwrap();
        let matrix = Array2::from_shape_fn((3, 3), |(i, j)| {
            if i == j {
                space.unit()
            } else {
                SchubertClass::zero(space)
            }
        });
        let value = evaluate(&determinant(&matrix), &FormalSum::unit(space)).unwrap();
        assert_eq!(value, FormalSum::unit(space));
    }

    #[test]
    fn test_giambelli_reconstructs_class() {
        let space = Grassmannian::new(3, 5).unwrap();
        let class = SchubertClass::new(&[2, 1, 1], space, 1).unwrap();
        let value = evaluate(&class.giambelli_expansion(), &FormalSum::unit(space)).unwrap();
        assert_eq!(value, FormalSum::from_class(class));
    }
}
