//! Formal integer combinations of Schubert classes

use super::{Partition, SchubertClass};
use crate::core::Grassmannian;
use crate::SchubertError;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::{Neg, Sub};

/// A reduced ℤ-linear combination of Schubert classes.
///
/// Each (Grassmannian, partition) appears at most once and never with a
/// zero coefficient. The empty sum is the zero class.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<SchubertClass>", into = "Vec<SchubertClass>")]
pub struct FormalSum {
    terms: BTreeMap<(Grassmannian, Partition), i64>,
}

impl FormalSum {
    /// The additive identity
    pub fn zero() -> Self {
        FormalSum {
            terms: BTreeMap::new(),
        }
    }

    /// The unit class of a ring, as a sum
    pub fn unit(space: Grassmannian) -> Self {
        Self::from_class(space.unit())
    }

    /// A single-term sum (empty when the scalar is zero)
    pub fn from_class(class: SchubertClass) -> Self {
        let mut sum = Self::zero();
        sum.insert(class);
        sum
    }

    /// Merge a class into the sum in place.
    ///
    /// Coefficients of equal classes add up; a term whose coefficient
    /// reaches zero is dropped. Plain i64 arithmetic: overflow panics in
    /// debug builds, see [`FormalSum::try_insert`].
    pub fn insert(&mut self, class: SchubertClass) {
        if class.is_zero() {
            return;
        }
        let key = (class.space(), class.partition().clone());
        let coeff = self.terms.entry(key).or_insert(0);
        *coeff += class.scalar();
        if *coeff == 0 {
            let key = (class.space(), class.partition().clone());
            self.terms.remove(&key);
        }
    }

    /// Merge a class into the sum in place, failing on coefficient overflow
    pub fn try_insert(&mut self, class: SchubertClass) -> crate::Result<()> {
        if class.is_zero() {
            return Ok(());
        }
        let key = (class.space(), class.partition().clone());
        let current = self.terms.get(&key).copied().unwrap_or(0);
        let coeff = current.checked_add(class.scalar()).ok_or_else(|| {
            SchubertError::CoefficientOverflow(format!("{} + {}", current, class.scalar()))
        })?;
        if coeff == 0 {
            self.terms.remove(&key);
        } else {
            self.terms.insert(key, coeff);
        }
        Ok(())
    }

    /// Add two sums
    pub fn add(&self, other: &FormalSum) -> FormalSum {
        let mut result = self.clone();
        for class in other.iter() {
            result.insert(class);
        }
        result
    }

    /// Add a single class
    pub fn add_class(&self, class: &SchubertClass) -> FormalSum {
        let mut result = self.clone();
        result.insert(class.clone());
        result
    }

    /// Add two sums, failing on coefficient overflow
    pub fn checked_add(&self, other: &FormalSum) -> crate::Result<FormalSum> {
        let mut result = self.clone();
        for class in other.iter() {
            result.try_insert(class)?;
        }
        Ok(result)
    }

    /// Scalar multiplication, failing on coefficient overflow
    pub fn checked_scale(&self, alpha: i64) -> crate::Result<FormalSum> {
        if alpha == 0 {
            return Ok(Self::zero());
        }
        let mut terms = BTreeMap::new();
        for (key, coeff) in &self.terms {
            let scaled = coeff.checked_mul(alpha).ok_or_else(|| {
                SchubertError::CoefficientOverflow(format!("{} * {}", coeff, alpha))
            })?;
            terms.insert(key.clone(), scaled);
        }
        Ok(FormalSum { terms })
    }

    /// Scalar multiplication
    pub fn scale(&self, alpha: i64) -> FormalSum {
        if alpha == 0 {
            return Self::zero();
        }
        FormalSum {
            terms: self
                .terms
                .iter()
                .map(|(key, coeff)| (key.clone(), coeff * alpha))
                .collect(),
        }
    }

    /// The additive inverse
    pub fn negate(&self) -> FormalSum {
        self.scale(-1)
    }

    /// `self − other`
    pub fn subtract(&self, other: &FormalSum) -> FormalSum {
        self.add(&other.negate())
    }

    /// Multiply every term by a single class
    pub fn multiply_class(&self, class: &SchubertClass) -> crate::Result<FormalSum> {
        let mut result = FormalSum::zero();
        for term in self.iter() {
            result = result.checked_add(&term.multiply(class)?)?;
        }
        Ok(result)
    }

    /// Bilinear extension of the class product
    pub fn multiply(&self, other: &FormalSum) -> crate::Result<FormalSum> {
        let mut result = FormalSum::zero();
        for left in self.iter() {
            for right in other.iter() {
                result = result.checked_add(&left.multiply(&right)?)?;
            }
        }
        Ok(result)
    }

    /// Coefficient of the given class (its own scalar is ignored)
    pub fn coefficient(&self, class: &SchubertClass) -> i64 {
        let key = (class.space(), class.partition().clone());
        self.terms.get(&key).copied().unwrap_or(0)
    }

    /// Check if the sum is zero
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of nonzero terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Same as [`FormalSum::is_zero`]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The terms as scaled classes, in increasing degree
    pub fn iter(&self) -> impl Iterator<Item = SchubertClass> + '_ {
        self.terms
            .iter()
            .map(|((space, partition), &coeff)| {
                SchubertClass::with_scalar(partition.clone(), *space, coeff)
            })
    }

    /// Degrees of the terms present
    pub fn gradings(&self) -> BTreeSet<usize> {
        self.terms
            .keys()
            .map(|(_, partition)| 2 * partition.weight())
            .collect()
    }
}

impl From<SchubertClass> for FormalSum {
    fn from(class: SchubertClass) -> Self {
        Self::from_class(class)
    }
}

impl From<Vec<SchubertClass>> for FormalSum {
    fn from(classes: Vec<SchubertClass>) -> Self {
        classes.into_iter().collect()
    }
}

impl From<FormalSum> for Vec<SchubertClass> {
    fn from(sum: FormalSum) -> Self {
        sum.iter().collect()
    }
}

impl FromIterator<SchubertClass> for FormalSum {
    fn from_iter<I: IntoIterator<Item = SchubertClass>>(iter: I) -> Self {
        let mut sum = FormalSum::zero();
        for class in iter {
            sum.insert(class);
        }
        sum
    }
}

impl std::ops::Add for FormalSum {
    type Output = FormalSum;

    fn add(self, other: FormalSum) -> FormalSum {
        FormalSum::add(&self, &other)
    }
}

impl<'a> std::ops::Add<&'a FormalSum> for &'a FormalSum {
    type Output = FormalSum;

    fn add(self, other: &'a FormalSum) -> FormalSum {
        FormalSum::add(self, other)
    }
}

impl Sub for FormalSum {
    type Output = FormalSum;

    fn sub(self, other: FormalSum) -> FormalSum {
        self.subtract(&other)
    }
}

impl Neg for FormalSum {
    type Output = FormalSum;

    fn neg(self) -> FormalSum {
        self.negate()
    }
}

impl Zero for FormalSum {
    fn zero() -> Self {
        FormalSum {
            terms: BTreeMap::new(),
        }
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl fmt::Display for FormalSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        let rendered: Vec<String> = self.iter().map(|class| class.to_string()).collect();
        write!(f, "{}", rendered.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sigma(parts: &[usize]) -> SchubertClass {
        SchubertClass::new(parts, Grassmannian::lines_in(3).unwrap(), 1).unwrap()
    }

    #[test]
    fn test_merge_and_prune() {
        let mut sum = FormalSum::zero();
        sum.insert(sigma(&[1]));
        sum.insert(sigma(&[1]).scaled(2));
        assert_eq!(sum.len(), 1);
        assert_eq!(sum.coefficient(&sigma(&[1])), 3);

        sum.insert(sigma(&[1]).scaled(-3));
        assert!(sum.is_zero());

        sum.insert(sigma(&[2]).scaled(0));
        assert!(sum.is_zero());
    }

    #[test]
    fn test_additive_identity_and_inverse() {
        let x = FormalSum::from_class(sigma(&[2, 1]).scaled(4)).add_class(&sigma(&[1]));
        assert_eq!(x.add(&FormalSum::zero()), x);
        assert!(x.add(&x.negate()).is_zero());
        assert!(x.subtract(&x).is_zero());
        assert!((x.clone() - x).is_zero());
    }

    #[test]
    fn test_scale_does_not_alias() {
        let x = FormalSum::from_class(sigma(&[1]));
        let y = x.scale(5);
        assert_eq!(x.coefficient(&sigma(&[1])), 1);
        assert_eq!(y.coefficient(&sigma(&[1])), 5);
        assert!(x.scale(0).is_zero());
    }

    #[test]
    fn test_bilinear_product() {
        // (σ_1 + σ_2) · σ_1 = σ_2 + σ_(1,1) + σ_(2,1)
        let x = FormalSum::from_class(sigma(&[1])).add_class(&sigma(&[2]));
        let product = x.multiply(&FormalSum::from_class(sigma(&[1]))).unwrap();
        assert_eq!(product.coefficient(&sigma(&[2])), 1);
        assert_eq!(product.coefficient(&sigma(&[1, 1])), 1);
        assert_eq!(product.coefficient(&sigma(&[2, 1])), 1);
        assert_eq!(product.len(), 3);
        assert_eq!(product.gradings(), BTreeSet::from([4, 6]));
    }

    #[test]
    fn test_display() {
        assert_eq!(FormalSum::zero().to_string(), "0");
        let x = FormalSum::from_class(sigma(&[2]).scaled(3)).add_class(&sigma(&[1]));
        assert_eq!(x.to_string(), "σ_1+3σ_2");
    }

    #[test]
    fn test_json_round_trip() {
        let x = FormalSum::from_class(sigma(&[2]).scaled(-2)).add_class(&sigma(&[1, 1]));
        let json = serde_json::to_string(&x).unwrap();
        let back: FormalSum = serde_json::from_str(&json).unwrap();
        assert_eq!(x, back);
        assert_eq!(back.coefficient(&sigma(&[2])), -2);
    }

    #[test]
    fn test_checked_arithmetic() {
        let big = FormalSum::from_class(sigma(&[1]).scaled(i64::MAX));
        assert!(matches!(
            big.checked_add(&FormalSum::from_class(sigma(&[1]))),
            Err(SchubertError::CoefficientOverflow(_))
        ));
        assert!(big.checked_scale(2).is_err());
        assert_eq!(big.checked_scale(-1).unwrap(), big.negate());
        assert!(big.checked_add(&big.negate()).unwrap().is_zero());
        assert!(big.multiply(&FormalSum::from_class(sigma(&[1]).scaled(2))).is_err());
    }
}
