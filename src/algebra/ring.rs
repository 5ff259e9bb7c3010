//! Uniform ring operations over single classes and sums

use super::{FormalSum, SchubertClass};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operations of a commutative ring with integer scalars
pub trait CommutativeRing: Sized {
    /// Sum of two elements
    fn add(&self, other: &Self) -> Self;

    /// Product of two elements; fails when the operands live in different rings
    fn multiply(&self, other: &Self) -> crate::Result<Self>;

    /// Multiply by an integer
    fn scale(&self, alpha: i64) -> Self;

    /// The additive inverse
    fn negate(&self) -> Self {
        self.scale(-1)
    }

    /// `self − other`
    fn subtract(&self, other: &Self) -> Self {
        self.add(&other.negate())
    }
}

impl CommutativeRing for FormalSum {
    fn add(&self, other: &Self) -> Self {
        FormalSum::add(self, other)
    }

    fn multiply(&self, other: &Self) -> crate::Result<Self> {
        FormalSum::multiply(self, other)
    }

    fn scale(&self, alpha: i64) -> Self {
        FormalSum::scale(self, alpha)
    }
}

/// A ring element: either a lone (scaled) class or a formal sum.
///
/// Equality compares the elements as formal sums, so scalars count and a
/// `Single` equals the one-term `Sum` holding the same class.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum RingElement {
    /// A single term
    Single(SchubertClass),
    /// A reduced combination of terms
    Sum(FormalSum),
}

impl RingElement {
    /// View the element as a formal sum
    pub fn to_sum(&self) -> FormalSum {
        match self {
            RingElement::Single(class) => FormalSum::from_class(class.clone()),
            RingElement::Sum(sum) => sum.clone(),
        }
    }

    /// Check if the element is zero
    pub fn is_zero(&self) -> bool {
        match self {
            RingElement::Single(class) => class.is_zero(),
            RingElement::Sum(sum) => sum.is_zero(),
        }
    }
}

impl PartialEq for RingElement {
    fn eq(&self, other: &Self) -> bool {
        self.to_sum() == other.to_sum()
    }
}

impl Eq for RingElement {}

impl CommutativeRing for RingElement {
    fn add(&self, other: &Self) -> Self {
        RingElement::Sum(self.to_sum().add(&other.to_sum()))
    }

    fn multiply(&self, other: &Self) -> crate::Result<Self> {
        let product = match (self, other) {
            (RingElement::Single(a), RingElement::Single(b)) => a.multiply(b)?,
            (RingElement::Sum(a), RingElement::Single(b)) => a.multiply_class(b)?,
            (RingElement::Single(a), RingElement::Sum(b)) => b.multiply_class(a)?,
            (RingElement::Sum(a), RingElement::Sum(b)) => a.multiply(b)?,
        };
        Ok(RingElement::Sum(product))
    }

    fn scale(&self, alpha: i64) -> Self {
        match self {
            RingElement::Single(class) => RingElement::Single(class.scaled(alpha)),
            RingElement::Sum(sum) => RingElement::Sum(sum.scale(alpha)),
        }
    }
}

impl From<SchubertClass> for RingElement {
    fn from(class: SchubertClass) -> Self {
        RingElement::Single(class)
    }
}

impl From<FormalSum> for RingElement {
    fn from(sum: FormalSum) -> Self {
        RingElement::Sum(sum)
    }
}

impl fmt::Display for RingElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingElement::Single(class) => write!(f, "{}", class),
            RingElement::Sum(sum) => write!(f, "{}", sum),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Grassmannian;

    #[test]
    fn test_mixed_dispatch() {
        let space = Grassmannian::lines_in(3).unwrap();
        let s1 = RingElement::from(SchubertClass::new(&[1], space, 1).unwrap());
        let square = s1.multiply(&s1).unwrap();
        let cube_left = square.multiply(&s1).unwrap();
        let cube_right = s1.multiply(&square).unwrap();
        assert_eq!(cube_left, cube_right);
        assert_eq!(cube_left.to_string(), "2σ_(2,1)");
    }

    #[test]
    fn test_subtract_to_zero() {
        let space = Grassmannian::lines_in(3).unwrap();
        let x = RingElement::from(SchubertClass::new(&[2], space, 3).unwrap());
        assert!(x.subtract(&x).is_zero());
        assert_eq!(x.negate().to_sum().to_string(), "-3σ_2");
    }

    #[test]
    fn test_equality_respects_scalars() {
        let space = Grassmannian::lines_in(3).unwrap();
        let s1 = SchubertClass::new(&[1], space, 1).unwrap();

        let zero = RingElement::from(SchubertClass::zero(space));
        let unit = RingElement::from(space.unit());
        assert_ne!(zero, unit);
        assert_eq!(zero, RingElement::from(FormalSum::zero()));

        assert_ne!(RingElement::from(s1.clone()), RingElement::from(s1.scaled(5)));
        assert_eq!(
            RingElement::from(s1.clone()),
            RingElement::from(FormalSum::from_class(s1))
        );
    }
}
