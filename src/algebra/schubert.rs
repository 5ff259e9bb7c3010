//! Schubert classes: the additive basis of H*(G(k, n+1))

use super::{determinant, evaluate, ExpansionTerm, FormalSum, Partition};
use crate::core::Grassmannian;
use crate::SchubertError;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An integer multiple of a Schubert class σ_a.
///
/// Equality and hashing look only at the partition and the Grassmannian,
/// never at the scalar: two values are equal when they name the same
/// cohomology class. Use [`SchubertClass::scalar`] to compare coefficients.
///
/// Values are immutable; scaling and negation return new classes.
/// Deserialization goes through [`SchubertClass::new`], so a loaded class
/// is as valid as a constructed one.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "RawClass")]
pub struct SchubertClass {
    partition: Partition,
    space: Grassmannian,
    scalar: i64,
}

/// Unvalidated wire form of [`SchubertClass`]
#[derive(Deserialize)]
struct RawClass {
    partition: Partition,
    space: Grassmannian,
    scalar: i64,
}

impl TryFrom<RawClass> for SchubertClass {
    type Error = SchubertError;

    fn try_from(raw: RawClass) -> crate::Result<Self> {
        SchubertClass::new(raw.partition.parts(), raw.space, raw.scalar)
    }
}

impl SchubertClass {
    pub(crate) fn with_scalar(partition: Partition, space: Grassmannian, scalar: i64) -> Self {
        SchubertClass {
            partition,
            space,
            scalar,
        }
    }

    /// A basis class with scalar 1; the partition is trusted
    pub(crate) fn basis(partition: Partition, space: Grassmannian) -> Self {
        Self::with_scalar(partition, space, 1)
    }

    /// The zero class of a ring: all-zero partition with scalar 0
    pub fn zero(space: Grassmannian) -> Self {
        Self::with_scalar(Partition::zero(space.k), space, 0)
    }

    /// Build `scalar · σ_a`, rejecting malformed partitions.
    ///
    /// The parts are padded with zeros (or truncated) to length k.
    pub fn new(parts: &[usize], space: Grassmannian, scalar: i64) -> crate::Result<Self> {
        space
            .validate()
            .map_err(SchubertError::InvalidParameters)?;
        let partition = Self::checked_partition(parts, &space)?;
        Ok(Self::with_scalar(partition, space, scalar))
    }

    /// Build `scalar · σ_a`, coercing malformed input to the zero class.
    ///
    /// A malformed partition yields the degenerate zero class together with
    /// the diagnostic explaining the rejection, so callers can tell a
    /// coerced input apart from a genuine zero. The diagnostic is also
    /// logged as a warning.
    pub fn make(
        parts: &[usize],
        space: Grassmannian,
        scalar: i64,
    ) -> (Self, Option<SchubertError>) {
        match Self::new(parts, space, scalar) {
            Ok(class) => (class, None),
            Err(err) => {
                log::warn!("coercing to the zero class: {}", err);
                (Self::zero(space), Some(err))
            }
        }
    }

    /// The special class σ_m with a single part.
    ///
    /// Out-of-range m (negative, or wider than the box) gives the zero
    /// class without any diagnostic; m = 0 gives the unit.
    pub fn special(m: isize, space: Grassmannian) -> Self {
        if m < 0 || (m as usize) > space.part_bound() {
            return Self::zero(space);
        }
        Self::basis(Partition::padded(&[m as usize], space.k), space)
    }

    fn checked_partition(parts: &[usize], space: &Grassmannian) -> crate::Result<Partition> {
        let invalid = |reason: String| SchubertError::InvalidPartition {
            parts: parts.to_vec(),
            reason,
        };

        if parts.iter().skip(space.k).any(|&p| p != 0) {
            return Err(invalid(format!("more than {} nonzero parts", space.k)));
        }
        let partition = Partition::padded(parts, space.k);
        if !partition.is_weakly_decreasing() {
            return Err(invalid("parts are not weakly decreasing".to_string()));
        }
        if let Some(&lead) = partition.parts().first() {
            if lead > space.part_bound() {
                return Err(invalid(format!(
                    "leading part {} exceeds {}",
                    lead,
                    space.part_bound()
                )));
            }
        }
        Ok(partition)
    }

    /// The indexing partition
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// The ambient Grassmannian
    pub fn space(&self) -> Grassmannian {
        self.space
    }

    /// The integer coefficient
    pub fn scalar(&self) -> i64 {
        self.scalar
    }

    /// Index of the first zero part
    pub fn zpos(&self) -> usize {
        self.partition.zpos()
    }

    /// Cohomological degree, 2·Σaᵢ
    pub fn grading(&self) -> usize {
        2 * self.partition.weight()
    }

    /// At most the first part is nonzero
    pub fn is_primitive(&self) -> bool {
        self.zpos() <= 1
    }

    /// True when the scalar vanishes
    pub fn is_zero(&self) -> bool {
        self.scalar == 0
    }

    /// A copy with the scalar multiplied by `alpha`.
    ///
    /// Plain i64 arithmetic: overflow panics in debug builds. Use
    /// [`SchubertClass::checked_scaled`] when scalars may be large.
    pub fn scaled(&self, alpha: i64) -> Self {
        Self::with_scalar(self.partition.clone(), self.space, self.scalar * alpha)
    }

    /// A copy with the scalar multiplied by `alpha`, failing on overflow
    pub fn checked_scaled(&self, alpha: i64) -> crate::Result<Self> {
        let scalar = checked_product(self.scalar, alpha)?;
        Ok(Self::with_scalar(self.partition.clone(), self.space, scalar))
    }

    /// A copy with the scalar negated
    pub fn negated(&self) -> Self {
        self.scaled(-1)
    }

    /// The Poincaré dual basis class (scalar 1)
    pub fn dual(&self) -> Self {
        Self::basis(self.partition.complement(self.space.part_bound()), self.space)
    }

    fn check_ring(&self, other: &SchubertClass) -> crate::Result<()> {
        if self.space != other.space {
            return Err(SchubertError::RingMismatch {
                left: self.space,
                right: other.space,
            });
        }
        Ok(())
    }

    /// Multiply two classes of the same Grassmannian.
    ///
    /// Products past the top degree vanish. A unit factor rescales the
    /// other operand; a primitive factor goes through Pieri's formula;
    /// anything else expands `self` through Giambelli's determinant.
    pub fn multiply(&self, other: &SchubertClass) -> crate::Result<FormalSum> {
        self.check_ring(other)?;

        let scalar = checked_product(self.scalar, other.scalar)?;
        if scalar == 0 || self.grading() + other.grading() > self.space.top_grading() {
            return Ok(FormalSum::zero());
        }

        if self.grading() == 0 {
            return Ok(FormalSum::from_class(other.checked_scaled(self.scalar)?));
        }
        if other.grading() == 0 {
            return Ok(FormalSum::from_class(self.checked_scaled(other.scalar)?));
        }

        if self.is_primitive() {
            return Ok(other.pieri(self.partition.parts()[0], scalar));
        }
        if other.is_primitive() {
            return Ok(self.pieri(other.partition.parts()[0], scalar));
        }

        self.giambelli_product(other)
    }

    /// Pieri's formula: σ_a · σ_m is the sum of σ_p over partitions p in
    /// the box with a_i ≤ p_i ≤ a_{i−1} and |p| = |a| + m.
    fn pieri(&self, degree: usize, scalar: i64) -> FormalSum {
        let target = self.partition.weight() + degree;
        let strips = horizontal_strips(self.partition.parts(), self.space.part_bound(), target);
        log::trace!(
            "pieri: {:?} * σ_{} has {} terms",
            self.partition,
            degree,
            strips.len()
        );

        let mut result = FormalSum::zero();
        for parts in strips {
            result.insert(Self::with_scalar(
                Partition::from_parts_unchecked(parts),
                self.space,
                scalar,
            ));
        }
        result
    }

    /// The Giambelli matrix (σ_{a_i + j − i}) for i, j in 0..k
    pub fn giambelli_matrix(&self) -> Array2<SchubertClass> {
        let parts = self.partition.parts();
        Array2::from_shape_fn((self.space.k, self.space.k), |(i, j)| {
            let index = parts[i] as isize + j as isize - i as isize;
            Self::special(index, self.space)
        })
    }

    /// σ_a written as a signed sum of products of special classes
    pub fn giambelli_expansion(&self) -> Vec<ExpansionTerm> {
        determinant(&self.giambelli_matrix())
    }

    fn giambelli_product(&self, other: &SchubertClass) -> crate::Result<FormalSum> {
        let terms = self.giambelli_expansion();
        log::debug!(
            "giambelli: expanding {:?} into {} terms",
            self.partition,
            terms.len()
        );
        let product = evaluate(&terms, &FormalSum::from_class(other.clone()))?;
        product.checked_scale(self.scalar)
    }

    /// Raise to a non-negative power by repeated squaring
    pub fn pow(&self, exponent: u32) -> crate::Result<FormalSum> {
        let mut result = FormalSum::from_class(self.space.unit());
        let mut base = FormalSum::from_class(self.clone());
        let mut e = exponent;

        while e > 0 {
            if e & 1 == 1 {
                result = result.multiply(&base)?;
            }
            e >>= 1;
            if e > 0 {
                base = base.multiply(&base)?;
            }
        }

        Ok(result)
    }

    /// The incidence conditions cutting out the Schubert variety
    /// with respect to a fixed flag V_1 ⊂ V_2 ⊂ … ⊂ V_{n+1}.
    pub fn variety_description(&self) -> String {
        let conditions: Vec<String> = self
            .partition
            .nonzero_parts()
            .iter()
            .enumerate()
            .map(|(i, &part)| {
                let row = i + 1;
                let flag_index = self.space.part_bound() + row - part;
                format!("dim(Λ ∩ V_{}) ≥ {}", flag_index, row)
            })
            .collect();

        if conditions.is_empty() {
            self.space.to_string()
        } else {
            format!("{{ Λ ∈ {} | {} }}", self.space, conditions.join(", "))
        }
    }
}

fn checked_product(a: i64, b: i64) -> crate::Result<i64> {
    a.checked_mul(b)
        .ok_or_else(|| SchubertError::CoefficientOverflow(format!("{} * {}", a, b)))
}

/// Interlacing sequences p with lower[i] ≤ p_i ≤ (i == 0 ? top : lower[i−1])
/// summing to `remaining`.
fn horizontal_strips(lower: &[usize], top: usize, remaining: usize) -> Vec<Vec<usize>> {
    let Some((&first, rest)) = lower.split_first() else {
        return if remaining == 0 { vec![Vec::new()] } else { Vec::new() };
    };

    let mut result = Vec::new();
    for p in first..=top.min(remaining) {
        for tail in horizontal_strips(rest, first, remaining - p) {
            let mut parts = Vec::with_capacity(lower.len());
            parts.push(p);
            parts.extend(tail);
            result.push(parts);
        }
    }
    result
}

impl PartialEq for SchubertClass {
    fn eq(&self, other: &Self) -> bool {
        self.partition == other.partition && self.space == other.space
    }
}

impl Eq for SchubertClass {}

impl Hash for SchubertClass {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.partition.hash(state);
        self.space.hash(state);
    }
}

impl fmt::Display for SchubertClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nonzero = self.partition.nonzero_parts();
        if self.scalar != 1 || nonzero.is_empty() {
            write!(f, "{}", self.scalar)?;
        }
        if self.scalar == 0 {
            return Ok(());
        }
        match nonzero {
            [] => Ok(()),
            [single] => write!(f, "σ_{}", single),
            parts => {
                let joined: Vec<String> = parts.iter().map(|p| p.to_string()).collect();
                write!(f, "σ_({})", joined.join(","))
            }
        }
    }
}

impl fmt::Debug for SchubertClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}·σ{:?} in {}", self.scalar, self.partition, self.space)
    }
}
