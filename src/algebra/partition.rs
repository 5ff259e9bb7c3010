//! Partitions indexing Schubert classes, and their enumeration

use crate::SchubertError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A weakly decreasing sequence of k non-negative parts.
///
/// Partitions are ordered by weight first and then lexicographically, so
/// sums of Schubert classes print in order of increasing degree.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPartition")]
pub struct Partition {
    parts: Vec<usize>,
}

/// Unvalidated wire form of [`Partition`]
#[derive(Deserialize)]
struct RawPartition {
    parts: Vec<usize>,
}

impl TryFrom<RawPartition> for Partition {
    type Error = SchubertError;

    fn try_from(raw: RawPartition) -> crate::Result<Self> {
        Partition::try_from(raw.parts)
    }
}

impl Partition {
    /// Wrap parts without checking them
    pub(crate) fn from_parts_unchecked(parts: Vec<usize>) -> Self {
        Partition { parts }
    }

    /// The all-zero partition of length k
    pub fn zero(k: usize) -> Self {
        Partition { parts: vec![0; k] }
    }

    /// The k × width rectangle
    pub fn rectangle(k: usize, width: usize) -> Self {
        Partition { parts: vec![width; k] }
    }

    /// Pad (with zeros) or truncate a prefix to exactly k parts.
    ///
    /// Truncation keeps the first k entries; whatever is cut off is lost.
    pub fn padded(prefix: &[usize], k: usize) -> Self {
        let mut parts: Vec<usize> = prefix.iter().copied().take(k).collect();
        parts.resize(k, 0);
        Partition { parts }
    }

    /// The parts
    pub fn parts(&self) -> &[usize] {
        &self.parts
    }

    /// Number of parts, k
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// True for the length-zero partition
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Sum of the parts
    pub fn weight(&self) -> usize {
        self.parts.iter().sum()
    }

    /// Index of the first zero part (k if there is none)
    pub fn zpos(&self) -> usize {
        self.parts
            .iter()
            .position(|&p| p == 0)
            .unwrap_or(self.parts.len())
    }

    /// Nonzero parts only
    pub fn nonzero_parts(&self) -> &[usize] {
        &self.parts[..self.zpos()]
    }

    /// Check the parts weakly decrease
    pub fn is_weakly_decreasing(&self) -> bool {
        self.parts.windows(2).all(|w| w[0] >= w[1])
    }

    /// Complement inside the k × width box, read backwards
    pub fn complement(&self, width: usize) -> Partition {
        Partition {
            parts: self
                .parts
                .iter()
                .rev()
                .map(|&p| width.saturating_sub(p))
                .collect(),
        }
    }
}

impl Ord for Partition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight()
            .cmp(&other.weight())
            .then_with(|| self.parts.cmp(&other.parts))
    }
}

impl PartialOrd for Partition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", part)?;
        }
        write!(f, ")")
    }
}

impl TryFrom<Vec<usize>> for Partition {
    type Error = SchubertError;

    fn try_from(parts: Vec<usize>) -> crate::Result<Self> {
        let partition = Partition { parts };
        if !partition.is_weakly_decreasing() {
            return Err(SchubertError::InvalidPartition {
                parts: partition.parts,
                reason: "parts are not weakly decreasing".to_string(),
            });
        }
        Ok(partition)
    }
}

/// All weakly decreasing sequences of length k with leading part below `bound`.
///
/// For k = 1 these are the singletons [i] with i < bound; for larger k
/// every leading part a is followed by the sequences of length k−1
/// bounded by a+1.
pub fn partitions(k: usize, bound: usize) -> Vec<Partition> {
    generate(k, bound)
        .into_iter()
        .map(Partition::from_parts_unchecked)
        .collect()
}

fn generate(k: usize, bound: usize) -> Vec<Vec<usize>> {
    match k {
        0 => vec![Vec::new()],
        1 => (0..bound).map(|i| vec![i]).collect(),
        _ => {
            let mut result = Vec::new();
            for lead in 0..bound {
                for tail in generate(k - 1, lead + 1) {
                    let mut parts = Vec::with_capacity(k);
                    parts.push(lead);
                    parts.extend(tail);
                    result.push(parts);
                }
            }
            result
        }
    }
}
