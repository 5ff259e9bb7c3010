//! Utility functions for Schubert calculus

use crate::algebra::{partitions, FormalSum, SchubertClass};
use crate::core::Grassmannian;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};

/// Save object to JSON file
pub fn save_json<T: Serialize>(obj: &T, path: &str) -> crate::Result<()> {
    let json = serde_json::to_string_pretty(obj)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Load object from JSON file
pub fn load_json<T: for<'de> Deserialize<'de>>(path: &str) -> crate::Result<T> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    let obj = serde_json::from_str(&contents)?;
    Ok(obj)
}

/// Pick a uniformly random basis class of a Grassmannian
pub fn random_class(space: Grassmannian) -> SchubertClass {
    use rand::seq::SliceRandom;

    let basis = partitions(space.k, space.partition_bound());
    let mut rng = rand::thread_rng();
    match basis.choose(&mut rng) {
        Some(partition) => SchubertClass::basis(partition.clone(), space),
        None => SchubertClass::zero(space),
    }
}

/// A random combination of up to `terms` basis classes with small coefficients
pub fn random_element(space: Grassmannian, terms: usize) -> FormalSum {
    use rand::Rng;

    let mut rng = rand::thread_rng();
    (0..terms)
        .map(|_| random_class(space).scaled(rng.gen_range(-3..=3)))
        .collect()
}

/// Timing utilities
pub mod timing {
    use std::time::Instant;

    /// Simple timer, reporting through the `log` facade when dropped
    pub struct Timer {
        start: Instant,
        name: String,
    }

    impl Timer {
        /// Start new timer
        pub fn new(name: &str) -> Self {
            Timer {
                start: Instant::now(),
                name: name.to_string(),
            }
        }

        /// Get elapsed time
        pub fn elapsed(&self) -> f32 {
            self.start.elapsed().as_secs_f32()
        }

        /// Log elapsed time
        pub fn report(&self) {
            log::info!("{}: {:.3}s", self.name, self.elapsed());
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            self.report();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CohomologyBasis, MultiplicationTable};

    #[test]
    fn test_random_class_is_valid() {
        let space = Grassmannian::new(3, 6).unwrap();
        for _ in 0..20 {
            let class = random_class(space);
            assert!(class.partition().is_weakly_decreasing());
            assert!(class.partition().parts()[0] <= space.part_bound());
            assert_eq!(class.scalar(), 1);
        }
    }

    #[test]
    fn test_random_element_stays_in_ring() {
        let space = Grassmannian::lines_in(4).unwrap();
        let x = random_element(space, 5);
        assert!(x.len() <= 5);
        assert!(x.iter().all(|c| c.space() == space && c.scalar() != 0));
    }

    #[test]
    fn test_json_serialization() {
        let basis = CohomologyBasis::build(Grassmannian::lines_in(3).unwrap()).unwrap();
        let table = basis.multiplication_table().unwrap();
        let path = std::env::temp_dir().join("schubert_g24_table.json");
        let path = path.to_str().unwrap();

        save_json(&table, path).unwrap();
        let loaded: MultiplicationTable = load_json(path).unwrap();

        assert_eq!(table, loaded);
        for (left, right) in table.generators.iter().zip(&loaded.generators) {
            assert_eq!(left.scalar(), right.scalar());
        }

        // Clean up
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_missing_file() {
        let result: crate::Result<FormalSum> = load_json("/nonexistent/schubert.json");
        assert!(matches!(result, Err(crate::SchubertError::Io(_))));
    }
}
