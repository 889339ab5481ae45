//! Random workload generation.
//!
//! Produces seeded, reproducible process sets for demos and for checking
//! scheduler invariants over many inputs.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::ProcessDescriptor;
use crate::validation::{ValidationError, ValidationErrorKind, ValidationResult};

/// Parameters for a random process set.
///
/// Arrivals are uniform in `0..=max_arrival`, bursts uniform in
/// `min_burst..=max_burst`. IDs run `1..=count` and names `P1..Pn`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of processes.
    pub count: usize,
    /// Latest possible arrival time.
    pub max_arrival: i64,
    /// Shortest possible burst.
    pub min_burst: i64,
    /// Longest possible burst.
    pub max_burst: i64,
    /// RNG seed.
    pub seed: u64,
}

impl WorkloadConfig {
    /// Creates a config for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range (inclusive).
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Checks that the ranges can only produce valid processes.
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        if self.count == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWorkload,
                "Workload must contain at least one process",
            ));
        }
        if self.max_arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWorkload,
                format!("max_arrival must be 0 or later, got {}", self.max_arrival),
            ));
        }
        if self.min_burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWorkload,
                format!("min_burst must be greater than 0, got {}", self.min_burst),
            ));
        }
        if self.min_burst > self.max_burst {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWorkload,
                format!(
                    "min_burst {} exceeds max_burst {}",
                    self.min_burst, self.max_burst
                ),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Generates the process set. Same config, same output.
    pub fn generate(&self) -> Result<Vec<ProcessDescriptor>, Vec<ValidationError>> {
        self.validate()?;
        let mut rng = SmallRng::seed_from_u64(self.seed);
        Ok(self.generate_with(&mut rng))
    }

    fn generate_with<R: Rng>(&self, rng: &mut R) -> Vec<ProcessDescriptor> {
        (1..=self.count)
            .map(|i| {
                let arrival = rng.random_range(0..=self.max_arrival);
                let burst = rng.random_range(self.min_burst..=self.max_burst);
                ProcessDescriptor::new(i as u64, format!("P{i}"), burst).with_arrival(arrival)
            })
            .collect()
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            seed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;

    #[test]
    fn test_generate_in_range() {
        let processes = WorkloadConfig::new(100)
            .with_max_arrival(20)
            .with_burst_range(2, 7)
            .with_seed(3)
            .generate()
            .unwrap();

        assert_eq!(processes.len(), 100);
        assert!(validate_processes(&processes).is_ok());
        for (i, p) in processes.iter().enumerate() {
            assert_eq!(p.id, i as u64 + 1);
            assert_eq!(p.name, format!("P{}", i + 1));
            assert!((0..=20).contains(&p.arrival_time));
            assert!((2..=7).contains(&p.burst_time));
        }
    }

    #[test]
    fn test_generate_reproducible() {
        let config = WorkloadConfig::new(20).with_seed(42);
        assert_eq!(config.generate().unwrap(), config.generate().unwrap());

        let other = config.clone().with_seed(43);
        assert_ne!(config.generate().unwrap(), other.generate().unwrap());
    }

    #[test]
    fn test_fixed_ranges() {
        let processes = WorkloadConfig::new(3)
            .with_max_arrival(0)
            .with_burst_range(4, 4)
            .generate()
            .unwrap();
        assert!(processes
            .iter()
            .all(|p| p.arrival_time == 0 && p.burst_time == 4));
    }

    #[test]
    fn test_invalid_configs() {
        let errors = WorkloadConfig::new(0).generate().unwrap_err();
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::InvalidWorkload));

        assert!(WorkloadConfig::new(3)
            .with_burst_range(0, 5)
            .validate()
            .is_err());
        assert!(WorkloadConfig::new(3)
            .with_burst_range(6, 5)
            .validate()
            .is_err());
        assert!(WorkloadConfig::new(3)
            .with_max_arrival(-1)
            .validate()
            .is_err());
    }
}
