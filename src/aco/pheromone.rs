//! Pheromone field: per-edge desirability with decay and reinforcement.
//!
//! The matrix has value semantics. [`PheromoneMatrix::decay`] and
//! [`PheromoneMatrix::reinforce`] leave `self` untouched and return the next
//! matrix, so a generation's update is a single atomic step.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a Colony
//!   of Cooperating Agents"

use super::types::Tour;
use crate::error::AcoError;
use tracing::warn;

/// Square matrix of non-negative pheromone values, stored row-major.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PheromoneMatrix {
    n: usize,
    values: Vec<f64>,
}

impl PheromoneMatrix {
    /// Creates an `size x size` matrix with every cell set to `initial_value`.
    ///
    /// # Errors
    /// [`AcoError::InvalidConfig`] if `initial_value` is not a positive finite
    /// number; a zero trail would zero every construction score.
    pub fn init(size: usize, initial_value: f64) -> Result<Self, AcoError> {
        validate_initial(initial_value)?;
        Ok(Self {
            n: size,
            values: vec![initial_value; size * size],
        })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Pheromone on the directed edge `i -> j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// Pheromone on every edge leaving `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n..(i + 1) * self.n]
    }

    /// All cells, row-major.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Returns a matrix with every cell scaled by `1 - factor`.
    ///
    /// # Errors
    /// [`AcoError::InvalidConfig`] unless `0 <= factor < 1`.
    pub fn decay(&self, factor: f64) -> Result<Self, AcoError> {
        validate_decay(factor)?;
        let keep = 1.0 - factor;
        Ok(Self {
            n: self.n,
            values: self.values.iter().map(|&v| v * keep).collect(),
        })
    }

    /// Returns a matrix with `1 / tour.distance()` added to every directed
    /// edge of every tour, once per tour.
    ///
    /// Tours whose distance is zero or not finite carry no usable quality
    /// signal and are skipped.
    ///
    /// # Panics
    /// Panics if a tour references a point outside the matrix.
    pub fn reinforce(&self, tours: &[Tour]) -> Self {
        let mut values = self.values.clone();
        let mut skipped = 0usize;

        for tour in tours {
            if tour.is_degenerate() {
                skipped += 1;
                continue;
            }
            let delta = 1.0 / tour.distance();
            for (i, j) in tour.edges() {
                values[i * self.n + j] += delta;
            }
        }

        if skipped > 0 {
            warn!(skipped, "skipped degenerate tours during reinforcement");
        }

        Self { n: self.n, values }
    }
}

pub(crate) fn validate_initial(initial_value: f64) -> Result<(), AcoError> {
    if !(initial_value > 0.0 && initial_value.is_finite()) {
        return Err(AcoError::config(
            "initial_pheromone",
            format!("must be positive and finite, got {initial_value}"),
        ));
    }
    Ok(())
}

pub(crate) fn validate_decay(factor: f64) -> Result<(), AcoError> {
    if !(0.0..1.0).contains(&factor) {
        return Err(AcoError::config(
            "decay_factor",
            format!("must be in [0, 1), got {factor}"),
        ));
    }
    Ok(())
}
