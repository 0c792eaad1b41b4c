//! ACO configuration.

use super::pheromone::{validate_decay, validate_initial};
use super::types::TourShape;
use crate::error::AcoError;

/// Configuration for the Ant Colony Optimizer.
///
/// # Defaults
///
/// ```
/// use u_antcolony::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.population_size, 10);
/// assert!(config.validate().is_ok());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_antcolony::aco::{AcoConfig, TourShape};
///
/// let config = AcoConfig::default()
///     .with_generations(200)
///     .with_population_size(25)
///     .with_beta(3.0)
///     .with_decay_factor(0.3)
///     .with_tour_shape(TourShape::Closed)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of generations to run. There is no early stopping.
    pub generations: usize,

    /// Number of ants (tours built) per generation.
    pub population_size: usize,

    /// Exponent on inverse distance in the construction score.
    ///
    /// Higher values favour short edges over pheromone trail strength.
    /// The pheromone exponent (alpha) is fixed at 1.
    pub beta: f64,

    /// Evaporation rate in `[0, 1)`. Every cell is multiplied by
    /// `1 - decay_factor` once per generation.
    pub decay_factor: f64,

    /// Initial pheromone on every edge.
    ///
    /// `None` uses `1 / point_count`.
    pub initial_pheromone: Option<f64>,

    /// Whether tour length includes the edge back to the start.
    pub tour_shape: TourShape,

    /// Whether coincident points are handled internally.
    ///
    /// When `true`, a coincident candidate is preferred deterministically
    /// during construction. When `false`, solving an instance with
    /// coincident points fails with [`AcoError::DegenerateGeometry`].
    pub clamp_coincident: bool,

    /// Distance at or below which two points are treated as coincident.
    pub coincidence_epsilon: f64,

    /// Whether to build a generation's tours in parallel using rayon.
    ///
    /// Only effective with the `parallel` feature. Results are identical
    /// either way for the same seed.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            population_size: 10,
            beta: 2.0,
            decay_factor: 0.5,
            initial_pheromone: None,
            tour_shape: TourShape::Open,
            clamp_coincident: true,
            coincidence_epsilon: 1e-9,
            parallel: true,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the number of ants per generation.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_decay_factor(mut self, factor: f64) -> Self {
        self.decay_factor = factor;
        self
    }

    pub fn with_initial_pheromone(mut self, value: f64) -> Self {
        self.initial_pheromone = Some(value);
        self
    }

    pub fn with_tour_shape(mut self, shape: TourShape) -> Self {
        self.tour_shape = shape;
        self
    }

    pub fn with_clamp_coincident(mut self, clamp: bool) -> Self {
        self.clamp_coincident = clamp;
        self
    }

    pub fn with_coincidence_epsilon(mut self, epsilon: f64) -> Self {
        self.coincidence_epsilon = epsilon;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Initial pheromone for an instance of `point_count` points.
    pub fn initial_pheromone_for(&self, point_count: usize) -> f64 {
        self.initial_pheromone
            .unwrap_or(1.0 / point_count.max(1) as f64)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), AcoError> {
        if self.generations == 0 {
            return Err(AcoError::config("generations", "must be positive"));
        }
        if self.population_size == 0 {
            return Err(AcoError::config("population_size", "must be positive"));
        }
        if !(self.beta > 0.0 && self.beta.is_finite()) {
            return Err(AcoError::config(
                "beta",
                format!("must be positive and finite, got {}", self.beta),
            ));
        }
        validate_decay(self.decay_factor)?;
        if let Some(value) = self.initial_pheromone {
            validate_initial(value)?;
        }
        if !(self.coincidence_epsilon >= 0.0 && self.coincidence_epsilon.is_finite()) {
            return Err(AcoError::config(
                "coincidence_epsilon",
                format!("must be non-negative and finite, got {}", self.coincidence_epsilon),
            ));
        }
        Ok(())
    }
}
