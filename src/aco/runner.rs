//! ACO generation loop.
//!
//! [`AcoRunner`] orchestrates a complete solve:
//! distances → initial pheromone → baseline tour → generations → result.

use super::colony::{Colony, Generation};
use super::config::AcoConfig;
use super::distance::DistanceMatrix;
use super::pheromone::PheromoneMatrix;
use super::types::{Point, Tour};
use crate::error::AcoError;
use crate::random::{create_rng, random_permutation};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, info_span, warn};

/// Result of an ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// The best tour found.
    pub best: Tour,

    /// Distance of the best tour (same as `best.distance()`).
    pub best_distance: f64,

    /// Number of generations completed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best distance before the first generation, then after each one.
    ///
    /// Non-increasing.
    pub distance_history: Vec<f64>,

    /// Distance matrix the run was solved against.
    pub distances: DistanceMatrix,

    /// Pheromone matrix after the last completed generation.
    pub pheromones: PheromoneMatrix,

    /// Total zero-length tours skipped during reinforcement.
    pub degenerate_tours: usize,
}

/// Snapshot handed to an [`AcoObserver`] after each generation.
#[derive(Debug, Clone, Copy)]
pub struct GenerationReport<'a> {
    /// 1-based generation number.
    pub generation: usize,

    /// Shortest tour of this generation.
    pub generation_best: &'a Tour,

    /// Best tour across all generations so far.
    pub best: &'a Tour,

    pub distances: &'a DistanceMatrix,

    /// Pheromone matrix produced by this generation.
    pub pheromones: &'a PheromoneMatrix,

    /// Zero-length tours skipped this generation.
    pub degenerate_tours: usize,
}

/// Receives a [`GenerationReport`] at every generation boundary.
///
/// Implemented for any `FnMut(&GenerationReport)`, so a closure is enough
/// for progress printing or matrix dumps.
pub trait AcoObserver {
    fn on_generation(&mut self, report: &GenerationReport<'_>);
}

impl<F> AcoObserver for F
where
    F: FnMut(&GenerationReport<'_>),
{
    fn on_generation(&mut self, report: &GenerationReport<'_>) {
        self(report)
    }
}

struct Silent;

impl AcoObserver for Silent {
    fn on_generation(&mut self, _report: &GenerationReport<'_>) {}
}

/// Executes the ACO generation loop.
///
/// # Usage
///
/// ```
/// use u_antcolony::aco::{AcoConfig, AcoRunner, Point};
///
/// let points: Vec<Point> = (0..8)
///     .map(|i| Point::new(i as f64, (i * i % 5) as f64))
///     .collect();
/// let config = AcoConfig::default().with_generations(20).with_seed(42);
///
/// let result = AcoRunner::solve(&points, &config).unwrap();
/// assert_eq!(result.best.len(), 8);
/// assert_eq!(result.distance_history.len(), 21);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO optimization.
    pub fn solve(points: &[Point], config: &AcoConfig) -> Result<AcoResult, AcoError> {
        Self::solve_with_observer(points, config, None, Silent)
    }

    /// Runs ACO with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// before the next generation and returns the best tour found so far.
    pub fn solve_with_cancel(
        points: &[Point],
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AcoResult, AcoError> {
        Self::solve_with_observer(points, config, cancel, Silent)
    }

    /// Runs ACO, reporting every generation to `observer`.
    ///
    /// # Errors
    /// - [`AcoError::InvalidConfig`] if `config` fails validation.
    /// - [`AcoError::InvalidInput`] for fewer than two points or non-finite
    ///   coordinates.
    /// - [`AcoError::DegenerateGeometry`] for coincident points when
    ///   `config.clamp_coincident` is `false`.
    ///
    /// All errors are returned before the first generation runs.
    pub fn solve_with_observer<O: AcoObserver>(
        points: &[Point],
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
        mut observer: O,
    ) -> Result<AcoResult, AcoError> {
        let _span = info_span!("aco_solve", points = points.len()).entered();

        config.validate()?;
        let distances = prepare(points, config)?;
        let n = distances.len();
        let mut pheromones = PheromoneMatrix::init(n, config.initial_pheromone_for(n))?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        info!(
            generations = config.generations,
            population = config.population_size,
            seed = ?config.seed,
            "starting ant colony"
        );

        // Baseline: a random permutation competes with the first generation.
        let mut best = Tour::new(
            random_permutation(n, &mut rng),
            &distances,
            config.tour_shape,
        );
        let mut distance_history = Vec::with_capacity(config.generations + 1);
        distance_history.push(best.distance());

        let mut degenerate_total = 0usize;
        let mut completed = 0usize;
        let mut cancelled = false;

        for gen in 0..config.generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let Generation {
                best: gen_best,
                pheromones: next,
                degenerate_tours,
                ..
            } = Colony::run_generation(&distances, &pheromones, config, &mut rng)?;
            pheromones = next;

            // Ties replace the incumbent.
            if gen_best.distance() <= best.distance() {
                best = gen_best.clone();
            }

            distance_history.push(best.distance());
            degenerate_total += degenerate_tours;
            completed = gen + 1;

            debug!(
                generation = completed,
                generation_best = gen_best.distance(),
                best = best.distance(),
                "generation complete"
            );

            observer.on_generation(&GenerationReport {
                generation: completed,
                generation_best: &gen_best,
                best: &best,
                distances: &distances,
                pheromones: &pheromones,
                degenerate_tours,
            });
        }

        info!(
            best = best.distance(),
            generations = completed,
            cancelled,
            "ant colony finished"
        );

        Ok(AcoResult {
            best_distance: best.distance(),
            best,
            generations: completed,
            cancelled,
            distance_history,
            distances,
            pheromones,
            degenerate_tours: degenerate_total,
        })
    }
}

/// Checks the instance and builds its distance matrix.
fn prepare(points: &[Point], config: &AcoConfig) -> Result<DistanceMatrix, AcoError> {
    if points.len() < 2 {
        return Err(AcoError::input(format!(
            "at least two points are required, got {}",
            points.len()
        )));
    }
    if let Some(i) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(AcoError::input(format!("point {i} has a non-finite coordinate")));
    }

    let distances = DistanceMatrix::build(points)?;

    if let Some((first, second)) = distances.coincident_pair(config.coincidence_epsilon) {
        if !config.clamp_coincident {
            return Err(AcoError::DegenerateGeometry { first, second });
        }
        warn!(first, second, "coincident points will be visited consecutively");
    }

    Ok(distances)
}
