//! One generation of the colony.

use super::config::AcoConfig;
use super::construction::TourBuilder;
use super::distance::DistanceMatrix;
use super::pheromone::PheromoneMatrix;
use super::types::Tour;
use crate::error::AcoError;
use crate::random::{create_rng, split_seeds};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Outcome of a single generation.
#[derive(Debug, Clone)]
pub struct Generation {
    /// Shortest tour built this generation (first one among equals).
    pub best: Tour,

    /// Every tour built this generation, in ant order.
    pub tours: Vec<Tour>,

    /// Pheromone matrix for the next generation (decayed, then reinforced).
    pub pheromones: PheromoneMatrix,

    /// Number of zero-length or infinite tours that could not reinforce the
    /// field.
    pub degenerate_tours: usize,
}

/// Runs generations of ants over a frozen distance/pheromone pair.
pub struct Colony;

impl Colony {
    /// Builds `config.population_size` tours and derives the next pheromone
    /// matrix from all of them.
    ///
    /// Each ant draws from its own generator seeded from `rng`, so the
    /// generation is identical whether tours are built sequentially or in
    /// parallel.
    ///
    /// # Errors
    /// [`AcoError::InvalidConfig`] if `config` fails validation.
    ///
    /// # Panics
    /// Panics if the matrices differ in size.
    pub fn run_generation<R: Rng>(
        distances: &DistanceMatrix,
        pheromones: &PheromoneMatrix,
        config: &AcoConfig,
        rng: &mut R,
    ) -> Result<Generation, AcoError> {
        config.validate()?;

        let mut builder =
            TourBuilder::new(distances, pheromones, config.beta).with_shape(config.tour_shape);
        if config.clamp_coincident {
            builder = builder.with_coincidence_epsilon(config.coincidence_epsilon);
        }

        let seeds = split_seeds(rng, config.population_size);
        let tours = build_tours(&builder, &seeds, config.parallel);

        let best = find_best(&tours).clone();
        let degenerate_tours = tours.iter().filter(|t| t.is_degenerate()).count();
        let next = pheromones.decay(config.decay_factor)?.reinforce(&tours);

        Ok(Generation {
            best,
            tours,
            pheromones: next,
            degenerate_tours,
        })
    }
}

#[cfg(feature = "parallel")]
fn build_tours(builder: &TourBuilder<'_>, seeds: &[u64], parallel: bool) -> Vec<Tour> {
    if parallel {
        seeds
            .par_iter()
            .map(|&seed| builder.build(&mut create_rng(seed)))
            .collect()
    } else {
        build_sequential(builder, seeds)
    }
}

#[cfg(not(feature = "parallel"))]
fn build_tours(builder: &TourBuilder<'_>, seeds: &[u64], _parallel: bool) -> Vec<Tour> {
    build_sequential(builder, seeds)
}

fn build_sequential(builder: &TourBuilder<'_>, seeds: &[u64]) -> Vec<Tour> {
    seeds
        .iter()
        .map(|&seed| builder.build(&mut create_rng(seed)))
        .collect()
}

/// Find the tour with the lowest distance.
fn find_best(tours: &[Tour]) -> &Tour {
    tours
        .iter()
        .min_by(|a, b| {
            a.distance()
                .partial_cmp(&b.distance())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("population must not be empty")
}
