//! Ant Colony Optimization for the Traveling Salesman Problem.
//!
//! Provides a pheromone-guided tour construction heuristic:
//!
//! - **Distance model**: pairwise Euclidean distances, built once per solve.
//! - **Pheromone field**: per-edge desirability that decays and is reinforced
//!   every generation.
//! - **Tour construction**: stochastic nearest-neighbour style construction
//!   biased by pheromone and inverse distance, sampled by roulette wheel.
//! - **Colony / runner**: builds a population of tours per generation
//!   (optionally in parallel), keeps the best tour, and drives the
//!   generation loop with cancellation and per-generation observation.
//!
//! # Example
//!
//! ```
//! use u_antcolony::aco::{AcoConfig, AcoRunner, Point};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 10.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(10.0, 0.0),
//! ];
//! let config = AcoConfig::default().with_generations(50).with_seed(42);
//! let result = AcoRunner::solve(&points, &config).unwrap();
//! assert_eq!(result.best.len(), 4);
//! ```
//!
//! # Tour distance
//!
//! Tours are measured as **open paths** by default: the edge from the last
//! point back to the first is not counted. Request
//! [`aco::TourShape::Closed`] for the cyclic formulation.

pub mod aco;
pub mod error;
pub mod random;

pub use error::AcoError;
