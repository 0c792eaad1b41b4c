//! Ant Colony Optimization (ACO) for the Traveling Salesman Problem.
//!
//! A population of ants builds tours each generation. Every ant walks the
//! points one at a time, choosing the next point with probability weighted
//! by the pheromone on the edge and by inverse edge length. After all tours
//! of a generation are built, pheromone evaporates and is then deposited on
//! every traversed edge in proportion to the quality of the tour that used
//! it.
//!
//! # Key Types
//!
//! - [`DistanceMatrix`]: pairwise Euclidean distances, built once
//! - [`PheromoneMatrix`]: per-edge trail strength with `decay` / `reinforce`
//! - [`TourBuilder`]: constructs one tour from the two matrices
//! - [`Colony`]: runs one generation and produces the next pheromone matrix
//! - [`AcoRunner`]: executes the generation loop
//! - [`AcoConfig`]: algorithm parameters
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a Colony
//!   of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod colony;
mod config;
mod construction;
mod distance;
mod pheromone;
mod runner;
mod types;

pub use colony::{Colony, Generation};
pub use config::AcoConfig;
pub use construction::{roulette_select, TourBuilder};
pub use distance::DistanceMatrix;
pub use pheromone::PheromoneMatrix;
pub use runner::{AcoObserver, AcoResult, AcoRunner, GenerationReport};
pub use types::{Point, Tour, TourShape};
