//! Stochastic tour construction.
//!
//! An ant starts at a uniformly random point and repeatedly moves to an
//! unvisited point chosen with probability proportional to
//!
//! ```text
//! tau(i, j)^alpha * (1 / d(i, j))^beta,   alpha = 1
//! ```
//!
//! # References
//!
//! - Dorigo & Gambardella (1997), "Ant Colony System: A Cooperative Learning
//!   Approach to the Traveling Salesman Problem"

use super::distance::DistanceMatrix;
use super::pheromone::PheromoneMatrix;
use super::types::{Tour, TourShape};
use rand::Rng;

/// Builds one tour per call from a frozen distance/pheromone pair.
///
/// Holds only shared references, so a single builder can serve every ant of
/// a generation, including from multiple threads.
///
/// # Examples
///
/// ```
/// use u_antcolony::aco::{DistanceMatrix, PheromoneMatrix, Point, TourBuilder};
/// use u_antcolony::random::create_rng;
///
/// let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)];
/// let distances = DistanceMatrix::build(&points).unwrap();
/// let pheromones = PheromoneMatrix::init(points.len(), 1.0).unwrap();
///
/// let mut rng = create_rng(42);
/// let tour = TourBuilder::new(&distances, &pheromones, 2.0).build(&mut rng);
/// assert_eq!(tour.len(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TourBuilder<'a> {
    distances: &'a DistanceMatrix,
    pheromones: &'a PheromoneMatrix,
    beta: f64,
    shape: TourShape,
    coincidence_epsilon: Option<f64>,
}

impl<'a> TourBuilder<'a> {
    /// Creates a builder for open tours with no coincident-point handling.
    ///
    /// # Panics
    /// Panics if the two matrices differ in size.
    pub fn new(distances: &'a DistanceMatrix, pheromones: &'a PheromoneMatrix, beta: f64) -> Self {
        assert_eq!(
            distances.len(),
            pheromones.len(),
            "distance and pheromone matrices must have the same size"
        );
        Self {
            distances,
            pheromones,
            beta,
            shape: TourShape::Open,
            coincidence_epsilon: None,
        }
    }

    pub fn with_shape(mut self, shape: TourShape) -> Self {
        self.shape = shape;
        self
    }

    /// Enables deterministic preference for candidates within `epsilon` of
    /// the current point.
    pub fn with_coincidence_epsilon(mut self, epsilon: f64) -> Self {
        self.coincidence_epsilon = Some(epsilon);
        self
    }

    /// Constructs one tour.
    pub fn build<R: Rng>(&self, rng: &mut R) -> Tour {
        let n = self.distances.len();
        let mut order = Vec::with_capacity(n);
        let mut candidates: Vec<usize> = (0..n).collect();
        let mut probabilities = Vec::with_capacity(n);

        let mut current = candidates.remove(rng.random_range(0..n));
        order.push(current);

        while !candidates.is_empty() {
            let pos = self.choose(current, &candidates, &mut probabilities, rng);
            current = candidates.remove(pos);
            order.push(current);
        }

        Tour::new(order, self.distances, self.shape)
    }

    /// Desirability of moving from `from` to `to`.
    #[inline]
    pub fn score(&self, from: usize, to: usize) -> f64 {
        let tau = self.pheromones.get(from, to);
        let eta = 1.0 / self.distances.get(from, to);
        tau * eta.powf(self.beta)
    }

    /// Natural log of [`score`](Self::score). Zero-length edges map to `+inf`.
    #[inline]
    fn log_score(&self, from: usize, to: usize) -> f64 {
        let d = self.distances.get(from, to);
        if d <= 0.0 {
            return f64::INFINITY;
        }
        self.pheromones.get(from, to).ln() - self.beta * d.ln()
    }

    #[inline]
    fn log_heuristic(&self, from: usize, to: usize) -> f64 {
        let d = self.distances.get(from, to);
        if d <= 0.0 {
            return f64::INFINITY;
        }
        -self.beta * d.ln()
    }

    /// Picks the position in `candidates` of the next point.
    fn choose<R: Rng>(
        &self,
        current: usize,
        candidates: &[usize],
        probabilities: &mut Vec<f64>,
        rng: &mut R,
    ) -> usize {
        if let Some(epsilon) = self.coincidence_epsilon {
            let row = self.distances.row(current);
            if let Some(pos) = candidates.iter().position(|&c| row[c] <= epsilon) {
                return pos;
            }
        }

        // Scores are compared in log space so a large beta cannot overflow
        // the preference for short edges into a tie.
        probabilities.clear();
        probabilities.extend(candidates.iter().map(|&c| self.log_score(current, c)));
        let mut max = max_of(probabilities);

        if max == f64::NEG_INFINITY {
            // every trail has underflowed: rank by distance alone
            probabilities.clear();
            probabilities.extend(candidates.iter().map(|&c| self.log_heuristic(current, c)));
            max = max_of(probabilities);
        }

        if max == f64::INFINITY {
            // zero-length edges outrank every finite score
            let tied = probabilities.iter().filter(|&&p| p == f64::INFINITY).count();
            let k = rng.random_range(0..tied);
            return probabilities
                .iter()
                .enumerate()
                .filter(|&(_, &p)| p == f64::INFINITY)
                .nth(k)
                .map_or(0, |(pos, _)| pos);
        }
        if max == f64::NEG_INFINITY {
            return rng.random_range(0..candidates.len());
        }

        for p in probabilities.iter_mut() {
            *p = (*p - max).exp();
        }
        let total: f64 = probabilities.iter().sum();
        for p in probabilities.iter_mut() {
            *p /= total;
        }
        roulette_select(probabilities, rng)
    }
}

fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Samples an index from a probability vector by roulette wheel.
///
/// Draws `r` uniformly from `[0, 1)` and subtracts each probability in order
/// until the remainder is non-positive. If rounding leaves a positive
/// remainder after the last entry, the last index is returned, so a
/// selection is always made.
///
/// # Panics
/// Panics if `probabilities` is empty.
pub fn roulette_select<R: Rng>(probabilities: &[f64], rng: &mut R) -> usize {
    assert!(
        !probabilities.is_empty(),
        "cannot select from an empty distribution"
    );

    let mut remainder: f64 = rng.random();
    for (i, &p) in probabilities.iter().enumerate() {
        remainder -= p;
        if remainder <= 0.0 {
            return i;
        }
    }
    probabilities.len() - 1
}
