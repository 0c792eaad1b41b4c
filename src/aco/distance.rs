//! Pairwise Euclidean distance matrix.

use super::types::Point;
use crate::error::AcoError;

/// Symmetric distance matrix with a zero diagonal, stored row-major.
///
/// Built once per solve and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    n: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Computes all pairwise distances between `points`.
    ///
    /// Duplicate coordinates are allowed and yield a distance of zero.
    ///
    /// # Errors
    /// [`AcoError::InvalidInput`] if `points` is empty.
    pub fn build(points: &[Point]) -> Result<Self, AcoError> {
        if points.is_empty() {
            return Err(AcoError::input("at least one point is required"));
        }

        let n = points.len();
        let mut values = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                values[i * n + j] = d;
                values[j * n + i] = d;
            }
        }

        Ok(Self { n, values })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance from `i` to `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// Distances from `i` to every point.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n..(i + 1) * self.n]
    }

    /// Returns the first pair of distinct points within `epsilon` of each other.
    pub fn coincident_pair(&self, epsilon: f64) -> Option<(usize, usize)> {
        (0..self.n)
            .flat_map(|i| ((i + 1)..self.n).map(move |j| (i, j)))
            .find(|&(i, j)| self.get(i, j) <= epsilon)
    }

    /// Whether any two distinct points lie within `epsilon` of each other.
    pub fn has_coincident_points(&self, epsilon: f64) -> bool {
        self.coincident_pair(epsilon).is_some()
    }
}
