//! Core value types: points and tours.

use super::distance::DistanceMatrix;

/// A 2D coordinate, identified by its index in the instance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Whether a tour's length includes the edge back to its start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TourShape {
    /// Open path: `n - 1` edges, no return to the start.
    ///
    /// This is the default and matches the classic pheromone-update
    /// formulation this crate reproduces.
    #[default]
    Open,

    /// Closed cycle: `n` edges, the last point connects back to the first.
    Closed,
}

/// An ordered visit sequence over all points, with its total distance.
///
/// Immutable once built. The order is a permutation of `0..n`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    order: Vec<usize>,
    distance: f64,
    shape: TourShape,
}

impl Tour {
    /// Builds a tour from a visit order, measuring it against `distances`.
    ///
    /// # Panics
    /// Panics if an index in `order` is out of range for `distances`.
    pub fn new(order: Vec<usize>, distances: &DistanceMatrix, shape: TourShape) -> Self {
        let distance = edges_of(&order, shape)
            .map(|(i, j)| distances.get(i, j))
            .sum();
        Self {
            order,
            distance,
            shape,
        }
    }

    /// Visit order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Total distance over the tour's edges.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn shape(&self) -> TourShape {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether the distance is zero or not finite, so `1 / distance` cannot
    /// serve as a reinforcement weight.
    pub fn is_degenerate(&self) -> bool {
        !(self.distance > 0.0 && self.distance.is_finite())
    }

    /// Directed edges traversed by this tour, in visiting order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        edges_of(&self.order, self.shape)
    }

    /// Consumes the tour, returning the visit order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }
}

fn edges_of(order: &[usize], shape: TourShape) -> impl Iterator<Item = (usize, usize)> + '_ {
    let closing = match (shape, order.first(), order.last()) {
        (TourShape::Closed, Some(&first), Some(&last)) if order.len() > 1 => Some((last, first)),
        _ => None,
    };
    order.windows(2).map(|w| (w[0], w[1])).chain(closing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> DistanceMatrix {
        DistanceMatrix::build(&[
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert_eq!(Point::from((3.0, 4.0)), b);
    }

    #[test]
    fn test_open_tour_distance() {
        let tour = Tour::new(vec![0, 1, 2, 3], &square(), TourShape::Open);
        assert!((tour.distance() - 30.0).abs() < 1e-10);
        assert_eq!(tour.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_closed_tour_distance() {
        let tour = Tour::new(vec![0, 1, 2, 3], &square(), TourShape::Closed);
        assert!((tour.distance() - 40.0).abs() < 1e-10);
        assert_eq!(tour.edges().last(), Some((3, 0)));
    }

    #[test]
    fn test_single_point_tour() {
        let dm = DistanceMatrix::build(&[Point::new(1.0, 1.0)]).unwrap();
        let tour = Tour::new(vec![0], &dm, TourShape::Closed);
        assert_eq!(tour.edges().count(), 0);
        assert_eq!(tour.distance(), 0.0);
        assert!(tour.is_degenerate());
    }

    #[test]
    fn test_infinite_tour_is_degenerate() {
        let dm = DistanceMatrix::build(&[Point::new(-1e308, 0.0), Point::new(1e308, 0.0)]).unwrap();
        let tour = Tour::new(vec![0, 1], &dm, TourShape::Open);
        assert!(tour.distance().is_infinite());
        assert!(tour.is_degenerate());
        assert!(!Tour::new(vec![0, 1, 2, 3], &square(), TourShape::Open).is_degenerate());
    }
}
