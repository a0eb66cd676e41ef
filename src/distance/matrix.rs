//! Great-circle distance matrix.

use crate::models::{City, Edge};

/// Pairwise great-circle distances between cities, in kilometres.
///
/// Rows and columns are positions in the city slice the matrix was built
/// from, not city ids. Each pair is computed once and mirrored.
///
/// # Examples
///
/// ```
/// use greedy_tour::models::City;
/// use greedy_tour::distance::DistanceMatrix;
///
/// let cities = vec![
///     City::new(0, "A", 0.0, 0.0),
///     City::new(1, "B", 0.0, 1.0),
///     City::new(2, "C", 1.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert!((dm.get(0, 1) - dm.get(1, 0)).abs() < 1e-10);
/// assert_eq!(dm.to_edges(&cities).len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    km: Vec<f64>,
    cities: usize,
}

impl DistanceMatrix {
    /// Computes the matrix for `cities`.
    pub fn from_cities(cities: &[City]) -> Self {
        let n = cities.len();
        let mut km = vec![0.0; n * n];
        for (i, a) in cities.iter().enumerate() {
            for (j, b) in cities.iter().enumerate().skip(i + 1) {
                let d = a.distance_to(b);
                km[i * n + j] = d;
                km[j * n + i] = d;
            }
        }
        Self { km, cities: n }
    }

    /// Distance between the cities at positions `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.km[i * self.cities + j]
    }

    /// One edge per unordered pair, `i < j` in position order, labelled with
    /// the ids of `cities`.
    ///
    /// Only the first `min(n, cities.len())` positions are covered.
    pub fn to_edges(&self, cities: &[City]) -> Vec<Edge> {
        let n = self.cities.min(cities.len());
        let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                edges.push(Edge::new(cities[i].id(), cities[j].id(), self.get(i, j)));
            }
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equator_cities() -> Vec<City> {
        vec![
            City::new(10, "A", 0.0, 0.0),
            City::new(20, "B", 0.0, 1.0),
            City::new(30, "C", 0.0, 3.0),
        ]
    }

    #[test]
    fn test_diagonal_is_zero() {
        let dm = DistanceMatrix::from_cities(&equator_cities());
        for i in 0..3 {
            assert!(dm.get(i, i).abs() < 1e-10);
        }
    }

    #[test]
    fn test_mirrored() {
        let dm = DistanceMatrix::from_cities(&equator_cities());
        assert_eq!(dm.get(0, 2), dm.get(2, 0));
        assert_eq!(dm.get(1, 2), dm.get(2, 1));
    }

    #[test]
    fn test_equator_distances_add_up() {
        let dm = DistanceMatrix::from_cities(&equator_cities());
        assert!((dm.get(0, 1) + dm.get(1, 2) - dm.get(0, 2)).abs() < 1e-6);
    }

    #[test]
    fn test_to_edges_uses_city_ids() {
        let cities = equator_cities();
        let dm = DistanceMatrix::from_cities(&cities);
        let edges = dm.to_edges(&cities);
        let pairs: Vec<_> = edges.iter().map(|e| (e.from_id, e.to_id)).collect();
        assert_eq!(pairs, vec![(10, 20), (10, 30), (20, 30)]);
        assert_eq!(edges[2].weight, dm.get(1, 2));
    }

    #[test]
    fn test_to_edges_single_city() {
        let cities = vec![City::new(0, "Solo", 0.0, 0.0)];
        let dm = DistanceMatrix::from_cities(&cities);
        assert!(dm.to_edges(&cities).is_empty());
    }
}
