/// Planar Euclidean distance between `(x1, z1)` and `(x2, z2)`.
#[must_use]
pub fn planar_distance(x1: f64, z1: f64, x2: f64, z2: f64) -> f64 {
    ((x2 - x1).powi(2) + (z2 - z1).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_zero_for_same_point() {
        assert!(planar_distance(12.5, -3.0, 12.5, -3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn distance_matches_pythagorean_triple() {
        assert!((planar_distance(0.0, 0.0, 3.0, 4.0) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn distance_is_symmetric_and_non_negative() {
        let a = planar_distance(-10.0, 7.0, 25.0, -40.0);
        let b = planar_distance(25.0, -40.0, -10.0, 7.0);
        assert!(a >= 0.0);
        assert!((a - b).abs() < 1e-9);
    }
}
