//! Conversions from `geo` geometries into coordinate arrays.
//!
//! Distance functions take any slice of [`Coordinates`](crate::Coordinates);
//! these helpers turn the planar `geo` types callers usually hold into
//! `[x, y]` arrays.

use geo::{CoordFloat, LineString, MultiPoint, Point};

/// Vertices of a line string, in order.
///
/// # Examples
///
/// ```
/// use geo::line_string;
/// use spatio_similarity::trajectory::from_line_string;
///
/// let line = line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 2.0)];
/// assert_eq!(from_line_string(&line), vec![[0.0, 0.0], [1.0, 2.0]]);
/// ```
pub fn from_line_string<T: CoordFloat>(line: &LineString<T>) -> Vec<[T; 2]> {
    line.coords().map(|c| [c.x, c.y]).collect()
}

pub fn from_points<T: CoordFloat>(points: &[Point<T>]) -> Vec<[T; 2]> {
    points.iter().map(|p| [p.x(), p.y()]).collect()
}

pub fn from_multi_point<T: CoordFloat>(points: &MultiPoint<T>) -> Vec<[T; 2]> {
    points.iter().map(|p| [p.x(), p.y()]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::frechet::frechet_distance;
    use geo::line_string;

    #[test]
    fn test_line_string_round_trip_order() {
        let line = line_string![(x: 3.0, y: 1.0), (x: 2.0, y: 5.0), (x: -1.0, y: 0.5)];
        let coords = from_line_string(&line);
        assert_eq!(coords, vec![[3.0, 1.0], [2.0, 5.0], [-1.0, 0.5]]);
    }

    #[test]
    fn test_points_and_multi_point_agree() {
        let points = vec![Point::new(0.0_f64, 0.0), Point::new(1.0, 1.0)];
        let multi = MultiPoint::new(points.clone());
        assert_eq!(from_points(&points), from_multi_point(&multi));
    }

    #[test]
    fn test_geo_inputs_feed_distance() {
        let a = line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0)];
        let b = vec![Point::new(0.0_f64, 1.0), Point::new(1.0, 1.0)];
        let d = frechet_distance(&from_line_string(&a), &from_points(&b)).unwrap();
        assert_eq!(d, 1.0);
    }
}
