//! Planar geometry on longitude/latitude pairs.
//!
//! Coordinates are compared exactly, with no epsilon. Points that are
//! collinear only up to rounding error are treated as non-collinear.

use serde::{Deserialize, Serialize};

use crate::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Turn direction of the path `a -> b -> c`.
pub fn orientation(a: Position, b: Position, c: Position) -> Orientation {
    let value = (b.lat - a.lat) * (c.lng - b.lng) - (b.lng - a.lng) * (c.lat - b.lat);
    if value == 0.0 {
        Orientation::Collinear
    } else if value > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// True when `point` lies inside the bounding box of segment `p1`-`p2`.
///
/// Only meaningful for points already known to be collinear with the segment.
fn within_bounds(p1: Position, p2: Position, point: Position) -> bool {
    point.lng <= p1.lng.max(p2.lng)
        && point.lng >= p1.lng.min(p2.lng)
        && point.lat <= p1.lat.max(p2.lat)
        && point.lat >= p1.lat.min(p2.lat)
}

/// True when the closed segments `p1`-`p2` and `q1`-`q2` share a point.
pub fn segments_intersect(p1: Position, p2: Position, q1: Position, q2: Position) -> bool {
    let d1 = orientation(p1, p2, q1);
    let d2 = orientation(p1, p2, q2);
    let d3 = orientation(q1, q2, p1);
    let d4 = orientation(q1, q2, p2);

    if d1 != d2 && d3 != d4 {
        return true;
    }

    (d1 == Orientation::Collinear && within_bounds(p1, p2, q1))
        || (d2 == Orientation::Collinear && within_bounds(p1, p2, q2))
        || (d3 == Orientation::Collinear && within_bounds(q1, q2, p1))
        || (d4 == Orientation::Collinear && within_bounds(q1, q2, p2))
}

/// Ray-casting containment test. Points on the boundary count as inside.
///
/// The ray runs east from `point`. An edge counts as crossed when exactly one
/// of its ends lies strictly north of the ray, so a vertex on the ray is
/// counted once and an edge along the ray not at all.
///
/// The polygon is implicitly closed. Fewer than three vertices contain nothing.
pub fn point_in_polygon(vertices: &[Position], point: Position) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let edges = || (0..n).map(|i| (vertices[i], vertices[(i + 1) % n]));

    if edges().any(|(a, b)| {
        orientation(a, point, b) == Orientation::Collinear && within_bounds(a, b, point)
    }) {
        return true;
    }

    let mut crossings = 0usize;
    for (a, b) in edges() {
        if (a.lat > point.lat) == (b.lat > point.lat) {
            continue;
        }
        let crossing_lng = a.lng + (point.lat - a.lat) * (b.lng - a.lng) / (b.lat - a.lat);
        if crossing_lng >= point.lng {
            crossings += 1;
        }
    }

    crossings % 2 == 1
}

/// A named polygon: a no-fly zone or the central area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRegion {
    pub name: String,
    pub vertices: Vec<Position>,
}

impl NamedRegion {
    pub fn new(name: impl Into<String>, vertices: Vec<Position>) -> Self {
        Self {
            name: name.into(),
            vertices,
        }
    }

    /// Axis-aligned rectangle spanning two corners.
    pub fn rectangle(name: impl Into<String>, min: Position, max: Position) -> Self {
        Self::new(
            name,
            vec![
                min,
                Position::new(max.lng, min.lat),
                max,
                Position::new(min.lng, max.lat),
            ],
        )
    }

    /// Inside or on the boundary.
    pub fn contains(&self, point: Position) -> bool {
        point_in_polygon(&self.vertices, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Position> {
        vec![
            Position::new(0.0, 0.0),
            Position::new(2.0, 0.0),
            Position::new(2.0, 2.0),
            Position::new(0.0, 2.0),
        ]
    }

    #[test]
    fn test_orientation() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(1.0, 0.0);
        assert_eq!(orientation(a, b, Position::new(2.0, 0.0)), Orientation::Collinear);
        assert_eq!(orientation(a, b, Position::new(1.0, 1.0)), Orientation::CounterClockwise);
        assert_eq!(orientation(a, b, Position::new(1.0, -1.0)), Orientation::Clockwise);
    }

    #[test]
    fn test_crossing_segments_intersect() {
        assert!(segments_intersect(
            Position::new(0.0, 0.0),
            Position::new(2.0, 2.0),
            Position::new(0.0, 2.0),
            Position::new(2.0, 0.0),
        ));
    }

    #[test]
    fn test_parallel_segments_do_not_intersect() {
        assert!(!segments_intersect(
            Position::new(0.0, 0.0),
            Position::new(2.0, 0.0),
            Position::new(0.0, 1.0),
            Position::new(2.0, 1.0),
        ));
    }

    #[test]
    fn test_touching_endpoint_intersects() {
        assert!(segments_intersect(
            Position::new(0.0, 0.0),
            Position::new(1.0, 1.0),
            Position::new(1.0, 1.0),
            Position::new(2.0, 0.0),
        ));
    }

    #[test]
    fn test_collinear_disjoint_segments() {
        assert!(!segments_intersect(
            Position::new(0.0, 0.0),
            Position::new(1.0, 0.0),
            Position::new(2.0, 0.0),
            Position::new(3.0, 0.0),
        ));
        assert!(segments_intersect(
            Position::new(0.0, 0.0),
            Position::new(2.0, 0.0),
            Position::new(1.0, 0.0),
            Position::new(3.0, 0.0),
        ));
    }

    #[test]
    fn test_square_containment() {
        let square = square();
        assert!(point_in_polygon(&square, Position::new(1.0, 1.0)));
        assert!(!point_in_polygon(&square, Position::new(3.0, 3.0)));
        assert!(!point_in_polygon(&square, Position::new(-1.0, 1.0)));
    }

    #[test]
    fn test_boundary_counts_as_inside() {
        let square = square();
        assert!(point_in_polygon(&square, Position::new(0.0, 1.0)));
        assert!(point_in_polygon(&square, Position::new(2.0, 1.0)));
        assert!(point_in_polygon(&square, Position::new(1.0, 0.0)));
        assert!(point_in_polygon(&square, Position::new(0.0, 0.0)));
    }

    #[test]
    fn test_point_level_with_top_edge_outside() {
        let square = square();
        assert!(!point_in_polygon(&square, Position::new(-1.0, 2.0)));
    }

    #[test]
    fn test_vertex_on_ray_counted_once() {
        let diamond = vec![
            Position::new(1.0, 0.0),
            Position::new(2.0, 1.0),
            Position::new(1.0, 2.0),
            Position::new(0.0, 1.0),
        ];
        assert!(point_in_polygon(&diamond, Position::new(1.0, 1.0)));
        assert!(point_in_polygon(&diamond, Position::new(0.5, 1.0)));
        assert!(!point_in_polygon(&diamond, Position::new(-1.0, 1.0)));
        assert!(!point_in_polygon(&diamond, Position::new(2.5, 1.0)));
    }

    #[test]
    fn test_staircase_edge_along_ray() {
        let stairs = vec![
            Position::new(0.0, 0.0),
            Position::new(3.0, 0.0),
            Position::new(3.0, 1.0),
            Position::new(2.0, 1.0),
            Position::new(2.0, 2.0),
            Position::new(0.0, 2.0),
        ];
        assert!(point_in_polygon(&stairs, Position::new(1.0, 1.0)));
        assert!(point_in_polygon(&stairs, Position::new(2.5, 1.0)));
        assert!(!point_in_polygon(&stairs, Position::new(-1.0, 1.0)));
        assert!(!point_in_polygon(&stairs, Position::new(2.5, 1.5)));
    }

    #[test]
    fn test_degenerate_polygons_contain_nothing() {
        let p = Position::new(0.0, 0.0);
        assert!(!point_in_polygon(&[], p));
        assert!(!point_in_polygon(&[p], p));
        assert!(!point_in_polygon(&[p, Position::new(1.0, 0.0)], p));
    }

    #[test]
    fn test_concave_polygon() {
        // U shape opening to the north
        let u = vec![
            Position::new(0.0, 0.0),
            Position::new(3.0, 0.0),
            Position::new(3.0, 3.0),
            Position::new(2.0, 3.0),
            Position::new(2.0, 1.0),
            Position::new(1.0, 1.0),
            Position::new(1.0, 3.0),
            Position::new(0.0, 3.0),
        ];
        assert!(point_in_polygon(&u, Position::new(0.5, 2.5)));
        assert!(point_in_polygon(&u, Position::new(2.5, 2.5)));
        assert!(!point_in_polygon(&u, Position::new(1.5, 2.5)));
        assert!(point_in_polygon(&u, Position::new(1.5, 0.5)));
    }

    #[test]
    fn test_region_contains() {
        let region = NamedRegion::rectangle(
            "George Square",
            Position::new(-3.19, 55.943),
            Position::new(-3.187, 55.945),
        );
        assert!(region.contains(Position::new(-3.188, 55.944)));
        assert!(!region.contains(Position::new(-3.186, 55.944)));
    }

    #[test]
    fn test_region_deserializes_from_api_shape() {
        let json = r#"{"name":"Dr Elsie Inglis Quadrangle","vertices":[
            {"lng":-3.1907182931900024,"lat":55.94519570234043},
            {"lng":-3.1906163692474365,"lat":55.94498241796357},
            {"lng":-3.1900262832641597,"lat":55.94507554227258},
            {"lng":-3.190133571624756,"lat":55.94529783810495},
            {"lng":-3.1907182931900024,"lat":55.94519570234043}]}"#;
        let region: NamedRegion = serde_json::from_str(json).unwrap();
        assert_eq!(region.vertices.len(), 5);
        assert_eq!(region.name, "Dr Elsie Inglis Quadrangle");
    }
}
