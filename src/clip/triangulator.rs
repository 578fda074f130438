use crate::math::{Point2, Real, Vector2};
use crate::transformation::triangulate_ear_clipping;
use crate::utils::signed_area2;

/// Corners and triangles with a sine below this threshold are considered flat.
const FLATNESS_EPS: Real = 1.0e-5;

fn is_flat(a: &Vector2<Real>, b: &Vector2<Real>) -> bool {
    let scale = a.norm() * b.norm();
    scale == 0.0 || a.perp(b).abs() <= FLATNESS_EPS * scale
}

/// The indices of the vertices of `polygon` that are not in the middle of a straight edge.
///
/// Vertices coinciding with their predecessor, and tips of zero-width spikes, are removed too.
/// Removal is repeated until every remaining corner is a real corner, or less than three vertices
/// remain.
pub fn remove_collinear_vertices(polygon: &[Point2<Real>]) -> Vec<u32> {
    let mut kept: Vec<u32> = (0..polygon.len() as u32).collect();

    loop {
        let len_before = kept.len();
        let mut i = 0;

        while kept.len() >= 3 && i < kept.len() {
            let prev = polygon[kept[(i + kept.len() - 1) % kept.len()] as usize];
            let curr = polygon[kept[i] as usize];
            let next = polygon[kept[(i + 1) % kept.len()] as usize];

            if is_flat(&(curr - prev), &(next - curr)) {
                let _ = kept.remove(i);
            } else {
                i += 1;
            }
        }

        if kept.len() == len_before || kept.len() < 3 {
            return kept;
        }
    }
}

/// Triangulates a closed polygon with ear clipping.
///
/// The polygon may be given in any winding order, and may contain collinear vertices, which
/// are skipped. The returned triangles index `polygon` and are counter-clockwise. Triangles
/// with collinear or coincident vertices are discarded.
///
/// Returns an empty set of triangles if the polygon has less than three non-collinear vertices
/// or if it cannot be triangulated, e.g., because it self-intersects.
pub fn triangulate_polygon(polygon: &[Point2<Real>]) -> Vec<[u32; 3]> {
    let mut kept = remove_collinear_vertices(polygon);
    if kept.len() < 3 {
        return vec![];
    }

    let mut points: Vec<_> = kept.iter().map(|i| polygon[*i as usize]).collect();
    if signed_area2(&points) < 0.0 {
        points.reverse();
        kept.reverse();
    }

    let Some(triangles) = triangulate_ear_clipping(&points) else {
        log::debug!(
            "ear clipping failed on a polygon with {} vertices, it is likely self-intersecting",
            points.len()
        );
        return vec![];
    };

    triangles
        .into_iter()
        .map(|tri| tri.map(|i| kept[i as usize]))
        .filter(|tri| {
            let [a, b, c] = tri.map(|i| polygon[i as usize]);
            !is_flat(&(b - a), &(c - a))
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::{remove_collinear_vertices, triangulate_polygon};
    use crate::math::{Point2, Real};
    use crate::utils::signed_area2;
    use core::f64::consts::TAU;

    fn triangles_area(polygon: &[Point2<Real>], triangles: &[[u32; 3]]) -> Real {
        triangles
            .iter()
            .map(|tri| {
                let area2 = signed_area2(&tri.map(|i| polygon[i as usize]));
                assert!(area2 > 0.0, "triangle {:?} isn’t counter-clockwise", tri);
                area2 / 2.0
            })
            .sum()
    }

    fn regular_polygon(n: usize, radius: Real) -> Vec<Point2<Real>> {
        (0..n)
            .map(|i| {
                let angle = (i as f64 * TAU / n as f64) as Real;
                Point2::new(angle.cos(), angle.sin()) * radius
            })
            .collect()
    }

    #[test]
    fn square_with_edge_midpoints() {
        let polygon = [
            Point2::new(-0.5, -0.5),
            Point2::new(0.0, -0.5),
            Point2::new(0.5, -0.5),
            Point2::new(0.5, 0.0),
            Point2::new(0.5, 0.5),
            Point2::new(0.0, 0.5),
            Point2::new(-0.5, 0.5),
            Point2::new(-0.5, 0.0),
        ];

        assert_eq!(remove_collinear_vertices(&polygon), vec![0, 2, 4, 6]);

        let triangles = triangulate_polygon(&polygon);
        assert_eq!(triangles.len(), 2);
        assert_relative_eq!(triangles_area(&polygon, &triangles), 1.0, epsilon = 1.0e-6);
    }

    #[test]
    fn clockwise_polygons_are_reoriented() {
        let polygon = [
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 0.0),
        ];
        let triangles = triangulate_polygon(&polygon);
        assert_eq!(triangles.len(), 2);
        assert_relative_eq!(triangles_area(&polygon, &triangles), 1.0, epsilon = 1.0e-6);
    }

    #[test]
    fn regular_polygons_give_n_minus_two_triangles() {
        for n in 3..16 {
            let polygon = regular_polygon(n, 2.0);
            let triangles = triangulate_polygon(&polygon);
            assert_eq!(triangles.len(), n - 2);
            assert_relative_eq!(
                triangles_area(&polygon, &triangles),
                signed_area2(&polygon) / 2.0,
                epsilon = 1.0e-4
            );
        }
    }

    #[test]
    fn star_polygon() {
        let polygon: Vec<_> = regular_polygon(10, 1.0)
            .into_iter()
            .enumerate()
            .map(|(i, pt)| if i % 2 == 0 { pt } else { pt * 0.4 })
            .collect();
        let triangles = triangulate_polygon(&polygon);
        assert_eq!(triangles.len(), 8);
        assert_relative_eq!(
            triangles_area(&polygon, &triangles),
            signed_area2(&polygon) / 2.0,
            epsilon = 1.0e-4
        );
    }

    #[test]
    fn random_star_shaped_polygons() {
        let mut rng = oorandom::Rand32::new(42);

        for _ in 0..50 {
            let n = rng.rand_range(3..40) as usize;
            let polygon: Vec<_> = (0..n)
                .map(|i| {
                    let jitter = rng.rand_float() as f64 * 0.5;
                    let angle = ((i as f64 + jitter) * TAU / n as f64) as Real;
                    let radius = 0.5 + rng.rand_float() as Real;
                    Point2::new(angle.cos(), angle.sin()) * radius
                })
                .collect();

            let num_corners = remove_collinear_vertices(&polygon).len();
            let triangles = triangulate_polygon(&polygon);
            assert_eq!(triangles.len(), num_corners - 2);
            assert_relative_eq!(
                triangles_area(&polygon, &triangles),
                signed_area2(&polygon).abs() / 2.0,
                epsilon = 1.0e-3
            );
        }
    }

    #[test]
    fn degenerate_polygons_give_no_triangles() {
        let segment = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        assert!(triangulate_polygon(&segment).is_empty());

        let repeated = [Point2::new(1.0, 1.0); 4];
        assert!(triangulate_polygon(&repeated).is_empty());
    }
}
