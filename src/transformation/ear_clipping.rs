//! Ear-clipping algorithm for creating a triangle mesh from a simple polygon.
//! Based on <https://github.com/ivanfratric/polypartition>.

use crate::{
    math::{Point2, Real},
    utils::point_in_triangle::{corner_direction, is_point_in_triangle, Orientation},
};

/// The information stored for each vertex in the ear clipping algorithm.
#[derive(Clone, Default)]
struct VertexInfo {
    /// Whether the vertex is still active i.e. it has not been clipped yet.
    is_active: bool,
    /// Whether the vertex is the tip of an ear and should be clipped.
    is_ear: bool,
    /// How small the angle of the ear is. Ears with a smaller angle are clipped first.
    pointiness: Real,
    /// The index of the previous vertex.
    p_prev: usize,
    /// The index of the next vertex.
    p_next: usize,
}

/// Updates the fields `pointiness` and `is_ear` for the vertex `idx`.
///
/// Returns `false` if the vertex information could not be computed.
fn update_vertex(idx: usize, vertex_info: &mut [VertexInfo], points: &[Point2<Real>]) -> bool {
    let VertexInfo { p_prev, p_next, .. } = vertex_info[idx];

    // Get the point and its neighbors.
    let p = points[idx];
    let p1 = points[p_prev];
    let p3 = points[p_next];

    // Get the pointiness.
    let vec1 = (p1 - p).normalize();
    let vec3 = (p3 - p).normalize();
    let pointiness = vec1.dot(&vec3);
    if pointiness.is_nan() {
        return false;
    }

    // A point is considered an ear when it is convex and no other active points are
    // inside the triangle spanned by it and its two neighbors.
    let mut error = false;
    let is_ear = corner_direction(&p1, &p, &p3) == Orientation::Ccw
        && (0..points.len())
            .filter(|&i| vertex_info[i].is_active && i != p_prev && i != idx && i != p_next)
            // Points coinciding with a corner of the ear don’t prevent clipping it.
            .filter(|&i| points[i] != p1 && points[i] != p && points[i] != p3)
            .all(|i| {
                if let Some(is) = is_point_in_triangle(&points[i], &p1, &p, &p3) {
                    !is
                } else {
                    error = true;
                    true
                }
            });

    vertex_info[idx].pointiness = pointiness;
    vertex_info[idx].is_ear = is_ear;
    !error
}

/// Ear clipping triangulation algorithm.
///
/// The polygon `vertices` must be simple and oriented counter-clockwise. Returns `None` if
/// the polygon has less than three vertices or if no ear could be found at some point, which
/// happens with self-intersecting or clockwise polygons.
pub fn triangulate_ear_clipping(vertices: &[Point2<Real>]) -> Option<Vec<[u32; 3]>> {
    let n_vertices = vertices.len();

    if n_vertices < 3 {
        return None;
    }

    // Create a new vector to hold the information about vertices.
    let mut vertex_info = vec![VertexInfo::default(); n_vertices];

    // Initialize information for each vertex.
    for (i, info) in vertex_info.iter_mut().enumerate() {
        info.is_active = true;
        info.p_prev = if i == 0 { n_vertices - 1 } else { i - 1 };
        info.p_next = if i == n_vertices - 1 { 0 } else { i + 1 };
    }

    if !(0..n_vertices).all(|i| update_vertex(i, &mut vertex_info, vertices)) {
        return None;
    }

    // The output shapes
    let mut output_indices = Vec::with_capacity(n_vertices - 2);

    for i in 0..n_vertices - 3 {
        // Search through all active ears and pick out the pointiest.
        let (ear_i, _) = vertex_info
            .iter()
            .enumerate()
            .filter(|(_, info)| info.is_active && info.is_ear)
            .max_by(|(_, info1), (_, info2)| info1.pointiness.total_cmp(&info2.pointiness))?;

        // Deactivate the tip of the ear.
        vertex_info[ear_i].is_active = false;

        // Get the indices of the neighbors.
        let VertexInfo { p_prev, p_next, .. } = vertex_info[ear_i];

        // Extract the triangle that is the ear and add it to the index buffer.
        output_indices.push([p_prev as u32, ear_i as u32, p_next as u32]);

        // Connect the remaining two vertices.
        vertex_info[p_prev].p_next = p_next;
        vertex_info[p_next].p_prev = p_prev;

        // Only three vertices remain and those are guaranteed to be convex so
        // there is no point in updating the remaining vertex information.
        if i == n_vertices - 4 {
            break;
        };

        // Update the info for the remaining two vertices.
        if !update_vertex(p_prev, &mut vertex_info, vertices)
            || !update_vertex(p_next, &mut vertex_info, vertices)
        {
            return None;
        }
    }

    // Add the remaining triangle.
    if let Some((i, info)) = vertex_info
        .iter()
        .enumerate()
        .find(|(_, info)| info.is_active)
    {
        output_indices.push([info.p_prev as u32, i as u32, info.p_next as u32]);
    }

    Some(output_indices)
}
