use crate::bounding_volume::BoundingVolume;
use crate::math::Transform;
use crate::partitioning::Bvh;
use crate::query::intersection_segment_triangle_triangle;
use crate::shape::{Segment, TriMesh, Triangle};

/// Computes all the segments where the triangles of two meshes cross each other.
///
/// `bvh1` and `bvh2` must be the BVHs of `mesh1` and `mesh2` respectively, and `pos12` is the
/// transform from `mesh2`’s local-space to `mesh1`’s local-space. The returned segments are
/// expressed in `mesh1`’s local-space, in no particular order, and are not connected to each
/// other.
pub fn intersect_bvhs(
    bvh1: &Bvh,
    mesh1: &TriMesh,
    bvh2: &Bvh,
    mesh2: &TriMesh,
    pos12: &Transform,
) -> Vec<Segment> {
    let mut segments = vec![];
    // The triangles of `mesh2` are transformed at most once, when first needed.
    let mut triangles2: Vec<Option<Triangle>> = vec![None; mesh2.num_triangles()];

    let pairs = bvh1.leaf_pairs(bvh2, |node1, node2| {
        node1.aabb().intersects(&node2.aabb().transform_by(pos12))
    });

    for (leaf1, leaf2) in pairs {
        for &fid1 in leaf1 {
            let tri1 = mesh1.triangle(fid1);
            let aabb1 = tri1.local_aabb();

            for &fid2 in leaf2 {
                let tri2 = *triangles2[fid2 as usize]
                    .get_or_insert_with(|| mesh2.triangle(fid2).transformed(pos12));

                if !aabb1.intersects(&tri2.local_aabb()) {
                    continue;
                }

                if let Some(segment) = intersection_segment_triangle_triangle(&tri1, &tri2) {
                    segments.push(segment);
                }
            }
        }
    }

    segments
}
