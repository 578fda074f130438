use super::{
    assemble_polygons, intersect_bvhs, triangulate_polygon, BoundaryGraph, ClipError, ClipOptions,
    ClipOutput, ClipResult, FillMesh, PlaneProjector, PointWelder,
};
use crate::math::{Point2, Real, Transform, UnitVector};
use crate::partitioning::{Bvh, BvhCache};
use crate::scene::{ClipPlane, GeometryFlags, MeshId, MeshSelector, SceneMesh, SceneProvider};
use crate::shape::TriMesh;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The plane data shared by all the meshes of one clip.
struct PlaneFrame<'a> {
    plane: &'a ClipPlane,
    bvh: &'a Bvh,
    inv_world: Transform,
    normal: UnitVector<Real>,
}

/// Computes the cross-sections of scene meshes cut by a clip plane.
///
/// Each selected mesh goes through the following steps:
/// 1. its triangles crossing the plane are found with a simultaneous traversal of its BVH and
///    the plane’s BVH, yielding segments in the plane’s local-space;
/// 2. the segment endpoints are projected into the plane’s 2D frame and welded;
/// 3. the welded segments are assembled into closed polygons;
/// 4. each polygon is triangulated and lifted back to world-space.
///
/// Meshes are processed independently of each other: the result for one mesh doesn’t depend on
/// which other meshes are selected.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Clipper {
    options: ClipOptions,
}

impl Clipper {
    /// Creates a clipper with the given options.
    pub fn new(options: ClipOptions) -> Self {
        Self { options }
    }

    /// The options of this clipper.
    pub fn options(&self) -> &ClipOptions {
        &self.options
    }

    /// Clips every mesh of `scene` chosen by `selector` with `plane`.
    ///
    /// The BVHs of the plane and of every selected mesh must have been built in `bvhs`
    /// beforehand, otherwise [`ClipError::MissingBvh`] is returned and nothing is computed.
    /// A BVH built from another geometry than the current one results in
    /// [`ClipError::StaleBvh`].
    /// The output contains one result per selected mesh, in the scene order, including for
    /// meshes the plane doesn’t touch (their results are empty).
    pub fn clip(
        &self,
        scene: &(impl SceneProvider + ?Sized),
        bvhs: &BvhCache,
        plane: &ClipPlane,
        selector: &impl MeshSelector,
    ) -> Result<ClipOutput, ClipError> {
        let t0 = Instant::now();
        self.options.validate()?;

        let frame = PlaneFrame {
            plane,
            bvh: cached_bvh(bvhs, plane.id, &plane.geometry)?,
            inv_world: plane
                .world
                .try_inverse()
                .ok_or(ClipError::SingularTransform { mesh: plane.id })?,
            normal: plane
                .normal()
                .ok_or(ClipError::SingularTransform { mesh: plane.id })?,
        };

        let jobs = scene
            .meshes()
            .iter()
            .filter(|mesh| selector.select(mesh))
            .map(|mesh| cached_bvh(bvhs, mesh.id, &mesh.geometry).map(|bvh| (mesh, bvh)))
            .collect::<Result<Vec<_>, _>>()?;

        #[cfg(feature = "parallel")]
        let results: Vec<_> = jobs
            .par_iter()
            .map(|(mesh, bvh)| self.clip_mesh(&frame, mesh, bvh))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let results: Vec<_> = jobs
            .iter()
            .map(|(mesh, bvh)| self.clip_mesh(&frame, mesh, bvh))
            .collect();

        let elapsed = t0.elapsed();
        log::debug!(
            "clipped {} meshes in {:.3}ms",
            results.len(),
            elapsed.as_secs_f64() * 1000.0
        );

        Ok(ClipOutput { results, elapsed })
    }

    fn clip_mesh(&self, frame: &PlaneFrame, mesh: &SceneMesh, mesh_bvh: &Bvh) -> ClipResult {
        let plane = frame.plane;
        let mut result = ClipResult::empty(mesh.id, self.options.render_order);

        let pos12 = frame.inv_world * mesh.world;
        let local_segments = intersect_bvhs(
            frame.bvh,
            &plane.geometry,
            mesh_bvh,
            &mesh.geometry,
            &pos12,
        );

        let Some(first) = local_segments.first() else {
            return result;
        };

        result.segments = local_segments
            .iter()
            .map(|seg| seg.transformed(&plane.world))
            .collect();

        let projector = PlaneProjector::new(plane.world, frame.normal, first.a);
        let points = projector.project_segments(&local_segments);
        let welded = PointWelder::new(self.options.tolerance).weld(&points);
        let graph = BoundaryGraph::from_welded_segments(&welded);

        for polygon in assemble_polygons(&graph) {
            let outline: Vec<Point2<Real>> = polygon
                .iter()
                .map(|i| welded.points[*i as usize])
                .collect();
            let triangles = triangulate_polygon(&outline);

            if !triangles.is_empty() {
                let vertices = outline.iter().map(|pt| projector.lift_point(pt)).collect();
                if let Ok(fill) = TriMesh::new(vertices, triangles) {
                    result.fills.push(FillMesh {
                        mesh: fill,
                        material: mesh.material,
                        flags: GeometryFlags::CLIP_RESULT,
                        render_order: self.options.render_order,
                    });
                }
            }

            result.outlines.push(outline);
        }

        log::debug!(
            "mesh {:?} ({}): {} segments, {} welded points, {} polygons, {} triangles",
            mesh.id,
            mesh.name,
            result.segments.len(),
            welded.len(),
            result.outlines.len(),
            result.num_triangles()
        );

        result
    }
}

// The BVH of `id`, checked against the geometry it is about to be traversed with.
fn cached_bvh<'a>(
    bvhs: &'a BvhCache,
    id: MeshId,
    geometry: &TriMesh,
) -> Result<&'a Bvh, ClipError> {
    let bvh = bvhs.get(id).ok_or(ClipError::MissingBvh { mesh: id })?;

    if bvh.primitive_count() != geometry.num_triangles() {
        return Err(ClipError::StaleBvh {
            mesh: id,
            bvh_triangles: bvh.primitive_count(),
            mesh_triangles: geometry.num_triangles(),
        });
    }

    Ok(bvh)
}
