use crate::math::{Matrix4, Point2, Real};
use crate::scene::{GeometryFlags, MaterialId, MeshId, SceneMesh};
use crate::shape::{Segment, TriMesh};
use core::time::Duration;

/// A triangulated cap filling one boundary polygon of a cross-section.
#[derive(Clone, Debug, PartialEq)]
pub struct FillMesh {
    /// The cap geometry, in world-space.
    pub mesh: TriMesh,
    /// The material of the mesh the cap was cut through.
    pub material: MaterialId,
    /// Always contains [`GeometryFlags::CLIP_RESULT`].
    pub flags: GeometryFlags,
    /// The render order keeping the cap visible above the cut surface.
    pub render_order: i32,
}

impl FillMesh {
    /// Converts this cap into a scene mesh, so it can be added to a [`Scene`](crate::scene::Scene).
    ///
    /// Since the cap is already in world-space, its world transform is the identity. Being
    /// tagged with [`GeometryFlags::CLIP_RESULT`], it is never selected by
    /// [`Clippable`](crate::scene::Clippable).
    pub fn into_scene_mesh(self, name: impl Into<String>) -> SceneMesh {
        SceneMesh::new(name, self.mesh, Matrix4::identity())
            .with_material(self.material)
            .with_flags(self.flags)
    }
}

/// The cross-section of one mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipResult {
    /// The mesh this cross-section was computed for.
    pub mesh: MeshId,
    /// The raw segments where the plane crosses the mesh’s triangles, in world-space.
    ///
    /// These are not welded and not ordered.
    pub segments: Vec<Segment>,
    /// The closed boundary polygons found in the plane, in the plane’s 2D frame.
    pub outlines: Vec<Vec<Point2<Real>>>,
    /// The triangulated caps, one for each outline that could be triangulated.
    pub fills: Vec<FillMesh>,
    /// The render order of the segments.
    pub render_order: i32,
}

impl ClipResult {
    /// A result without any segment nor fill.
    pub fn empty(mesh: MeshId, render_order: i32) -> Self {
        Self {
            mesh,
            segments: vec![],
            outlines: vec![],
            fills: vec![],
            render_order,
        }
    }

    /// Is this result free of segments and fills?
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.fills.is_empty()
    }

    /// The total number of triangles of the fills.
    pub fn num_triangles(&self) -> usize {
        self.fills.iter().map(|fill| fill.mesh.num_triangles()).sum()
    }

    /// The total world-space area of the fills.
    pub fn fill_area(&self) -> Real {
        self.fills.iter().map(|fill| fill.mesh.area()).sum()
    }

    /// All the fills merged into a single mesh, or `None` if there is no fill.
    pub fn merged_fills(&self) -> Option<TriMesh> {
        let (first, rest) = self.fills.split_first()?;
        let mut result = first.mesh.clone();
        for fill in rest {
            result.append(&fill.mesh);
        }
        Some(result)
    }
}

/// The cross-sections computed by one clip.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClipOutput {
    /// One result per selected mesh, in the scene order.
    pub results: Vec<ClipResult>,
    /// The wall-clock time spent computing the results.
    pub elapsed: Duration,
}

impl ClipOutput {
    /// The result computed for the mesh `mesh`, if it was selected.
    pub fn get(&self, mesh: MeshId) -> Option<&ClipResult> {
        self.results.iter().find(|result| result.mesh == mesh)
    }

    /// The total number of segments over all the results.
    pub fn num_segments(&self) -> usize {
        self.results.iter().map(|result| result.segments.len()).sum()
    }
}
