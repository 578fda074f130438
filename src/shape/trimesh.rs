use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Transform, Vector};
use crate::shape::Triangle;
use core::fmt;

/// Indicated an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriMeshBuilderError {
    /// A triangle mesh must contain at least one triangle.
    #[error("A triangle mesh must contain at least one triangle.")]
    EmptyIndices,
    /// A triangle references a vertex that does not exist.
    #[error("the triangle {triangle} references the vertex {vertex} but the mesh only has {num_vertices} vertices.")]
    IndexOutOfBounds {
        /// The index of the faulty triangle.
        triangle: u32,
        /// The out-of-bounds vertex index.
        vertex: u32,
        /// The number of vertices of the mesh.
        num_vertices: usize,
    },
}

/// A triangle mesh.
///
/// The geometry is an immutable triangle soup: the vertex buffer and index buffer are validated
/// once at construction. Its bounding-volume hierarchy is not stored here: it is owned by a
/// [`BvhCache`](crate::partitioning::BvhCache) so that the clipping pipeline only ever reads it.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
}

impl fmt::Debug for TriMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TriMesh {{ {} vertices, {} triangles }}",
            self.vertices.len(),
            self.indices.len()
        )
    }
}

impl TriMesh {
    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    pub fn new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, TriMeshBuilderError> {
        if indices.is_empty() {
            return Err(TriMeshBuilderError::EmptyIndices);
        }

        for (triangle, idx) in indices.iter().enumerate() {
            if let Some(vertex) = idx.iter().find(|i| **i as usize >= vertices.len()) {
                return Err(TriMeshBuilderError::IndexOutOfBounds {
                    triangle: triangle as u32,
                    vertex: *vertex,
                    num_vertices: vertices.len(),
                });
            }
        }

        Ok(Self { vertices, indices })
    }

    /// Creates the triangle mesh of an axis-aligned box centered at the origin.
    ///
    /// Each of the six faces is split into two triangles along one of its diagonals.
    pub fn cuboid(half_extents: Vector<Real>) -> Self {
        let (mut vertices, indices) = unit_cuboid();
        for pt in &mut vertices {
            pt.coords.component_mul_assign(&(half_extents * 2.0));
        }

        Self { vertices, indices }
    }

    /// Creates a flat rectangle of size `width × height` centered at the origin of the local XY
    /// plane, facing `+Z`.
    ///
    /// This is the usual shape of a clipping plane.
    pub fn quad(width: Real, height: Real) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        let vertices = vec![
            Point::new(-hw, hh, 0.0),
            Point::new(hw, hh, 0.0),
            Point::new(-hw, -hh, 0.0),
            Point::new(hw, -hh, 0.0),
        ];
        let indices = vec![[0, 2, 1], [2, 3, 1]];

        Self { vertices, indices }
    }

    /// The vertex buffer of this mesh.
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of triangles forming this mesh.
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Get the `i`-th triangle of this mesh.
    pub fn triangle(&self, i: u32) -> Triangle {
        let idx = self.indices[i as usize];
        Triangle::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }

    /// An iterator through all the triangles of this mesh.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        self.indices.iter().map(move |ids| {
            Triangle::new(
                self.vertices[ids[0] as usize],
                self.vertices[ids[1] as usize],
                self.vertices[ids[2] as usize],
            )
        })
    }

    /// The AABB of each triangle of this mesh, in the mesh's local-space.
    pub fn triangle_aabbs(&self) -> impl ExactSizeIterator<Item = Aabb> + '_ {
        self.triangles().map(|tri| tri.local_aabb())
    }

    /// Gets the local axis-aligned bounding box of this triangle mesh.
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().copied())
    }

    /// Computes the world-space AABB of this triangle mesh transformed by `m`.
    ///
    /// Unlike `self.local_aabb().transform_by(m)`, this is tight since every vertex is transformed.
    pub fn aabb(&self, m: &Transform) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|pt| m.transform_point(pt)))
    }

    /// The total area of this mesh's triangles.
    pub fn area(&self) -> Real {
        self.triangles().map(|tri| tri.area()).sum()
    }

    /// Transforms in-place the vertices of this triangle mesh.
    pub fn transform_vertices(&mut self, m: &Transform) {
        self.vertices
            .iter_mut()
            .for_each(|pt| *pt = m.transform_point(pt));
    }

    /// Returns a copy of this mesh with all its vertices transformed by `m`.
    pub fn transformed(mut self, m: &Transform) -> Self {
        self.transform_vertices(m);
        self
    }

    /// Append a second triangle mesh to this triangle mesh.
    pub fn append(&mut self, rhs: &TriMesh) {
        let base_id = self.vertices.len() as u32;
        self.vertices.extend_from_slice(rhs.vertices());
        self.indices.extend(
            rhs.indices()
                .iter()
                .map(|idx| [idx[0] + base_id, idx[1] + base_id, idx[2] + base_id]),
        );
    }
}

fn unit_cuboid() -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    let coords = vec![
        Point::new(-0.5, -0.5, 0.5),
        Point::new(-0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, 0.5),
        Point::new(-0.5, 0.5, 0.5),
        Point::new(-0.5, 0.5, -0.5),
        Point::new(0.5, 0.5, -0.5),
        Point::new(0.5, 0.5, 0.5),
    ];

    let faces = vec![
        [4, 5, 0],
        [5, 1, 0],
        [5, 6, 1],
        [6, 2, 1],
        [6, 7, 3],
        [2, 6, 3],
        [7, 4, 0],
        [3, 7, 0],
        [0, 1, 2],
        [3, 0, 2],
        [7, 6, 5],
        [4, 7, 5],
    ];

    (coords, faces)
}
