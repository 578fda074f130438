use approx::assert_relative_eq;
use na::{Matrix4, Rotation3, Vector3};
use planecut3d::clip::{ClipResult, Clipper};
use planecut3d::math::{Real, Transform};
use planecut3d::partitioning::BvhCache;
use planecut3d::scene::{ClipPlane, Clippable, Scene, SceneMesh};
use planecut3d::shape::TriMesh;

// Cuts the unit cube placed by `cube_world` with a large plane at `z = 0`.
fn clip_unit_cube(cube_world: Transform) -> ClipResult {
    let cube = SceneMesh::new("cube", TriMesh::cuboid(Vector3::repeat(0.5)), cube_world);
    let scene: Scene = [cube].into_iter().collect();
    let plane = ClipPlane::quad(4.0, 4.0, Matrix4::identity());

    let mut bvhs = BvhCache::default();
    let _ = bvhs.build_plane(&plane);
    assert_eq!(bvhs.build_selected(&scene, &Clippable), 1);

    let mut output = Clipper::default()
        .clip(&scene, &bvhs, &plane, &Clippable)
        .unwrap();
    output.results.remove(0)
}

#[test]
fn tilted_cubes_are_capped() {
    let angles = [
        (0.5, 0.1, 0.0),
        (0.2, 0.4, 0.6),
        (0.3, -0.7, 1.1),
        (1.0, 0.25, -0.4),
        (-0.6, 0.9, 0.2),
        (0.05, 0.0, 0.8),
    ];

    for (roll, pitch, yaw) in angles {
        let rot = Rotation3::from_euler_angles(roll, pitch, yaw);
        let result = clip_unit_cube(rot.to_homogeneous());

        assert!(!result.segments.is_empty());
        assert_eq!(result.outlines.len(), 1, "open boundary for {:?}", (roll, pitch, yaw));
        assert_eq!(result.fills.len(), 1);

        // Every section of the unit cube through its center has an area in `[1, √2]`.
        let area = result.fill_area();
        assert!(area >= 1.0 - 1.0e-4 && area <= Real::sqrt(2.0) + 1.0e-4);

        let perimeter: Real = result.segments.iter().map(|seg| seg.length()).sum();
        let outline = &result.outlines[0];
        let outline_perimeter: Real = (0..outline.len())
            .map(|i| na::distance(&outline[i], &outline[(i + 1) % outline.len()]))
            .sum();
        assert_relative_eq!(perimeter, outline_perimeter, epsilon = 1.0e-4);
    }
}

#[test]
fn body_diagonal_cut_is_a_regular_hexagon() {
    let align = Rotation3::rotation_between(&Vector3::repeat(1.0), &Vector3::z()).unwrap();
    let expected_area = 3.0 * Real::sqrt(3.0) / 4.0;

    for i in 0..100 {
        let angle = (i as f64 * core::f64::consts::TAU / 100.0) as Real;
        let spin = Rotation3::from_axis_angle(&Vector3::z_axis(), angle);
        let result = clip_unit_cube((spin * align).to_homogeneous());

        assert_eq!(result.outlines.len(), 1, "open boundary at spin {}", i);
        assert_eq!(result.fills.len(), 1);
        assert!(result.num_triangles() >= 4);
        assert_relative_eq!(result.fill_area(), expected_area, epsilon = 1.0e-4);

        // The hexagon’s corners are the midpoints of six edges of the cube.
        for pt in &result.outlines[0] {
            let radius = pt.coords.norm();
            assert!(radius <= Real::sqrt(0.5) + 1.0e-5);
        }
    }
}
