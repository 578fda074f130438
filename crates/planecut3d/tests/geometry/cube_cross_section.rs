use approx::assert_relative_eq;
use na::{Matrix4, Rotation3, Vector3};
use planecut3d::clip::{ClipOptions, ClipResult, Clipper};
use planecut3d::math::{Real, Transform};
use planecut3d::partitioning::{BvhBuildOptions, BvhBuildStrategy, BvhCache};
use planecut3d::scene::{ClipPlane, Clippable, GeometryFlags, MaterialId, Scene, SceneMesh};
use planecut3d::shape::TriMesh;

fn clip_cube(cube_world: Transform, plane: &ClipPlane, strategy: BvhBuildStrategy) -> ClipResult {
    let mut scene = Scene::new();
    let cube = SceneMesh::new("cube", TriMesh::cuboid(Vector3::repeat(0.5)), cube_world)
        .with_material(MaterialId(7));
    let cube_id = scene.add(cube);

    let mut bvhs = BvhCache::new(BvhBuildOptions::default().with_strategy(strategy));
    let _ = bvhs.build_plane(plane);
    assert_eq!(bvhs.build_selected(&scene, &Clippable), 1);

    let output = Clipper::default()
        .clip(&scene, &bvhs, plane, &Clippable)
        .unwrap();
    assert_eq!(output.results.len(), 1);
    output.get(cube_id).unwrap().clone()
}

#[test]
fn unit_cube_cut_at_z_zero() {
    for strategy in [BvhBuildStrategy::Center, BvhBuildStrategy::Binned] {
        let plane = ClipPlane::quad(2.0, 2.0, Matrix4::identity());
        let result = clip_cube(Matrix4::identity(), &plane, strategy);

        assert!(!result.segments.is_empty());
        for seg in &result.segments {
            assert_relative_eq!(seg.a.z, 0.0, epsilon = 1.0e-6);
            assert_relative_eq!(seg.b.z, 0.0, epsilon = 1.0e-6);
        }
        let perimeter: Real = result.segments.iter().map(|seg| seg.length()).sum();
        assert_relative_eq!(perimeter, 4.0, epsilon = 1.0e-5);

        assert_eq!(result.outlines.len(), 1);
        assert_eq!(result.fills.len(), 1);
        assert_eq!(result.num_triangles(), 2);
        assert_relative_eq!(result.fill_area(), 1.0, epsilon = 1.0e-5);

        let fill = &result.fills[0];
        assert_eq!(fill.material, MaterialId(7));
        assert_eq!(fill.flags, GeometryFlags::CLIP_RESULT);
        assert_eq!(fill.render_order, 20);
        for tri in fill.mesh.triangles() {
            let normal = tri.normal().unwrap();
            assert_relative_eq!(normal.z.abs(), 1.0, epsilon = 1.0e-5);
        }
    }
}

#[test]
fn translated_plane() {
    let world = Matrix4::new_translation(&Vector3::new(0.0, 0.0, 0.25));
    let plane = ClipPlane::quad(2.0, 2.0, world);
    let result = clip_cube(Matrix4::identity(), &plane, BvhBuildStrategy::Center);

    for seg in &result.segments {
        assert_relative_eq!(seg.a.z, 0.25, epsilon = 1.0e-6);
        assert_relative_eq!(seg.b.z, 0.25, epsilon = 1.0e-6);
    }
    for pt in result.fills[0].mesh.vertices() {
        assert_relative_eq!(pt.z, 0.25, epsilon = 1.0e-6);
    }
    assert_relative_eq!(result.fill_area(), 1.0, epsilon = 1.0e-5);
}

#[test]
fn rotated_plane() {
    // The plane’s local `+Z` axis is mapped to the world `+Y` axis.
    let angle = -core::f64::consts::FRAC_PI_2 as Real;
    let rot = Rotation3::from_axis_angle(&Vector3::x_axis(), angle);
    let plane = ClipPlane::quad(2.0, 2.0, rot.to_homogeneous());
    assert_relative_eq!(
        plane.normal().unwrap().into_inner(),
        Vector3::y(),
        epsilon = 1.0e-6
    );

    let result = clip_cube(Matrix4::identity(), &plane, BvhBuildStrategy::Center);
    for seg in &result.segments {
        assert_relative_eq!(seg.a.y, 0.0, epsilon = 1.0e-5);
        assert_relative_eq!(seg.b.y, 0.0, epsilon = 1.0e-5);
    }
    assert_eq!(result.outlines.len(), 1);
    assert_eq!(result.num_triangles(), 2);
    assert_relative_eq!(result.fill_area(), 1.0, epsilon = 1.0e-4);
}

#[test]
fn scaled_mesh() {
    let plane = ClipPlane::quad(10.0, 10.0, Matrix4::identity());
    let world = Matrix4::new_nonuniform_scaling(&Vector3::new(2.0, 3.0, 1.0));
    let result = clip_cube(world, &plane, BvhBuildStrategy::Center);

    assert_eq!(result.outlines.len(), 1);
    assert_eq!(result.num_triangles(), 2);
    assert_relative_eq!(result.fill_area(), 6.0, epsilon = 1.0e-4);

    let perimeter: Real = result.segments.iter().map(|seg| seg.length()).sum();
    assert_relative_eq!(perimeter, 10.0, epsilon = 1.0e-4);
}

#[test]
fn fills_are_not_clipped_again() {
    let plane = ClipPlane::quad(2.0, 2.0, Matrix4::identity());
    let result = clip_cube(Matrix4::identity(), &plane, BvhBuildStrategy::Center);

    let cap = result.fills[0].clone().into_scene_mesh("cap");
    assert!(cap.flags.contains(GeometryFlags::CLIP_RESULT));

    let mut scene = Scene::new();
    let _ = scene.add(SceneMesh::new(
        "cube",
        TriMesh::cuboid(Vector3::repeat(0.5)),
        Matrix4::identity(),
    ));
    let _ = scene.add(cap);

    let mut bvhs = BvhCache::default();
    let _ = bvhs.build_plane(&plane);
    assert_eq!(bvhs.build_selected(&scene, &Clippable), 1);

    let output = Clipper::new(ClipOptions::default().with_render_order(5))
        .clip(&scene, &bvhs, &plane, &Clippable)
        .unwrap();
    assert_eq!(output.results.len(), 1);
    assert_eq!(output.results[0].render_order, 5);
    assert_eq!(output.results[0].fills[0].render_order, 5);
}
