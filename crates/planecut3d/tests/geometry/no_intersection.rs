use na::{Matrix4, Vector3};
use planecut3d::bounding_volume::BoundingVolume;
use planecut3d::clip::Clipper;
use planecut3d::partitioning::BvhCache;
use planecut3d::scene::{ClipPlane, Clippable, Scene, SceneMesh};
use planecut3d::shape::TriMesh;

#[test]
fn plane_away_from_mesh() {
    let mut scene = Scene::new();
    let cube_id = scene.add(SceneMesh::new(
        "cube",
        TriMesh::cuboid(Vector3::repeat(0.5)),
        Matrix4::identity(),
    ));

    for offset in [Vector3::new(0.0, 0.0, 5.0), Vector3::new(10.0, 0.0, 0.0)] {
        let plane = ClipPlane::quad(2.0, 2.0, Matrix4::new_translation(&offset));
        assert!(!plane
            .geometry
            .aabb(&plane.world)
            .intersects(&scene.get(cube_id).unwrap().world_aabb()));

        let mut bvhs = BvhCache::default();
        let _ = bvhs.build_plane(&plane);
        let _ = bvhs.build_selected(&scene, &Clippable);

        let output = Clipper::default()
            .clip(&scene, &bvhs, &plane, &Clippable)
            .unwrap();

        // The mesh still gets a result, without any segment nor fill.
        assert_eq!(output.results.len(), 1);
        let result = output.get(cube_id).unwrap();
        assert!(result.is_empty());
        assert!(result.outlines.is_empty());
        assert!(result.merged_fills().is_none());
        assert_eq!(output.num_segments(), 0);
    }
}

#[test]
fn plane_touching_a_face() {
    // The plane is coplanar with the top face: coplanar contacts give no segment.
    let mut scene = Scene::new();
    let _ = scene.add(SceneMesh::new(
        "cube",
        TriMesh::cuboid(Vector3::repeat(0.5)),
        Matrix4::identity(),
    ));
    let plane = ClipPlane::quad(
        0.5,
        0.5,
        Matrix4::new_translation(&Vector3::new(0.0, 0.0, 0.5)),
    );

    let mut bvhs = BvhCache::default();
    let _ = bvhs.build_plane(&plane);
    let _ = bvhs.build_selected(&scene, &Clippable);

    let output = Clipper::default()
        .clip(&scene, &bvhs, &plane, &Clippable)
        .unwrap();
    assert!(output.results[0].segments.is_empty());
    assert_eq!(output.results[0].num_triangles(), 0);
}
