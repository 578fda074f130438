use na::{Matrix4, Vector3};
use planecut3d::clip::{ClipError, Clipper};
use planecut3d::partitioning::BvhCache;
use planecut3d::scene::{ClipPlane, Clippable, Scene, SceneMesh, SceneProvider};
use planecut3d::shape::TriMesh;

fn scene() -> Scene {
    let mut scene = Scene::new();
    let _ = scene.add(SceneMesh::new(
        "cube",
        TriMesh::cuboid(Vector3::repeat(0.5)),
        Matrix4::identity(),
    ));
    scene
}

#[test]
fn missing_mesh_bvh_fails_fast() {
    let scene = scene();
    let cube_id = scene.meshes()[0].id;
    let plane = ClipPlane::quad(2.0, 2.0, Matrix4::identity());

    let mut bvhs = BvhCache::default();
    let _ = bvhs.build_plane(&plane);

    assert_eq!(
        Clipper::default().clip(&scene, &bvhs, &plane, &Clippable),
        Err(ClipError::MissingBvh { mesh: cube_id })
    );

    // Once built, the clip succeeds.
    let _ = bvhs.build_selected(&scene, &Clippable);
    assert!(Clipper::default()
        .clip(&scene, &bvhs, &plane, &Clippable)
        .is_ok());

    // Invalidating the entry brings the error back.
    assert!(bvhs.invalidate(cube_id));
    assert!(Clipper::default()
        .clip(&scene, &bvhs, &plane, &Clippable)
        .is_err());
}

#[test]
fn missing_plane_bvh_fails_fast() {
    let scene = scene();
    let plane = ClipPlane::quad(2.0, 2.0, Matrix4::identity());

    let mut bvhs = BvhCache::default();
    let _ = bvhs.build_selected(&scene, &Clippable);

    assert_eq!(
        Clipper::default().clip(&scene, &bvhs, &plane, &Clippable),
        Err(ClipError::MissingBvh { mesh: plane.id })
    );
}

#[test]
fn unselected_meshes_need_no_bvh() {
    let scene = scene();
    let plane = ClipPlane::quad(2.0, 2.0, Matrix4::identity());

    let mut bvhs = BvhCache::default();
    let _ = bvhs.build_plane(&plane);

    let output = Clipper::default()
        .clip(&scene, &bvhs, &plane, &|_: &SceneMesh| false)
        .unwrap();
    assert!(output.results.is_empty());
}

#[test]
fn replaced_geometry_needs_a_rebuild() {
    let mut scene = scene();
    let cube_id = scene.meshes()[0].id;
    let plane = ClipPlane::quad(2.0, 2.0, Matrix4::identity());

    let mut bvhs = BvhCache::default();
    let _ = bvhs.build_plane(&plane);
    let _ = bvhs.build_selected(&scene, &Clippable);

    // A single box made of 12 triangles, replaced by two stacked boxes.
    let mut boxes = TriMesh::cuboid(Vector3::repeat(0.5));
    boxes.append(
        &TriMesh::cuboid(Vector3::repeat(0.25))
            .transformed(&Matrix4::new_translation(&Vector3::new(0.0, 0.0, 1.0))),
    );
    scene.get_mut(cube_id).unwrap().geometry = boxes.into();

    assert_eq!(
        Clipper::default().clip(&scene, &bvhs, &plane, &Clippable),
        Err(ClipError::StaleBvh {
            mesh: cube_id,
            bvh_triangles: 12,
            mesh_triangles: 24,
        })
    );

    assert!(bvhs.invalidate(cube_id));
    let _ = bvhs.build_selected(&scene, &Clippable);
    let output = Clipper::default()
        .clip(&scene, &bvhs, &plane, &Clippable)
        .unwrap();
    assert_eq!(output.results[0].outlines.len(), 1);
}
