use na::{Matrix4, Rotation3, Vector3};
use planecut3d::clip::Clipper;
use planecut3d::partitioning::BvhCache;
use planecut3d::scene::{ClipPlane, Clippable, Scene, SceneMesh};
use planecut3d::shape::TriMesh;

fn mesh_b() -> SceneMesh {
    let world = Matrix4::new_translation(&Vector3::new(1.5, 0.2, 0.0))
        * Rotation3::from_euler_angles(0.3, 0.2, 0.7).to_homogeneous();
    SceneMesh::new("b", TriMesh::cuboid(Vector3::new(0.4, 0.7, 0.3)), world)
}

#[test]
fn results_do_not_depend_on_other_meshes() {
    let a = SceneMesh::new(
        "a",
        TriMesh::cuboid(Vector3::repeat(0.5)),
        Matrix4::new_translation(&Vector3::new(-0.3, 0.1, 0.05)),
    );
    let b = mesh_b();
    let plane = ClipPlane::quad(6.0, 6.0, Matrix4::identity());

    let both: Scene = [a.clone(), b.clone()].into_iter().collect();
    let reversed: Scene = [b.clone(), a.clone()].into_iter().collect();
    let alone: Scene = [a.clone()].into_iter().collect();

    let mut bvhs = BvhCache::default();
    let _ = bvhs.build_plane(&plane);
    assert_eq!(bvhs.build_selected(&both, &Clippable), 2);
    assert_eq!(bvhs.build_selected(&alone, &Clippable), 0);

    let clipper = Clipper::default();
    let out_both = clipper.clip(&both, &bvhs, &plane, &Clippable).unwrap();
    let out_reversed = clipper.clip(&reversed, &bvhs, &plane, &Clippable).unwrap();
    let out_alone = clipper.clip(&alone, &bvhs, &plane, &Clippable).unwrap();

    // Results follow the scene order.
    assert_eq!(out_both.results[0].mesh, a.id);
    assert_eq!(out_both.results[1].mesh, b.id);
    assert_eq!(out_reversed.results[0].mesh, b.id);

    let result_a = out_alone.get(a.id).unwrap();
    assert!(!result_a.fills.is_empty());
    assert_eq!(out_both.get(a.id), Some(result_a));
    assert_eq!(out_reversed.get(a.id), Some(result_a));
    assert_eq!(out_both.get(b.id), out_reversed.get(b.id));

    // `b` is tilted: its cap must still be closed and filled.
    let result_b = out_both.get(b.id).unwrap();
    assert_eq!(result_b.outlines.len(), 1);
    assert_eq!(result_b.fills.len(), 1);
    assert!(result_b.fill_area() > 0.0);
}

#[test]
fn selection_by_predicate() {
    let a = SceneMesh::new(
        "a",
        TriMesh::cuboid(Vector3::repeat(0.5)),
        Matrix4::identity(),
    );
    let b = mesh_b();
    let scene = vec![a.clone(), b.clone()];
    let plane = ClipPlane::quad(6.0, 6.0, Matrix4::identity());

    let only_b = |mesh: &SceneMesh| mesh.name == "b";
    let mut bvhs = BvhCache::default();
    let _ = bvhs.build_plane(&plane);
    assert_eq!(bvhs.build_selected(&scene, &only_b), 1);
    assert!(!bvhs.contains(a.id));

    let output = Clipper::default()
        .clip(&scene, &bvhs, &plane, &only_b)
        .unwrap();
    assert_eq!(output.results.len(), 1);
    assert_eq!(output.results[0].mesh, b.id);
}
