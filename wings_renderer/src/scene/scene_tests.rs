/// Tests for Scene and the scene loader

use super::*;

// ============================================================================
// Tests: Scene
// ============================================================================

#[test]
fn test_scene_from_geometries() {
    let scene = Scene::from_geometries(
        "scenes/test.gltf",
        vec![Geometry::new(3), Geometry::new(36)],
    );

    assert_eq!(scene.path(), "scenes/test.gltf");
    assert_eq!(scene.geometries().len(), 2);
    assert_eq!(scene.geometries()[0].vertex_count(), 3);
    assert_eq!(scene.geometries()[1].vertex_count(), 36);
}

// ============================================================================
// Tests: Loader
// ============================================================================

#[test]
fn test_load_scene() {
    let scene = load_scene("scenes/geosphere.gltf").unwrap();
    assert_eq!(scene.path(), "scenes/geosphere.gltf");
    assert!(!scene.geometries().is_empty());
}

#[test]
fn test_load_scene_empty_path_fails() {
    assert!(load_scene("").is_err());
}
