/// Scene - a named collection of drawable geometry

use crate::error::Result;
use crate::render_bail;
use crate::render_info;

/// One drawable geometry batch
#[derive(Debug, Clone, Copy)]
pub struct Geometry {
    vertex_count: u32,
}

impl Geometry {
    pub fn new(vertex_count: u32) -> Self {
        Self { vertex_count }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}

/// A renderable scene.
///
/// Asset import is handled by the framework's glTF loader outside this
/// crate; the sample only iterates the resulting geometry.
pub struct Scene {
    path: String,
    geometries: Vec<Geometry>,
}

impl Scene {
    /// Build a scene directly from geometry (used by tests and tools)
    pub fn from_geometries(path: impl Into<String>, geometries: Vec<Geometry>) -> Self {
        Self {
            path: path.into(),
            geometries,
        }
    }

    /// Asset path this scene was loaded from
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Drawable geometry, in submission order
    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }
}

/// Load a scene from an asset path.
///
/// The path is handed to the external loader unchanged. The placeholder
/// geometry stands in for the loader's output until a backend is wired up.
///
/// # Errors
///
/// Fails on an empty path.
pub fn load_scene(path: &str) -> Result<Scene> {
    if path.is_empty() {
        render_bail!("wings::scene", "scene path is empty");
    }

    render_info!("wings::scene", "Loading scene '{}'", path);
    Ok(Scene::from_geometries(path, vec![Geometry::new(3)]))
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
