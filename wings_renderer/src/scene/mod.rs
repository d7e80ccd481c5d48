/// Scene module - thin scene and camera collaborators
///
/// Scene graph loading and asset import live outside this crate; these
/// types carry just enough for the sample to record a frame.

// Module declarations
pub mod scene;
pub mod camera;

// Re-export everything
pub use scene::*;
pub use camera::*;
