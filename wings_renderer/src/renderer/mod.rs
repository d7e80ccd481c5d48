/// Renderer module - the GPU abstraction consumed by the sample

// Module declarations
pub mod device;
pub mod image;
pub mod render_pass;
pub mod command_list;
pub mod context;

#[cfg(test)]
pub mod mock_renderer;

// Re-export everything
pub use device::*;
pub use image::*;
pub use render_pass::*;
pub use command_list::*;
pub use context::*;
