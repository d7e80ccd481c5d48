/// Pipeline module - render pipeline, forward subpass, and load/store policy

// Module declarations
pub mod load_store;
pub mod subpass;
pub mod render_pipeline;

// Re-export everything
pub use load_store::*;
pub use subpass::*;
pub use render_pipeline::*;
