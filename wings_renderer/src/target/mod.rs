/// Target module - render target, attachments, and the attachment planner

// Module declarations
pub mod attachment;
pub mod render_target;
pub mod planner;

// Re-export everything
pub use attachment::*;
pub use render_target::*;
pub use planner::*;
