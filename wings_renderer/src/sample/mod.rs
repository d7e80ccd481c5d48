/// Sample module - the capability interface and the forward sample

// Module declarations
pub mod sample;
pub mod pipeline_state;
pub mod gui;
pub mod forward_sample;

// Re-export everything
pub use sample::*;
pub use pipeline_state::*;
pub use gui::*;
pub use forward_sample::*;
