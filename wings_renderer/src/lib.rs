/*!
# Wings Renderer

Single-scene forward-rendering sample built on a trait-based GPU abstraction.

The crate centers on the render-target / attachment lifecycle: given a freshly
acquired swapchain image, it decides how many attachments exist, their formats,
usages and load/store behavior, and how to transition their layouts safely
frame to frame, while supporting a runtime-toggleable multisample configuration
that forces pipeline and swapchain reconstruction.

## Architecture

- **renderer**: GPU abstraction traits consumed by the sample (Device, Image,
  CommandList, RenderContext). Backend implementations provide concrete types.
- **target**: RenderTarget, Attachment roles, and the attachment planner.
- **pipeline**: RenderPipeline, ForwardSubpass, and the load/store policy.
- **scene**: thin scene and camera collaborators.
- **sample**: the `Sample` capability interface and the forward sample itself
  (pipeline configurator + frame draw sequencer).
*/

// Internal modules
pub mod error;
pub mod log;
pub mod renderer;
pub mod target;
pub mod pipeline;
pub mod scene;
pub mod sample;

// Main wings namespace module
pub mod wings {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: render_* macros are NOT re-exported here - they are internal only
    }

    // GPU abstraction sub-module
    pub mod render {
        pub use crate::renderer::*;
    }

    // Render target sub-module
    pub mod target {
        pub use crate::target::*;
    }

    // Pipeline sub-module
    pub mod pipeline {
        pub use crate::pipeline::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Sample sub-module
    pub mod sample {
        pub use crate::sample::*;
    }
}

// Re-export math library at crate root
pub use glam;
