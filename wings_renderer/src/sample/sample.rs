/// Sample capability interface
///
/// The framework's main loop drives a sample through this trait instead of
/// subclassing: prepare once, then update + draw per frame, draw_gui during
/// UI composition. The render-target factory is part of the interface so
/// the render context can rebuild targets whenever the swapchain is
/// invalidated.

use crate::error::Result;
use crate::renderer::{CommandList, Image, RenderContext, SampleCount};
use crate::target::RenderTarget;
use super::forward_sample::ForwardSample;

/// Options handed to `Sample::prepare`
#[derive(Debug, Clone)]
pub struct SampleOptions {
    /// Asset path of the scene to render, passed through to the loader
    pub scene_path: String,
    /// Frames the render context may record ahead
    pub render_ahead: u32,
    /// Initial multisample configuration
    pub sample_count: SampleCount,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            scene_path: "scenes/geosphere.gltf".to_string(),
            render_ahead: 1,
            sample_count: SampleCount::S1,
        }
    }
}

/// A renderable sample, driven by the framework's main loop
pub trait Sample {
    /// One-time setup: scene, camera, pipeline, stats registration.
    ///
    /// A failure here aborts sample startup.
    fn prepare(&mut self, options: &SampleOptions) -> Result<()>;

    /// Per-frame update, called before draw.
    ///
    /// Consumes a pending shader-refresh request (at most one rebuild per
    /// cycle) and advances frame statistics.
    fn update(&mut self, delta_time: f32) -> Result<()>;

    /// Record one frame into the command list
    fn draw(&mut self, cmd: &mut dyn CommandList, render_target: &mut RenderTarget)
        -> Result<()>;

    /// Compose the sample's GUI options
    fn draw_gui(&mut self);

    /// Build the render target for a freshly acquired swapchain image.
    ///
    /// Called by the render context once per swapchain image and again
    /// after every swapchain invalidation. Ownership of the image
    /// transfers into the returned target.
    fn create_render_target(&mut self, swapchain_image: Box<dyn Image>) -> Result<RenderTarget>;
}

/// Factory producing the forward-rendering sample
pub fn create_forward_sample(context: Box<dyn RenderContext>) -> Box<dyn Sample> {
    Box::new(ForwardSample::new(context))
}
