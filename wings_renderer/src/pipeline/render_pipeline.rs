/// RenderPipeline - an ordered sequence of subpasses (here exactly one)
///
/// Holds the current load/store configuration vector, indexed identically
/// to the render target's attachments. Mutated when MSAA toggles; replaced
/// wholesale (never patched) on shader refresh.

use crate::error::Result;
use crate::renderer::{ClearValue, CommandList, LoadStoreOp};
use crate::target::{AttachmentRole, RenderTarget};
use super::subpass::ForwardSubpass;

pub struct RenderPipeline {
    subpasses: Vec<ForwardSubpass>,
    load_store: Vec<LoadStoreOp>,
}

impl RenderPipeline {
    /// Create an empty pipeline; subpasses are added before first use
    pub fn new() -> Self {
        Self {
            subpasses: Vec::new(),
            load_store: Vec::new(),
        }
    }

    /// Append a subpass
    pub fn add_subpass(&mut self, subpass: ForwardSubpass) {
        self.subpasses.push(subpass);
    }

    /// Number of subpasses
    pub fn subpass_count(&self) -> usize {
        self.subpasses.len()
    }

    /// The subpass currently being configured (the scene subpass)
    pub fn active_subpass(&self) -> &ForwardSubpass {
        &self.subpasses[0]
    }

    /// Mutable access to the active subpass
    pub fn active_subpass_mut(&mut self) -> &mut ForwardSubpass {
        &mut self.subpasses[0]
    }

    /// Replace the per-attachment load/store operations
    pub fn set_load_store(&mut self, load_store: Vec<LoadStoreOp>) {
        self.load_store = load_store;
    }

    /// Current per-attachment load/store operations
    pub fn load_store(&self) -> &[LoadStoreOp] {
        &self.load_store
    }

    /// Begin the render pass over the target and record every subpass.
    ///
    /// The pass is left open so the caller can draw an overlay into it;
    /// the caller ends the pass.
    pub fn draw(&self, cmd: &mut dyn CommandList, render_target: &RenderTarget) -> Result<()> {
        let clear_values: Vec<ClearValue> = render_target
            .views()
            .iter()
            .map(|attachment| match attachment.role() {
                AttachmentRole::SwapchainColor => ClearValue::default_color(),
                AttachmentRole::Depth => ClearValue::default_depth_stencil(),
            })
            .collect();

        cmd.begin_render_pass(render_target.extent(), &self.load_store, &clear_values)?;

        for subpass in &self.subpasses {
            subpass.draw(cmd)?;
        }
        Ok(())
    }
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "render_pipeline_tests.rs"]
mod tests;
