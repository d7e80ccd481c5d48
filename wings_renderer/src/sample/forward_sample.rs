/// ForwardSample - single-scene forward rendering with optional MSAA
///
/// Owns the scene pipeline and the attachment plan derived from the last
/// render-target rebuild. Two responsibilities live here:
///
/// - Pipeline configurator: rebuilds the pipeline on shader refresh,
///   applies the load/store policy and sample count to the scene subpass,
///   and recreates the swapchain when the configuration changes.
/// - Frame draw sequencer: per frame, transitions attachment layouts,
///   sets viewport/scissor, runs the subpass chain plus the optional GUI
///   overlay, and hands the swapchain image off to presentation.

use std::sync::Arc;

use crate::error::Result;
use crate::pipeline::{policy_for, ForwardSubpass, RenderPipeline, ShaderSource};
use crate::renderer::{
    AccessFlags, CommandList, Image, ImageLayout, ImageMemoryBarrier, ImageUsage,
    LoadStoreOp, PipelineStages, Rect2D, RenderContext, SampleCount, StatIndex, Stats,
    Viewport,
};
use crate::scene::{load_scene, PerspectiveCamera, Scene};
use crate::target::{plan_render_target, AttachmentLayout, AttachmentRole, RenderTarget};
use crate::{render_bail, render_info, render_warn};
use super::gui::GuiOverlay;
use super::pipeline_state::PipelineState;
use super::sample::{Sample, SampleOptions};

/// Scene shader sources (resolved by the framework's shader compiler)
const SCENE_VERTEX_SHADER: &str = "wings/phong.vert";
const SCENE_FRAGMENT_SHADER: &str = "wings/phong.frag";

/// Immutable sample configuration, passed into the planner and the
/// load/store policy at rebuild time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleConfig {
    /// Samples per pixel; more than 1 enables MSAA
    pub sample_count: SampleCount,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            sample_count: SampleCount::S1,
        }
    }
}

pub struct ForwardSample {
    context: Box<dyn RenderContext>,
    config: SampleConfig,
    pipeline_state: PipelineState,
    /// Scene pipeline: renders and lights the scene (optionally using MSAA)
    scene_pipeline: Option<RenderPipeline>,
    scene: Option<Arc<Scene>>,
    camera: Option<Arc<PerspectiveCamera>>,
    gui: Option<Box<dyn GuiOverlay>>,
    /// Attachment plan from the last render-target rebuild
    attachment_layout: Option<AttachmentLayout>,
    scene_load_store: Vec<LoadStoreOp>,
    stats: Stats,
}

impl ForwardSample {
    /// Create the sample around an exclusively owned render context
    pub fn new(context: Box<dyn RenderContext>) -> Self {
        Self {
            context,
            config: SampleConfig::default(),
            pipeline_state: PipelineState::new(),
            scene_pipeline: None,
            scene: None,
            camera: None,
            gui: None,
            attachment_layout: None,
            scene_load_store: Vec::new(),
            stats: Stats::new(),
        }
    }

    /// Attach a GUI overlay drawn within the scene pass
    pub fn set_gui(&mut self, gui: Box<dyn GuiOverlay>) {
        self.gui = Some(gui);
    }

    /// Frame statistics collector
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Current multisample configuration
    pub fn sample_count(&self) -> SampleCount {
        self.config.sample_count
    }

    /// Current pipeline refresh state
    pub fn pipeline_state(&self) -> PipelineState {
        self.pipeline_state
    }

    /// Attachment layout from the last render-target rebuild
    pub fn attachment_layout(&self) -> Option<&AttachmentLayout> {
        self.attachment_layout.as_ref()
    }

    /// The scene pipeline, once built
    pub fn scene_pipeline(&self) -> Option<&RenderPipeline> {
        self.scene_pipeline.as_ref()
    }

    /// Change the multisample configuration.
    ///
    /// Invalidates the render targets: stalls the device, then recreates
    /// the swapchain so the depth attachment is rebuilt at the new sample
    /// count. Rare, user-triggered; safe to re-trigger.
    pub fn set_sample_count(&mut self, sample_count: SampleCount) -> Result<()> {
        if self.config.sample_count == sample_count {
            return Ok(());
        }
        self.config.sample_count = sample_count;
        render_info!("wings::ForwardSample",
            "Sample count set to {}", sample_count.as_u32());
        self.update_pipelines()
    }

    /// Request a shader refresh, applied on the next update cycle
    pub fn request_shader_refresh(&mut self) {
        self.pipeline_state.request_refresh();
    }

    // ===== PIPELINE CONFIGURATOR =====

    /// Build a new scene pipeline bound to the given shaders.
    ///
    /// The old pipeline is dropped only after the new one is fully
    /// constructed, so there is never a window with no pipeline.
    fn rebuild_pipeline(
        &mut self,
        vertex_shader: ShaderSource,
        fragment_shader: ShaderSource,
    ) -> Result<()> {
        let Some(scene) = self.scene.clone() else {
            render_bail!("wings::ForwardSample", "rebuild_pipeline before prepare: no scene");
        };
        let Some(camera) = self.camera.clone() else {
            render_bail!("wings::ForwardSample", "rebuild_pipeline before prepare: no camera");
        };

        let scene_subpass = ForwardSubpass::new(vertex_shader, fragment_shader, scene, camera);
        let mut pipeline = RenderPipeline::new();
        pipeline.add_subpass(scene_subpass);

        self.scene_pipeline = Some(pipeline);
        Ok(())
    }

    /// Push the attachment plan and the load/store policy into the active
    /// subpass.
    ///
    /// Called after every render-target rebuild and after every pipeline
    /// rebuild. A no-op until both the plan and the pipeline exist.
    fn apply_attachment_policy(&mut self) {
        let Some(layout) = self.attachment_layout.clone() else {
            return;
        };
        let Some(pipeline) = self.scene_pipeline.as_mut() else {
            return;
        };
        let sample_count = self.config.sample_count;

        {
            let subpass = pipeline.active_subpass_mut();
            subpass.set_sample_count(sample_count);

            // Render color to the swapchain
            let color = policy_for(AttachmentRole::SwapchainColor, sample_count);
            subpass.set_output_attachments(layout.color_atts.clone());
            subpass.set_color_resolve_attachments(Vec::new());
            self.scene_load_store[layout.i_swapchain as usize].store_op = color.store_op;

            // Depth is transient, it will not be needed after the pass;
            // if it is multisampled there is no need to resolve it
            let depth = policy_for(AttachmentRole::Depth, sample_count);
            subpass.set_depth_stencil_resolve_attachment(depth.resolve_attachment);
            subpass.set_depth_stencil_resolve_mode(depth.resolve_mode);
            self.scene_load_store[layout.i_depth as usize].store_op = depth.store_op;
        }

        pipeline.set_load_store(self.scene_load_store.clone());
    }

    /// Recreate the swapchain with the default usage flags.
    ///
    /// Stalls the device first: changing swapchain image usage while
    /// images are in flight is undefined.
    fn refresh_swapchain(&mut self) -> Result<()> {
        // Default swapchain usage flags
        let swapchain_usage = ImageUsage::COLOR_ATTACHMENT | ImageUsage::TRANSFER_SRC;

        self.context.device().wait_idle()?;
        self.context.update_swapchain(swapchain_usage)
    }

    /// Apply the current policy, then rebuild the swapchain
    fn update_pipelines(&mut self) -> Result<()> {
        self.apply_attachment_policy();
        self.refresh_swapchain()
    }
}

impl Sample for ForwardSample {
    fn prepare(&mut self, options: &SampleOptions) -> Result<()> {
        self.config.sample_count = options.sample_count;

        let scene = load_scene(&options.scene_path)?;
        let camera = PerspectiveCamera::new(self.context.surface_extent());
        self.scene = Some(Arc::new(scene));
        self.camera = Some(Arc::new(camera));

        self.rebuild_pipeline(
            ShaderSource::new(SCENE_VERTEX_SHADER),
            ShaderSource::new(SCENE_FRAGMENT_SHADER),
        )?;
        self.update_pipelines()?;

        self.stats.request_stats(&[
            StatIndex::FrameTimes,
            StatIndex::GpuExtReadBytes,
            StatIndex::GpuExtWriteBytes,
        ]);

        render_info!("wings::ForwardSample",
            "Prepared: scene '{}', {} render-ahead frame(s)",
            options.scene_path, options.render_ahead);
        Ok(())
    }

    fn update(&mut self, delta_time: f32) -> Result<()> {
        if self.pipeline_state.take_refresh() {
            self.rebuild_pipeline(
                ShaderSource::new(SCENE_VERTEX_SHADER),
                ShaderSource::new(SCENE_FRAGMENT_SHADER),
            )?;
            self.update_pipelines()?;
        }

        self.stats.update(delta_time);
        Ok(())
    }

    fn create_render_target(&mut self, swapchain_image: Box<dyn Image>) -> Result<RenderTarget> {
        let plan = plan_render_target(
            self.context.device(),
            swapchain_image,
            self.config.sample_count,
        )?;

        self.attachment_layout = Some(plan.layout);
        self.scene_load_store = plan.load_store;
        self.apply_attachment_policy();

        Ok(plan.render_target)
    }

    fn draw(
        &mut self,
        cmd: &mut dyn CommandList,
        render_target: &mut RenderTarget,
    ) -> Result<()> {
        let Some(layout) = self.attachment_layout.clone() else {
            render_bail!("wings::ForwardSample", "draw before any render target was created");
        };
        let view_count = render_target.view_count();

        let swapchain_layout = ImageLayout::ColorAttachment;
        {
            // Prior content is discarded, so no dependency on the source side
            let barrier = ImageMemoryBarrier {
                old_layout: ImageLayout::Undefined,
                new_layout: swapchain_layout,
                dst_access: AccessFlags::COLOR_ATTACHMENT_WRITE,
                dst_stage: PipelineStages::COLOR_ATTACHMENT_OUTPUT,
                ..Default::default()
            };

            for &i_color in &layout.color_atts {
                debug_assert!(
                    (i_color as usize) < view_count,
                    "color attachment index {} out of range ({} views)",
                    i_color, view_count
                );
                cmd.image_memory_barrier(render_target.attachment(i_color).image(), barrier)?;
                render_target.set_layout(i_color, swapchain_layout);
            }
        }

        {
            let barrier = ImageMemoryBarrier {
                old_layout: ImageLayout::Undefined,
                new_layout: ImageLayout::DepthStencilAttachment,
                src_stage: PipelineStages::TOP_OF_PIPE,
                dst_access: AccessFlags::DEPTH_STENCIL_ATTACHMENT_READ
                    | AccessFlags::DEPTH_STENCIL_ATTACHMENT_WRITE,
                dst_stage: PipelineStages::EARLY_FRAGMENT_TESTS
                    | PipelineStages::LATE_FRAGMENT_TESTS,
                ..Default::default()
            };

            for &i_depth in &layout.depth_atts {
                debug_assert!(
                    (i_depth as usize) < view_count,
                    "depth attachment index {} out of range ({} views)",
                    i_depth, view_count
                );
                cmd.image_memory_barrier(render_target.attachment(i_depth).image(), barrier)?;
                render_target.set_layout(i_depth, ImageLayout::DepthStencilAttachment);
            }
        }

        let extent = render_target.extent();
        cmd.set_viewport(Viewport {
            x: 0.0,
            y: 0.0,
            width: extent.width as f32,
            height: extent.height as f32,
            min_depth: 0.0,
            max_depth: 1.0,
        })?;
        cmd.set_scissor(Rect2D {
            x: 0,
            y: 0,
            width: extent.width,
            height: extent.height,
        })?;

        let Some(pipeline) = self.scene_pipeline.as_ref() else {
            render_bail!("wings::ForwardSample", "draw before prepare: no scene pipeline");
        };
        pipeline.draw(cmd, render_target)?;

        if let Some(gui) = self.gui.as_mut() {
            gui.draw(cmd)?;
        }

        cmd.end_render_pass()?;

        {
            // Prepare swapchain for presentation
            let barrier = ImageMemoryBarrier {
                old_layout: swapchain_layout,
                new_layout: ImageLayout::PresentSrc,
                src_access: AccessFlags::COLOR_ATTACHMENT_WRITE,
                src_stage: PipelineStages::COLOR_ATTACHMENT_OUTPUT,
                dst_stage: PipelineStages::BOTTOM_OF_PIPE,
                ..Default::default()
            };

            debug_assert!(
                (layout.i_swapchain as usize) < view_count,
                "swapchain attachment index {} out of range ({} views)",
                layout.i_swapchain, view_count
            );
            cmd.image_memory_barrier(
                render_target.attachment(layout.i_swapchain).image(),
                barrier,
            )?;
        }

        Ok(())
    }

    fn draw_gui(&mut self) {
        let Some(gui) = self.gui.as_mut() else {
            return;
        };
        if gui.button("Refresh shader") {
            self.pipeline_state.request_refresh();
            render_warn!("wings::ForwardSample", "Refresh shader");
        }
    }
}

#[cfg(test)]
#[path = "forward_sample_tests.rs"]
mod tests;
