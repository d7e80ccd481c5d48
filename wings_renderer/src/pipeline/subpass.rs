/// ForwardSubpass - renders and lights the scene in one subpass

use std::sync::Arc;
use crate::error::Result;
use crate::renderer::{CommandList, ResolveMode, SampleCount, ShaderStage, ATTACHMENT_UNUSED};
use crate::scene::{PerspectiveCamera, Scene};

/// Reference to a shader source file, resolved by the framework's shader
/// compiler (outside this crate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    path: String,
}

impl ShaderSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// The scene subpass: which attachments it writes, which it resolves into,
/// and the geometry it records.
///
/// Owned exclusively by the RenderPipeline.
pub struct ForwardSubpass {
    vertex_shader: ShaderSource,
    fragment_shader: ShaderSource,
    scene: Arc<Scene>,
    camera: Arc<PerspectiveCamera>,
    sample_count: SampleCount,
    /// Attachment indices written as color output
    output_attachments: Vec<u32>,
    /// Color resolve destinations (empty = writeback resolve disabled)
    color_resolve_attachments: Vec<u32>,
    /// Depth/stencil resolve destination (ATTACHMENT_UNUSED = disabled)
    depth_stencil_resolve_attachment: u32,
    depth_stencil_resolve_mode: ResolveMode,
}

impl ForwardSubpass {
    /// Create a subpass bound to the given shaders, scene, and camera.
    ///
    /// Starts single-sampled, writing attachment 0, with all resolves
    /// disabled; the configurator overrides these from the attachment plan.
    pub fn new(
        vertex_shader: ShaderSource,
        fragment_shader: ShaderSource,
        scene: Arc<Scene>,
        camera: Arc<PerspectiveCamera>,
    ) -> Self {
        Self {
            vertex_shader,
            fragment_shader,
            scene,
            camera,
            sample_count: SampleCount::S1,
            output_attachments: vec![0],
            color_resolve_attachments: Vec::new(),
            depth_stencil_resolve_attachment: ATTACHMENT_UNUSED,
            depth_stencil_resolve_mode: ResolveMode::None,
        }
    }

    // ===== CONFIGURATION =====

    pub fn set_sample_count(&mut self, sample_count: SampleCount) {
        self.sample_count = sample_count;
    }

    pub fn sample_count(&self) -> SampleCount {
        self.sample_count
    }

    pub fn set_output_attachments(&mut self, attachments: Vec<u32>) {
        self.output_attachments = attachments;
    }

    pub fn output_attachments(&self) -> &[u32] {
        &self.output_attachments
    }

    pub fn set_color_resolve_attachments(&mut self, attachments: Vec<u32>) {
        self.color_resolve_attachments = attachments;
    }

    pub fn color_resolve_attachments(&self) -> &[u32] {
        &self.color_resolve_attachments
    }

    pub fn set_depth_stencil_resolve_attachment(&mut self, attachment: u32) {
        self.depth_stencil_resolve_attachment = attachment;
    }

    pub fn depth_stencil_resolve_attachment(&self) -> u32 {
        self.depth_stencil_resolve_attachment
    }

    pub fn set_depth_stencil_resolve_mode(&mut self, mode: ResolveMode) {
        self.depth_stencil_resolve_mode = mode;
    }

    pub fn depth_stencil_resolve_mode(&self) -> ResolveMode {
        self.depth_stencil_resolve_mode
    }

    pub fn vertex_shader(&self) -> &ShaderSource {
        &self.vertex_shader
    }

    pub fn fragment_shader(&self) -> &ShaderSource {
        &self.fragment_shader
    }

    // ===== RECORDING =====

    /// Record the scene geometry into the command list.
    ///
    /// Called within an active render pass. Pushes the camera's
    /// view-projection matrix, then draws each geometry.
    pub fn draw(&self, cmd: &mut dyn CommandList) -> Result<()> {
        let view_projection = self.camera.view_projection_matrix();
        cmd.push_constants(
            &[ShaderStage::Vertex],
            0,
            bytemuck::bytes_of(&view_projection),
        )?;

        for geometry in self.scene.geometries() {
            cmd.draw(geometry.vertex_count(), 0)?;
        }
        Ok(())
    }
}
