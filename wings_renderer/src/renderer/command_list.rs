/// CommandList trait - for recording rendering commands

use bitflags::bitflags;
use crate::error::Result;
use crate::renderer::{ClearValue, Extent2D, Image, ImageLayout, LoadStoreOp};

bitflags! {
    /// Memory access mask for barriers
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AccessFlags: u32 {
        const COLOR_ATTACHMENT_WRITE = 1 << 0;
        const DEPTH_STENCIL_ATTACHMENT_READ = 1 << 1;
        const DEPTH_STENCIL_ATTACHMENT_WRITE = 1 << 2;
        const TRANSFER_READ = 1 << 3;
        const TRANSFER_WRITE = 1 << 4;
        const SHADER_READ = 1 << 5;
    }
}

bitflags! {
    /// Pipeline stage mask for barriers
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PipelineStages: u32 {
        const TOP_OF_PIPE = 1 << 0;
        const COLOR_ATTACHMENT_OUTPUT = 1 << 1;
        const EARLY_FRAGMENT_TESTS = 1 << 2;
        const LATE_FRAGMENT_TESTS = 1 << 3;
        const FRAGMENT_SHADER = 1 << 4;
        const TRANSFER = 1 << 5;
        const BOTTOM_OF_PIPE = 1 << 6;
    }
}

/// Image memory barrier: a layout transition plus its synchronization scope.
///
/// Empty access and stage masks mean "no dependency on that side", used when
/// the prior content is discarded (old layout Undefined).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageMemoryBarrier {
    /// Layout the image is currently in
    pub old_layout: ImageLayout,
    /// Layout the image transitions to
    pub new_layout: ImageLayout,
    /// Accesses that must complete before the transition
    pub src_access: AccessFlags,
    /// Accesses that wait on the transition
    pub dst_access: AccessFlags,
    /// Stages that must complete before the transition
    pub src_stage: PipelineStages,
    /// Stages that wait on the transition
    pub dst_stage: PipelineStages,
}

impl Default for ImageMemoryBarrier {
    fn default() -> Self {
        Self {
            old_layout: ImageLayout::Undefined,
            new_layout: ImageLayout::Undefined,
            src_access: AccessFlags::empty(),
            dst_access: AccessFlags::empty(),
            src_stage: PipelineStages::empty(),
            dst_stage: PipelineStages::empty(),
        }
    }
}

/// Viewport dimensions and depth range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

/// 2D rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect2D {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Shader stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

/// Command list for recording rendering commands
///
/// Commands are recorded in strict order on a single thread and later
/// submitted to the GPU by the framework's main loop.
pub trait CommandList: Send + Sync {
    /// Record an image layout transition
    ///
    /// # Arguments
    ///
    /// * `image` - Image whose layout is transitioned
    /// * `barrier` - Old/new layout plus synchronization scope
    fn image_memory_barrier(&mut self, image: &dyn Image, barrier: ImageMemoryBarrier)
        -> Result<()>;

    /// Set the viewport
    fn set_viewport(&mut self, viewport: Viewport) -> Result<()>;

    /// Set the scissor rectangle
    fn set_scissor(&mut self, scissor: Rect2D) -> Result<()>;

    /// Begin a render pass over the given extent
    ///
    /// # Arguments
    ///
    /// * `extent` - Full render area
    /// * `load_store` - Per-attachment load/store operations, indexed like
    ///   the render target's attachments
    /// * `clear_values` - Clear values for attachments with LoadOp::Clear
    fn begin_render_pass(
        &mut self,
        extent: Extent2D,
        load_store: &[LoadStoreOp],
        clear_values: &[ClearValue],
    ) -> Result<()>;

    /// End the current render pass
    fn end_render_pass(&mut self) -> Result<()>;

    /// Push constants to the pipeline
    ///
    /// # Arguments
    ///
    /// * `stages` - Shader stages that will access the push constants
    /// * `offset` - Offset in bytes into the push constant range
    /// * `data` - Data to push
    fn push_constants(&mut self, stages: &[ShaderStage], offset: u32, data: &[u8]) -> Result<()>;

    /// Draw vertices
    ///
    /// # Arguments
    ///
    /// * `vertex_count` - Number of vertices to draw
    /// * `first_vertex` - Index of first vertex
    fn draw(&mut self, vertex_count: u32, first_vertex: u32) -> Result<()>;
}
