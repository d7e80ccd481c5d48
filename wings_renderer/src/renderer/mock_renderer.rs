/// Mock GPU abstraction for unit tests (no GPU required)
///
/// These mocks record everything the sample asks of the GPU layer into
/// shared handles, so tests can hold clones of the handles while the
/// sample owns the mocks.

use std::sync::{Arc, Mutex};

use crate::error::Result;
use crate::renderer::{
    CommandList, Device, Extent2D, Format, Image, ImageDesc, ImageInfo,
    ImageMemoryBarrier, ImageUsage, ClearValue, LoadStoreOp, Rect2D,
    RenderContext, SampleCount, ShaderStage, Viewport,
};

// ============================================================================
// Mock Image
// ============================================================================

#[derive(Debug)]
pub struct MockImage {
    pub info: ImageInfo,
}

impl MockImage {
    pub fn new(
        extent: Extent2D,
        format: Format,
        usage: ImageUsage,
        sample_count: SampleCount,
    ) -> Self {
        Self {
            info: ImageInfo { extent, format, usage, sample_count },
        }
    }

    /// A presentable swapchain color image with the default usage flags
    pub fn swapchain(extent: Extent2D) -> Self {
        Self::new(
            extent,
            Format::B8G8R8A8_UNORM,
            ImageUsage::COLOR_ATTACHMENT | ImageUsage::TRANSFER_SRC,
            SampleCount::S1,
        )
    }
}

impl Image for MockImage {
    fn info(&self) -> &ImageInfo {
        &self.info
    }
}

// ============================================================================
// Mock Device
// ============================================================================

pub struct MockDevice {
    /// Depth formats this device reports as supported
    pub supported_depth_formats: Vec<Format>,
    /// Descriptors of every image created through this device
    pub created_images: Arc<Mutex<Vec<ImageDesc>>>,
    /// Number of wait_idle() calls
    pub wait_idle_calls: Arc<Mutex<u32>>,
}

impl MockDevice {
    /// A device supporting all depth formats
    pub fn new() -> Self {
        Self {
            supported_depth_formats: vec![
                Format::D32_FLOAT,
                Format::D24_UNORM_S8_UINT,
                Format::D16_UNORM,
            ],
            created_images: Arc::new(Mutex::new(Vec::new())),
            wait_idle_calls: Arc::new(Mutex::new(0)),
        }
    }

    /// A device supporting only the given depth formats
    pub fn with_depth_formats(formats: &[Format]) -> Self {
        Self {
            supported_depth_formats: formats.to_vec(),
            ..Self::new()
        }
    }

    /// Descriptors of created images
    pub fn get_created_images(&self) -> Vec<ImageDesc> {
        self.created_images.lock().unwrap().clone()
    }

    /// Number of wait_idle() calls so far
    pub fn get_wait_idle_calls(&self) -> u32 {
        *self.wait_idle_calls.lock().unwrap()
    }
}

impl Device for MockDevice {
    fn supports_depth_format(&self, format: Format) -> bool {
        self.supported_depth_formats.contains(&format)
    }

    fn create_image(&self, desc: ImageDesc) -> Result<Box<dyn Image>> {
        self.created_images.lock().unwrap().push(desc);
        Ok(Box::new(MockImage::new(
            desc.extent,
            desc.format,
            desc.usage,
            desc.sample_count,
        )))
    }

    fn wait_idle(&self) -> Result<()> {
        *self.wait_idle_calls.lock().unwrap() += 1;
        Ok(())
    }
}

// ============================================================================
// Mock RenderContext
// ============================================================================

pub struct MockRenderContext {
    pub device: MockDevice,
    pub extent: Extent2D,
    /// Usage flags of every update_swapchain() request, in order
    pub swapchain_updates: Arc<Mutex<Vec<ImageUsage>>>,
}

impl MockRenderContext {
    pub fn new(device: MockDevice, extent: Extent2D) -> Self {
        Self {
            device,
            extent,
            swapchain_updates: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Usage flags requested so far via update_swapchain()
    pub fn get_swapchain_updates(&self) -> Vec<ImageUsage> {
        self.swapchain_updates.lock().unwrap().clone()
    }
}

impl RenderContext for MockRenderContext {
    fn device(&self) -> &dyn Device {
        &self.device
    }

    fn surface_extent(&self) -> Extent2D {
        self.extent
    }

    fn update_swapchain(&mut self, usage: ImageUsage) -> Result<()> {
        self.swapchain_updates.lock().unwrap().push(usage);
        Ok(())
    }
}

// ============================================================================
// Mock CommandList
// ============================================================================

/// Records every command by name, plus the full argument values for the
/// commands the draw-sequence tests assert on.
#[derive(Debug)]
pub struct MockCommandList {
    pub commands: Vec<String>,
    pub barriers: Vec<ImageMemoryBarrier>,
    pub viewports: Vec<Viewport>,
    pub scissors: Vec<Rect2D>,
    pub render_pass_load_store: Vec<Vec<LoadStoreOp>>,
}

impl MockCommandList {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            barriers: Vec::new(),
            viewports: Vec::new(),
            scissors: Vec::new(),
            render_pass_load_store: Vec::new(),
        }
    }

    /// Number of recorded commands with the given name
    pub fn count(&self, name: &str) -> usize {
        self.commands.iter().filter(|c| c.starts_with(name)).count()
    }
}

impl CommandList for MockCommandList {
    fn image_memory_barrier(
        &mut self,
        _image: &dyn Image,
        barrier: ImageMemoryBarrier,
    ) -> Result<()> {
        self.commands.push(format!(
            "image_memory_barrier {:?}->{:?}",
            barrier.old_layout, barrier.new_layout
        ));
        self.barriers.push(barrier);
        Ok(())
    }

    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        self.commands
            .push(format!("set_viewport {}x{}", viewport.width, viewport.height));
        self.viewports.push(viewport);
        Ok(())
    }

    fn set_scissor(&mut self, scissor: Rect2D) -> Result<()> {
        self.commands
            .push(format!("set_scissor {}x{}", scissor.width, scissor.height));
        self.scissors.push(scissor);
        Ok(())
    }

    fn begin_render_pass(
        &mut self,
        _extent: Extent2D,
        load_store: &[LoadStoreOp],
        _clear_values: &[ClearValue],
    ) -> Result<()> {
        self.commands.push("begin_render_pass".to_string());
        self.render_pass_load_store.push(load_store.to_vec());
        Ok(())
    }

    fn end_render_pass(&mut self) -> Result<()> {
        self.commands.push("end_render_pass".to_string());
        Ok(())
    }

    fn push_constants(&mut self, _stages: &[ShaderStage], _offset: u32, data: &[u8]) -> Result<()> {
        self.commands.push(format!("push_constants {}", data.len()));
        Ok(())
    }

    fn draw(&mut self, vertex_count: u32, first_vertex: u32) -> Result<()> {
        self.commands
            .push(format!("draw {} {}", vertex_count, first_vertex));
        Ok(())
    }
}

#[cfg(test)]
#[path = "mock_renderer_tests.rs"]
mod tests;
