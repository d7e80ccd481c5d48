/// RenderContext trait and frame statistics collection

use rustc_hash::FxHashSet;
use crate::error::Result;
use crate::renderer::{Device, Extent2D, ImageUsage};

/// Render context trait
///
/// Owns the swapchain and the per-frame resources behind it. The sample
/// drives it when the surface or the swapchain configuration changes;
/// everything else (acquire/present cycle, frame pooling) stays inside
/// the framework.
pub trait RenderContext: Send + Sync {
    /// Get the GPU device backing this context
    fn device(&self) -> &dyn Device;

    /// Current surface extent in pixels
    fn surface_extent(&self) -> Extent2D;

    /// Recreate the swapchain with the given image usage flags.
    ///
    /// Invalidates all render targets built from the old swapchain images;
    /// the framework rebuilds them through the sample's render-target
    /// factory on the next acquire.
    ///
    /// The caller must have stalled the device first: changing swapchain
    /// image usage while images are in flight is undefined.
    fn update_swapchain(&mut self, usage: ImageUsage) -> Result<()>;
}

// ===== STATISTICS =====

/// Index of a collectable frame statistic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatIndex {
    /// CPU frame times
    FrameTimes,
    /// GPU external memory read bytes
    GpuExtReadBytes,
    /// GPU external memory write bytes
    GpuExtWriteBytes,
}

/// Frame statistics collector
///
/// Stats are opt-in: only requested indices are tracked. Registration
/// happens once during sample setup.
#[derive(Debug, Default)]
pub struct Stats {
    /// Requested statistic indices
    requested: FxHashSet<StatIndex>,
    /// Last frame time in seconds (tracked when FrameTimes is requested)
    last_frame_time: f32,
    /// Frames observed since creation
    frame_count: u64,
}

impl Stats {
    /// Create a new collector with no requested stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Request collection of the given statistics
    pub fn request_stats(&mut self, stats: &[StatIndex]) {
        for stat in stats {
            self.requested.insert(*stat);
        }
    }

    /// Returns true if the given statistic was requested
    pub fn is_requested(&self, stat: StatIndex) -> bool {
        self.requested.contains(&stat)
    }

    /// Number of requested statistics
    pub fn requested_count(&self) -> usize {
        self.requested.len()
    }

    /// Record one frame
    ///
    /// # Arguments
    ///
    /// * `delta_time` - Frame time in seconds
    pub fn update(&mut self, delta_time: f32) {
        self.frame_count += 1;
        if self.is_requested(StatIndex::FrameTimes) {
            self.last_frame_time = delta_time;
        }
    }

    /// Last recorded frame time in seconds
    pub fn last_frame_time(&self) -> f32 {
        self.last_frame_time
    }

    /// Frames observed since creation
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
