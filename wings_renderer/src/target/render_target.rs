/// RenderTarget - the ordered attachment set for one swapchain image
///
/// Created once per acquired swapchain image (and again whenever the
/// swapchain is invalidated), exclusively owned by the render context
/// until the next acquire cycle recycles or replaces it.

use crate::error::Result;
use crate::render_bail;
use crate::renderer::{Extent2D, ImageLayout};
use super::attachment::Attachment;

/// An ordered sequence of attachments sized to the swapchain extent.
///
/// By convention index 0 is always the presentable color image and depth
/// sits at a fixed index; the planner encodes both in `AttachmentLayout`.
pub struct RenderTarget {
    attachments: Vec<Attachment>,
    extent: Extent2D,
}

impl RenderTarget {
    /// Build a render target from planned attachments.
    ///
    /// # Errors
    ///
    /// Fails if the attachment list is empty or the attachments disagree
    /// on extent.
    pub fn new(attachments: Vec<Attachment>) -> Result<Self> {
        let Some(first) = attachments.first() else {
            render_bail!("wings::RenderTarget", "render target needs at least one attachment");
        };
        let extent = first.image().info().extent;
        for (index, attachment) in attachments.iter().enumerate() {
            let other = attachment.image().info().extent;
            if other != extent {
                render_bail!("wings::RenderTarget",
                    "attachment {} extent {}x{} does not match {}x{}",
                    index, other.width, other.height, extent.width, extent.height);
            }
        }
        Ok(Self { attachments, extent })
    }

    /// All attachments, in index order
    pub fn views(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Number of attachments
    pub fn view_count(&self) -> usize {
        self.attachments.len()
    }

    /// Attachment at the given index
    pub fn attachment(&self, index: u32) -> &Attachment {
        &self.attachments[index as usize]
    }

    /// Record a layout change applied through a barrier
    pub fn set_layout(&mut self, index: u32, layout: ImageLayout) {
        self.attachments[index as usize].set_layout(layout);
    }

    /// Render area shared by all attachments
    pub fn extent(&self) -> Extent2D {
        self.extent
    }
}

#[cfg(test)]
#[path = "render_target_tests.rs"]
mod tests;
