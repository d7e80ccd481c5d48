/// Attachment roles and the attachment index layout
///
/// The planner assigns every render-target image a semantic role and
/// publishes the index layout as one immutable value. Downstream code
/// (pipeline configurator, frame draw sequencer) reads the layout instead
/// of sharing mutable index fields.

use crate::renderer::{Image, ImageLayout};

/// Semantic role of an attachment within the render target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentRole {
    /// The presentable swapchain color image
    SwapchainColor,
    /// The transient depth buffer
    Depth,
}

/// One attachment: an owned image plus its per-frame layout state
pub struct Attachment {
    image: Box<dyn Image>,
    role: AttachmentRole,
    layout: ImageLayout,
}

impl Attachment {
    /// Wrap an image as an attachment. Layout starts Undefined.
    pub fn new(image: Box<dyn Image>, role: AttachmentRole) -> Self {
        Self {
            image,
            role,
            layout: ImageLayout::Undefined,
        }
    }

    /// The attached image
    pub fn image(&self) -> &dyn Image {
        self.image.as_ref()
    }

    /// Semantic role of this attachment
    pub fn role(&self) -> AttachmentRole {
        self.role
    }

    /// Current image layout
    pub fn layout(&self) -> ImageLayout {
        self.layout
    }

    pub(crate) fn set_layout(&mut self, layout: ImageLayout) {
        self.layout = layout;
    }
}

/// Immutable attachment index layout for one render target.
///
/// Recomputed by the planner on every render-target rebuild and threaded
/// explicitly through the configurator and the draw sequencer. The index
/// sets are singletons today; they are modeled as sets so additional color
/// or depth attachments slot in without interface changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentLayout {
    /// Index of the presentable swapchain color attachment
    pub i_swapchain: u32,
    /// Index of the depth attachment
    pub i_depth: u32,
    /// Indices of all color attachments
    pub color_atts: Vec<u32>,
    /// Indices of all depth attachments
    pub depth_atts: Vec<u32>,
}

impl AttachmentLayout {
    /// Number of attachments this layout references (highest index + 1)
    pub fn attachment_count(&self) -> u32 {
        self.color_atts
            .iter()
            .chain(self.depth_atts.iter())
            .copied()
            .max()
            .map_or(0, |i| i + 1)
    }
}
