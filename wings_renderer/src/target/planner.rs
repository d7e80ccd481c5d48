/// Attachment planner - builds the render target for a swapchain image
///
/// Decides attachment count, formats, usages, and indices for a given
/// swapchain image and multisample setting, and publishes the result as
/// one immutable plan.

use crate::error::Result;
use crate::render_debug;
use crate::renderer::{
    suitable_depth_format, Device, Image, ImageDesc, ImageUsage, LoadOp, LoadStoreOp,
    SampleCount, StoreOp,
};
use super::attachment::{Attachment, AttachmentLayout, AttachmentRole};
use super::render_target::RenderTarget;

/// Everything the planner derives for one swapchain image: the target
/// itself, the attachment index layout, and the initial load/store vector
/// (indexed identically to the target's attachments).
pub struct RenderTargetPlan {
    pub render_target: RenderTarget,
    pub layout: AttachmentLayout,
    pub load_store: Vec<LoadStoreOp>,
}

/// Build the render target for a freshly acquired swapchain image.
///
/// Produces exactly two attachments:
/// - Attachment 0: the provided color image, load CLEAR / store STORE.
/// - Attachment 1: a newly allocated depth image matching the color
///   extent, in the most suitable supported depth format, usage
///   depth-stencil | transient, at the current sample count,
///   load CLEAR / store DONT_CARE.
///
/// Ownership of the swapchain image transfers into the returned target.
///
/// # Errors
///
/// Propagates `NoSuitableDepthFormat` if the device supports no depth
/// format; rendering cannot proceed without one.
pub fn plan_render_target(
    device: &dyn Device,
    swapchain_image: Box<dyn Image>,
    sample_count: SampleCount,
) -> Result<RenderTargetPlan> {
    let extent = swapchain_image.info().extent;

    let depth_format = suitable_depth_format(device)?;
    // Depth attachments are transient
    let depth_usage = ImageUsage::DEPTH_STENCIL_ATTACHMENT | ImageUsage::TRANSIENT_ATTACHMENT;

    let depth_image = device.create_image(ImageDesc {
        extent,
        format: depth_format,
        usage: depth_usage,
        sample_count,
    })?;

    let mut attachments = Vec::new();
    let mut load_store = Vec::new();

    // Attachment 0 - Swapchain
    let i_swapchain = attachments.len() as u32;
    attachments.push(Attachment::new(swapchain_image, AttachmentRole::SwapchainColor));
    load_store.push(LoadStoreOp {
        load_op: LoadOp::Clear,
        store_op: StoreOp::Store,
    });

    // Attachment 1 - Depth
    let i_depth = attachments.len() as u32;
    attachments.push(Attachment::new(depth_image, AttachmentRole::Depth));
    load_store.push(LoadStoreOp {
        load_op: LoadOp::Clear,
        store_op: StoreOp::DontCare,
    });

    let layout = AttachmentLayout {
        i_swapchain,
        i_depth,
        color_atts: vec![i_swapchain],
        depth_atts: vec![i_depth],
    };

    render_debug!("wings::planner",
        "planned render target {}x{}, depth format {:?}, {} samples",
        extent.width, extent.height, depth_format, sample_count.as_u32());

    Ok(RenderTargetPlan {
        render_target: RenderTarget::new(attachments)?,
        layout,
        load_store,
    })
}

#[cfg(test)]
#[path = "planner_tests.rs"]
mod tests;
