/// Tests for RenderTarget
///
/// These tests validate construction rules, attachment access, and layout
/// bookkeeping.

use super::*;
use crate::renderer::mock_renderer::MockImage;
use crate::renderer::{Extent2D, Format, ImageLayout, ImageUsage, SampleCount};
use crate::target::{Attachment, AttachmentRole};

fn extent() -> Extent2D {
    Extent2D {
        width: 1920,
        height: 1080,
    }
}

fn color_attachment(extent: Extent2D) -> Attachment {
    Attachment::new(
        Box::new(MockImage::swapchain(extent)),
        AttachmentRole::SwapchainColor,
    )
}

fn depth_attachment(extent: Extent2D) -> Attachment {
    Attachment::new(
        Box::new(MockImage::new(
            extent,
            Format::D32_FLOAT,
            ImageUsage::DEPTH_STENCIL_ATTACHMENT | ImageUsage::TRANSIENT_ATTACHMENT,
            SampleCount::S1,
        )),
        AttachmentRole::Depth,
    )
}

// ============================================================================
// Tests: Construction
// ============================================================================

#[test]
fn test_render_target_new() {
    let target =
        RenderTarget::new(vec![color_attachment(extent()), depth_attachment(extent())]).unwrap();

    assert_eq!(target.view_count(), 2);
    assert_eq!(target.extent(), extent());
}

#[test]
fn test_render_target_empty_fails() {
    let result = RenderTarget::new(Vec::new());
    assert!(result.is_err());
}

#[test]
fn test_render_target_extent_mismatch_fails() {
    let other = Extent2D {
        width: 640,
        height: 480,
    };
    let result = RenderTarget::new(vec![color_attachment(extent()), depth_attachment(other)]);
    assert!(result.is_err());
}

// ============================================================================
// Tests: Attachment access
// ============================================================================

#[test]
fn test_render_target_attachment_roles() {
    let target =
        RenderTarget::new(vec![color_attachment(extent()), depth_attachment(extent())]).unwrap();

    assert_eq!(target.attachment(0).role(), AttachmentRole::SwapchainColor);
    assert_eq!(target.attachment(1).role(), AttachmentRole::Depth);
    assert_eq!(target.views().len(), 2);
}

#[test]
fn test_attachments_start_undefined() {
    let target =
        RenderTarget::new(vec![color_attachment(extent()), depth_attachment(extent())]).unwrap();

    assert_eq!(target.attachment(0).layout(), ImageLayout::Undefined);
    assert_eq!(target.attachment(1).layout(), ImageLayout::Undefined);
}

#[test]
fn test_set_layout_updates_attachment() {
    let mut target =
        RenderTarget::new(vec![color_attachment(extent()), depth_attachment(extent())]).unwrap();

    target.set_layout(0, ImageLayout::ColorAttachment);
    target.set_layout(1, ImageLayout::DepthStencilAttachment);

    assert_eq!(target.attachment(0).layout(), ImageLayout::ColorAttachment);
    assert_eq!(
        target.attachment(1).layout(),
        ImageLayout::DepthStencilAttachment
    );
}
