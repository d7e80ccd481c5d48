/// Image trait, image descriptor, and related value types

use bitflags::bitflags;

/// 2D extent in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent2D {
    pub width: u32,
    pub height: u32,
}

/// Image and attachment format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum Format {
    // Color formats
    R8G8B8A8_SRGB,
    R8G8B8A8_UNORM,
    B8G8R8A8_SRGB,
    B8G8R8A8_UNORM,

    // Depth formats
    D16_UNORM,
    D32_FLOAT,
    D24_UNORM_S8_UINT,
}

impl Format {
    /// Returns true if this is a depth or depth/stencil format
    pub fn is_depth(&self) -> bool {
        matches!(
            self,
            Format::D16_UNORM | Format::D32_FLOAT | Format::D24_UNORM_S8_UINT
        )
    }
}

/// Multisample count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleCount {
    /// 1 sample (no multisampling)
    S1,
    /// 2 samples
    S2,
    /// 4 samples
    S4,
    /// 8 samples
    S8,
}

impl SampleCount {
    /// Number of samples per pixel
    pub fn as_u32(&self) -> u32 {
        match self {
            SampleCount::S1 => 1,
            SampleCount::S2 => 2,
            SampleCount::S4 => 4,
            SampleCount::S8 => 8,
        }
    }

    /// Returns true if multisampling is enabled (more than 1 sample)
    pub fn is_multisampled(&self) -> bool {
        !matches!(self, SampleCount::S1)
    }
}

bitflags! {
    /// Image usage flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ImageUsage: u32 {
        /// Image can be sampled in shaders
        const SAMPLED = 1 << 0;
        /// Image can be bound as a color attachment
        const COLOR_ATTACHMENT = 1 << 1;
        /// Image can be bound as a depth/stencil attachment
        const DEPTH_STENCIL_ATTACHMENT = 1 << 2;
        /// Image backing may live in transient (lazily allocated) memory
        const TRANSIENT_ATTACHMENT = 1 << 3;
        /// Image can be the source of a transfer (screenshot, blit)
        const TRANSFER_SRC = 1 << 4;
        /// Image can be the destination of a transfer
        const TRANSFER_DST = 1 << 5;
    }
}

// ===== IMAGE DESC =====

/// Descriptor for creating an image
#[derive(Debug, Clone, Copy)]
pub struct ImageDesc {
    /// Extent in pixels
    pub extent: Extent2D,
    /// Pixel format
    pub format: Format,
    /// Usage flags
    pub usage: ImageUsage,
    /// Samples per pixel
    pub sample_count: SampleCount,
}

// ===== IMAGE INFO =====

/// Read-only properties of a created image.
///
/// Returned by `Image::info()` to query image properties
/// without exposing backend-specific details.
#[derive(Debug, Clone, Copy)]
pub struct ImageInfo {
    /// Extent in pixels
    pub extent: Extent2D,
    /// Pixel format
    pub format: Format,
    /// Usage flags
    pub usage: ImageUsage,
    /// Samples per pixel
    pub sample_count: SampleCount,
}

// ===== IMAGE TRAIT =====

/// Image resource trait
///
/// Implemented by backend-specific image types (e.g., a Vulkan image plus
/// its default view). The image is destroyed when dropped.
pub trait Image: Send + Sync {
    /// Get the read-only properties of this image
    fn info(&self) -> &ImageInfo;
}
