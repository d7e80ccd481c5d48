/// Device trait - GPU resource allocation and synchronization

use crate::error::{Error, Result};
use crate::renderer::{Format, Image, ImageDesc};

/// Depth formats in preference order, best first
const DEPTH_FORMAT_PRIORITY: [Format; 3] = [
    Format::D32_FLOAT,
    Format::D24_UNORM_S8_UINT,
    Format::D16_UNORM,
];

/// GPU device trait
///
/// Implemented by backend-specific devices. The sample uses it to allocate
/// attachment images, query depth format support, and stall the pipeline
/// before swapchain recreation.
pub trait Device: Send + Sync {
    /// Returns true if the device supports the given format as a
    /// depth/stencil attachment
    fn supports_depth_format(&self, format: Format) -> bool;

    /// Create an image
    ///
    /// # Arguments
    ///
    /// * `desc` - Image descriptor
    ///
    /// # Returns
    ///
    /// The created image, exclusively owned by the caller
    fn create_image(&self, desc: ImageDesc) -> Result<Box<dyn Image>>;

    /// Block the calling thread until all in-flight GPU work completes.
    ///
    /// A deliberate full-pipeline stall. Required before destroying or
    /// recreating resources that may still be in use (swapchain images).
    fn wait_idle(&self) -> Result<()>;
}

/// Pick the most suitable depth format supported by the device.
///
/// Walks a fixed priority list (D32_FLOAT, D24_UNORM_S8_UINT, D16_UNORM)
/// and returns the first supported format.
///
/// # Errors
///
/// Returns `Error::NoSuitableDepthFormat` if the device supports none of
/// them. This is a fatal configuration error: rendering cannot proceed.
pub fn suitable_depth_format(device: &dyn Device) -> Result<Format> {
    for format in DEPTH_FORMAT_PRIORITY {
        if device.supports_depth_format(format) {
            return Ok(format);
        }
    }
    Err(Error::NoSuitableDepthFormat)
}
