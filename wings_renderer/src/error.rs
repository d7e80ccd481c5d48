//! Error types for the Wings renderer
//!
//! This module defines the error types used throughout the sample,
//! including render-target planning, pipeline configuration, and
//! GPU backend failures.

use std::fmt;

/// Result type for Wings renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wings renderer errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (Vulkan, DirectX, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (image, shader, scene, etc.)
    InvalidResource(String),

    /// Initialization failed (sample startup, render context, subsystems)
    InitializationFailed(String),

    /// No depth format supported by the device.
    /// Fatal configuration error: rendering cannot proceed without depth.
    NoSuitableDepthFormat,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::NoSuitableDepthFormat => {
                write!(f, "No suitable depth format supported by the device")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
