/// Tests for error types
///
/// These tests validate error construction and display formatting.

use super::*;

// ============================================================================
// Tests: Display
// ============================================================================

#[test]
fn test_backend_error_display() {
    let err = Error::BackendError("swapchain lost".to_string());
    assert_eq!(err.to_string(), "Backend error: swapchain lost");
}

#[test]
fn test_out_of_memory_display() {
    let err = Error::OutOfMemory;
    assert_eq!(err.to_string(), "Out of GPU memory");
}

#[test]
fn test_invalid_resource_display() {
    let err = Error::InvalidResource("bad image".to_string());
    assert_eq!(err.to_string(), "Invalid resource: bad image");
}

#[test]
fn test_initialization_failed_display() {
    let err = Error::InitializationFailed("no adapter".to_string());
    assert_eq!(err.to_string(), "Initialization failed: no adapter");
}

#[test]
fn test_no_suitable_depth_format_display() {
    let err = Error::NoSuitableDepthFormat;
    assert_eq!(
        err.to_string(),
        "No suitable depth format supported by the device"
    );
}

// ============================================================================
// Tests: Result alias
// ============================================================================

#[test]
fn test_result_ok() {
    let value: Result<u32> = Ok(7);
    assert_eq!(value.unwrap(), 7);
}

#[test]
fn test_result_propagates_with_question_mark() {
    fn inner() -> Result<()> {
        Err(Error::OutOfMemory)
    }
    fn outer() -> Result<()> {
        inner()?;
        Ok(())
    }
    assert!(matches!(outer(), Err(Error::OutOfMemory)));
}

#[test]
fn test_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(Error::NoSuitableDepthFormat);
    assert!(!err.to_string().is_empty());
}
