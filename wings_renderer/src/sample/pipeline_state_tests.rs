/// Tests for the pipeline refresh state machine

use super::*;

// ============================================================================
// Tests: Initial state
// ============================================================================

#[test]
fn test_pipeline_starts_current() {
    let state = PipelineState::new();
    assert_eq!(state, PipelineState::Current);
    assert!(!state.is_stale());
    assert_eq!(PipelineState::default(), PipelineState::Current);
}

// ============================================================================
// Tests: Refresh requests
// ============================================================================

#[test]
fn test_request_refresh_marks_stale() {
    let mut state = PipelineState::new();
    state.request_refresh();
    assert!(state.is_stale());
}

#[test]
fn test_repeated_requests_coalesce() {
    let mut state = PipelineState::new();
    state.request_refresh();
    state.request_refresh();
    state.request_refresh();

    // All requests collapse into a single pending refresh
    assert!(state.take_refresh());
    assert!(!state.take_refresh());
}

#[test]
fn test_take_refresh_consumes_exactly_once() {
    let mut state = PipelineState::new();
    assert!(!state.take_refresh());

    state.request_refresh();
    assert!(state.take_refresh());
    assert_eq!(state, PipelineState::Current);
    assert!(!state.take_refresh());
}

#[test]
fn test_refresh_can_be_requested_again_after_consumption() {
    let mut state = PipelineState::new();
    state.request_refresh();
    assert!(state.take_refresh());

    state.request_refresh();
    assert!(state.take_refresh());
}
