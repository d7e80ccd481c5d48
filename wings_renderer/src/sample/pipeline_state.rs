/// Pipeline refresh state machine
///
/// A shader refresh may be requested from a UI callback at any point in a
/// frame; it is consumed exactly once, inside the per-frame update, before
/// any draw is issued. Requests arriving between updates coalesce: this is
/// not a queue.

/// Observable state of the scene pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// The pipeline matches the current shader set
    Current,
    /// A shader refresh has been requested and not yet applied
    Stale,
}

impl PipelineState {
    /// Pipelines start current
    pub fn new() -> Self {
        PipelineState::Current
    }

    /// Request a refresh. Idempotent: repeated requests coalesce.
    pub fn request_refresh(&mut self) {
        *self = PipelineState::Stale;
    }

    /// Consume a pending refresh request, if any.
    ///
    /// The single Stale -> Current transition. Called exactly once per
    /// update cycle; returns true if a rebuild must happen this cycle.
    pub fn take_refresh(&mut self) -> bool {
        match *self {
            PipelineState::Stale => {
                *self = PipelineState::Current;
                true
            }
            PipelineState::Current => false,
        }
    }

    /// Returns true if a refresh is pending
    pub fn is_stale(&self) -> bool {
        matches!(self, PipelineState::Stale)
    }
}

impl Default for PipelineState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "pipeline_state_tests.rs"]
mod tests;
