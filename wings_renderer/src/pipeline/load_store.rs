/// Load/store policy - pure mapping from attachment role to pass behavior
///
/// Encodes a "no MSAA resolve, direct single-sampled output" strategy:
/// - Single-sampled color output stores directly; it IS the final image,
///   so no resolve attachment is bound.
/// - Depth is transient: it is never read after the pass, so it is never
///   stored and never resolved, whatever the sample count. Resolving it
///   would only cost bandwidth.
///
/// Multisampled color resolve is a known limitation of this policy, not
/// of the types: extend here if writeback resolve is ever needed.

use crate::renderer::{
    LoadOp, ResolveMode, SampleCount, StoreOp, ATTACHMENT_UNUSED,
};
use crate::target::AttachmentRole;

/// Pass behavior for one attachment, derived from its role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentPolicy {
    /// What to do with existing content at pass start
    pub load_op: LoadOp,
    /// What to do with rendered content at pass end
    pub store_op: StoreOp,
    /// Resolve destination index (ATTACHMENT_UNUSED = no resolve)
    pub resolve_attachment: u32,
    /// Depth/stencil resolve mode
    pub resolve_mode: ResolveMode,
}

/// Compute the pass behavior for an attachment.
///
/// Pure: identical inputs always yield identical outputs. The sample
/// count is part of the signature so a future resolve-aware policy slots
/// in without call-site changes; the current strategy does not branch
/// on it.
pub fn policy_for(role: AttachmentRole, _sample_count: SampleCount) -> AttachmentPolicy {
    match role {
        AttachmentRole::SwapchainColor => AttachmentPolicy {
            load_op: LoadOp::Clear,
            store_op: StoreOp::Store,
            resolve_attachment: ATTACHMENT_UNUSED,
            resolve_mode: ResolveMode::None,
        },
        AttachmentRole::Depth => AttachmentPolicy {
            load_op: LoadOp::Clear,
            store_op: StoreOp::DontCare,
            resolve_attachment: ATTACHMENT_UNUSED,
            resolve_mode: ResolveMode::None,
        },
    }
}

#[cfg(test)]
#[path = "load_store_tests.rs"]
mod tests;
