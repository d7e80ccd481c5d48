/// Render pass value types: load/store operations, layouts, resolve modes

/// Sentinel attachment index meaning "no attachment bound here".
///
/// Used for disabled resolve attachments.
pub const ATTACHMENT_UNUSED: u32 = u32::MAX;

/// Load operation for an attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOp {
    /// Load existing content
    Load,
    /// Clear the content
    Clear,
    /// Don't care about existing content
    DontCare,
}

/// Store operation for an attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    /// Store the rendered content
    Store,
    /// Don't care about storing the content
    DontCare,
}

/// Load and store operations for one attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStoreOp {
    /// What to do with existing content at pass start
    pub load_op: LoadOp,
    /// What to do with rendered content at pass end
    pub store_op: StoreOp,
}

/// Image layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageLayout {
    /// Undefined layout (initial state, prior content discarded)
    Undefined,
    /// Layout for color attachment output
    ColorAttachment,
    /// Layout for depth/stencil attachment output
    DepthStencilAttachment,
    /// Layout for shader read-only access
    ShaderReadOnly,
    /// Layout for transfer source
    TransferSrc,
    /// Layout for transfer destination
    TransferDst,
    /// Layout for presenting to the swapchain
    PresentSrc,
}

/// Multisample resolve mode for a depth/stencil attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMode {
    /// No resolve
    None,
    /// Resolve to the value of sample zero
    SampleZero,
    /// Resolve to the average of all samples
    Average,
}

/// Clear value for an attachment
#[derive(Debug, Clone, Copy)]
pub enum ClearValue {
    /// Color clear value (RGBA)
    Color([f32; 4]),
    /// Depth/stencil clear value
    DepthStencil { depth: f32, stencil: u32 },
}

impl ClearValue {
    /// Default clear for a color attachment: opaque black
    pub fn default_color() -> Self {
        Self::Color([0.0, 0.0, 0.0, 1.0])
    }

    /// Default clear for a depth/stencil attachment: depth 1.0, stencil 0
    pub fn default_depth_stencil() -> Self {
        Self::DepthStencil { depth: 1.0, stencil: 0 }
    }
}
