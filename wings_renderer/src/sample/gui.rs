/// GUI overlay hook
///
/// Widget rendering lives in the framework; the sample only asks the
/// overlay to draw into the open render pass and polls its options window.

use crate::error::Result;
use crate::renderer::CommandList;

/// GUI overlay drawn within the scene render pass, after the scene
pub trait GuiOverlay {
    /// Record the overlay into the command list (pass is already open)
    fn draw(&mut self, cmd: &mut dyn CommandList) -> Result<()>;

    /// Show a button in the options window; returns true when pressed
    /// this frame
    fn button(&mut self, label: &str) -> bool;
}
