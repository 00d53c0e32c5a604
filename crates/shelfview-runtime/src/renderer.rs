use shelfview_types::Action;

use crate::{Result, ViewFrame};

/// Display seam between the controller and whatever draws the view.
///
/// A renderer receives the fully derived frame and must not reach back
/// into the controller or the store; everything it may show is on the
/// frame. Implementations decide layout (grid, list, machine-readable)
/// on their own.
pub trait Renderer {
    fn render(&mut self, frame: &ViewFrame) -> Result<()>;
}

/// Input seam: translates frontend-specific events into typed actions.
///
/// Returning `None` means the event does not map to any collection
/// action and should be ignored by the dispatch loop.
pub trait InputAdapter {
    type Event;

    fn on_user_event(&self, event: &Self::Event) -> Option<Action>;
}
