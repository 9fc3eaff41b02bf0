use crate::input::PointerClick;
use crate::render::RenderCtx;

use super::ctx::{FrameCtx, WindowCtx};
use super::error::SetupError;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    /// Present one frame now, before the next event is processed.
    Redraw,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// Callbacks run on the event-loop thread, one at a time.
pub trait App {
    /// Called once after the window and GPU context exist, before the first frame.
    ///
    /// An error aborts the session: no frame is drawn and [`Runtime::run`]
    /// returns it.
    ///
    /// [`Runtime::run`]: crate::window::Runtime::run
    fn on_setup(&mut self, window: &WindowCtx<'_>, ctx: &RenderCtx<'_>) -> Result<(), SetupError>;

    /// Called for each primary-button click on the surface.
    fn on_pointer_click(&mut self, window: &WindowCtx<'_>, click: PointerClick) -> AppControl {
        let _ = (window, click);
        AppControl::Continue
    }

    /// Called for each presented frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
