//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and the
//! application: the setup hook, the click subscription and the per-frame context.

mod app;
mod ctx;
mod error;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
pub use error::SetupError;
