//! Coordinate and geometry types shared by the runtime, renderers and apps.
//!
//! Two spaces are in play:
//! - Logical pixels: origin top-left, +X right, +Y down (pointer events, surface rect)
//! - NDC: `[-1, 1]` on both axes, origin center, +Y up (vertices, hit boxes)
//!
//! `ndc` converts between them.

mod ndc;
mod rect;
mod vec2;
mod viewport;

pub use ndc::{to_device_coords, NdcBox};
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
