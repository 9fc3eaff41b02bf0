//! Paint model shared between apps and renderers.

pub mod color;

pub use color::Color;
