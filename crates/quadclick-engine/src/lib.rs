//! quadclick engine crate.
//!
//! Platform + GPU runtime for a single interactive quad: window and event loop,
//! device/surface, input translation, NDC hit testing, WGSL compile/link and the
//! quad renderer.

pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod window;
