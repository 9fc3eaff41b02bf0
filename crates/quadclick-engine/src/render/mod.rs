//! GPU rendering subsystem.
//!
//! - `shader`: WGSL compile + link into a [`ShaderProgram`]
//! - `geometry`: the static quad and its vertex buffer
//! - `quad`: pipeline + fill uniform + draw call
//!
//! Convention: vertex positions are already in NDC; no viewport transform happens
//! in the vertex shader.

mod ctx;
pub mod geometry;
pub mod quad;
pub mod shader;

pub use ctx::{RenderCtx, RenderTarget};
pub use geometry::{GeometryBuffer, Quad};
pub use quad::QuadRenderer;
pub use shader::{compile_program, ShaderError, ShaderProgram, ShaderStage};
