/// Surface size in logical pixels.
///
/// Fixed for the lifetime of a window in this engine; pointer conversion to NDC
/// divides by these dimensions.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
