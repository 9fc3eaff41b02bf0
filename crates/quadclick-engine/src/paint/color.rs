/// Straight-alpha RGBA color.
///
/// Channels are expected in `[0, 1]`; [`Color::is_normalized`] checks it.
///
/// Values are written to the surface unconverted; pair with a non-sRGB surface
/// format to display them as authored.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Creates a color from channels already known to be in `[0, 1]`.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn is_normalized(self) -> bool {
        self.to_array().iter().all(|v| (0.0..=1.0).contains(v))
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Converts to the wgpu clear-color representation.
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}
