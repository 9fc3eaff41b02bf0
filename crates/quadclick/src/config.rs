use quadclick_engine::coords::{NdcBox, Viewport};
use quadclick_engine::device::GpuInit;
use quadclick_engine::paint::Color;
use quadclick_engine::render::Quad;
use quadclick_engine::window::{LogicalSize, RuntimeConfig};

/// Where clicks count as "on the shape".
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum HitBox {
    /// A fixed NDC box, independent of the drawn quad.
    Fixed(NdcBox),
    /// The axis-aligned extent of the drawn quad.
    QuadExtent,
}

impl HitBox {
    pub fn resolve(self, quad: &Quad) -> NdcBox {
        match self {
            HitBox::Fixed(b) => b,
            HitBox::QuadExtent => quad.extent(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    /// Fixed surface size in logical pixels.
    pub surface: Viewport,
    pub background: Color,
    pub quad: Quad,
    pub hit_box: HitBox,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "quadclick".to_string(),
            surface: Viewport::new(1000.0, 700.0),
            background: Color::new(0.53, 0.81, 0.92, 1.0),
            quad: Quad::default(),
            // Narrower than the drawn quad on X ([-0.6, 0.4]); kept as the
            // historical click area.
            hit_box: HitBox::Fixed(NdcBox::symmetric(0.5)),
        }
    }
}

impl AppConfig {
    pub fn runtime(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            size: LogicalSize::new(self.surface.width as f64, self.surface.height as f64),
            resizable: false,
        }
    }

    pub fn gpu(&self) -> GpuInit {
        // Palette values are display values; keep them out of sRGB encoding.
        GpuInit {
            prefer_srgb: false,
            ..GpuInit::default()
        }
    }
}
