use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Mirrors a DOM client rect: `left`/`top` at `origin`, `bottom = top + height`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn top(self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.origin.y + self.size.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── edges ─────────────────────────────────────────────────────────────

    #[test]
    fn edges_follow_client_rect_convention() {
        let rect = Rect::new(8.0, 20.0, 1000.0, 700.0);
        assert_eq!(rect.left(), 8.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 720.0);
    }
}
