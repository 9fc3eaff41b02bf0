use super::{Rect, Vec2, Viewport};

/// Converts a pointer position (logical pixels, client space) to NDC.
///
/// `surface_rect` is the surface's on-screen bounding rect; `surface` is its fixed
/// drawing size. Y is flipped: client space grows downward, NDC grows upward.
///
/// Points outside `surface_rect` land outside `[-1, 1]`.
#[inline]
pub fn to_device_coords(pointer: Vec2, surface_rect: Rect, surface: Viewport) -> Vec2 {
    let x = ((pointer.x - surface_rect.left()) / surface.width) * 2.0 - 1.0;
    let y = ((surface_rect.bottom() - pointer.y) / surface.height) * 2.0 - 1.0;
    Vec2::new(x, y)
}

/// Axis-aligned box in NDC.
///
/// Containment is inclusive on every edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NdcBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl NdcBox {
    #[inline]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box centered on the origin spanning `[-half, half]` on both axes.
    #[inline]
    pub const fn symmetric(half: f32) -> Self {
        Self::new(Vec2::new(-half, -half), Vec2::new(half, half))
    }

    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURFACE: Viewport = Viewport::new(1000.0, 700.0);

    fn at_origin() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 700.0)
    }

    fn approx(a: Vec2, x: f32, y: f32) -> bool {
        (a.x - x).abs() < 1e-5 && (a.y - y).abs() < 1e-5
    }

    // ── to_device_coords ──────────────────────────────────────────────────

    #[test]
    fn center_maps_to_origin() {
        let p = to_device_coords(Vec2::new(500.0, 350.0), at_origin(), SURFACE);
        assert!(approx(p, 0.0, 0.0), "{p:?}");
    }

    #[test]
    fn top_left_corner_maps_to_minus_one_one() {
        let rect = Rect::new(8.0, 20.0, 1000.0, 700.0);
        let p = to_device_coords(Vec2::new(rect.left(), rect.top()), rect, SURFACE);
        assert!(approx(p, -1.0, 1.0), "{p:?}");
    }

    #[test]
    fn bottom_right_corner_maps_to_one_minus_one() {
        let rect = Rect::new(8.0, 20.0, 1000.0, 700.0);
        let p = to_device_coords(
            Vec2::new(rect.left() + 1000.0, rect.top() + 700.0),
            rect,
            SURFACE,
        );
        assert!(approx(p, 1.0, -1.0), "{p:?}");
    }

    #[test]
    fn near_top_left_click() {
        let p = to_device_coords(Vec2::new(10.0, 10.0), at_origin(), SURFACE);
        assert!(approx(p, -0.98, 690.0 / 700.0 * 2.0 - 1.0), "{p:?}");
        assert!((p.y - 0.971_428_6).abs() < 1e-5);
    }

    #[test]
    fn outside_surface_maps_outside_unit_square() {
        let rect = at_origin();
        for (x, y) in [(-1.0, 350.0), (1001.0, 350.0), (500.0, -5.0), (500.0, 705.0)] {
            let p = to_device_coords(Vec2::new(x, y), rect, SURFACE);
            assert!(
                p.x < -1.0 || p.x > 1.0 || p.y < -1.0 || p.y > 1.0,
                "({x}, {y}) -> {p:?}"
            );
        }
    }

    // ── NdcBox::contains ──────────────────────────────────────────────────

    #[test]
    fn contains_interior() {
        assert!(NdcBox::symmetric(0.5).contains(Vec2::new(0.1, -0.2)));
    }

    #[test]
    fn contains_edges_inclusive() {
        let b = NdcBox::symmetric(0.5);
        assert!(b.contains(Vec2::new(0.5, 0.5)));
        assert!(b.contains(Vec2::new(-0.5, -0.5)));
        assert!(b.contains(Vec2::new(0.5, -0.5)));
        assert!(b.contains(Vec2::new(-0.5, 0.0)));
    }

    #[test]
    fn rejects_outside_on_either_axis() {
        let b = NdcBox::symmetric(0.5);
        assert!(!b.contains(Vec2::new(0.51, 0.0)));
        assert!(!b.contains(Vec2::new(0.0, -0.51)));
        assert!(!b.contains(Vec2::new(-0.98, 0.97)));
    }

    #[test]
    fn exact_boundary_pixels_hit() {
        let b = NdcBox::symmetric(0.5);
        for (x, y) in [(250.0, 175.0), (750.0, 525.0), (250.0, 525.0), (750.0, 175.0)] {
            let p = to_device_coords(Vec2::new(x, y), at_origin(), SURFACE);
            assert!(b.contains(p), "({x}, {y}) -> {p:?}");
        }
    }

    #[test]
    fn pointer_outside_surface_never_hits() {
        let b = NdcBox::symmetric(0.5);
        for (x, y) in [(-200.0, 350.0), (1500.0, 350.0), (500.0, -100.0), (500.0, 900.0)] {
            let p = to_device_coords(Vec2::new(x, y), at_origin(), SURFACE);
            assert!(!b.contains(p));
        }
    }
}
