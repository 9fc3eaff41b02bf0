//! Session state and the click transition.
//!
//! Kept free of any GPU or window type so the whole click → color → redraw
//! decision runs in plain unit tests.

use std::fmt;

use quadclick_engine::coords::{to_device_coords, NdcBox, Rect, Vec2, Viewport};
use quadclick_engine::paint::Color;

pub const YELLOW: Color = Color::new(1.0, 0.84, 0.0, 1.0);
pub const CYAN: Color = Color::new(0.0, 0.8, 0.8, 1.0);

/// The quad's fill. Only ever one of the two palette colors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FillColor(Color);

impl FillColor {
    pub const INITIAL: FillColor = FillColor(YELLOW);

    #[inline]
    pub fn color(self) -> Color {
        self.0
    }

    /// A zero red channel means cyan is showing: go back to yellow. Anything
    /// else goes to cyan.
    #[inline]
    pub fn toggled(self) -> FillColor {
        if self.0.r == 0.0 {
            FillColor(YELLOW)
        } else {
            FillColor(CYAN)
        }
    }
}

impl fmt::Display for FillColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            c if c == YELLOW => f.write_str("yellow"),
            c if c == CYAN => f.write_str("cyan"),
            c => write!(f, "rgba({}, {}, {}, {})", c.r, c.g, c.b, c.a),
        }
    }
}

/// Everything a click can read or change.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Session {
    fill: FillColor,
    hit_box: NdcBox,
    surface: Viewport,
}

/// Result of feeding one click into a [`Session`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClickOutcome {
    pub session: Session,
    /// Pointer position in NDC.
    pub ndc: Vec2,
    /// True iff the fill changed and exactly one frame must be drawn.
    pub redraw: bool,
}

impl Session {
    pub fn new(hit_box: NdcBox, surface: Viewport) -> Self {
        Self {
            fill: FillColor::INITIAL,
            hit_box,
            surface,
        }
    }

    #[inline]
    pub fn fill(&self) -> FillColor {
        self.fill
    }

    #[inline]
    pub fn hit_box(&self) -> NdcBox {
        self.hit_box
    }

    /// Maps `pointer` (client px) into NDC and toggles the fill on a hit.
    ///
    /// A miss returns the session unchanged with `redraw == false`.
    pub fn handle_click(self, pointer: Vec2, surface_rect: Rect) -> ClickOutcome {
        let ndc = to_device_coords(pointer, surface_rect, self.surface);

        if !self.hit_box.contains(ndc) {
            return ClickOutcome {
                session: self,
                ndc,
                redraw: false,
            };
        }

        ClickOutcome {
            session: Session {
                fill: self.fill.toggled(),
                ..self
            },
            ndc,
            redraw: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURFACE: Viewport = Viewport::new(1000.0, 700.0);

    fn session() -> Session {
        Session::new(NdcBox::symmetric(0.5), SURFACE)
    }

    fn surface_rect() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 700.0)
    }

    // ── palette ───────────────────────────────────────────────────────────

    #[test]
    fn initial_fill_is_yellow() {
        assert_eq!(session().fill(), FillColor::INITIAL);
        assert_eq!(session().fill().color().to_array(), [1.0, 0.84, 0.0, 1.0]);
    }

    #[test]
    fn toggle_alternates_palette() {
        let cyan = FillColor::INITIAL.toggled();
        assert_eq!(cyan.color().to_array(), [0.0, 0.8, 0.8, 1.0]);
        assert_eq!(cyan.toggled(), FillColor::INITIAL);
    }

    #[test]
    fn palette_stays_normalized() {
        let mut fill = FillColor::INITIAL;
        for _ in 0..5 {
            assert!(fill.color().is_normalized());
            fill = fill.toggled();
        }
    }

    #[test]
    fn display_names_palette_entries() {
        assert_eq!(FillColor::INITIAL.to_string(), "yellow");
        assert_eq!(FillColor::INITIAL.toggled().to_string(), "cyan");
    }

    // ── handle_click ──────────────────────────────────────────────────────

    #[test]
    fn center_click_toggles_and_redraws_once() {
        let out = session().handle_click(Vec2::new(500.0, 350.0), surface_rect());
        assert!(out.redraw);
        assert_eq!(out.ndc, Vec2::new(0.0, 0.0));
        assert_eq!(out.session.fill().color(), CYAN);
    }

    #[test]
    fn second_hit_returns_to_yellow() {
        let first = session().handle_click(Vec2::new(500.0, 350.0), surface_rect());
        let second = first
            .session
            .handle_click(Vec2::new(450.0, 300.0), surface_rect());
        assert!(first.redraw && second.redraw);
        assert_eq!(second.session.fill(), FillColor::INITIAL);
    }

    #[test]
    fn corner_click_misses() {
        let start = session();
        let out = start.handle_click(Vec2::new(10.0, 10.0), surface_rect());
        assert!(!out.redraw);
        assert_eq!(out.session, start);
        assert!((out.ndc.x + 0.98).abs() < 1e-5);
        assert!((out.ndc.y - 0.971_428_6).abs() < 1e-5);
    }

    #[test]
    fn two_misses_change_nothing() {
        let start = session();
        let mut redraws = 0;
        let mut s = start;
        for p in [Vec2::new(10.0, 10.0), Vec2::new(990.0, 690.0)] {
            let out = s.handle_click(p, surface_rect());
            redraws += out.redraw as u32;
            s = out.session;
        }
        assert_eq!(redraws, 0);
        assert_eq!(s, start);
    }

    #[test]
    fn click_outside_surface_misses() {
        let out = session().handle_click(Vec2::new(-50.0, 1200.0), surface_rect());
        assert!(!out.redraw);
    }

    #[test]
    fn boundary_click_hits() {
        // x = 250 px -> ndc -0.5 exactly.
        let out = session().handle_click(Vec2::new(250.0, 350.0), surface_rect());
        assert!(out.redraw);
    }

    #[test]
    fn offset_surface_uses_its_rect() {
        let rect = Rect::new(100.0, 50.0, 1000.0, 700.0);
        let out = session().handle_click(Vec2::new(600.0, 400.0), rect);
        assert!(out.redraw);
        assert_eq!(out.ndc, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn quad_extent_box_accepts_left_strip() {
        // ndc x = -0.55: drawn, but outside the default box.
        let p = Vec2::new(225.0, 350.0);
        assert!(!session().handle_click(p, surface_rect()).redraw);

        let extent = NdcBox::new(Vec2::new(-0.6, -0.5), Vec2::new(0.4, 0.5));
        let s = Session::new(extent, SURFACE);
        assert!(s.handle_click(p, surface_rect()).redraw);
        assert_eq!(s.hit_box(), extent);
    }
}
