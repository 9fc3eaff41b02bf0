use quadclick_engine::coords::{Rect, Vec2};
use quadclick_engine::core::{App, AppControl, FrameCtx, SetupError, WindowCtx};
use quadclick_engine::input::PointerClick;
use quadclick_engine::render::{compile_program, QuadRenderer, RenderCtx};

use crate::config::AppConfig;
use crate::session::Session;

const VERTEX_SHADER: &str = include_str!("../shaders/quad.vert.wgsl");
const FRAGMENT_SHADER: &str = include_str!("../shaders/quad.frag.wgsl");

/// The clickable quad.
pub struct QuadApp {
    config: AppConfig,
    session: Session,
    renderer: Option<QuadRenderer>,
}

impl QuadApp {
    pub fn new(config: AppConfig) -> Self {
        let hit_box = config.hit_box.resolve(&config.quad);
        let session = Session::new(hit_box, config.surface);
        Self {
            config,
            session,
            renderer: None,
        }
    }

    /// Applies one click in client pixels against `surface_rect`.
    fn handle_click(&mut self, pointer: Vec2, surface_rect: Rect) -> AppControl {
        let out = self.session.handle_click(pointer, surface_rect);
        self.session = out.session;

        if !out.redraw {
            log::debug!(
                "miss at ({}, {}) -> ndc ({:.3}, {:.3})",
                pointer.x,
                pointer.y,
                out.ndc.x,
                out.ndc.y
            );
            return AppControl::Continue;
        }

        log::info!(
            "hit at ndc ({:.3}, {:.3}); fill is now {}",
            out.ndc.x,
            out.ndc.y,
            self.session.fill()
        );
        AppControl::Redraw
    }
}

impl App for QuadApp {
    fn on_setup(&mut self, _window: &WindowCtx<'_>, ctx: &RenderCtx<'_>) -> Result<(), SetupError> {
        let program = compile_program(VERTEX_SHADER, FRAGMENT_SHADER)?;
        self.renderer = Some(QuadRenderer::new(ctx, &program, &self.config.quad));
        let hit = self.session.hit_box();
        log::info!(
            "initial fill {}; hit box [{}, {}] x [{}, {}]",
            self.session.fill(),
            hit.min.x,
            hit.max.x,
            hit.min.y,
            hit.max.y
        );
        Ok(())
    }

    fn on_pointer_click(&mut self, window: &WindowCtx<'_>, click: PointerClick) -> AppControl {
        self.handle_click(Vec2::new(click.x, click.y), window.surface_rect())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(renderer) = self.renderer.as_ref() else {
            return AppControl::Continue;
        };
        let fill = self.session.fill().color();
        ctx.render(self.config.background, |rctx, target| {
            renderer.draw(rctx, target, fill);
        })
    }
}
