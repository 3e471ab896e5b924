//! Canvas 2D renderer

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{BACKGROUND_GREY, RING_STROKE_WIDTH};
use crate::renderer::{Frame, Renderer, orb_color};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    fn circle(&self, x: f32, y: f32, diameter: f32) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(x as f64, y as f64, (diameter / 2.0).max(0.0) as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }

    fn try_draw(&self, frame: &Frame) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let grey = BACKGROUND_GREY;

        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(&format!("rgb({grey},{grey},{grey})"));
        ctx.fill_rect(0.0, 0.0, frame.viewport.x as f64, frame.viewport.y as f64);

        if let Some(ring) = frame.ring {
            ctx.set_stroke_style_str("rgb(0,0,0)");
            ctx.set_line_width(RING_STROKE_WIDTH as f64);
            ctx.begin_path();
            ctx.ellipse(
                ring.center.x as f64,
                ring.center.y as f64,
                ring.radius_x as f64,
                ring.radius_y.max(0.0) as f64,
                0.0,
                0.0,
                TAU,
            )?;
            ctx.stroke();
        }

        // Already back to front
        for orb in &frame.orbs {
            let [r, g, b] = orb_color(orb.glow);
            ctx.set_fill_style_str(&format!("rgb({r},{g},{b})"));
            self.circle(orb.pos.x, orb.pos.y, orb.size);
        }

        ctx.set_line_cap("round");
        ctx.set_line_width(3.0);
        ctx.set_stroke_style_str("rgb(255,214,150)");
        for seg in &frame.trail {
            ctx.set_global_alpha(seg.alpha as f64);
            ctx.begin_path();
            ctx.move_to(seg.from.x as f64, seg.from.y as f64);
            ctx.line_to(seg.to.x as f64, seg.to.y as f64);
            ctx.stroke();
        }
        ctx.set_global_alpha(1.0);

        if let Some(head) = frame.head {
            ctx.set_fill_style_str("rgb(255,255,255)");
            self.circle(head.pos.x, head.pos.y, head.size);
        }

        ctx.set_fill_style_str("rgb(0,0,0)");
        for cursor in &frame.cursors {
            self.circle(cursor.pos.x, cursor.pos.y, cursor.size);
        }

        Ok(())
    }
}

impl Renderer for CanvasRenderer {
    fn draw(&mut self, frame: &Frame) {
        if let Err(e) = self.try_draw(frame) {
            log::warn!("Render error: {:?}", e);
        }
    }
}
