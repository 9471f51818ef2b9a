//! Per-frame glue between the engine and the 2D canvas

use field_core::{Color, Config, DrawCommand, Engine, Frame};
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::dom;

/// Milliseconds per frame-equivalent unit; wall-clock deltas are measured
/// against a 60 Hz reference frame.
const FRAME_MS: f64 = 16.67;

/// One running background: the engine plus its canvas and loop bookkeeping.
pub struct App {
    pub engine: Engine,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    last_ms: f64,
    pub raf_id: Option<i32>,
    pub resize_timer: Option<i32>,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let device = dom::device_class()?;
        let (canvas, ctx) = dom::create_canvas()?;
        let surface = dom::fit_canvas(&canvas, &ctx)?;
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;

        let engine = Engine::new(Config::new(), surface, device, seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            engine,
            canvas,
            ctx,
            last_ms: dom::now()?,
            raf_id: None,
            resize_timer: None,
        })
    }

    /// One frame: measure the elapsed wall clock ourselves (the scheduler
    /// guarantees no fixed interval), advance the engine, paint the result.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        let now = dom::now()?;
        let dt = ((now - self.last_ms) / FRAME_MS) as f32;
        self.last_ms = now;

        let frame = self.engine.frame(dt, dom::theme());
        self.paint(&frame)
    }

    fn paint(&self, frame: &Frame) -> Result<(), JsValue> {
        let surface = self.engine.surface();
        for command in &frame.commands {
            match *command {
                DrawCommand::Fade { color, alpha } => {
                    self.ctx.set_global_alpha(1.0);
                    self.ctx.set_fill_style_str(&css_rgba(color, alpha));
                    self.ctx
                        .fill_rect(0.0, 0.0, surface.width as f64, surface.height as f64);
                }
                DrawCommand::Dot {
                    pos,
                    radius,
                    color,
                    alpha,
                } => {
                    self.ctx.set_global_alpha(alpha as f64);
                    self.ctx.set_fill_style_str(&css_rgb(color));
                    self.ctx.begin_path();
                    self.ctx.arc(
                        pos.x as f64,
                        pos.y as f64,
                        radius as f64,
                        0.0,
                        std::f64::consts::TAU,
                    )?;
                    self.ctx.fill();
                }
            }
        }
        Ok(())
    }

    /// Refit the canvas to the viewport and hand the engine its new bounds.
    pub fn resize(&mut self) -> Result<(), JsValue> {
        let surface = dom::fit_canvas(&self.canvas, &self.ctx)?;
        self.engine.resize(surface.width, surface.height);
        Ok(())
    }

    /// Restart delta measurement, e.g. after a visibility pause, so the
    /// hidden interval does not land in one giant step.
    pub fn mark_now(&mut self) -> Result<(), JsValue> {
        self.last_ms = dom::now()?;
        Ok(())
    }

    pub fn remove_canvas(&self) {
        self.canvas.remove();
    }
}

fn css_rgb(c: Color) -> String {
    format!("rgb({}, {}, {})", c.r, c.g, c.b)
}

fn css_rgba(c: Color, alpha: f32) -> String {
    format!("rgba({}, {}, {}, {})", c.r, c.g, c.b, alpha)
}
