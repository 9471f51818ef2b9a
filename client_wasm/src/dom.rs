//! DOM helpers: canvas setup, sizing, theme and preference queries

use field_core::{DeviceClass, Surface, Theme};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MediaQueryList, Window};

pub const CANVAS_ID: &str = "flow-field-canvas";
const STATIC_BACKGROUND_CLASS: &str = "static-background";

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

pub fn now() -> Result<f64, JsValue> {
    window()?
        .performance()
        .map(|p| p.now())
        .ok_or_else(|| JsValue::from_str("no performance clock"))
}

pub fn match_media(query: &str) -> Result<Option<MediaQueryList>, JsValue> {
    window()?.match_media(query)
}

/// Pointer coarseness, queried once at startup.
pub fn device_class() -> Result<DeviceClass, JsValue> {
    let coarse = match_media("(pointer: coarse)")?
        .map(|mql| mql.matches())
        .unwrap_or(false);
    Ok(if coarse {
        DeviceClass::Coarse
    } else {
        DeviceClass::Fine
    })
}

/// Create the full-viewport canvas behind the page content and fetch its 2D
/// context. A missing context aborts startup; nothing is animated then.
pub fn create_canvas() -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let document = document()?;
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_id(CANVAS_ID);

    let style = canvas.style();
    style.set_property("position", "fixed")?;
    style.set_property("inset", "0")?;
    style.set_property("z-index", "-1")?;
    style.set_property("pointer-events", "none")?;

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;
    body.insert_before(&canvas, body.first_child().as_ref())?;

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    Ok((canvas, ctx))
}

/// Size the backing store for the device pixel ratio and return the logical
/// surface the engine simulates in.
pub fn fit_canvas(
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
) -> Result<Surface, JsValue> {
    let window = window()?;
    let dpr = window.device_pixel_ratio();
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);

    canvas.set_width((width * dpr) as u32);
    canvas.set_height((height * dpr) as u32);
    canvas.style().set_property("width", &format!("{width}px"))?;
    canvas
        .style()
        .set_property("height", &format!("{height}px"))?;
    ctx.scale(dpr, dpr)?;

    Ok(Surface::new(width as f32, height as f32))
}

/// The page toggles a `dark` class on <html> or <body>; re-checked every
/// frame so theme switches take effect without restarting.
pub fn theme() -> Theme {
    let dark = document()
        .ok()
        .map(|d| {
            let root = d
                .document_element()
                .map(|e| e.class_list().contains("dark"))
                .unwrap_or(false);
            let body = d
                .body()
                .map(|b| b.class_list().contains("dark"))
                .unwrap_or(false);
            root || body
        })
        .unwrap_or(false);
    if dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Mark the page as using the non-animated fallback background.
pub fn set_static_background(on: bool) -> Result<(), JsValue> {
    let body = document()?
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;
    if on {
        body.class_list().add_1(STATIC_BACKGROUND_CLASS)
    } else {
        body.class_list().remove_1(STATIC_BACKGROUND_CLASS)
    }
}
