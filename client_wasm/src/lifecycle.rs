//! Start/stop orchestration: reduced motion, visibility, debounced resize

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{MediaQueryList, MediaQueryListEvent, MouseEvent};

use crate::app::App;
use crate::{dom, input};

thread_local! {
    static APP: RefCell<Option<Rc<RefCell<App>>>> = const { RefCell::new(None) };
}

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
const RESIZE_DEBOUNCE_MS: i32 = 100;

/// Honor reduced motion up front; otherwise build the background and start
/// the frame loop. Document and window listeners are attached exactly once
/// and consult the current app on each event, so a reduced-motion rebuild
/// does not stack duplicates.
pub fn boot() -> Result<(), JsValue> {
    if let Some(mql) = dom::match_media(REDUCED_MOTION_QUERY)? {
        if mql.matches() {
            return dom::set_static_background(true);
        }
        subscribe_reduced_motion(&mql)?;
    }
    attach_listeners()?;
    spawn_app()
}

fn spawn_app() -> Result<(), JsValue> {
    let app = App::new()?;
    APP.with(|slot| *slot.borrow_mut() = Some(Rc::new(RefCell::new(app))));
    start_loop()
}

/// Stop the loop, drop the canvas, and fall back to the static background.
fn teardown() -> Result<(), JsValue> {
    stop_loop();
    if let Some(app) = APP.with(|slot| slot.borrow_mut().take()) {
        let mut app = app.borrow_mut();
        app.engine.halt();
        app.remove_canvas();
    }
    dom::set_static_background(true)
}

fn rebuild() -> Result<(), JsValue> {
    dom::set_static_background(false)?;
    spawn_app()
}

fn current() -> Option<Rc<RefCell<App>>> {
    APP.with(|slot| slot.borrow().clone())
}

fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
    current().map(|app| f(&mut app.borrow_mut()))
}

// -- frame loop -------------------------------------------------------------

fn start_loop() -> Result<(), JsValue> {
    let Some(app) = current() else {
        return Ok(());
    };
    {
        let mut app = app.borrow_mut();
        if app.raf_id.is_some() {
            return Ok(()); // already running
        }
        app.mark_now()?;
    }
    request_frame()
}

/// Cancel the pending frame. Immediate and idempotent; there is never an
/// in-flight pass to wait for.
fn stop_loop() {
    if let Some(app) = current() {
        if let Some(id) = app.borrow_mut().raf_id.take() {
            if let Ok(window) = dom::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

fn request_frame() -> Result<(), JsValue> {
    let callback = Closure::once_into_js(|| {
        if let Err(err) = on_frame() {
            web_sys::console::error_1(&err);
        }
    });
    let id = dom::window()?.request_animation_frame(callback.unchecked_ref())?;
    with_app(|app| app.raf_id = Some(id));
    Ok(())
}

fn on_frame() -> Result<(), JsValue> {
    let Some(app) = current() else {
        return Ok(());
    };
    {
        let mut app = app.borrow_mut();
        if app.raf_id.is_none() {
            return Ok(()); // stopped between scheduling and delivery
        }
        app.frame()?;
    }
    request_frame()
}

// -- event wiring -----------------------------------------------------------

fn subscribe_reduced_motion(mql: &MediaQueryList) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(MediaQueryListEvent)>::new(|event: MediaQueryListEvent| {
        let result = if event.matches() { teardown() } else { rebuild() };
        if let Err(err) = result {
            web_sys::console::error_1(&err);
        }
    });
    mql.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

fn attach_listeners() -> Result<(), JsValue> {
    let document = dom::document()?;
    let window = dom::window()?;

    let on_move = Closure::<dyn FnMut(MouseEvent)>::new(|event: MouseEvent| {
        let (x, y) = input::pointer_position(&event);
        with_app(|app| app.engine.set_pointer(x, y));
    });
    document.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();

    let on_leave = Closure::<dyn FnMut()>::new(|| {
        with_app(|app| app.engine.clear_pointer());
    });
    document.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
    on_leave.forget();

    let on_visibility = Closure::<dyn FnMut()>::new(|| {
        let hidden = dom::document().map(|d| d.hidden()).unwrap_or(true);
        if hidden {
            stop_loop();
        } else if let Err(err) = start_loop() {
            web_sys::console::error_1(&err);
        }
    });
    document
        .add_event_listener_with_callback("visibilitychange", on_visibility.as_ref().unchecked_ref())?;
    on_visibility.forget();

    let on_resize = Closure::<dyn FnMut()>::new(|| {
        if let Err(err) = schedule_resize() {
            web_sys::console::error_1(&err);
        }
    });
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();

    Ok(())
}

/// Debounce resize bursts: each event restarts a short timer and only the
/// last one actually refits the canvas and respawns the particle set.
fn schedule_resize() -> Result<(), JsValue> {
    let window = dom::window()?;
    if let Some(Some(timer)) = with_app(|app| app.resize_timer.take()) {
        window.clear_timeout_with_handle(timer);
    }

    let callback = Closure::once_into_js(|| {
        with_app(|app| {
            app.resize_timer = None;
            if let Err(err) = app.resize() {
                web_sys::console::error_1(&err);
            }
        });
    });
    let id = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            RESIZE_DEBOUNCE_MS,
        )?;
    with_app(|app| app.resize_timer = Some(id));
    Ok(())
}
