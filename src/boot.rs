//! Browser entry point: element lookup, event wiring, and action execution.
//!
//! The host page provides a `<canvas id="game">` and, optionally, a
//! `#notice` element for outcome text and a `#reset` button. Pointer events
//! feed the engine; the actions it returns are executed here against the
//! DOM. This is the only module that reaches outside the canvas element.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, PointerEvent, console};

use crate::consts::{LOGICAL_H, LOGICAL_W};
use crate::engine::{Action, Engine};
use crate::scatter::PlacementError;
use crate::session::Notice;
use crate::viewport::{Point, Viewport};

/// Canvas element the board renders into.
const CANVAS_ID: &str = "game";
/// Optional element mirroring the outcome notice.
const NOTICE_ID: &str = "notice";
/// Optional button that rescatters the board.
const RESET_ID: &str = "reset";

thread_local! {
    static ENGINE: RefCell<Option<Rc<RefCell<Engine>>>> = const { RefCell::new(None) };
}

/// Module entry: builds the engine, wires DOM events, draws the first frame.
///
/// # Errors
///
/// Returns `Err` when the document or canvas element is missing or the
/// initial board cannot be placed.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or("canvas element #game not found")?
        .dyn_into::<HtmlCanvasElement>()?;
    set_backing_store(&canvas);

    let seed = js_sys::Date::now().to_bits();
    let engine = Rc::new(RefCell::new(
        Engine::new(canvas.clone(), seed).map_err(placement_to_js)?,
    ));
    ENGINE.with(|slot| *slot.borrow_mut() = Some(engine.clone()));

    attach_pointer_events(&engine, &canvas, &document)?;
    attach_reset_button(&engine, &canvas, &document);

    engine.borrow().render()?;
    sync_notice(&document, None);
    Ok(())
}

/// The live board as a JSON array of obstacles.
///
/// # Errors
///
/// Returns `Err` before [`start`] has run or if serialization fails.
#[wasm_bindgen]
pub fn layout_json() -> Result<String, JsValue> {
    let Some(engine) = current_engine() else {
        return Err(JsValue::from_str("engine not started"));
    };
    let json = engine.borrow().core.layout_json().map_err(serde_to_js)?;
    Ok(json)
}

/// Replace the live board from a JSON array of obstacles and redraw.
///
/// # Errors
///
/// Returns `Err` before [`start`] has run, on invalid layout JSON, or if
/// redrawing fails.
#[wasm_bindgen]
pub fn load_layout_json(json: &str) -> Result<(), JsValue> {
    let Some(engine) = current_engine() else {
        return Err(JsValue::from_str("engine not started"));
    };
    engine
        .borrow_mut()
        .core
        .load_layout_json(json)
        .map_err(serde_to_js)?;
    engine.borrow().render()?;
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        sync_notice(&document, None);
    }
    Ok(())
}

fn current_engine() -> Option<Rc<RefCell<Engine>>> {
    ENGINE.with(|slot| slot.borrow().clone())
}

/// Fix the backing store at the logical resolution. CSS may scale the
/// element on screen; pointer input maps back through [`Viewport`].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn set_backing_store(canvas: &HtmlCanvasElement) {
    canvas.set_width(LOGICAL_W as u32);
    canvas.set_height(LOGICAL_H as u32);
}

/// Map a pointer event's client coordinates to logical canvas coordinates.
/// The bounding rect is re-read per event so CSS resizes are always honored.
fn event_logical_point(event: &PointerEvent, canvas: &HtmlCanvasElement) -> Point {
    let rect = canvas.get_bounding_client_rect();
    let viewport = Viewport::new(rect.width(), rect.height());
    let css = Point::new(
        f64::from(event.client_x()) - rect.left(),
        f64::from(event.client_y()) - rect.top(),
    );
    viewport.to_logical(css)
}

fn attach_pointer_events(
    engine: &Rc<RefCell<Engine>>,
    canvas: &HtmlCanvasElement,
    document: &Document,
) -> Result<(), JsValue> {
    {
        let engine = engine.clone();
        let canvas_el = canvas.clone();
        let document = document.clone();
        let on_down =
            Closure::<dyn FnMut(PointerEvent)>::wrap(Box::new(move |event: PointerEvent| {
                let p = event_logical_point(&event, &canvas_el);
                let actions = engine.borrow_mut().on_pointer_down(p);
                run_actions(&engine, &canvas_el, &document, &actions, Some(event.pointer_id()));
            }));
        canvas.add_event_listener_with_callback("pointerdown", on_down.as_ref().unchecked_ref())?;
        on_down.forget();
    }
    {
        let engine = engine.clone();
        let canvas_el = canvas.clone();
        let document = document.clone();
        let on_move =
            Closure::<dyn FnMut(PointerEvent)>::wrap(Box::new(move |event: PointerEvent| {
                let p = event_logical_point(&event, &canvas_el);
                let actions = engine.borrow_mut().on_pointer_move(p);
                run_actions(&engine, &canvas_el, &document, &actions, Some(event.pointer_id()));
            }));
        canvas.add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();
    }
    {
        let engine = engine.clone();
        let canvas_el = canvas.clone();
        let document = document.clone();
        let on_up =
            Closure::<dyn FnMut(PointerEvent)>::wrap(Box::new(move |event: PointerEvent| {
                let actions = engine.borrow_mut().on_pointer_up();
                run_actions(&engine, &canvas_el, &document, &actions, Some(event.pointer_id()));
            }));
        canvas.add_event_listener_with_callback("pointerup", on_up.as_ref().unchecked_ref())?;
        on_up.forget();
    }
    Ok(())
}

fn attach_reset_button(
    engine: &Rc<RefCell<Engine>>,
    canvas: &HtmlCanvasElement,
    document: &Document,
) {
    let Some(el) = document.get_element_by_id(RESET_ID) else {
        return;
    };
    let Ok(button) = el.dyn_into::<HtmlElement>() else {
        return;
    };

    let engine = engine.clone();
    let canvas = canvas.clone();
    let document = document.clone();
    let on_click = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        let result = engine.borrow_mut().reset();
        match result {
            Ok(actions) => run_actions(&engine, &canvas, &document, &actions, None),
            Err(err) => console::error_1(&placement_to_js(err)),
        }
    }));
    button.set_onclick(Some(on_click.as_ref().unchecked_ref()));
    on_click.forget();
}

/// Execute a batch of engine actions against the DOM. Capture and release
/// apply only to batches that came from a pointer event.
fn run_actions(
    engine: &Rc<RefCell<Engine>>,
    canvas: &HtmlCanvasElement,
    document: &Document,
    actions: &[Action],
    pointer_id: Option<i32>,
) {
    for action in actions {
        match action {
            Action::RenderNeeded => {
                if let Err(err) = engine.borrow().render() {
                    console::error_1(&err);
                }
                sync_notice(document, engine.borrow().core.notice());
            }
            Action::CapturePointer => {
                if let Some(id) = pointer_id {
                    if let Err(err) = canvas.set_pointer_capture(id) {
                        console::error_1(&err);
                    }
                }
            }
            Action::ReleasePointer => {
                if let Some(id) = pointer_id {
                    if let Err(err) = canvas.release_pointer_capture(id) {
                        console::error_1(&err);
                    }
                }
            }
        }
    }
}

/// Mirror the session notice into the optional notice element.
fn sync_notice(document: &Document, notice: Option<Notice>) {
    let Some(el) = document.get_element_by_id(NOTICE_ID) else {
        return;
    };
    let Ok(el) = el.dyn_into::<HtmlElement>() else {
        return;
    };
    match notice {
        Some(notice) => {
            el.set_text_content(Some(notice.message()));
            el.set_hidden(false);
        }
        None => {
            el.set_text_content(None);
            el.set_hidden(true);
        }
    }
}

fn placement_to_js(err: PlacementError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn serde_to_js(err: serde_json::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}
