//! Scoped window-level pointer capture
//!
//! While an interaction is active the widget must see every pointer move,
//! including those outside its own element, so move/up listeners go on the
//! window. They are attached when an interaction begins and detached the
//! moment it ends, bounding the subscription to one interaction - repeated
//! open/close cycles of the widget never accumulate listeners.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;

use verdant_overlay::{OverlayEngine, PointerSample};

/// Events that continue an interaction. Registered non-passive so the
/// widget may suppress scrolling while it consumes the gesture.
const MOVE_EVENTS: [&str; 2] = ["mousemove", "touchmove"];
/// Events that end an interaction.
const UP_EVENTS: [&str; 3] = ["mouseup", "touchend", "touchcancel"];

/// Normalize a native mouse or touch event into a pointer sample.
///
/// Touch events use the first touch point; `touchend` carries it in
/// `changedTouches`.
pub fn normalize(event: &web_sys::Event) -> Option<PointerSample> {
    if let Some(mouse) = event.dyn_ref::<web_sys::MouseEvent>() {
        return Some(PointerSample::new(
            mouse.client_x() as f32,
            mouse.client_y() as f32,
        ));
    }
    if let Some(touch) = event.dyn_ref::<web_sys::TouchEvent>() {
        let point = touch
            .touches()
            .get(0)
            .or_else(|| touch.changed_touches().get(0))?;
        return Some(PointerSample::new(
            point.client_x() as f32,
            point.client_y() as f32,
        ));
    }
    None
}

/// A window-level move/up subscription scoped to one interaction.
pub struct PointerCapture {
    window: web_sys::Window,
    on_move: Closure<dyn FnMut(web_sys::Event)>,
    on_up: Closure<dyn FnMut(web_sys::Event)>,
    attached: Cell<bool>,
}

impl PointerCapture {
    /// Attach listeners feeding the engine.
    ///
    /// `slot` is where the shell stores this capture; the up handler empties
    /// it so the subscription dies with the interaction on every exit path
    /// (release and device cancel alike). The spent closure is parked in
    /// `retired` because a closure cannot be freed while it is executing;
    /// the next capture (or the shell's drop) releases it.
    pub fn attach(
        engine: Rc<RefCell<OverlayEngine>>,
        slot: Rc<RefCell<Option<PointerCapture>>>,
        retired: Rc<RefCell<Option<PointerCapture>>>,
    ) -> Result<PointerCapture, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let move_engine = engine.clone();
        let on_move = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(sample) = normalize(&event) {
                // The widget is consuming the gesture; stop scroll/pan
                if event.cancelable() {
                    event.prevent_default();
                }
                move_engine.borrow_mut().handle_pointer_move(sample.x, sample.y);
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        let on_up = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            engine.borrow_mut().handle_pointer_up();
            if let Some(capture) = slot.borrow_mut().take() {
                capture.detach();
                *retired.borrow_mut() = Some(capture);
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        let capture = PointerCapture {
            window,
            on_move,
            on_up,
            attached: Cell::new(false),
        };
        capture.attach_listeners()?;
        Ok(capture)
    }

    fn attach_listeners(&self) -> Result<(), JsValue> {
        let options = AddEventListenerOptions::new();
        options.set_passive(false);

        for name in MOVE_EVENTS {
            self.window
                .add_event_listener_with_callback_and_add_event_listener_options(
                    name,
                    self.on_move.as_ref().unchecked_ref(),
                    &options,
                )?;
        }
        for name in UP_EVENTS {
            self.window
                .add_event_listener_with_callback(name, self.on_up.as_ref().unchecked_ref())?;
        }
        self.attached.set(true);
        Ok(())
    }

    /// Remove the window listeners. Idempotent.
    pub fn detach(&self) {
        if !self.attached.replace(false) {
            return;
        }
        for name in MOVE_EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(name, self.on_move.as_ref().unchecked_ref());
        }
        for name in UP_EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(name, self.on_up.as_ref().unchecked_ref());
        }
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        self.detach();
    }
}
