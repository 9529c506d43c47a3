//! Window-level drag tracking for column resizing.
//!
//! Listeners are the acquired resource: they exist only while a drag is in
//! progress. `begin` attaches mousemove/mouseup to the window, `end` removes
//! them, and `Drop` removes them again so component teardown mid-drag can
//! never leak a listener.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

type MouseClosure = Closure<dyn FnMut(MouseEvent)>;

#[derive(Default)]
pub struct ResizeController {
    move_closure: Option<MouseClosure>,
    up_closure: Option<MouseClosure>,
    active: bool,
}

impl ResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach window listeners for one drag. `on_move` receives the current
    /// pointer x; `on_up` fires once when the button is released.
    pub fn begin(
        &mut self,
        mut on_move: impl FnMut(f64) + 'static,
        mut on_up: impl FnMut() + 'static,
    ) {
        let Some(window) = web_sys::window() else {
            return;
        };
        self.end();
        // Closures from a previous drag are no longer referenced by the DOM
        // at this point; release them before installing the new pair.
        self.move_closure = None;
        self.up_closure = None;

        let move_closure: MouseClosure = Closure::wrap(Box::new(move |event: MouseEvent| {
            on_move(event.client_x() as f64);
        }));
        let up_closure: MouseClosure = Closure::wrap(Box::new(move |_event: MouseEvent| {
            on_up();
        }));

        let _ = window.add_event_listener_with_callback(
            "mousemove",
            move_closure.as_ref().unchecked_ref(),
        );
        let _ = window
            .add_event_listener_with_callback("mouseup", up_closure.as_ref().unchecked_ref());

        self.move_closure = Some(move_closure);
        self.up_closure = Some(up_closure);
        self.active = true;
    }

    /// Remove the window listeners. Safe to call from inside the mouseup
    /// handler itself: the closures stay allocated until the next `begin`
    /// or until the controller drops.
    pub fn end(&mut self) {
        if !self.active {
            return;
        }
        if let Some(window) = web_sys::window() {
            if let Some(closure) = &self.move_closure {
                let _ = window.remove_event_listener_with_callback(
                    "mousemove",
                    closure.as_ref().unchecked_ref(),
                );
            }
            if let Some(closure) = &self.up_closure {
                let _ = window.remove_event_listener_with_callback(
                    "mouseup",
                    closure.as_ref().unchecked_ref(),
                );
            }
        }
        self.active = false;
    }
}

impl Drop for ResizeController {
    fn drop(&mut self) {
        self.end();
    }
}
