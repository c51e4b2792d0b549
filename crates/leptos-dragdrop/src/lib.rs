//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! The payload type `T` is whatever the app wants to carry for the dragged
//! thing and the thing under the pointer. The library only tracks which
//! payloads are active and hovered, and reports `start / over / end`.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// DnD state signals
pub struct DndSignals<T: Send + Sync + 'static> {
    /// Payload being dragged
    pub active: RwSignal<Option<T>>,
    /// Payload under the pointer
    pub over: RwSignal<Option<T>>,
    /// Pending payload (mousedown but not yet dragging)
    pub pending: RwSignal<Option<T>>,
    /// Mousedown position for movement detection
    pub start: RwSignal<(i32, i32)>,
    /// Last pointer position while dragging, for overlays
    pub pointer: RwSignal<(i32, i32)>,
    /// True briefly after a drop so the trailing click can be ignored
    pub drag_just_ended: RwSignal<bool>,
}

impl<T: Send + Sync + 'static> Clone for DndSignals<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DndSignals<T> {}

pub fn create_dnd_signals<T: Send + Sync + 'static>() -> DndSignals<T> {
    DndSignals {
        active: RwSignal::new(None),
        over: RwSignal::new(None),
        pending: RwSignal::new(None),
        start: RwSignal::new((0, 0)),
        pointer: RwSignal::new((0, 0)),
        drag_just_ended: RwSignal::new(false),
    }
}

impl<T: Clone + Send + Sync + 'static> DndSignals<T> {
    pub fn is_dragging(&self) -> bool {
        self.active.with_untracked(Option::is_some)
    }
}

/// End drag operation
pub fn end_drag<T: Send + Sync + 'static>(dnd: &DndSignals<T>) {
    dnd.active.set(None);
    dnd.over.set(None);
    dnd.pending.set(None);
    dnd.drag_just_ended.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended;
        let cb = Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

fn is_form_control(ev: &web_sys::MouseEvent) -> bool {
    let Some(target) = ev.target() else {
        return false;
    };
    target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
}

/// Create mousedown handler for draggable elements
/// Records pending drag with start position
pub fn make_on_mousedown<T>(dnd: DndSignals<T>, payload: T) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    T: Clone + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || is_form_control(&ev) {
            return;
        }
        // A parent element must not replace the innermost draggable.
        ev.stop_propagation();
        dnd.pending.set(Some(payload.clone()));
        dnd.start.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for drop targets. `on_over` receives the
/// active payload and this target's payload on every entry while dragging.
pub fn make_on_mouseenter<T, F>(dnd: DndSignals<T>, payload: T, on_over: F) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    T: Clone + Send + Sync + 'static,
    F: Fn(T, T) + Clone + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if let Some(active) = dnd.active.get_untracked() {
            dnd.over.set(Some(payload.clone()));
            on_over(active, payload.clone());
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<T>(dnd: DndSignals<T>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    T: Clone + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.is_dragging() {
            dnd.over.set(None);
        }
    }
}

fn add_document_listener(event: &str, closure: Closure<dyn FnMut(web_sys::MouseEvent)>) {
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Bind document mousemove: starts the drag once the pointer has moved far
/// enough from the mousedown position, and tracks the pointer afterwards.
pub fn bind_global_mousemove<T, F>(dnd: DndSignals<T>, on_start: F)
where
    T: Clone + Send + Sync + 'static,
    F: Fn(T) + 'static,
{
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let position = (ev.client_x(), ev.client_y());
        if dnd.is_dragging() {
            dnd.pointer.set(position);
            return;
        }

        let Some(pending) = dnd.pending.get_untracked() else {
            return;
        };
        let (start_x, start_y) = dnd.start.get_untracked();
        let dx = (position.0 - start_x).abs();
        let dy = (position.1 - start_y).abs();

        // Start dragging if moved beyond threshold
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            dnd.pointer.set(position);
            dnd.active.set(Some(pending.clone()));
            on_start(pending);
        }
    });
    add_document_listener("mousemove", on_mousemove);
}

/// Bind global mouseup handler for drop detection. `on_end` receives the
/// active payload and the hovered one, if any. A plain click reports nothing.
pub fn bind_global_mouseup<T, S, E>(dnd: DndSignals<T>, on_start: S, on_end: E)
where
    T: Clone + Send + Sync + 'static,
    S: Fn(T) + 'static,
    E: Fn(T, Option<T>) + 'static,
{
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let active = dnd.active.get_untracked();
        let over = dnd.over.get_untracked();

        // Clear pending state first
        dnd.pending.set(None);

        match active {
            Some(active) => {
                end_drag(&dnd);
                on_end(active, over);
            }
            None => {
                // Click event will fire naturally on the element
                dnd.over.set(None);
            }
        }
    });
    add_document_listener("mouseup", on_mouseup);

    // Also bind global mousemove
    bind_global_mousemove(dnd, on_start);
}
