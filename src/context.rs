//! Application Context
//!
//! Shared state provided via Leptos Context API.

use board_core::DragEntity;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals, DndSignals};

use crate::commands;

/// Toasts dismiss themselves after this long
const TOAST_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Info => "toast toast-info",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub toasts: RwSignal<Vec<Toast>>,
    next_toast_id: StoredValue<u32>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_toast_id: StoredValue::new(0),
        }
    }

    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                kind,
                message: message.into(),
            })
        });

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            toasts.update(|toasts| toasts.retain(|t| t.id != id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(ToastKind::Info, message);
    }

    /// Error toast, also written to the console and the backend log
    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        web_sys::console::error_1(&format!("[BOARD] {}", message).into());

        let logged = message.clone();
        spawn_local(async move {
            let _ = commands::frontend_log("error", &logged).await;
        });
        self.notify(ToastKind::Error, message);
    }

    pub fn dismiss(&self, id: u32) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Gesture callbacks of the board currently mounted
#[derive(Clone, Copy)]
pub struct DragHandlers {
    pub on_start: Callback<DragEntity>,
    pub on_end: Callback<(DragEntity, Option<DragEntity>)>,
}

/// Drag signals shared by every board view. Document listeners are bound
/// once and forward to whichever board registered its handlers.
#[derive(Clone, Copy)]
pub struct DragContext {
    pub dnd: DndSignals<DragEntity>,
    handlers: StoredValue<Option<DragHandlers>>,
}

impl DragContext {
    pub fn new() -> Self {
        let ctx = Self {
            dnd: create_dnd_signals(),
            handlers: StoredValue::new(None),
        };

        let handlers = ctx.handlers;
        bind_global_mouseup(
            ctx.dnd,
            move |active| {
                if let Some(h) = handlers.get_value() {
                    h.on_start.run(active);
                }
            },
            move |active, over| {
                if let Some(h) = handlers.get_value() {
                    h.on_end.run((active, over));
                }
            },
        );
        ctx
    }

    pub fn register(&self, handlers: DragHandlers) {
        self.handlers.set_value(Some(handlers));
    }

    pub fn unregister(&self) {
        self.handlers.set_value(None);
    }
}

pub fn use_drag_context() -> DragContext {
    expect_context::<DragContext>()
}
