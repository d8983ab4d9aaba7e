//! Small DOM utilities shared by the pages.
//!
//! - **Toasts**: transient success/error notifications injected straight into
//!   `<body>` and removed after [`TOAST_DURATION_MS`].
//! - **Flash messages**: a toast that travels with a navigation (e.g. "Materia
//!   actualizada") and is shown by the page the user lands on.
//! - **Input reading**: pulling the current value out of input/select events.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::config::TOAST_DURATION_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn colors(self) -> (&'static str, &'static str, &'static str) {
        // (background, border, text)
        match self {
            ToastKind::Success => ("#f0fdf4", "#bbf7d0", "#166534"),
            ToastKind::Error => ("#fef2f2", "#fecaca", "#991b1b"),
        }
    }
}

/// Message carried in the router's navigation state and shown as a toast
/// when the destination page mounts.
#[derive(Clone, Debug, PartialEq)]
pub struct Flash {
    pub message: String,
    pub kind: ToastKind,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }
}

/// Displays a notification in the top-right corner; it removes itself after
/// a few seconds. Uses `textContent`, so the message is never parsed as HTML.
pub fn show_toast(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    toast.set_class_name("toast");
    let html_toast: HtmlElement = toast.unchecked_into();
    let (background, border, color) = kind.colors();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("top", "16px").ok();
    style.set_property("right", "16px").ok();
    style.set_property("background", background).ok();
    style.set_property("border", &format!("1px solid {border}")).ok();
    style.set_property("color", color).ok();
    style.set_property("padding", "12px 18px").ok();
    style.set_property("border-radius", "8px").ok();
    style.set_property("box-shadow", "0 4px 12px rgba(0, 0, 0, 0.15)").ok();
    style.set_property("z-index", "10000").ok();
    style.set_property("font-family", "Arial, sans-serif").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

pub fn show_flash(flash: &Flash) {
    show_toast(&flash.message, flash.kind);
}

pub fn input_value(e: &InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

pub fn select_value(e: &Event) -> String {
    let select: HtmlSelectElement = e.target_unchecked_into();
    select.value()
}
