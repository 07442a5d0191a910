//! Card-stack UI composition and desk widgets.

mod cafe;
mod file_stack;
mod pages;
mod quote_ticker;

use leptos::{
    leptos_dom::helpers::{IntervalHandle, TimeoutHandle, WindowListenerHandle},
    *,
};

pub use self::{cafe::CafePage, file_stack::FileStack, quote_ticker::QuoteTickerBar};

use crate::{model::PointerPosition, runtime_context::use_carnet_runtime};

#[component]
/// Whole site: quote ticker above the card stack.
pub fn CarnetShell() -> impl IntoView {
    let runtime = use_carnet_runtime();
    view! {
        <div class="app" data-active-page=move || runtime.active_page().as_str()>
            <QuoteTickerBar />
            <FileStack />
        </div>
    }
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Primary button for mice, primary contact otherwise.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}
