//! This module defines the loading indicators shown while portfolio data is
//! being fetched.
//!
//! `component` is an inline spinner; `overlay` blocks the whole viewport and
//! is used by the detail view, where nothing useful can render until the item
//! arrives.

use leptos::{
    html::{div, p},
    prelude::*,
};

fn spinner() -> impl IntoView {
    div()
        .class("relative")
        .child((
            div().class("absolute inset-0 w-14 h-14 rounded-full animate-pulse blur-2xl bg-cyan-400/20"),
            div().class("w-14 h-14 rounded-full border-4 border-t-transparent border-b-transparent animate-spin border-l-cyan-400 border-r-pink-400"),
        ))
}

/// Renders an inline loading spinner with a short caption.
pub fn component() -> impl IntoView {
    div()
        .class("flex flex-col gap-3 justify-center items-center py-20")
        .child((
            spinner(),
            p().class("text-sm italic text-white/60").child("Loading..."),
        ))
}

/// Renders a fullscreen, input-blocking loading overlay.
pub fn overlay() -> impl IntoView {
    div()
        .class("flex fixed inset-0 z-50 justify-center items-center bg-black/80 backdrop-blur-sm")
        .attr("aria-busy", "true")
        .child(spinner())
}
