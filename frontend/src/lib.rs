//! WebAssembly entry point for the portfolio site.
//!
//! The server renders every page; this crate hydrates that HTML so filtering,
//! paging and the lightbox run in the browser.

/// Client-side log level: chatty in debug builds, quieter in release.
#[must_use]
pub const fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the server-rendered page.
///
/// Installs `console_log` and `console_error_panic_hook` first so hydration
/// problems show up in the browser console.
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log_level());
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(component);
}
