use crate::components::{error_template, header};
use leptos::{
    html::{body, head, html, meta},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    ParamSegment, SsrMode, StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod api;
pub mod catalog;
mod components;
pub mod feedback;
pub mod fetch_guard;
pub mod home;
pub mod lightbox;
pub mod portfolio;
pub mod portfolio_item;
pub mod query;
pub mod types;

pub use components::error_template::AppError;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/portfolio.css")
                    .build(),
            ),
            Title(
                TitleProps::builder()
                    .text("Grafixr Studio \u{2013} Design Portfolio")
                    .build(),
            ),
        )),
        body().class("bg-[#111]").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            <div class="overflow-auto min-h-screen text-white font-poppins">
                {header::component}
                <main class="container flex flex-col gap-8 px-4 pt-10 pb-14 mx-auto mt-16 max-w-7xl md:px-6">
                    <FlatRoutes fallback=|| {
                        let mut outside_errors = Errors::default();
                        outside_errors.insert_with_default_key(error_template::AppError::NotFound);
                        error_template::component(Some(outside_errors), None)
                    }>
                        <Route path=StaticSegment("") view=home::component/>
                        <Route path=StaticSegment("feedback") view=feedback::component/>
                        <Route path=StaticSegment("portfolio") view=portfolio::component ssr=SsrMode::InOrder/>
                        <Route path=(StaticSegment("portfolio"), ParamSegment("id")) view=portfolio_item::component ssr=SsrMode::Async/>
                    </FlatRoutes>
                </main>
            </div>
        </Router>
    }
}
