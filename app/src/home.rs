//! This module defines the `home` component, the landing page with the three
//! most recent projects.
//!
//! Each card links to the list view filtered by the project's sub-category.

use leptos::{
    html::{div, h1, h2, h3, img, p, section, span, video},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};
use leptos_router::components::{A, AProps};

use crate::{
    api::select_portfolio,
    catalog::latest,
    components::loader,
    fetch_guard::{FetchGeneration, Relevant},
    portfolio::PORTFOLIO_ROUTE,
    query::BrowseQuery,
    types::PortfolioItem,
};

/// How many projects the landing page features.
pub const LATEST_COUNT: usize = 3;

pub const LATEST_FAILED_MESSAGE: &str = "Failed to load latest projects.";
pub const NO_DESCRIPTION: &str = "No description";

/// The featured projects for a fetch result, or the message to show instead.
pub fn latest_projects(fetched: Result<Vec<PortfolioItem>, String>) -> Result<Vec<PortfolioItem>, &'static str> {
    match fetched {
        Ok(items) => Ok(latest(&items, LATEST_COUNT)),
        Err(err) => {
            leptos::logging::warn!("Latest projects fetch failed: {err}");
            Err(LATEST_FAILED_MESSAGE)
        }
    }
}

/// The list view filtered to the project's sub-category.
#[must_use]
pub fn project_href(item: &PortfolioItem) -> String {
    BrowseQuery::default()
        .with_sub_category(Some(item.sub_category.clone()))
        .to_href(PORTFOLIO_ROUTE)
}

#[must_use]
pub fn blurb(item: &PortfolioItem) -> &str {
    if item.description.trim().is_empty() {
        NO_DESCRIPTION
    } else {
        &item.description
    }
}

fn project_card(item: PortfolioItem) -> impl IntoView {
    let href = project_href(&item);
    A(AProps::builder()
        .href(href)
        .children(ToChildren::to_children(move || {
            let cover = if item.is_video() {
                video()
                    .src(item.cover().to_owned())
                    .attr("muted", true)
                    .attr("playsinline", true)
                    .attr("preload", "metadata")
                    .class("object-cover w-full h-56")
                    .into_any()
            } else {
                img()
                    .src(item.cover().to_owned())
                    .alt(item.title.clone())
                    .class("object-cover w-full h-56")
                    .into_any()
            };
            div().class("flex overflow-hidden flex-col h-full rounded-3xl border transition-all duration-300 group bg-card border-white/20 hover:border-cyan-300/60").child((
                cover,
                div().class("flex flex-col flex-1 gap-3 items-center p-6 text-center").child((
                    h3().class("text-2xl font-semibold group-hover:text-cyan-300").child(item.title.clone()),
                    p().class("font-light line-clamp-3 text-white/80").child(blurb(&item).to_owned()),
                )),
            ))
        }))
        .build())
}

fn latest_view(fetched: Result<Vec<PortfolioItem>, String>) -> AnyView {
    match latest_projects(fetched) {
        Ok(items) => div()
            .class("grid grid-cols-1 gap-8 md:grid-cols-2 lg:grid-cols-3")
            .child(items.into_iter().map(project_card).collect_view())
            .into_any(),
        Err(message) => p().class("py-20 text-center text-red-400").child(message).into_any(),
    }
}

/// Renders the landing page.
pub fn component() -> impl IntoView {
    let generation = FetchGeneration::new();
    on_cleanup({
        let generation = generation.clone();
        move || generation.invalidate()
    });
    let collection = Resource::new(
        || (),
        move |()| {
            let ticket = generation.begin();
            async move { ticket.settle(select_portfolio().await.map_err(|err| err.to_string())) }
        },
    );

    div().class("flex flex-col gap-16").child((
        Title(TitleProps::builder().text("Grafixr Studio \u{2013} Design Portfolio").build()),
        div().class("flex flex-col gap-4 items-center py-10 text-center").child((
            h1().class("text-4xl font-extrabold sm:text-6xl").child((
                "We Design ",
                span().class("text-cyan-300").child("Brands"),
            )),
            p().class("max-w-2xl text-lg text-white/70").child("Logos, campaigns, motion and print for teams that want to be remembered."),
        )),
        section().class("flex flex-col gap-8").child((
            h2().class("text-4xl font-extrabold tracking-tight text-center sm:text-5xl").child("RECENT PROJECTS"),
            Suspense(
                SuspenseProps::builder()
                    .fallback(loader::component)
                    .children(TypedChildren::to_children(move || {
                        div().child(move || {
                            collection
                                .get()
                                .and_then(Relevant::into_current)
                                .map(latest_view)
                        })
                    }))
                    .build(),
            ),
        )),
    ))
}
