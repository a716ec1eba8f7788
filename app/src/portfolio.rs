//! This module defines the `portfolio` component, the browsable grid of every
//! portfolio item.
//!
//! The whole collection is fetched once per visit. Category filter and page
//! number are read from the URL so filtered views can be bookmarked and
//! shared; the title search is local and resets the grid to its first page.

use core::iter::once;

use icondata::BsCalendar;
use leptos::{
    ev,
    html::{a, div, h1, img, input, option, p, select, span, video},
    prelude::*,
    svg::svg,
};
use leptos_meta::{Title, TitleProps};
use leptos_router::{
    NavigateOptions,
    components::{A, AProps},
    hooks::{use_navigate, use_query_map},
    location::Url,
};

use crate::{
    api::select_portfolio,
    catalog::{ALL_CATEGORIES, Filter, Listing, PAGE_SIZE, PageSlice, page_numbers, sub_category_options},
    components::loader,
    fetch_guard::{FetchGeneration, Relevant},
    query::BrowseQuery,
    types::{PortfolioItem, titleize},
};

/// Route the list view is mounted on.
pub const PORTFOLIO_ROUTE: &str = "/portfolio";

/// Link target for an item's detail page. The id is opaque, so it is
/// percent-encoded as one path segment.
#[must_use]
pub fn detail_href(item: &PortfolioItem) -> String {
    format!("{PORTFOLIO_ROUTE}/{}", Url::escape(&item.id))
}

/// What the grid shows for a fetch result, the URL query and the search text.
#[must_use]
pub fn current_listing(
    fetched: &Result<Vec<PortfolioItem>, String>,
    query: &BrowseQuery,
    search: &str,
) -> Listing {
    let filter = Filter::new(query.sub_category.clone(), search);
    Listing::from_fetch(fetched, &filter, query.page, PAGE_SIZE)
}

fn status_message(message: &'static str) -> impl IntoView {
    p().class("py-20 text-center text-white/60").child(message)
}

fn card(item: PortfolioItem) -> impl IntoView {
    let href = detail_href(&item);
    A(AProps::builder()
        .href(href)
        .children(ToChildren::to_children(move || {
            let media = if item.is_video() {
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
                    .attr("loading", "lazy")
                    .class("object-cover w-full h-56 transition-transform duration-500 group-hover:scale-105")
                    .into_any()
            };
            div().class("overflow-hidden rounded-xl border transition-all duration-300 group bg-card border-white/10 hover:border-cyan-300/60").child((
                div().class("overflow-hidden").child(media),
                div().class("flex flex-col gap-2 p-4").child((
                    p().class("text-base font-semibold line-clamp-1 group-hover:text-cyan-300").child(item.title.clone()),
                    div().class("flex flex-row justify-between items-center text-xs text-white/60").child((
                        span().class("py-0.5 px-2 rounded-full bg-white/10").child(titleize(&item.sub_category)),
                        div().class("flex flex-row gap-1 items-center").child((
                            svg().attr("viewBox", BsCalendar.view_box).attr("innerHTML", BsCalendar.data).attr("style", "filter: brightness(0) invert(1);").class("size-3"),
                            p().child(item.created_on()),
                        )),
                    )),
                )),
            ))
        }))
        .build())
}

fn pager(slice: &PageSlice<PortfolioItem>, query: &BrowseQuery) -> impl IntoView {
    let step = |enabled: bool, page: usize, label: &'static str| {
        if enabled {
            a().href(query.with_page(page).to_href(PORTFOLIO_ROUTE))
                .class("py-1 px-3 rounded-lg transition-all duration-300 hover:text-black hover:bg-white")
                .child(label)
                .into_any()
        } else {
            span().class("py-1 px-3 rounded-lg opacity-40").child(label).into_any()
        }
    };

    let numbers = page_numbers(slice.page_count)
        .map(|page| {
            let current = page == slice.page;
            a().href(query.with_page(page).to_href(PORTFOLIO_ROUTE))
                .class(if current {
                    "py-1 px-3 font-bold text-black bg-cyan-300 rounded-lg"
                } else {
                    "py-1 px-3 rounded-lg transition-all duration-300 hover:text-black hover:bg-white"
                })
                .attr("aria-current", current.then_some("page"))
                .child(page.to_string())
        })
        .collect_view();

    div().class("flex flex-row flex-wrap gap-2 justify-center items-center text-sm").child((
        step(slice.has_previous(), slice.page.saturating_sub(1), "Prev"),
        numbers,
        step(slice.has_next(), slice.page + 1, "Next"),
    ))
}

fn page_view(slice: &PageSlice<PortfolioItem>, query: &BrowseQuery) -> impl IntoView {
    let cards = slice.items.iter().cloned().map(card).collect_view();
    div().class("flex flex-col gap-10").child((
        div().class("grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3").child(cards),
        slice.show_pager().then(|| pager(slice, query)),
    ))
}

fn filter_controls(options: Vec<String>, browse: Memo<BrowseQuery>, search: RwSignal<String>) -> impl IntoView {
    let navigate = use_navigate();

    let on_category = {
        let navigate = navigate.clone();
        move |event: ev::Event| {
            let next = browse.get_untracked().with_sub_category(Some(event_target_value(&event)));
            navigate(&next.to_href(PORTFOLIO_ROUTE), NavigateOptions::default());
        }
    };
    let on_search = move |event: ev::Event| {
        search.set(event_target_value(&event));
        if let Some(reset) = browse.get_untracked().after_search() {
            navigate(
                &reset.to_href(PORTFOLIO_ROUTE),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    };

    let choices = once(ALL_CATEGORIES.to_owned())
        .chain(options)
        .map(|value| {
            let label = if value == ALL_CATEGORIES { value.clone() } else { titleize(&value) };
            let selected = {
                let value = value.clone();
                move || browse.with(|query| query.selected() == value)
            };
            option().value(value).selected(selected).child(label)
        })
        .collect_view();

    div().class("flex flex-col gap-3 sm:flex-row sm:justify-between").child((
        select()
            .class("py-2 px-3 text-white rounded-lg border bg-card border-white/20")
            .attr("aria-label", "Filter by category")
            .prop("value", move || browse.with(|query| query.selected().to_owned()))
            .on(ev::change, on_category)
            .child(choices),
        input()
            .r#type("search")
            .placeholder("Search by title...")
            .class("py-2 px-3 text-white rounded-lg border sm:w-72 bg-card border-white/20")
            .prop("value", move || search.get())
            .on(ev::input, on_search),
    ))
}

/// Filter controls plus grid for one settled fetch. A failed fetch shows only
/// its message.
fn browse_view(
    fetched: Result<Vec<PortfolioItem>, String>,
    browse: Memo<BrowseQuery>,
    search: RwSignal<String>,
) -> impl IntoView {
    if let Err(err) = &fetched {
        leptos::logging::warn!("Portfolio fetch failed: {err}");
    }
    let controls = fetched
        .as_ref()
        .ok()
        .map(|items| filter_controls(sub_category_options(items), browse, search));
    let fetched = StoredValue::new(fetched);

    let grid = move || {
        let query = browse.get();
        let search = search.get();
        match fetched.with_value(|fetched| current_listing(fetched, &query, &search)) {
            Listing::Page(slice) => page_view(&slice, &query).into_any(),
            other => status_message(other.message().unwrap_or_default()).into_any(),
        }
    };

    div().class("flex flex-col gap-8").child((controls, grid))
}

/// Renders the portfolio grid with its category filter, search box and pager.
pub fn component() -> impl IntoView {
    let query = use_query_map();
    let browse = Memo::new(move |_| query.with(BrowseQuery::from_map));
    let search = RwSignal::new(String::new());

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

    div().class("flex flex-col gap-8").child((
        Title(TitleProps::builder().text("Portfolio \u{2013} Grafixr Studio").build()),
        h1().class("text-3xl font-bold text-center sm:text-5xl").child((
            "Explore Our ",
            span().class("text-cyan-300").child("Portfolio"),
        )),
        Suspense(
            SuspenseProps::builder()
                .fallback(loader::component)
                .children(TypedChildren::to_children(move || {
                    div().child(move || {
                        collection
                            .get()
                            .and_then(Relevant::into_current)
                            .map(|fetched| browse_view(fetched, browse, search))
                    })
                }))
                .build(),
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::catalog::{LOAD_FAILED_MESSAGE, NO_MATCHES_MESSAGE};
    use assert_matches::assert_matches;

    fn item(id: &str, title: &str, sub: &str, created_at: &str) -> PortfolioItem {
        PortfolioItem {
            id: id.to_owned(),
            title: title.to_owned(),
            sub_category: sub.to_owned(),
            created_at: created_at.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn test_detail_href_keeps_plain_ids() {
        assert_eq!(detail_href(&item("66a1f0c2", "", "", "")), "/portfolio/66a1f0c2");
    }

    #[test]
    fn test_detail_href_encodes_one_segment() {
        for id in ["a/b?c", "caf\u{e9}-01", "logo.pack", "50%off", "x#y"] {
            let href = detail_href(&item(id, "", "", ""));
            let segment = href.strip_prefix("/portfolio/").unwrap();
            assert!(!segment.contains(['/', '?', '#']), "href {href:?}");
            // The router decodes `:id` the same way before the detail view reads it.
            assert_eq!(Url::unescape(segment), id);
        }
    }

    #[test]
    fn test_failed_fetch_shows_message_and_no_grid() {
        let fetched = Err("store unavailable".to_owned());
        let listing = current_listing(&fetched, &BrowseQuery::default(), "");
        assert_eq!(listing, Listing::Failed);
        assert_eq!(listing.message(), Some(LOAD_FAILED_MESSAGE));
    }

    #[test]
    fn test_listing_follows_query_and_search() {
        let fetched = Ok(vec![
            item("a", "Logo Pack", "logo", "2024-01-01"),
            item("b", "Banner Set", "banner", "2024-02-01"),
            item("c", "Logo Refresh", "logo", "2024-03-01"),
        ]);
        let query = BrowseQuery::from_params(Some("logo".into()), Some("9".into()));

        let listing = current_listing(&fetched, &query, "");
        assert_matches!(listing, Listing::Page(ref slice) => {
            assert_eq!(slice.page, 1);
            assert_eq!(slice.items.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(), vec!["c", "a"]);
        });

        let listing = current_listing(&fetched, &query, "banner");
        assert_eq!(listing.message(), Some(NO_MATCHES_MESSAGE));
    }

    #[test]
    fn test_component_signature() {
        let _component: fn() -> _ = component;
    }
}
