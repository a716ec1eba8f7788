//! This module defines the `portfolio_item` component, the detail page for a
//! single portfolio entry.
//!
//! It shows the item's metadata and gallery. Clicking a gallery image opens a
//! fullscreen lightbox with cyclic navigation by buttons or arrow keys.
//! Escape closes the lightbox, or returns to the list when it is closed.

use leptos::{ev, prelude::*};
use leptos_meta::Title;
use leptos_router::{
    NavigateOptions,
    components::A,
    hooks::{use_navigate, use_params_map},
};
use serde::{Deserialize, Serialize};

use crate::{
    api::select_portfolio_item,
    components::loader,
    fetch_guard::{FetchGeneration, Relevant},
    lightbox::{DetailKeys, Lightbox, WindowKeyHost, leaves_detail, warm_images},
    portfolio::PORTFOLIO_ROUTE,
    types::{PLACEHOLDER_IMAGE, PortfolioItem, titleize},
};

pub const DETAIL_FAILED_MESSAGE: &str = "Could not load this portfolio item.";
pub const NOT_FOUND_MESSAGE: &str = "Item not found.";

/// Outcome of loading one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailState {
    Failed,
    NotFound,
    Ready(PortfolioItem),
}

impl DetailState {
    #[must_use]
    pub fn from_fetch<E>(fetched: Result<Option<PortfolioItem>, E>) -> Self {
        match fetched {
            Ok(Some(item)) => Self::Ready(item),
            Ok(None) => Self::NotFound,
            Err(_) => Self::Failed,
        }
    }

    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::Failed => Some(DETAIL_FAILED_MESSAGE),
            Self::NotFound => Some(NOT_FOUND_MESSAGE),
            Self::Ready(_) => None,
        }
    }
}

/// Heading such as `Branding Portfolio`, with the sub-category when present.
#[must_use]
pub fn heading(item: &PortfolioItem) -> (String, Option<String>) {
    let main = format!("{} Portfolio", titleize(&item.main_category)).trim().to_owned();
    let sub = (!item.sub_category.is_empty()).then(|| titleize(&item.sub_category));
    (main, sub)
}

/// Lightbox caption: position plus title, e.g. `2 / 5 - Logo Pack`.
#[must_use]
pub fn caption(lightbox: &Lightbox, title: &str) -> Option<String> {
    lightbox.counter().map(|counter| format!("{counter} - {title}"))
}

fn back_link() -> impl IntoView {
    view! {
        <div class="text-sm transition-all duration-300 hover:text-cyan-300">
            <A href=PORTFOLIO_ROUTE>"\u{2190} Back to portfolio"</A>
        </div>
    }
}

fn status_view(message: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-6 items-center py-20 text-center">
            <p class="text-white/60">{message}</p>
            {back_link()}
        </div>
    }
}

fn media(src: String, alt: String, video: bool, class: &'static str) -> AnyView {
    if video {
        view! { <video src=src controls=true preload="metadata" class=class></video> }.into_any()
    } else {
        view! { <img src=src alt=alt class=class/> }.into_any()
    }
}

fn lightbox_overlay(lightbox: RwSignal<Lightbox>, files: StoredValue<Vec<String>>, title: String, video: bool) -> impl IntoView {
    let multiple = lightbox.with_untracked(|state| state.file_count() > 1);
    move || {
        let state = lightbox.get();
        let index = state.index()?;
        let src = files.with_value(|files| files.get(index).cloned())?;
        let label = caption(&state, &title).unwrap_or_default();
        let close = move |_| lightbox.update(Lightbox::close);
        let previous = move |event: ev::MouseEvent| {
            event.stop_propagation();
            lightbox.update(Lightbox::previous);
        };
        let next = move |event: ev::MouseEvent| {
            event.stop_propagation();
            lightbox.update(Lightbox::next);
        };

        Some(view! {
            <div
                role="dialog"
                aria-modal="true"
                aria-label="Image viewer"
                class="flex fixed inset-0 z-50 flex-col justify-center items-center p-4 bg-black/90"
                on:click=close
            >
                <button
                    aria-label="Close image viewer"
                    class="absolute top-4 right-6 text-3xl text-white hover:text-cyan-300"
                    on:click=close
                >
                    "\u{2715}"
                </button>
                <Show when=move || multiple>
                    <button
                        aria-label="Previous image"
                        class="absolute left-4 top-1/2 text-4xl text-white -translate-y-1/2 hover:text-cyan-300"
                        on:click=previous
                    >
                        "\u{2039}"
                    </button>
                    <button
                        aria-label="Next image"
                        class="absolute right-4 top-1/2 text-4xl text-white -translate-y-1/2 hover:text-cyan-300"
                        on:click=next
                    >
                        "\u{203a}"
                    </button>
                </Show>
                <div class="flex flex-col gap-3 items-center" on:click=|event: ev::MouseEvent| event.stop_propagation()>
                    {media(src, label.clone(), video, "max-h-[80vh] max-w-[90vw] object-contain rounded-lg")}
                    <p class="text-sm text-white/70">{label}</p>
                </div>
            </div>
        })
    }
}

fn detail_view(item: PortfolioItem) -> impl IntoView {
    let video = item.is_video();
    let lightbox = RwSignal::new(Lightbox::new(item.files.len()));
    let files = StoredValue::new(item.files.clone());
    let leave = RwSignal::new(false);
    let keys = StoredValue::new_local(DetailKeys::new(
        WindowKeyHost::new(move |key| lightbox.update(|state| state.apply_key(key))),
        WindowKeyHost::new(move |key| {
            if leaves_detail(&lightbox.get_untracked(), key) {
                leave.set(true);
            }
        }),
    ));

    let navigate = use_navigate();
    Effect::new(move |_| {
        if leave.get() {
            navigate(PORTFOLIO_ROUTE, NavigateOptions::default());
        }
    });
    Effect::new(move |_| {
        let state = lightbox.get();
        keys.update_value(|keys| keys.sync(state.is_open()));
        if let Some((next, previous)) = state.adjacent() {
            files.with_value(|files| {
                warm_images([next, previous].into_iter().filter_map(|i| files.get(i)).map(String::as_str));
            });
        }
    });
    on_cleanup(move || keys.update_value(DetailKeys::release));

    let (main_heading, sub_heading) = heading(&item);
    let total = item.files.len();
    let gallery = if item.files.is_empty() {
        view! {
            <img src=PLACEHOLDER_IMAGE alt=item.title.clone() class="w-full rounded-xl"/>
        }
        .into_any()
    } else {
        item.files
            .iter()
            .enumerate()
            .map(|(index, src)| {
                let alt = format!("{} {}", item.title, index + 1);
                view! {
                    <button
                        class="overflow-hidden relative rounded-xl border cursor-zoom-in group border-white/10"
                        on:click=move |_| lightbox.update(|state| state.open(index))
                    >
                        {media(src.clone(), alt, video, "object-cover w-full h-64 transition-transform duration-500 group-hover:scale-105")}
                        <span class="absolute right-2 bottom-2 py-0.5 px-2 text-xs rounded-full bg-black/70">
                            {format!("{}/{total}", index + 1)}
                        </span>
                    </button>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <Title text=item.title.clone()/>
        <article class="flex flex-col gap-8">
            {back_link()}
            <header class="flex flex-col gap-3">
                <h1 class="text-3xl font-bold sm:text-4xl">
                    {main_heading}
                    {sub_heading.map(|sub| view! { <span class="text-cyan-300">{format!(": {sub}")}</span> })}
                </h1>
                <h2 class="text-xl text-white/90">{item.title.clone()}</h2>
                <div class="flex flex-row flex-wrap gap-2 items-center text-xs">
                    <span class="py-1 px-2 rounded-full bg-white/10">{titleize(&item.main_category)}</span>
                    <span class="py-1 px-2 rounded-full bg-white/10">{titleize(&item.sub_category)}</span>
                    <span class="text-white/60">{item.created_on()}</span>
                </div>
                {(!item.description.is_empty())
                    .then(|| {
                        view! {
                            <p class="leading-relaxed whitespace-pre-line text-white/80">
                                {item.description.clone()}
                            </p>
                        }
                    })}
            </header>
            <section class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3">{gallery}</section>
        </article>
        {lightbox_overlay(lightbox, files, item.title, video)}
    }
}

/// Renders one portfolio item, keyed on the `id` route parameter.
pub fn component() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|params| params.get("id").unwrap_or_default());

    let generation = FetchGeneration::new();
    on_cleanup({
        let generation = generation.clone();
        move || generation.invalidate()
    });
    let item = Resource::new(id, move |id| {
        let ticket = generation.begin();
        async move { ticket.settle(DetailState::from_fetch(select_portfolio_item(id).await)) }
    });

    view! {
        <Suspense fallback=loader::overlay>
            {move || {
                item.get()
                    .map(|state| match state {
                        Relevant::Stale => loader::overlay().into_any(),
                        Relevant::Current(DetailState::Ready(item)) => detail_view(item).into_any(),
                        Relevant::Current(other) => {
                            status_view(other.message().unwrap_or_default()).into_any()
                        }
                    })
            }}
        </Suspense>
    }
}
