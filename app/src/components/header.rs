use leptos::prelude::*;
use leptos_router::components::A;

use crate::api::select_categories;
use crate::query::BrowseQuery;
use crate::types::{Category, titleize};

/// One dropdown per main category, each linking to its filtered listing.
fn category_menu(category: Category) -> impl IntoView {
    let links = category
        .sub_categories
        .into_iter()
        .map(|sub| {
            let href = BrowseQuery::default()
                .with_sub_category(Some(sub.clone()))
                .to_href("/portfolio");
            view! {
                <li class="py-1 px-4 whitespace-nowrap hover:text-cyan-300">
                    <A href=href>{titleize(&sub)}</A>
                </li>
            }
        })
        .collect_view();

    view! {
        <details class="relative">
            <summary class="list-none transition-all duration-300 cursor-pointer hover:text-cyan-300">
                {titleize(&category.main_category)}
            </summary>
            <ul class="absolute right-0 z-20 py-2 mt-2 rounded-lg border shadow-lg bg-[#181818] border-white/10">
                {links}
            </ul>
        </details>
    }
}

pub fn component() -> impl IntoView {
    // The menu is decoration; a failed read just leaves it empty.
    let categories = Resource::new(
        || (),
        |()| async move {
            select_categories().await.unwrap_or_else(|err| {
                leptos::logging::warn!("Failed to fetch categories: {err}");
                Vec::new()
            })
        },
    );

    view! {
        <header class="fixed top-0 right-0 left-0 z-10 py-6 px-4 md:px-6 bg-[#111]/80 backdrop-blur-md">
            <div class="container mx-auto max-w-7xl">
                <nav class="flex flex-row justify-between items-center text-white">
                    <div class="text-lg font-bold transition-all duration-500 sm:text-3xl hover:text-cyan-300">
                        <A href="/">"grafixr"</A>
                    </div>
                    <div class="flex flex-row gap-6 items-center text-sm sm:text-base">
                        <A href="/portfolio">"Portfolio"</A>
                        <A href="/feedback">"Feedback"</A>
                        <Suspense fallback=|| ()>
                            {move || {
                                categories
                                    .get()
                                    .map(|categories| {
                                        categories.into_iter().map(category_menu).collect_view()
                                    })
                            }}
                        </Suspense>
                    </div>
                </nav>
            </div>
        </header>
    }
}
