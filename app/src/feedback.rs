//! This module defines the `feedback` component, a grid of client reviews.

use leptos::prelude::*;
use leptos_meta::Title;
use serde::{Deserialize, Serialize};

use crate::{
    api::select_reviews,
    components::loader,
    fetch_guard::{FetchGeneration, Relevant},
    types::{MAX_RATING, PLACEHOLDER_IMAGE, Review},
};

pub const REVIEWS_FAILED_MESSAGE: &str = "Failed to load reviews.";
pub const NO_REVIEWS_MESSAGE: &str = "No reviews yet.";

/// Outcome of loading the reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReviewsState {
    Failed,
    Empty,
    Ready(Vec<Review>),
}

impl ReviewsState {
    pub fn from_fetch<E: std::fmt::Display>(fetched: Result<Vec<Review>, E>) -> Self {
        match fetched {
            Ok(reviews) if reviews.is_empty() => Self::Empty,
            Ok(reviews) => Self::Ready(reviews),
            Err(err) => {
                leptos::logging::warn!("Reviews fetch failed: {err}");
                Self::Failed
            }
        }
    }

    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::Failed => Some(REVIEWS_FAILED_MESSAGE),
            Self::Empty => Some(NO_REVIEWS_MESSAGE),
            Self::Ready(_) => None,
        }
    }
}

/// One flag per star on the scale, `true` for filled.
pub fn star_flags(review: &Review) -> impl Iterator<Item = bool> {
    let filled = review.stars();
    (1..=MAX_RATING).map(move |star| star <= filled)
}

#[must_use]
pub fn photo_src(review: &Review) -> &str {
    if review.photo.is_empty() { PLACEHOLDER_IMAGE } else { &review.photo }
}

fn review_card(review: Review) -> impl IntoView {
    let stars = star_flags(&review)
        .map(|filled| {
            let class = if filled { "text-yellow-400" } else { "text-white/20" };
            view! { <span class=class>"\u{2605}"</span> }
        })
        .collect_view();
    let label = format!("{} out of {MAX_RATING} stars", review.stars());

    view! {
        <article class="flex flex-col gap-4 p-6 rounded-2xl border bg-card border-white/10">
            <div class="flex flex-row gap-4 items-center">
                <img
                    src=photo_src(&review).to_owned()
                    alt=review.name.clone()
                    class="object-cover w-12 h-12 rounded-full"
                />
                <div class="flex flex-col">
                    <h3 class="font-semibold">{review.name.clone()}</h3>
                    <div class="flex flex-row text-lg" role="img" aria-label=label>
                        {stars}
                    </div>
                </div>
            </div>
            <p class="leading-relaxed text-white/80">{review.text}</p>
        </article>
    }
}

/// Renders every client review.
pub fn component() -> impl IntoView {
    let generation = FetchGeneration::new();
    on_cleanup({
        let generation = generation.clone();
        move || generation.invalidate()
    });
    let reviews = Resource::new(
        || (),
        move |()| {
            let ticket = generation.begin();
            async move { ticket.settle(ReviewsState::from_fetch(select_reviews().await)) }
        },
    );

    view! {
        <Title text="Feedback \u{2013} Grafixr Studio"/>
        <section class="flex flex-col gap-10">
            <h1 class="text-4xl font-extrabold tracking-tight text-center sm:text-6xl">"FEEDBACK"</h1>
            <Suspense fallback=loader::component>
                {move || {
                    reviews
                        .get()
                        .and_then(Relevant::into_current)
                        .map(|state| match state {
                            ReviewsState::Ready(reviews) => {
                                view! {
                                    <div class="grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3">
                                        {reviews.into_iter().map(review_card).collect_view()}
                                    </div>
                                }
                                    .into_any()
                            }
                            other => {
                                view! {
                                    <p class="py-20 text-center text-white/60">
                                        {other.message().unwrap_or_default()}
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn review(name: &str, rating: f64) -> Review {
        Review {
            id: name.to_lowercase(),
            name: name.to_owned(),
            rating,
            ..Default::default()
        }
    }

    #[test]
    fn test_state_from_fetch() {
        assert_matches!(
            ReviewsState::from_fetch::<String>(Ok(vec![review("Nadia", 5.0)])),
            ReviewsState::Ready(ref reviews) if reviews.len() == 1
        );
        assert_eq!(ReviewsState::from_fetch::<String>(Ok(vec![])), ReviewsState::Empty);
        assert_eq!(ReviewsState::from_fetch(Err("502")), ReviewsState::Failed);
    }

    #[test]
    fn test_failure_and_empty_read_differently() {
        assert_eq!(ReviewsState::Failed.message(), Some(REVIEWS_FAILED_MESSAGE));
        assert_eq!(ReviewsState::Empty.message(), Some(NO_REVIEWS_MESSAGE));
        assert_eq!(ReviewsState::Ready(vec![review("Sam", 3.0)]).message(), None);
    }

    #[test]
    fn test_star_flags_fill_from_the_left() {
        let flags: Vec<bool> = star_flags(&review("Sam", 3.4)).collect();
        assert_eq!(flags, vec![true, true, true, false, false]);

        assert!(star_flags(&review("Max", 7.0)).all(|filled| filled));
        assert!(star_flags(&review("Min", f64::NAN)).all(|filled| !filled));
        assert_eq!(star_flags(&review("Any", 2.0)).count(), usize::from(MAX_RATING));
    }

    #[test]
    fn test_missing_photo_uses_placeholder() {
        let mut reviewer = review("Sam", 4.0);
        assert_eq!(photo_src(&reviewer), PLACEHOLDER_IMAGE);
        reviewer.photo = "https://cdn.example.com/sam.jpg".to_owned();
        assert_eq!(photo_src(&reviewer), "https://cdn.example.com/sam.jpg");
    }

    #[test]
    fn test_component_signature() {
        let _component: fn() -> _ = component;
    }
}
