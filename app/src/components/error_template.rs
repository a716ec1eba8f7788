//! This module defines the `error_template` component, the page shown when a
//! route does not exist.
//!
//! It includes an `AppError` enum for application-level errors and a component
//! that renders them, setting the matching HTTP status code during SSR.

use http::status::StatusCode;
use leptos::{
    html::{div, h1, p},
    prelude::*,
    svg::{path, svg},
};
use leptos_router::components::{A, AProps};
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Page Not Found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Collects the `AppError`s out of an error boundary's state.
fn app_errors(errors: &Errors) -> Vec<AppError> {
    errors
        .iter()
        .filter_map(|(_key, err)| err.downcast_ref::<AppError>().cloned())
        .collect()
}

/// Renders the error page.
///
/// `outside_errors` is what the router hands over for unmatched paths;
/// `errors` is the reactive variant used by error boundaries. With neither,
/// or with errors of other kinds only, the page falls back to a 404.
pub fn component(
    outside_errors: Option<Errors>,
    errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let mut errors = outside_errors
        .map(|errors| app_errors(&errors))
        .or_else(|| errors.map(|signal| signal.with_untracked(app_errors)))
        .unwrap_or_default();
    if errors.is_empty() {
        errors.push(AppError::NotFound);
    }

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let (Some(response), Some(first)) = (use_context::<ResponseOptions>(), errors.first()) {
            response.set_status(first.status_code());
        }
    }

    let lines = errors
        .into_iter()
        .map(|error| {
            p().class("text-xl tracking-widest uppercase text-white/50")
                .child(format!("{} | {error}", error.status_code().as_u16()))
        })
        .collect_view();

    div().class("grid place-content-center px-4 min-h-[60vh] antialiased text-white").child((
        h1().class("mb-6 text-3xl font-bold text-center").child("Something went wrong"),
        div().class("flex flex-col gap-1 justify-center items-center").child(lines),
        div().class("flex gap-1 justify-center items-center mt-6 text-center duration-200 hover:text-cyan-300").child(
            A(AProps::builder()
                .href("/portfolio")
                .children(ToChildren::to_children(move || {
                    vec![
                        svg().attr("width", "1.1em").attr("height", "1.1em").attr("viewBox", "0 0 24 24").attr("fill", "currentColor").attr("role", "graphics-symbol").child(
                            path().attr("d", "M21 11H6.414l5.293-5.293-1.414-1.414L2.586 12l7.707 7.707 1.414-1.414L6.414 13H21z"),
                        ).into_any(),
                        "Back to portfolio".into_any(),
                    ]
                }))
                .build()
            )
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NotFound.to_string(), "Page Not Found");
    }

    #[test]
    fn test_app_errors_ignores_foreign_errors() {
        let mut errors = Errors::default();
        errors.insert_with_default_key(AppError::NotFound);
        errors.insert(ErrorId::from(7usize), std::io::Error::other("disk"));

        let found = app_errors(&errors);
        assert_eq!(found.len(), 1);
    }
}
