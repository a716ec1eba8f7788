//! Server functions that read from the remote portfolio store.
//!
//! The browser never talks to the store directly: each function below runs
//! on the server, pulls the shared `RemoteStore` out of `AppState`, and
//! forwards a single `GET`. Store failures are logged with their cause and
//! reach the client only as an opaque `ServerFnError`; the views then show
//! their own static messages.
//!
//! Nothing here retries. A failed read is final for that page load.

#![allow(deprecated)]

use leptos::prelude::{ServerFnError, server};
use leptos::server_fn::codec::GetUrl;

#[cfg(feature = "ssr")]
use leptos::server_fn::error::NoCustomError;
#[cfg(feature = "ssr")]
use remote_store::{RemoteStore, StoreError};

use crate::types::{Category, PortfolioItem, Review};

/// Store path for the full collection.
pub const PORTFOLIO_PATH: &str = "/portfolio";
/// Store path for the category reference data.
pub const CATEGORIES_PATH: &str = "/admin/categories";
/// Store path for client reviews.
pub const REVIEWS_PATH: &str = "/reviews";

#[cfg(feature = "ssr")]
fn store_failure(context: &str, err: &StoreError) -> ServerFnError {
    tracing::error!(error = %err, context, "Remote store read failed");
    ServerFnError::<NoCustomError>::ServerError(format!("{context}: portfolio store unavailable"))
}

/// Loads every portfolio item.
///
/// # Errors
///
/// Returns a `ServerFnError` when the store cannot be reached or answers with
/// anything other than a JSON array.
#[cfg(feature = "ssr")]
pub async fn load_portfolio(store: &RemoteStore) -> Result<Vec<PortfolioItem>, ServerFnError> {
    let items = store
        .fetch_all::<PortfolioItem>(PORTFOLIO_PATH)
        .await
        .map_err(|e| store_failure("select_portfolio", &e))?;
    tracing::debug!(count = items.len(), "Loaded portfolio collection");
    Ok(items)
}

/// Loads one item; `Ok(None)` when the store has no record for `id`.
///
/// The id is opaque and goes to the store as a single encoded path segment.
///
/// # Errors
///
/// Returns a `ServerFnError` for transport failures and non-404 error statuses.
#[cfg(feature = "ssr")]
pub async fn load_portfolio_item(
    store: &RemoteStore,
    id: &str,
) -> Result<Option<PortfolioItem>, ServerFnError> {
    let item = store
        .fetch_record::<PortfolioItem>(PORTFOLIO_PATH, id)
        .await
        .map_err(|e| store_failure("select_portfolio_item", &e))?;
    if item.is_none() {
        tracing::debug!(id, "Portfolio item not found");
    }
    Ok(item)
}

/// Loads the admin-managed category list.
///
/// # Errors
///
/// Returns a `ServerFnError` when the store read fails.
#[cfg(feature = "ssr")]
pub async fn load_categories(store: &RemoteStore) -> Result<Vec<Category>, ServerFnError> {
    store
        .fetch_all::<Category>(CATEGORIES_PATH)
        .await
        .map_err(|e| store_failure("select_categories", &e))
}

/// Loads the client reviews for the feedback page.
///
/// # Errors
///
/// Returns a `ServerFnError` when the store read fails.
#[cfg(feature = "ssr")]
pub async fn load_reviews(store: &RemoteStore) -> Result<Vec<Review>, ServerFnError> {
    store
        .fetch_all::<Review>(REVIEWS_PATH)
        .await
        .map_err(|e| store_failure("select_reviews", &e))
}

/// Fetches the full portfolio collection for client-side browsing.
#[server(prefix = "/api", endpoint = "portfolio_items", input = GetUrl)]
pub async fn select_portfolio() -> Result<Vec<PortfolioItem>, ServerFnError> {
    use crate::types::AppState;
    use leptos::prelude::expect_context;

    let AppState { store, .. } = expect_context::<AppState>();
    load_portfolio(store.as_ref()).await
}

/// Fetches a single portfolio item by id.
#[server(prefix = "/api", endpoint = "portfolio_item", input = GetUrl)]
pub async fn select_portfolio_item(id: String) -> Result<Option<PortfolioItem>, ServerFnError> {
    use crate::types::AppState;
    use leptos::prelude::expect_context;

    let AppState { store, .. } = expect_context::<AppState>();
    load_portfolio_item(store.as_ref(), &id).await
}

/// Fetches the category reference data used by the navigation menu.
#[server(prefix = "/api", endpoint = "categories", input = GetUrl)]
pub async fn select_categories() -> Result<Vec<Category>, ServerFnError> {
    use crate::types::AppState;
    use leptos::prelude::expect_context;

    let AppState { store, .. } = expect_context::<AppState>();
    load_categories(store.as_ref()).await
}

/// Fetches the client reviews shown on the feedback page.
#[server(prefix = "/api", endpoint = "reviews", input = GetUrl)]
pub async fn select_reviews() -> Result<Vec<Review>, ServerFnError> {
    use crate::types::AppState;
    use leptos::prelude::expect_context;

    let AppState { store, .. } = expect_context::<AppState>();
    load_reviews(store.as_ref()).await
}
