//! Client-side browsing over the full portfolio collection.
//!
//! The remote store returns every item in one response; filtering, search,
//! ordering and pagination all happen here. Every function is pure so the
//! list view can recompute its output from the fetched collection and the
//! current filter on each change.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use crate::types::PortfolioItem;

/// Items shown per page of the grid.
pub const PAGE_SIZE: usize = 12;

/// Filter value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "All";

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load portfolio.";
pub const EMPTY_COLLECTION_MESSAGE: &str = "No portfolio items available.";
pub const NO_MATCHES_MESSAGE: &str = "No items match your filters.";

/// Distinct sub-categories present in `items`, alphabetised.
#[must_use]
pub fn sub_category_options(items: &[PortfolioItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.sub_category.as_str())
        .filter(|sub| !sub.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Category restriction plus free-text title search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub sub_category: Option<String>,
    pub search: String,
}

impl Filter {
    /// Builds a filter, treating `"All"` or an empty category as unfiltered.
    #[must_use]
    pub fn new(sub_category: Option<String>, search: impl Into<String>) -> Self {
        Self {
            sub_category: sub_category.filter(|sub| !sub.is_empty() && sub != ALL_CATEGORIES),
            search: search.into(),
        }
    }

    #[must_use]
    pub fn matches(&self, item: &PortfolioItem) -> bool {
        let category_ok = self
            .sub_category
            .as_ref()
            .is_none_or(|sub| item.sub_category == *sub);
        let term = self.search.trim().to_lowercase();
        category_ok && (term.is_empty() || item.title.to_lowercase().contains(&term))
    }
}

/// Applies `filter` and orders the survivors newest first.
///
/// Items whose timestamp does not parse sort after every dated item. Ties
/// keep the order the store returned them in.
#[must_use]
pub fn filter_items(items: &[PortfolioItem], filter: &Filter) -> Vec<PortfolioItem> {
    let mut kept: Vec<PortfolioItem> = items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect();
    kept.sort_by_key(|item| std::cmp::Reverse(item.created_timestamp()));
    kept
}

/// The `count` newest items, in the same order the list view shows them.
#[must_use]
pub fn latest(items: &[PortfolioItem], count: usize) -> Vec<PortfolioItem> {
    let mut newest = filter_items(items, &Filter::default());
    newest.truncate(count);
    newest
}

/// One page of a filtered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    /// 1-based page actually shown, after clamping.
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
}

impl<T> PageSlice<T> {
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    /// The pager is only worth drawing with more than one page.
    #[must_use]
    pub const fn show_pager(&self) -> bool {
        self.page_count > 1
    }
}

/// Slices page `requested_page` (1-based) out of `items`.
///
/// Out-of-range pages are clamped into `[1, page_count]`; an empty list has
/// zero pages and reports page 1.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], requested_page: usize, page_size: usize) -> PageSlice<T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let page_count = total.div_ceil(page_size);
    let page = requested_page.clamp(1, page_count.max(1));
    let start = ((page - 1) * page_size).min(total);
    let end = (start + page_size).min(total);

    PageSlice {
        items: items[start..end].to_vec(),
        page,
        page_count,
        total,
    }
}

#[must_use]
pub const fn page_numbers(page_count: usize) -> RangeInclusive<usize> {
    1..=page_count
}

/// What the list view should render for a fetch result and filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Failed,
    Empty,
    NoMatches,
    Page(PageSlice<PortfolioItem>),
}

impl Listing {
    #[must_use]
    pub fn from_fetch<E>(
        fetched: &Result<Vec<PortfolioItem>, E>,
        filter: &Filter,
        requested_page: usize,
        page_size: usize,
    ) -> Self {
        match fetched {
            Ok(items) => Self::from_items(items, filter, requested_page, page_size),
            Err(_) => Self::Failed,
        }
    }

    /// Same as [`Listing::from_fetch`] for a collection that loaded.
    #[must_use]
    pub fn from_items(
        items: &[PortfolioItem],
        filter: &Filter,
        requested_page: usize,
        page_size: usize,
    ) -> Self {
        if items.is_empty() {
            return Self::Empty;
        }
        let filtered = filter_items(items, filter);
        if filtered.is_empty() {
            Self::NoMatches
        } else {
            Self::Page(paginate(&filtered, requested_page, page_size))
        }
    }

    /// User-facing message for the non-grid outcomes.
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::Failed => Some(LOAD_FAILED_MESSAGE),
            Self::Empty => Some(EMPTY_COLLECTION_MESSAGE),
            Self::NoMatches => Some(NO_MATCHES_MESSAGE),
            Self::Page(_) => None,
        }
    }
}
