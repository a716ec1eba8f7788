//! The list view's shareable state, as carried in the URL query string.
//!
//! Only the category filter and page number live in the URL. Free-text
//! search stays local to the view and does not survive a reload.

use leptos_router::params::ParamsMap;

use crate::catalog::ALL_CATEGORIES;

pub const SUB_CATEGORY_KEY: &str = "subCategory";
pub const PAGE_KEY: &str = "page";

/// Filter and page parsed from `?subCategory=..&page=..`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseQuery {
    pub sub_category: Option<String>,
    /// 1-based.
    pub page: usize,
}

impl Default for BrowseQuery {
    fn default() -> Self {
        Self {
            sub_category: None,
            page: 1,
        }
    }
}

impl BrowseQuery {
    /// Parses raw query values. Missing, empty or `"All"` categories mean no
    /// filter; a page that is not a positive integer becomes 1.
    #[must_use]
    pub fn from_params(sub_category: Option<String>, page: Option<String>) -> Self {
        let sub_category = sub_category.filter(|sub| !sub.is_empty() && sub != ALL_CATEGORIES);
        let page = page
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1);
        Self { sub_category, page }
    }

    #[must_use]
    pub fn from_map(params: &ParamsMap) -> Self {
        Self::from_params(params.get(SUB_CATEGORY_KEY), params.get(PAGE_KEY))
    }

    /// Switches category; a new filter always starts on page 1.
    #[must_use]
    pub fn with_sub_category(&self, sub_category: Option<String>) -> Self {
        Self::from_params(sub_category, None)
    }

    #[must_use]
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            sub_category: self.sub_category.clone(),
            page: page.max(1),
        }
    }

    /// Query to move to after the search text changes.
    ///
    /// New search text always shows page 1, so this is `Some` with the
    /// filter kept and the page reset whenever the current page is not 1.
    #[must_use]
    pub fn after_search(&self) -> Option<Self> {
        (self.page != 1).then(|| self.with_page(1))
    }

    /// Category value as shown in the filter select.
    #[must_use]
    pub fn selected(&self) -> &str {
        self.sub_category.as_deref().unwrap_or(ALL_CATEGORIES)
    }

    #[must_use]
    pub fn to_params(&self) -> ParamsMap {
        let mut params = ParamsMap::new();
        if let Some(sub) = &self.sub_category {
            params.insert(SUB_CATEGORY_KEY, sub.clone());
        }
        if self.page > 1 {
            params.insert(PAGE_KEY, self.page.to_string());
        }
        params
    }

    /// `base` followed by the encoded query, omitting default values.
    #[must_use]
    pub fn to_href(&self, base: &str) -> String {
        format!("{base}{}", self.to_params().to_query_string())
    }
}
