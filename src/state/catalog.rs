//! Project catalog filtering: category filter plus free-text search.
//!
//! DESIGN
//! ======
//! Cards are harvested from markup once; this module only decides which are
//! visible. The `(filter, search)` pair is the whole state and round-trips
//! through the URL query string so a shared link reproduces the view.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::util::query::QueryString;

pub const FILTER_PARAM: &str = "filter";
pub const SEARCH_PARAM: &str = "search";
const ALL: &str = "all";

/// A project card as read from the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Card {
    pub category: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl Card {
    pub fn new(category: &str, title: &str) -> Self {
        Self {
            category: category.to_owned(),
            title: title.to_owned(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| (*t).to_owned()).collect();
        self
    }
}

/// Category predicate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Lower-cased category fragment.
    Named(String),
}

impl CategoryFilter {
    pub fn parse(raw: &str) -> Self {
        let value = raw.trim().to_lowercase();
        if value.is_empty() || value == ALL {
            Self::All
        } else {
            Self::Named(value)
        }
    }

    /// Value carried by the matching filter button's `data-filter`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Named(name) => name,
        }
    }
}

/// Which cards are shown after a recompute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Visibility {
    pub shown: Vec<bool>,
    pub count: usize,
}

impl Visibility {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// The active `(filter, search)` combination.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    filter: CategoryFilter,
    search: String,
}

impl CatalogQuery {
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_filter(&mut self, raw: &str) {
        self.filter = CategoryFilter::parse(raw);
    }

    pub fn set_search(&mut self, raw: &str) {
        self.search = raw.trim().to_lowercase();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    pub fn matches(&self, card: &Card) -> bool {
        let filter_match = match &self.filter {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => card.category.to_lowercase().contains(name.as_str()),
        };
        if !filter_match {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.as_str();
        card.title.to_lowercase().contains(needle)
            || card.description.to_lowercase().contains(needle)
            || card.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }

    pub fn compute_visibility(&self, cards: &[Card]) -> Visibility {
        let shown: Vec<bool> = cards.iter().map(|card| self.matches(card)).collect();
        let count = shown.iter().filter(|s| **s).count();
        Visibility { shown, count }
    }

    /// Rewrite `existing` (with or without `?`) so it carries this query.
    ///
    /// Other parameters are preserved; `filter`/`search` are dropped when they
    /// hold their defaults. Returns the query without a leading `?`.
    pub fn to_query_string(&self, existing: &str) -> String {
        let mut query = QueryString::parse(existing);
        match &self.filter {
            CategoryFilter::All => query.remove(FILTER_PARAM),
            CategoryFilter::Named(name) => query.set(FILTER_PARAM, name),
        }
        if self.search.is_empty() {
            query.remove(SEARCH_PARAM);
        } else {
            query.set(SEARCH_PARAM, &self.search);
        }
        query.to_string()
    }

    /// Build the state a shared link describes.
    pub fn from_query_string(raw: &str) -> Self {
        let query = QueryString::parse(raw);
        let mut state = Self::default();
        if let Some(filter) = query.get(FILTER_PARAM) {
            state.set_filter(filter);
        }
        if let Some(search) = query.get(SEARCH_PARAM) {
            state.set_search(search);
        }
        state
    }
}

/// Filter value that matches a clicked tag, if any.
///
/// A filter matches when either string contains the other (case-insensitive).
/// `all` never matches.
pub fn filter_for_tag<'a>(tag: &str, filters: &'a [String]) -> Option<&'a str> {
    let tag = tag.trim().to_lowercase();
    if tag.is_empty() {
        return None;
    }
    filters
        .iter()
        .map(String::as_str)
        .filter(|f| !f.is_empty() && *f != ALL)
        .find(|f| {
            let f = f.to_lowercase();
            tag.contains(&f) || f.contains(&tag)
        })
}
