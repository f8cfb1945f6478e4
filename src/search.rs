//! Free-text search over both catalog tables.
//!
//! Matching is case-insensitive substring containment: the query is
//! lowercased once and each candidate field is lowercased and checked with
//! `str::contains`. There is no tokenizing, ranking, or index; the tables are
//! small enough that a full scan per query is the whole algorithm. Category
//! hits always come before example hits, each group in catalog order.

use crate::catalog::{CatalogIndex, Category, ErrorExample};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Lightweight projection of a matching record.
pub enum SearchResult<'a> {
    Category {
        id: &'a str,
        title: &'a str,
        description: &'a str,
    },
    Error {
        id: &'a str,
        title: &'a str,
        context: &'a str,
    },
}

impl<'a> SearchResult<'a> {
    pub fn id(&self) -> &'a str {
        match *self {
            SearchResult::Category { id, .. } | SearchResult::Error { id, .. } => id,
        }
    }

    pub fn title(&self) -> &'a str {
        match *self {
            SearchResult::Category { title, .. } | SearchResult::Error { title, .. } => title,
        }
    }

    pub fn is_category(&self) -> bool {
        matches!(self, SearchResult::Category { .. })
    }

    fn from_category(category: &'a Category) -> Self {
        SearchResult::Category {
            id: category.id.as_str(),
            title: &category.title,
            description: &category.description,
        }
    }

    fn from_example(example: &'a ErrorExample) -> Self {
        SearchResult::Error {
            id: example.id.as_str(),
            title: &example.title,
            context: &example.context,
        }
    }
}

/// Search categories and examples for `query`.
///
/// A blank query (empty or whitespace only) returns no results rather than
/// the whole catalog.
pub fn search<'a>(index: &'a CatalogIndex, query: &str) -> Vec<SearchResult<'a>> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let categories = index
        .categories()
        .iter()
        .filter(|category| category_matches(category, &needle))
        .map(SearchResult::from_category);
    let examples = index
        .examples()
        .iter()
        .filter(|example| example_matches(example, &needle))
        .map(SearchResult::from_example);

    categories.chain(examples).collect()
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn category_matches(category: &Category, needle: &str) -> bool {
    contains_folded(&category.title, needle) || contains_folded(&category.description, needle)
}

fn example_matches(example: &ErrorExample, needle: &str) -> bool {
    contains_folded(&example.title, needle)
        || contains_folded(&example.context, needle)
        || contains_folded(&example.bad_example.message, needle)
        || contains_folded(&example.good_example.message, needle)
        || example.tags.iter().any(|tag| contains_folded(tag, needle))
}
