//! # Feed projection: filter and sort the collection for display
//!
//! Both steps are pure functions of the fetched posts and the current UI state,
//! recomputed on every keystroke. Filtering runs before sorting.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use feruca::Collator;

use crate::models::Post;

/// Ordering of the collection view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Newest first.
    #[default]
    Recency,
    /// Caption A-Z.
    Caption,
}

impl SortMode {
    pub const ALL: [SortMode; 2] = [SortMode::Recency, SortMode::Caption];

    /// Value used in the `<select>` element.
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Recency => "createdAt",
            SortMode::Caption => "caption",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Recency => "Date (newest first)",
            SortMode::Caption => "Caption (A-Z)",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "createdAt" => Ok(SortMode::Recency),
            "caption" => Ok(SortMode::Caption),
            other => Err(format!("unknown sort mode: {other}")),
        }
    }
}

/// Whether `caption` contains `query`, ignoring case.
pub fn matches_query(caption: &str, query: &str) -> bool {
    query.is_empty() || caption.to_lowercase().contains(&query.to_lowercase())
}

/// Unicode collation in CLDR root order; the raw string breaks remaining ties.
pub fn compare_captions(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b).then_with(|| a.cmp(b))
}

/// Filter by caption, then sort.
pub fn project(posts: &[Post], query: &str, sort: SortMode) -> Vec<Post> {
    let mut visible: Vec<Post> = posts
        .iter()
        .filter(|post| matches_query(&post.caption, query))
        .cloned()
        .collect();

    match sort {
        SortMode::Recency => visible.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortMode::Caption => {
            let mut collator = Collator::default();
            visible.sort_by(|a, b| compare_captions(&mut collator, &a.caption, &b.caption));
        }
    }
    visible
}
