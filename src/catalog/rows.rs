// src/catalog/rows.rs

use crate::config::consts::TAG_SEP;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuoteRow {
    pub text: String,
    pub author: String,
    /// Sorted.
    pub tags: Vec<String>,
}

impl QuoteRow {
    /// Build from the `GROUP_CONCAT` column of the quote listing.
    pub(crate) fn from_parts(text: String, author: String, tags_joined: Option<String>) -> Self {
        let mut tags: Vec<String> = tags_joined
            .unwrap_or_default()
            .split(TAG_SEP)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();
        tags.sort();
        tags.dedup();
        Self { text, author, tags }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorCount {
    pub name: String,
    pub quotes: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentRow {
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorBio {
    pub name: String,
    /// ISO date as stored.
    pub birth_date: Option<String>,
    pub birth_place: Option<String>,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurprisePick {
    Author(String),
    Tag(String),
}

/// Result of one catalog query, by shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryOutcome {
    Quotes(Vec<QuoteRow>),
    Count(i64),
    TopAuthors(Vec<AuthorCount>),
    /// `quote` is `None` when there are no quotes at all.
    Comments { quote: Option<QuoteRow>, comments: Vec<CommentRow> },
    Bio(AuthorBio),
    /// `pick` is `None` when there was nothing to pick from.
    Surprise { pick: Option<SurprisePick>, quotes: Vec<QuoteRow> },
}

impl QueryOutcome {
    /// True when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        match self {
            QueryOutcome::Quotes(q) => q.is_empty(),
            QueryOutcome::Count(_) | QueryOutcome::Bio(_) => false,
            QueryOutcome::TopAuthors(a) => a.is_empty(),
            QueryOutcome::Comments { quote, .. } => quote.is_none(),
            QueryOutcome::Surprise { quotes, .. } => quotes.is_empty(),
        }
    }
}
