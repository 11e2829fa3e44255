// src/etl/transform.rs
//
// Raw scraped fields in, validated models out. Rejections are logged and
// counted; nothing here fails the run.

use std::collections::{BTreeSet, HashSet};

use crate::models::{Author, Comment, Quote, Tag, ValidationError};
use crate::scrape::{Extracted, RawAuthor};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rejected {
    pub quotes: usize,
    pub authors: usize,
    pub comments: usize,
}

impl Rejected {
    pub fn total(&self) -> usize { self.quotes + self.authors + self.comments }
}

#[derive(Debug, Default)]
pub struct Transformed {
    pub authors: Vec<Author>,
    /// Sorted by name.
    pub tags: Vec<Tag>,
    pub quotes: Vec<Quote>,
    pub comments: Vec<Comment>,
    pub rejected: Rejected,
}

fn author_from_raw(raw: &RawAuthor) -> Result<Author, ValidationError> {
    let born = raw.born.as_deref();
    let place = raw.location.as_deref();
    match Author::new(&raw.name, born, place, &raw.description) {
        Err(ValidationError::BirthDate(b)) => {
            logw!("Author {:?}: dropping birth date {b:?}", raw.name);
            Author::new(&raw.name, None, place, &raw.description)
        }
        other => other,
    }
}

pub fn transform(ex: &Extracted) -> Transformed {
    let mut out = Transformed::default();

    let mut seen_quotes: HashSet<(String, String)> = HashSet::new();
    for (i, raw) in ex.quotes.iter().enumerate() {
        match Quote::new(&raw.text, &raw.author, &raw.tags) {
            Ok(q) => {
                if seen_quotes.insert((q.text.clone(), q.author.clone())) {
                    out.quotes.push(q);
                } else {
                    logd!("Quote {i}: duplicate, skipped");
                }
            }
            Err(e) => {
                logw!("Quote {i} rejected: {e}");
                out.rejected.quotes += 1;
            }
        }
    }

    // Only authors with at least one surviving quote get a row.
    let quoted: HashSet<&str> = out.quotes.iter().map(|q| q.author.as_str()).collect();
    let mut seen_authors: HashSet<String> = HashSet::new();
    for raw in ex.authors.iter().filter(|a| quoted.contains(a.name.trim())) {
        match author_from_raw(raw) {
            Ok(a) => {
                if seen_authors.insert(a.name.clone()) {
                    out.authors.push(a);
                }
            }
            Err(e) => {
                logw!("Author {:?} rejected: {e}", raw.name);
                out.rejected.authors += 1;
            }
        }
    }
    // Every quote needs its author row, bio or not.
    for q in &out.quotes {
        if seen_authors.insert(q.author.clone()) {
            if let Ok(a) = Author::bare(&q.author) {
                out.authors.push(a);
            }
        }
    }

    let tags: BTreeSet<Tag> = out.quotes.iter().flat_map(|q| q.tags.iter().cloned()).collect();
    out.tags = tags.into_iter().collect();

    out.rejected.comments += ex.comments.malformed;
    let mut seen_comments: HashSet<i64> = HashSet::new();
    for raw in &ex.comments.comments {
        let Some(id) = raw.id else {
            logw!("Comment rejected: no id");
            out.rejected.comments += 1;
            continue;
        };
        match Comment::new(id, &raw.name, &raw.email, &raw.body) {
            Ok(c) => {
                if seen_comments.insert(c.source_id) {
                    out.comments.push(c);
                }
            }
            Err(e) => {
                logw!("Comment {id} rejected: {e}");
                out.rejected.comments += 1;
            }
        }
    }

    logf!(
        "Transform: {} author(s), {} tag(s), {} quote(s), {} comment(s), {} rejected",
        out.authors.len(),
        out.tags.len(),
        out.quotes.len(),
        out.comments.len(),
        out.rejected.total()
    );
    out
}
