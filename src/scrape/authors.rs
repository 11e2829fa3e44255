// src/scrape/authors.rs
//
// Author detail page:
//
//   <h3 class="author-title">Albert Einstein</h3>
//   <span class="author-born-date">March 14, 1879</span>
//   <span class="author-born-location">in Ulm, Germany</span>
//   <div class="author-description">…</div>

use crate::core::html::{slice_between_ci, visible_text};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawAuthor {
    pub name: String,
    pub born: Option<String>,
    pub location: Option<String>,
    pub description: String,
}

pub fn author_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}/")
    } else {
        format!("{base}/{path}/")
    }
}

fn field(doc: &str, open: &str, close: &str) -> Option<String> {
    slice_between_ci(doc, open, close)
        .map(visible_text)
        .filter(|s| !s.is_empty())
}

pub fn parse_author(doc: &str) -> RawAuthor {
    let name = field(doc, r#"<h3 class="author-title""#, "</h3>").unwrap_or_default();
    let born = field(doc, r#"<span class="author-born-date""#, "</span>");
    let location = field(doc, r#"<span class="author-born-location""#, "</span>").map(|l| {
        l.strip_prefix("in ").map(str::trim).unwrap_or(l.as_str()).to_string()
    });
    let description = field(doc, r#"<div class="author-description""#, "</div>").unwrap_or_default();

    RawAuthor { name, born, location, description }
}
