// src/scrape/quotes.rs
//
// One listing page of the quotes site:
//
//   <div class="quote">
//     <span class="text">“…”</span>
//     <span>by <small class="author">Name</small> <a href="/author/Name">(about)</a></span>
//     <div class="tags"> <meta class="keywords" content="a,b"> <a class="tag" …>a</a> … </div>
//   </div>
//   …
//   <li class="next"><a href="/page/2/">Next</a></li>

use crate::core::html::{
    attr_value, inner_after_open_tag, next_tag_block_ci, segments_ci, slice_between_ci, to_lower,
    visible_text,
};
use crate::core::sanitize::strip_outer_quotes;

/// Fields as found in the markup; nothing validated yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawQuote {
    pub text: String,
    pub author: String,
    /// Site-relative about link, e.g. `/author/Albert-Einstein`.
    pub author_path: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuotesPage {
    pub quotes: Vec<RawQuote>,
    pub has_next: bool,
}

pub fn page_url(base: &str, n: u32) -> String {
    format!("{}/page/{}/", base.trim_end_matches('/'), n)
}

pub fn parse_page(doc: &str) -> QuotesPage {
    let quotes = segments_ci(doc, r#"<div class="quote""#)
        .into_iter()
        .map(parse_quote_block)
        .collect();

    let has_next = to_lower(doc).contains(r#"<li class="next""#);

    QuotesPage { quotes, has_next }
}

fn parse_quote_block(block: &str) -> RawQuote {
    let text = slice_between_ci(block, r#"<span class="text""#, "</span>")
        .map(|t| strip_outer_quotes(&visible_text(t)))
        .unwrap_or_default();

    let author = slice_between_ci(block, r#"<small class="author""#, "</small>")
        .map(visible_text)
        .unwrap_or_default();

    let author_path = to_lower(block)
        .find(r#"href="/author/"#)
        .and_then(|i| block[..i].rfind('<'))
        .and_then(|tag_start| attr_value(&block[tag_start..], "href"))
        .map(String::from);

    RawQuote { text, author, author_path, tags: read_tags(block) }
}

/// Tag anchors; falls back to the keywords meta when a quote has no anchors.
fn read_tags(block: &str) -> Vec<String> {
    let mut tags = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(block, r#"<a class="tag""#, "</a>", pos) {
        let name = visible_text(&inner_after_open_tag(&block[s..e]));
        if !name.is_empty() {
            tags.push(name);
        }
        pos = e;
    }
    if !tags.is_empty() {
        return tags;
    }

    let lc = to_lower(block);
    lc.find(r#"<meta class="keywords""#)
        .and_then(|i| attr_value(&block[i..], "content"))
        .map(|c| {
            c.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
