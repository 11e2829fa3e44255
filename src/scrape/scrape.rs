// src/scrape/scrape.rs
use std::{collections::HashSet, thread, time::Duration};

use crate::{
    config::consts::{MAX_CONSECUTIVE_FAILURES, REQUEST_PAUSE_MS},
    config::options::EtlOptions,
    core::net::HttpSource,
    etl::EtlError,
    progress::Progress,
};

use super::{
    authors::{self, RawAuthor},
    comments::{self, CommentBatch},
    quotes::{self, RawQuote},
};

/// Everything pulled off the network in one run, still unvalidated.
#[derive(Debug, Default)]
pub struct Extracted {
    pub quotes: Vec<RawQuote>,
    pub authors: Vec<RawAuthor>,
    pub comments: CommentBatch,
    pub pages_ok: u32,
    pub pages_failed: u32,
}

fn pause() {
    if REQUEST_PAUSE_MS > 0 {
        thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS));
    }
}

/// Walk the listing pages from 1 until the site stops offering a next page,
/// `max_pages` is reached, or too many pages in a row fail.
/// Page 1 must load; later pages are skipped on error.
fn collect_quotes(
    source: &dyn HttpSource,
    opts: &EtlOptions,
    progress: &mut dyn Progress,
    out: &mut Extracted,
) -> Result<(), EtlError> {
    let mut consecutive = 0u32;

    for n in 1..=opts.max_pages.max(1) {
        if n > 1 {
            pause();
        }
        let url = quotes::page_url(&opts.quotes_base_url, n);

        let doc = match source.get_text(&url) {
            Ok(doc) => doc,
            Err(e) if n == 1 => {
                return Err(EtlError::Unreachable { what: s!("quotes site"), source: e });
            }
            Err(e) => {
                loge!("Page {n}: {e}");
                progress.item_failed(n, &e.to_string());
                out.pages_failed += 1;
                consecutive += 1;
                if consecutive >= MAX_CONSECUTIVE_FAILURES {
                    logw!("Giving up after {consecutive} failed pages in a row");
                    progress.log(&format!("Stopping: {consecutive} pages in a row failed"));
                    break;
                }
                continue;
            }
        };

        consecutive = 0;
        let page = quotes::parse_page(&doc);
        logd!("Page {n}: {} quote(s), next={}", page.quotes.len(), page.has_next);

        if page.quotes.is_empty() && n > 1 {
            // Past the last page the site answers with an empty listing.
            progress.item_done(n);
            out.pages_ok += 1;
            break;
        }

        out.quotes.extend(page.quotes);
        out.pages_ok += 1;
        progress.item_done(n);

        if !page.has_next {
            break;
        }
    }
    Ok(())
}

/// One request per distinct author, keyed by the name used on the listing.
/// A failed author page leaves that author with an empty bio.
fn collect_authors(source: &dyn HttpSource, opts: &EtlOptions, progress: &mut dyn Progress, out: &mut Extracted) {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut wanted: Vec<(&str, Option<&str>)> = Vec::new();
    for q in &out.quotes {
        if !q.author.is_empty() && seen.insert(q.author.as_str()) {
            wanted.push((q.author.as_str(), q.author_path.as_deref()));
        }
    }

    progress.log(&format!("Fetching {} author page(s)…", wanted.len()));
    let mut fetched = Vec::with_capacity(wanted.len());

    for (name, path) in wanted {
        let Some(path) = path else {
            fetched.push(RawAuthor { name: s!(name), ..Default::default() });
            continue;
        };
        pause();
        let url = authors::author_url(&opts.quotes_base_url, path);
        let mut author = match source.get_text(&url) {
            Ok(doc) => authors::parse_author(&doc),
            Err(e) => {
                logw!("Author {name:?}: {e}");
                RawAuthor::default()
            }
        };
        if !author.name.is_empty() && author.name != name {
            logd!("Author page names {:?}, listing names {name:?}", author.name);
        }
        author.name = s!(name);
        fetched.push(author);
    }
    out.authors = fetched;
}

fn collect_comments(source: &dyn HttpSource, opts: &EtlOptions, progress: &mut dyn Progress) -> Result<CommentBatch, EtlError> {
    progress.log("Fetching comments…");
    let payload = source
        .get_text(&opts.comments_url)
        .map_err(|e| EtlError::Unreachable { what: s!("comments service"), source: e })?;
    let batch = comments::parse_comments(&payload)?;
    logf!("Comments: {} parsed, {} malformed", batch.comments.len(), batch.malformed);
    Ok(batch)
}

/// Extract stage: listing pages, the comments feed, then one page per author.
pub fn collect(
    source: &dyn HttpSource,
    opts: &EtlOptions,
    progress: &mut dyn Progress,
) -> Result<Extracted, EtlError> {
    let mut out = Extracted::default();

    progress.begin(None);
    progress.log(&format!("Fetching quotes from {}", opts.quotes_base_url));
    collect_quotes(source, opts, progress, &mut out)?;
    logf!("Quotes: {} from {} page(s), {} page(s) failed", out.quotes.len(), out.pages_ok, out.pages_failed);

    out.comments = collect_comments(source, opts, progress)?;
    collect_authors(source, opts, progress, &mut out);

    Ok(out)
}
