// src/scrape/mod.rs
mod authors;
mod comments;
mod quotes;
mod scrape;

pub use authors::{RawAuthor, author_url, parse_author};
pub use comments::{CommentBatch, RawComment, parse_comments};
pub use quotes::{QuotesPage, RawQuote, page_url, parse_page};
pub use scrape::{Extracted, collect};
