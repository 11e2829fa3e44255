// tests/etl_pipeline.rs
//
// Whole loader runs against canned pages instead of the network.

use std::{cell::RefCell, collections::HashMap};

use happy_quotes::{
    catalog::{Catalog, Model, Query, QueryOutcome},
    config::options::AppOptions,
    core::net::{HttpSource, NetError},
    etl::{self, EtlError},
    progress::NullProgress,
    store::{self, Database},
};

const BASE: &str = "http://stub.test";
const COMMENTS: &str = "http://stub.test/comments";

#[derive(Default)]
struct StubSource {
    pages: HashMap<String, String>,
    calls: RefCell<Vec<String>>,
}

impl StubSource {
    fn with(mut self, url: &str, body: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), body.into());
        self
    }

    fn called(&self, url: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == url)
    }
}

impl HttpSource for StubSource {
    fn get_text(&self, url: &str) -> Result<String, NetError> {
        self.calls.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| NetError::Status { url: url.to_string(), status: 404 })
    }
}

fn quote_div(text: &str, author: &str, slug: &str, tags: &[&str]) -> String {
    let links: String = tags
        .iter()
        .map(|t| format!(r#"<a class="tag" href="/tag/{t}/page/1/">{t}</a>"#))
        .collect();
    format!(
        r#"<div class="quote" itemscope>
            <span class="text" itemprop="text">“{text}”</span>
            <span>by <small class="author" itemprop="author">{author}</small>
            <a href="/author/{slug}">(about)</a></span>
            <div class="tags">Tags: {links}</div>
        </div>"#
    )
}

fn page(quotes: &[String], next: bool) -> String {
    let pager = if next { r##"<li class="next"><a href="#">Next</a></li>"## } else { "" };
    format!("<html><body>{}<nav><ul class=\"pager\">{pager}</ul></nav></body></html>", quotes.concat())
}

fn author_page(name: &str, born: &str, place: &str, bio: &str) -> String {
    format!(
        r#"<div class="author-details">
            <h3 class="author-title">{name}</h3>
            <p><strong>Born:</strong> <span class="author-born-date">{born}</span>
            <span class="author-born-location">in {place}</span></p>
            <div class="author-description">{bio}</div>
        </div>"#
    )
}

const COMMENTS_JSON: &str = r#"[
    {"postId": 1, "id": 1, "name": "id labore ex et quam laborum", "email": "Eliseo@gardner.biz", "body": "laudantium enim quasi"},
    {"postId": 1, "id": 2, "name": "quo vero reiciendis", "email": "Jayne_Kuhic@sydney.com", "body": "est natus enim nihil"},
    {"postId": 1, "id": 3, "name": "odio adipisci rerum", "email": "not-an-email", "body": "quia molestiae"},
    {"postId": 1, "id": 4, "body": "no name or email"}
]"#;

/// Page 1 and 3 load, page 2 is down; one author page is missing.
fn site() -> StubSource {
    StubSource::default()
        .with(
            &format!("{BASE}/page/1/"),
            page(
                &[
                    quote_div("Imagination is more important than knowledge.", "Albert Einstein", "Albert-Einstein", &["imagination", "knowledge"]),
                    quote_div("Life is like riding a bicycle.", "Albert Einstein", "Albert-Einstein", &["life"]),
                    quote_div("", "Nobody", "Nobody", &["empty"]),
                ],
                true,
            ),
        )
        .with(
            &format!("{BASE}/page/3/"),
            page(&[quote_div("The secret of getting ahead is getting started.", "Mark Twain", "Mark-Twain", &["Success"])], false),
        )
        .with(
            &format!("{BASE}/author/Albert-Einstein/"),
            author_page("Albert Einstein", "March 14, 1879", "Ulm, Germany", "Theoretical physicist."),
        )
        .with(COMMENTS, COMMENTS_JSON)
}

fn options(dir: &tempfile::TempDir) -> AppOptions {
    let mut opts = AppOptions::default();
    opts.db.path = dir.path().join("quotes.db");
    opts.etl.quotes_base_url = BASE.to_string();
    opts.etl.comments_url = COMMENTS.to_string();
    opts.etl.max_pages = 10;
    opts
}

#[test]
fn full_run_skips_bad_page_and_rejects_bad_records() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(&dir);
    let source = site();

    let report = etl::run(&opts, &source, &mut NullProgress).unwrap();
    assert_eq!(report.pages_ok, 2);
    assert_eq!(report.pages_failed, 1);
    assert_eq!(report.rejected.quotes, 1);
    assert_eq!(report.rejected.comments, 2);
    assert_eq!(report.load.quotes.inserted, 3);
    assert_eq!(report.load.authors.inserted, 2);
    assert_eq!(report.load.comments.inserted, 2);
    assert!(!source.called(&format!("{BASE}/page/4/")));
    assert!(source.called(&format!("{BASE}/author/Mark-Twain/")));
    assert!(report.to_string().contains("Pages:     2 fetched, 1 skipped"));

    let cat = Catalog::new(Database::new(&opts.db.path));
    assert_eq!(cat.total_quotes().unwrap(), 3);
    assert_eq!(cat.author_names().unwrap(), vec!["Albert Einstein", "Mark Twain"]);
    assert!(cat.tag_names().unwrap().contains(&"success".to_string()));

    let QueryOutcome::Bio(einstein) = cat.run(&Query::AuthorBio("Albert Einstein".into())).unwrap() else {
        panic!("bio expected");
    };
    assert_eq!(einstein.birth_date.as_deref(), Some("1879-03-14"));
    assert_eq!(einstein.birth_place.as_deref(), Some("Ulm, Germany"));

    // Author page was down: loaded anyway, without a biography.
    let QueryOutcome::Bio(twain) = cat.run(&Query::AuthorBio("Mark Twain".into())).unwrap() else {
        panic!("bio expected");
    };
    assert_eq!(twain.description, "");
    assert_eq!(twain.birth_date, None);
}

#[test]
fn rerun_is_safe_and_fresh_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = options(&dir);
    let source = site();

    etl::run(&opts, &source, &mut NullProgress).unwrap();
    let again = etl::run(&opts, &source, &mut NullProgress).unwrap();
    assert_eq!(again.load.quotes.inserted, 0);
    assert_eq!(again.load.quotes.skipped, 3);
    assert_eq!(again.load.comments.inserted, 0);

    opts.etl.fresh = true;
    let fresh = etl::run(&opts, &source, &mut NullProgress).unwrap();
    assert_eq!(fresh.load.quotes.inserted, 3);

    let conn = Database::new(&opts.db.path).open_read_only().unwrap();
    assert_eq!(store::count_rows(&conn, "quote").unwrap(), 3);
    assert_eq!(store::count_rows(&conn, "comment").unwrap(), 2);
}

#[test]
fn dead_first_page_aborts_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(&dir);
    let source = StubSource::default().with(COMMENTS, COMMENTS_JSON);

    let err = etl::run(&opts, &source, &mut NullProgress).unwrap_err();
    assert!(matches!(err, EtlError::Unreachable { .. }), "{err}");
    assert!(!source.called(COMMENTS));

    let conn = Database::new(&opts.db.path).open_read_write().unwrap();
    assert!(!store::has_schema(&conn).unwrap());
}

#[test]
fn dead_comments_service_aborts_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(&dir);
    let mut source = site();
    source.pages.remove(COMMENTS);

    let err = etl::run(&opts, &source, &mut NullProgress).unwrap_err();
    assert!(matches!(err, EtlError::Unreachable { .. }), "{err}");

    let conn = Database::new(&opts.db.path).open_read_write().unwrap();
    assert!(!store::has_schema(&conn).unwrap());
}

#[test]
fn garbage_comments_payload_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(&dir);
    let source = site().with(COMMENTS, "<html>rate limited</html>");

    let err = etl::run(&opts, &source, &mut NullProgress).unwrap_err();
    assert!(matches!(err, EtlError::CommentsPayload(_)), "{err}");
}

#[test]
fn stops_after_three_failed_pages_in_a_row() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(&dir);
    let source = StubSource::default()
        .with(&format!("{BASE}/page/1/"), page(&[quote_div("One.", "Ann", "Ann", &[])], true))
        .with(&format!("{BASE}/page/5/"), page(&[quote_div("Five.", "Ann", "Ann", &[])], false))
        .with(COMMENTS, "[]");

    let report = etl::run(&opts, &source, &mut NullProgress).unwrap();
    assert_eq!(report.pages_ok, 1);
    assert_eq!(report.pages_failed, 3);
    assert!(source.called(&format!("{BASE}/page/4/")));
    assert!(!source.called(&format!("{BASE}/page/5/")));
    assert_eq!(report.load.quotes.inserted, 1);
}

#[test]
fn page_cap_bounds_the_walk() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = options(&dir);
    opts.etl.max_pages = 2;

    let mut source = StubSource::default().with(COMMENTS, "[]");
    for n in 1..=4 {
        source = source.with(
            &format!("{BASE}/page/{n}/"),
            page(&[quote_div(&format!("Quote {n}."), "Ann", "Ann", &[])], true),
        );
    }

    let report = etl::run(&opts, &source, &mut NullProgress).unwrap();
    assert_eq!(report.pages_ok, 2);
    assert!(!source.called(&format!("{BASE}/page/3/")));
    assert_eq!(report.load.quotes.inserted, 2);
}
