// tests/common/mod.rs
//
// A small, known data set loaded into a temp SQLite file through the real
// loader, so the catalog is tested against what the ETL actually writes.
#![allow(dead_code)]

use happy_quotes::{
    catalog::Catalog,
    etl::{self, Transformed},
    models::{Author, Comment, Quote, Tag},
    store::Database,
};
use rand::{SeedableRng, rngs::StdRng};
use tempfile::TempDir;

pub struct Seeded {
    // Keeps the directory alive for the test's duration.
    pub dir: TempDir,
    pub db: Database,
}

impl Seeded {
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.db.clone())
    }
}

pub const QUOTES: &[(&str, &str, &[&str])] = &[
    ("Imagination is more important than knowledge.", "Albert Einstein", &["imagination", "knowledge"]),
    ("Life is like riding a bicycle.", "Albert Einstein", &["life"]),
    ("Try not to become a man of success.", "Albert Einstein", &["success", "life"]),
    ("The secret of getting ahead is getting started.", "Mark Twain", &["success"]),
    ("Kindness is the language the deaf can hear.", "Mark Twain", &[]),
    ("The person, be it gentleman or lady, who has not pleasure in a good novel, must be intolerably stupid.", "Jane Austen", &["books", "humor"]),
];

pub fn sample() -> Transformed {
    let quotes: Vec<Quote> = QUOTES
        .iter()
        .map(|(text, author, tags)| Quote::new(text, author, *tags).unwrap())
        .collect();

    let mut tags: Vec<Tag> = quotes.iter().flat_map(|q| q.tags.clone()).collect();
    tags.sort();
    tags.dedup();

    Transformed {
        authors: vec![
            Author::new(
                "Albert Einstein",
                Some("March 14, 1879"),
                Some("Ulm, Germany"),
                "Theoretical physicist.",
            )
            .unwrap(),
            Author::bare("Mark Twain").unwrap(),
            Author::new("Jane Austen", Some("December 16, 1775"), Some("Steventon Rectory, Hampshire, The United Kingdom"), "Novelist.").unwrap(),
        ],
        tags,
        quotes,
        comments: (1..=8)
            .map(|i| Comment::new(i, &format!("comment {i}"), &format!("user{i}@example.com"), "Nice one.").unwrap())
            .collect(),
        ..Default::default()
    }
}

pub fn load(data: &Transformed) -> Seeded {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::new(dir.path().join("quotes.db"));
    let mut conn = db.open_read_write().unwrap();
    etl::load(&mut conn, data, false, &mut StdRng::seed_from_u64(42)).unwrap();
    Seeded { dir, db }
}

pub fn seeded() -> Seeded {
    load(&sample())
}

/// Schema present, no rows.
pub fn empty() -> Seeded {
    load(&Transformed::default())
}
