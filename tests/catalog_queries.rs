// tests/catalog_queries.rs
//
// The query catalog against a database written by the loader.

mod common;

use std::collections::HashSet;

use happy_quotes::catalog::{AuthorCount, Model, Query, QueryError, QueryOutcome, SurprisePick};
use happy_quotes::store::Database;
use happy_quotes::catalog::Catalog;

fn quotes(outcome: QueryOutcome) -> Vec<happy_quotes::catalog::QuoteRow> {
    match outcome {
        QueryOutcome::Quotes(q) => q,
        other => panic!("expected quotes, got {other:?}"),
    }
}

#[test]
fn by_author_returns_only_that_author() {
    let s = common::seeded();
    let cat = s.catalog();
    for name in cat.author_names().unwrap() {
        let rows = quotes(cat.run(&Query::ByAuthor(name.clone())).unwrap());
        assert!(!rows.is_empty(), "{name} has quotes");
        assert!(rows.iter().all(|q| q.author == name));
    }
    let einstein = quotes(cat.run(&Query::ByAuthor("Albert Einstein".into())).unwrap());
    assert_eq!(einstein.len(), 3);
}

#[test]
fn unknown_author_or_tag_is_empty_not_error() {
    let s = common::seeded();
    let cat = s.catalog();
    assert!(quotes(cat.run(&Query::ByAuthor("Nobody".into())).unwrap()).is_empty());
    assert!(quotes(cat.run(&Query::ByTag("no-such-tag".into())).unwrap()).is_empty());
}

#[test]
fn by_tag_matches_tag_membership() {
    let s = common::seeded();
    let cat = s.catalog();
    let rows = quotes(cat.run(&Query::ByTag("life".into())).unwrap());
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|q| q.tags.iter().any(|t| t == "life")));

    // Tags are stored normalized; lookups normalize too.
    let rows = quotes(cat.run(&Query::ByTag("  Success ".into())).unwrap());
    assert_eq!(rows.len(), 2);
}

#[test]
fn random_n_bounds() {
    let s = common::seeded();
    let cat = s.catalog();
    let total = common::QUOTES.len() as u32;

    for n in [1, 3, total] {
        let rows = quotes(cat.run(&Query::RandomN(n)).unwrap());
        assert_eq!(rows.len(), n as usize);
        let distinct: HashSet<&str> = rows.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(distinct.len(), n as usize);
    }
    assert!(matches!(cat.run(&Query::RandomN(0)), Err(QueryError::InvalidParameter(_))));
    assert!(matches!(cat.run(&Query::RandomN(total + 1)), Err(QueryError::InvalidParameter(_))));
}

#[test]
fn random_one_and_total() {
    let s = common::seeded();
    let cat = s.catalog();
    assert_eq!(quotes(cat.run(&Query::RandomOne).unwrap()).len(), 1);
    assert_eq!(cat.run(&Query::TotalCount).unwrap(), QueryOutcome::Count(common::QUOTES.len() as i64));
    assert_eq!(cat.total_quotes().unwrap(), common::QUOTES.len() as i64);

    let e = common::empty();
    assert!(quotes(e.catalog().run(&Query::RandomOne).unwrap()).is_empty());
    assert_eq!(e.catalog().run(&Query::TotalCount).unwrap(), QueryOutcome::Count(0));
}

#[test]
fn top_authors_order_and_ties() {
    let s = common::seeded();
    let QueryOutcome::TopAuthors(rows) = s.catalog().run(&Query::TopAuthors).unwrap() else {
        panic!("expected top authors");
    };
    assert_eq!(
        rows,
        vec![
            AuthorCount { name: "Albert Einstein".into(), quotes: 3 },
            AuthorCount { name: "Mark Twain".into(), quotes: 2 },
            AuthorCount { name: "Jane Austen".into(), quotes: 1 },
        ]
    );
}

#[test]
fn top_authors_caps_at_five_alphabetical_among_ties() {
    let mut data = common::sample();
    data.quotes.clear();
    data.authors.clear();
    data.tags = vec![happy_quotes::models::Tag::new("x").unwrap()];
    for name in ["Zed", "Amy", "Kit", "Bob", "Eve", "Dan", "Cat"] {
        data.authors.push(happy_quotes::models::Author::bare(name).unwrap());
        let q = happy_quotes::models::Quote::new(&format!("{name} says hi."), name, &["x"]).unwrap();
        data.quotes.push(q);
    }
    let s = common::load(&data);
    let QueryOutcome::TopAuthors(rows) = s.catalog().run(&Query::TopAuthors).unwrap() else {
        panic!("expected top authors");
    };
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Amy", "Bob", "Cat", "Dan", "Eve"]);
}

#[test]
fn comments_of_a_random_quote() {
    let s = common::seeded();
    let cat = s.catalog();
    let all: HashSet<String> = quotes(cat.run(&Query::AllQuotes).unwrap()).into_iter().map(|q| q.text).collect();

    let mut seen_comments = 0;
    for _ in 0..60 {
        let QueryOutcome::Comments { quote: Some(q), comments } = cat.run(&Query::CommentsForRandomQuote).unwrap() else {
            panic!("expected a quote");
        };
        assert!(all.contains(&q.text));
        assert!(comments.iter().all(|c| c.email.contains('@')));
        seen_comments += comments.len();
    }
    assert!(seen_comments > 0);

    let e = common::empty();
    let out = e.catalog().run(&Query::CommentsForRandomQuote).unwrap();
    assert!(out.is_empty());
}

#[test]
fn author_bio_found_and_not_found() {
    let s = common::seeded();
    let cat = s.catalog();
    let QueryOutcome::Bio(bio) = cat.run(&Query::AuthorBio("Albert Einstein".into())).unwrap() else {
        panic!("expected a bio");
    };
    assert_eq!(bio.birth_date.as_deref(), Some("1879-03-14"));
    assert_eq!(bio.birth_place.as_deref(), Some("Ulm, Germany"));
    assert_eq!(bio.description, "Theoretical physicist.");

    let QueryOutcome::Bio(twain) = cat.run(&Query::AuthorBio("Mark Twain".into())).unwrap() else {
        panic!("expected a bio");
    };
    assert_eq!(twain.birth_date, None);
    assert_eq!(twain.description, "");

    assert!(matches!(
        cat.run(&Query::AuthorBio("Nobody".into())),
        Err(QueryError::AuthorNotFound(n)) if n == "Nobody"
    ));
}

#[test]
fn all_quotes_round_trip() {
    let s = common::seeded();
    let rows = quotes(s.catalog().run(&Query::AllQuotes).unwrap());
    assert_eq!(rows.len(), common::QUOTES.len());
    for (text, author, tags) in common::QUOTES {
        let row = rows.iter().find(|r| r.text == *text).expect("quote present");
        assert_eq!(row.author, *author);
        let mut want: Vec<&str> = tags.to_vec();
        want.sort();
        assert_eq!(row.tags, want);
    }
}

#[test]
fn surprise_picks_something_real() {
    let s = common::seeded();
    let cat = s.catalog();
    for _ in 0..10 {
        let QueryOutcome::Surprise { pick: Some(pick), quotes } = cat.run(&Query::Surprise).unwrap() else {
            panic!("expected a pick");
        };
        assert!(!quotes.is_empty());
        match pick {
            SurprisePick::Author(a) => assert!(quotes.iter().all(|q| q.author == a)),
            SurprisePick::Tag(t) => assert!(quotes.iter().all(|q| q.tags.contains(&t))),
        }
    }

    let out = common::empty().catalog().run(&Query::Surprise).unwrap();
    assert_eq!(out, QueryOutcome::Surprise { pick: None, quotes: Vec::new() });
}

#[test]
fn names_are_sorted() {
    let s = common::seeded();
    let cat = s.catalog();
    assert_eq!(cat.author_names().unwrap(), vec!["Albert Einstein", "Jane Austen", "Mark Twain"]);
    let tags = cat.tag_names().unwrap();
    let mut sorted = tags.clone();
    sorted.sort();
    assert_eq!(tags, sorted);
    assert!(tags.contains(&"knowledge".to_string()));
}

#[test]
fn missing_database_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let cat = Catalog::new(Database::new(dir.path().join("nope.db")));
    assert!(matches!(cat.probe(), Err(QueryError::Unavailable { .. })));
    assert!(matches!(cat.run(&Query::TotalCount), Err(QueryError::Unavailable { .. })));

    assert!(common::seeded().catalog().probe().is_ok());
}

#[test]
fn file_without_tables_fails_probe() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::new(dir.path().join("bare.db"));
    drop(db.open_read_write().unwrap());
    assert!(matches!(Catalog::new(db).probe(), Err(QueryError::Unavailable { .. })));
}
