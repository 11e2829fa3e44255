// src/gui/format.rs
//
// Query rows -> response panel blocks. Pure; the panel only paints these.

use chrono::NaiveDate;

use crate::{
    catalog::{AuthorBio, AuthorCount, CommentRow, QueryOutcome, QuoteRow, SurprisePick},
    config::state::{Block, Tone},
};

const RULE: &str = "========================================================================================";

fn heading(text: &str) -> Block {
    Block::line(format!("--------- {text} ---------"), Tone::Heading)
}

/// Blue, green, blue, … per record.
fn alternating(i: usize) -> Tone {
    if i % 2 == 0 { Tone::Primary } else { Tone::Secondary }
}

pub fn welcome() -> Vec<Block> {
    vec![
        Block::line("WELCOME TO HAPPY QUOTES!", Tone::Heading),
        Block::line(
            "We hope you will enjoy this experience\nand find some inspiration to brighten your day!",
            Tone::Primary,
        ),
        Block::line("Start at the 'Queries' menu.\nHave fun!", Tone::Primary),
    ]
}

pub fn quote_of_the_day(q: &QuoteRow) -> Vec<Block> {
    vec![
        Block::line("--------- Quote Of The Day ---------", Tone::Highlight),
        Block::line(q.text.as_str(), Tone::Highlight),
        Block::line(format!("by {}", q.author), Tone::Highlight),
    ]
}

pub fn no_results() -> Vec<Block> {
    vec![Block::line("No results.", Tone::Notice)]
}

pub fn error(msg: &str) -> Vec<Block> {
    vec![Block::line(msg, Tone::Error)]
}

pub fn quotes(rows: &[QuoteRow]) -> Vec<Block> {
    if rows.is_empty() {
        return no_results();
    }
    let mut out = Vec::with_capacity(rows.len() * 7);
    for (i, q) in rows.iter().enumerate() {
        let tone = alternating(i);
        out.push(heading(&format!("QUOTE {}", i + 1)));
        out.push(Block::line(q.text.as_str(), tone));
        out.push(heading("AUTHOR"));
        out.push(Block::line(q.author.as_str(), tone));
        out.push(heading("TAGS"));
        out.push(Block::line(q.tags.join(", "), tone));
        out.push(Block::line(RULE, Tone::Heading));
    }
    out
}

pub fn total(n: i64) -> Vec<Block> {
    vec![
        heading("TOTAL QUOTES"),
        Block::line(format!("There are a total of {n} quotes in the Happy Quotes database."), Tone::Primary),
        Block::line("Some people say that you just can't have enough quotes...", Tone::Primary),
    ]
}

pub fn top_authors(rows: &[AuthorCount]) -> Vec<Block> {
    if rows.is_empty() {
        return no_results();
    }
    let table = rows
        .iter()
        .enumerate()
        .map(|(i, a)| vec![format!("{}", i + 1), a.name.clone(), a.quotes.to_string()])
        .collect();
    vec![
        heading("TOP 5 AUTHORS"),
        Block::Table { headers: vec![s!("#"), s!("Author"), s!("Total quotes")], rows: table },
    ]
}

pub fn comments(quote: &QuoteRow, rows: &[CommentRow]) -> Vec<Block> {
    let mut out = vec![
        heading("RANDOM QUOTE"),
        Block::line(quote.text.as_str(), Tone::Primary),
        Block::line(format!("by {}", quote.author), Tone::Primary),
        heading("ALL COMMENTS:"),
    ];
    if rows.is_empty() {
        out.push(Block::line("This quote has no comments yet.", Tone::Notice));
        return out;
    }
    for (i, c) in rows.iter().enumerate() {
        let tone = alternating(i);
        out.push(heading(&format!("COMMENT: {}", i + 1)));
        out.push(Block::line(c.name.as_str(), tone));
        out.push(heading("DETAILS"));
        out.push(Block::line(c.body.as_str(), tone));
        out.push(heading("USER EMAIL"));
        out.push(Block::line(c.email.as_str(), tone));
        out.push(Block::line(RULE, Tone::Heading));
    }
    out
}

/// Stored ISO date shown the way the site prints it.
fn long_date(iso: &str) -> String {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|d| d.format("%B %d, %Y").to_string())
        .unwrap_or_else(|_| s!(iso))
}

pub fn bio(b: &AuthorBio) -> Vec<Block> {
    let born = match (&b.birth_date, &b.birth_place) {
        (Some(d), Some(p)) => format!("{} in {p}", long_date(d)),
        (Some(d), None) => long_date(d),
        (None, Some(p)) => format!("unknown, in {p}"),
        (None, None) => s!("unknown"),
    };
    let description = if b.description.is_empty() { "No biography available." } else { b.description.as_str() };

    vec![
        heading("NAME"),
        Block::line(b.name.as_str(), Tone::Primary),
        heading("BIRTH DATE"),
        Block::line(born, Tone::Primary),
        heading("BIO"),
        Block::line(description, Tone::Primary),
    ]
}

pub fn surprise(pick: &SurprisePick, rows: &[QuoteRow]) -> Vec<Block> {
    let intro = match pick {
        SurprisePick::Author(a) => format!("Surprise! Quotes by {a}"),
        SurprisePick::Tag(t) => format!("Surprise! Quotes tagged '{t}'"),
    };
    let mut out = vec![Block::line(intro, Tone::Highlight)];
    out.extend(quotes(rows));
    out
}

/// Response panel contents for any successful query.
pub fn outcome(o: &QueryOutcome) -> Vec<Block> {
    match o {
        QueryOutcome::Quotes(rows) => quotes(rows),
        QueryOutcome::Count(n) => total(*n),
        QueryOutcome::TopAuthors(rows) => top_authors(rows),
        QueryOutcome::Comments { quote: Some(q), comments: c } => comments(q, c),
        QueryOutcome::Comments { quote: None, .. } => no_results(),
        QueryOutcome::Bio(b) => bio(b),
        QueryOutcome::Surprise { pick: Some(p), quotes: q } => surprise(p, q),
        QueryOutcome::Surprise { pick: None, .. } => no_results(),
    }
}
