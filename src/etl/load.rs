// src/etl/load.rs
//
// One transaction per run. Row-level failures (mostly unique constraints on a
// re-run) are logged and counted as skipped; only connection and transaction
// errors end the load.

use std::collections::HashMap;
use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use rusqlite::{Connection, OptionalExtension, params};

use crate::models::{Author, Tag};
use crate::store;

use super::{EtlError, transform::Transformed};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableCount {
    pub inserted: usize,
    pub skipped: usize,
}

impl TableCount {
    fn hit(&mut self, inserted: bool) {
        if inserted { self.inserted += 1 } else { self.skipped += 1 }
    }
}

impl fmt::Display for TableCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} inserted, {} skipped", self.inserted, self.skipped)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub authors: TableCount,
    pub tags: TableCount,
    pub quotes: TableCount,
    pub quote_tags: TableCount,
    pub comments: TableCount,
}

fn id_by_name(conn: &Connection, table: &str, name: &str) -> rusqlite::Result<Option<i64>> {
    conn.query_row(&format!("SELECT id FROM {table} WHERE name = ?1"), params![name], |r| r.get(0))
        .optional()
}

fn existing_quote_id(conn: &Connection, text: &str, author_id: i64) -> rusqlite::Result<Option<i64>> {
    conn.query_row(
        "SELECT id FROM quote WHERE content = ?1 AND author_id = ?2",
        params![text, author_id],
        |r| r.get(0),
    )
    .optional()
}

fn all_quote_ids(conn: &Connection) -> rusqlite::Result<Vec<i64>> {
    let mut stmt = conn.prepare("SELECT id FROM quote ORDER BY id")?;
    let rows = stmt.query_map([], |r| r.get(0))?;
    rows.collect()
}

/// Count one insert-or-reuse, then look the row up by name.
fn settle(
    conn: &Connection,
    table: &str,
    name: &str,
    res: rusqlite::Result<usize>,
    count: &mut TableCount,
    ids: &mut HashMap<String, i64>,
) -> rusqlite::Result<()> {
    match res {
        Ok(n) => count.hit(n == 1),
        Err(e) => {
            loge!("{table} {name:?}: {e}");
            count.skipped += 1;
        }
    }
    if let Some(id) = id_by_name(conn, table, name)? {
        ids.insert(s!(name), id);
    }
    Ok(())
}

/// Existing authors are reused as they are; a re-run does not touch their bio.
fn upsert_authors(conn: &Connection, authors: &[Author], count: &mut TableCount) -> rusqlite::Result<HashMap<String, i64>> {
    let mut ids = HashMap::with_capacity(authors.len());
    for a in authors {
        let born = a.birth_date.map(|d| d.format("%Y-%m-%d").to_string());
        let res = conn.execute(
            "INSERT INTO author (name, birth_date, birth_place, description)
             VALUES (?1, ?2, ?3, ?4) ON CONFLICT(name) DO NOTHING",
            params![a.name, born, a.birth_place, a.description],
        );
        settle(conn, "author", &a.name, res, count, &mut ids)?;
    }
    Ok(ids)
}

fn upsert_tags(conn: &Connection, tags: &[Tag], count: &mut TableCount) -> rusqlite::Result<HashMap<String, i64>> {
    let mut ids = HashMap::with_capacity(tags.len());
    for t in tags {
        let res = conn.execute("INSERT INTO tag (name) VALUES (?1) ON CONFLICT(name) DO NOTHING", params![t.name]);
        settle(conn, "tag", &t.name, res, count, &mut ids)?;
    }
    Ok(ids)
}

/// Write `data` into the database behind `conn`.
/// Comments go to quotes picked at random: the feed has no link to quotes.
pub fn load(
    conn: &mut Connection,
    data: &Transformed,
    fresh: bool,
    rng: &mut impl Rng,
) -> Result<LoadReport, EtlError> {
    let mut report = LoadReport::default();

    // DDL shares the transaction, so a failed fresh load keeps the old tables.
    let tx = conn.transaction()?;
    if fresh {
        logf!("Load: dropping existing tables");
        store::drop_schema(&tx)?;
    }
    store::ensure_schema(&tx)?;

    let author_ids = upsert_authors(&tx, &data.authors, &mut report.authors)?;
    let tag_ids = upsert_tags(&tx, &data.tags, &mut report.tags)?;

    let mut new_quote_ids: Vec<i64> = Vec::with_capacity(data.quotes.len());
    {
        let mut ins_quote = tx.prepare("INSERT INTO quote (content, author_id) VALUES (?1, ?2)")?;
        let mut ins_link = tx.prepare("INSERT OR IGNORE INTO quote_tag (quote_id, tag_id) VALUES (?1, ?2)")?;

        for q in &data.quotes {
            let Some(&author_id) = author_ids.get(&q.author) else {
                logw!("Quote by {:?}: author row missing, skipped", q.author);
                report.quotes.skipped += 1;
                continue;
            };
            let quote_id = match ins_quote.insert(params![q.text, author_id]) {
                Ok(id) => {
                    report.quotes.inserted += 1;
                    new_quote_ids.push(id);
                    id
                }
                Err(e) => {
                    logd!("Quote by {:?} skipped: {e}", q.author);
                    report.quotes.skipped += 1;
                    // Already loaded: its links may still be new.
                    match existing_quote_id(&tx, &q.text, author_id)? {
                        Some(id) => id,
                        None => continue,
                    }
                }
            };

            for tag in &q.tags {
                let Some(&tag_id) = tag_ids.get(&tag.name) else { continue };
                match ins_link.execute(params![quote_id, tag_id]) {
                    Ok(n) => report.quote_tags.hit(n == 1),
                    Err(e) => {
                        loge!("Quote {quote_id} tag {:?}: {e}", tag.name);
                        report.quote_tags.skipped += 1;
                    }
                }
            }
        }
    }

    let targets = if new_quote_ids.is_empty() { all_quote_ids(&tx)? } else { new_quote_ids };
    if targets.is_empty() {
        if !data.comments.is_empty() {
            logw!("Load: no quotes to attach {} comment(s) to, skipping them", data.comments.len());
        }
        report.comments.skipped += data.comments.len();
    } else {
        let mut ins_comment =
            tx.prepare("INSERT INTO comment (id, quote_id, name, email, body) VALUES (?1, ?2, ?3, ?4, ?5)")?;
        for c in &data.comments {
            let Some(&quote_id) = targets.choose(rng) else { break };
            match ins_comment.execute(params![c.source_id, quote_id, c.name, c.email, c.body]) {
                Ok(_) => report.comments.inserted += 1,
                Err(e) => {
                    logd!("Comment {} skipped: {e}", c.source_id);
                    report.comments.skipped += 1;
                }
            }
        }
    }

    tx.commit()?;
    logf!(
        "Load: authors {}; tags {}; quotes {}; comments {}",
        report.authors, report.tags, report.quotes, report.comments
    );
    Ok(report)
}
