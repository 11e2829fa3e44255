// src/catalog/catalog.rs
//
// The fixed, read-only query set. Each public call opens its own read-only
// connection, runs its statement(s) and drops the connection before returning.

use rand::Rng;
use rusqlite::{Connection, OptionalExtension, Params, params};

use crate::config::consts::TOP_AUTHORS_LIMIT;
use crate::store::{self, Database};

use super::{
    Model,
    error::QueryError,
    query::Query,
    rows::*,
};

/// Quote listing: one row per quote, tags folded into one column.
/// `{filter}` and `{order}` are filled by the callers below, never by user input.
const QUOTE_SELECT: &str = "
    SELECT q.content, a.name, GROUP_CONCAT(t.name, ',')
    FROM quote q
    JOIN author a ON a.id = q.author_id
    LEFT JOIN quote_tag qt ON qt.quote_id = q.id
    LEFT JOIN tag t ON t.id = qt.tag_id
    {filter}
    GROUP BY q.id
    {order}";

const BY_AUTHOR: &str = "WHERE a.name = ?1";
const BY_TAG: &str = "WHERE q.id IN (
        SELECT qt2.quote_id FROM quote_tag qt2
        JOIN tag t2 ON t2.id = qt2.tag_id
        WHERE t2.name = ?1)";
const BY_ID: &str = "WHERE q.id = ?1";
const IN_ORDER: &str = "ORDER BY q.id";
const RANDOM_N: &str = "ORDER BY RANDOM() LIMIT ?1";

const TOP_AUTHORS: &str = "
    SELECT a.name, COUNT(q.id) AS quote_count
    FROM author a
    JOIN quote q ON q.author_id = a.id
    GROUP BY a.id
    ORDER BY quote_count DESC, a.name ASC
    LIMIT ?1";

pub struct Catalog {
    db: Database,
}

impl Catalog {
    pub fn new(db: Database) -> Self { Self { db } }

    fn connect(&self) -> Result<Connection, QueryError> {
        self.db
            .open_read_only()
            .map_err(|e| QueryError::unavailable(self.db.path(), e))
    }
}

fn quote_rows<P: Params>(
    conn: &Connection,
    filter: &str,
    order: &str,
    params: P,
) -> rusqlite::Result<Vec<QuoteRow>> {
    let sql = QUOTE_SELECT.replace("{filter}", filter).replace("{order}", order);
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params, |r| {
        Ok(QuoteRow::from_parts(r.get(0)?, r.get(1)?, r.get(2)?))
    })?;
    rows.collect()
}

fn total(conn: &Connection) -> rusqlite::Result<i64> {
    store::count_rows(conn, "quote")
}

fn names(conn: &Connection, sql: &str) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], |r| r.get(0))?;
    rows.collect()
}

fn random_name(conn: &Connection, table: &str) -> rusqlite::Result<Option<String>> {
    conn.query_row(&format!("SELECT name FROM {table} ORDER BY RANDOM() LIMIT 1"), [], |r| r.get(0))
        .optional()
}

fn random_n(conn: &Connection, n: u32) -> Result<Vec<QuoteRow>, QueryError> {
    if n == 0 {
        return Err(QueryError::InvalidParameter(s!("count must be at least 1")));
    }
    let available = total(conn)?;
    if i64::from(n) > available {
        return Err(QueryError::InvalidParameter(format!(
            "count {n} exceeds the {available} quote(s) available"
        )));
    }
    Ok(quote_rows(conn, "", RANDOM_N, params![n])?)
}

fn top_authors(conn: &Connection) -> rusqlite::Result<Vec<AuthorCount>> {
    let mut stmt = conn.prepare(TOP_AUTHORS)?;
    let limit = TOP_AUTHORS_LIMIT as i64;
    let rows = stmt.query_map(params![limit], |r| {
        Ok(AuthorCount { name: r.get(0)?, quotes: r.get(1)? })
    })?;
    rows.collect()
}

fn comments_for_random_quote(conn: &Connection) -> rusqlite::Result<QueryOutcome> {
    let id: Option<i64> = conn
        .query_row("SELECT id FROM quote ORDER BY RANDOM() LIMIT 1", [], |r| r.get(0))
        .optional()?;
    let Some(id) = id else {
        return Ok(QueryOutcome::Comments { quote: None, comments: Vec::new() });
    };

    let quote = quote_rows(conn, BY_ID, "", params![id])?.into_iter().next();

    let mut stmt = conn.prepare("SELECT name, email, body FROM comment WHERE quote_id = ?1 ORDER BY id")?;
    let comments = stmt
        .query_map(params![id], |r| {
            Ok(CommentRow { name: r.get(0)?, email: r.get(1)?, body: r.get(2)? })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(QueryOutcome::Comments { quote, comments })
}

fn author_bio(conn: &Connection, name: &str) -> Result<AuthorBio, QueryError> {
    conn.query_row(
        "SELECT name, birth_date, birth_place, description FROM author WHERE name = ?1",
        params![name],
        |r| {
            Ok(AuthorBio {
                name: r.get(0)?,
                birth_date: r.get(1)?,
                birth_place: r.get(2)?,
                description: r.get(3)?,
            })
        },
    )
    .optional()?
    .ok_or_else(|| QueryError::AuthorNotFound(s!(name)))
}

/// Coin flip between a random author and a random tag; falls back to the
/// other side when the chosen table is empty.
fn surprise(conn: &Connection) -> rusqlite::Result<QueryOutcome> {
    let author_first = rand::thread_rng().gen_bool(0.5);
    let order: [bool; 2] = [author_first, !author_first];

    for by_author in order {
        let table = if by_author { "author" } else { "tag" };
        let Some(name) = random_name(conn, table)? else { continue };

        logd!("Surprise: picked {table} {name:?}");
        return Ok(if by_author {
            let quotes = quote_rows(conn, BY_AUTHOR, IN_ORDER, params![name])?;
            QueryOutcome::Surprise { pick: Some(SurprisePick::Author(name)), quotes }
        } else {
            let quotes = quote_rows(conn, BY_TAG, IN_ORDER, params![name])?;
            QueryOutcome::Surprise { pick: Some(SurprisePick::Tag(name)), quotes }
        });
    }
    Ok(QueryOutcome::Surprise { pick: None, quotes: Vec::new() })
}

impl Model for Catalog {
    fn run(&self, query: &Query) -> Result<QueryOutcome, QueryError> {
        logd!("Catalog: run {query:?}");
        let conn = self.connect()?;

        let outcome = match query {
            Query::ByAuthor(name) => {
                QueryOutcome::Quotes(quote_rows(&conn, BY_AUTHOR, IN_ORDER, params![name])?)
            }
            Query::RandomN(n) => QueryOutcome::Quotes(random_n(&conn, *n)?),
            Query::RandomOne => QueryOutcome::Quotes(quote_rows(&conn, "", RANDOM_N, params![1])?),
            Query::TotalCount => QueryOutcome::Count(total(&conn)?),
            Query::ByTag(tag) => {
                let tag = crate::core::sanitize::normalize_tag(tag);
                QueryOutcome::Quotes(quote_rows(&conn, BY_TAG, IN_ORDER, params![tag])?)
            }
            Query::TopAuthors => QueryOutcome::TopAuthors(top_authors(&conn)?),
            Query::CommentsForRandomQuote => comments_for_random_quote(&conn)?,
            Query::AuthorBio(name) => QueryOutcome::Bio(author_bio(&conn, name)?),
            Query::AllQuotes => QueryOutcome::Quotes(quote_rows(&conn, "", IN_ORDER, params![])?),
            Query::Surprise => surprise(&conn)?,
        };
        Ok(outcome)
    }

    fn author_names(&self) -> Result<Vec<String>, QueryError> {
        let conn = self.connect()?;
        Ok(names(&conn, "SELECT name FROM author ORDER BY name")?)
    }

    fn tag_names(&self) -> Result<Vec<String>, QueryError> {
        let conn = self.connect()?;
        Ok(names(&conn, "SELECT name FROM tag ORDER BY name")?)
    }

    fn total_quotes(&self) -> Result<i64, QueryError> {
        let conn = self.connect()?;
        Ok(total(&conn)?)
    }

    fn probe(&self) -> Result<(), QueryError> {
        let conn = self.connect()?;
        if store::has_schema(&conn)? {
            Ok(())
        } else {
            Err(QueryError::unavailable(
                self.db.path(),
                "tables missing, run the etl loader first",
            ))
        }
    }
}
