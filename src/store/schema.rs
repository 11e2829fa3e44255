// src/store/schema.rs

/// Tables the loader creates if absent. Names are singular, as the reader queries expect.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS author (
    id          INTEGER PRIMARY KEY,
    name        TEXT NOT NULL UNIQUE,
    birth_date  TEXT,
    birth_place TEXT,
    description TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS tag (
    id   INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS quote (
    id        INTEGER PRIMARY KEY,
    content   TEXT NOT NULL,
    author_id INTEGER NOT NULL REFERENCES author(id),
    UNIQUE (content, author_id)
);
CREATE INDEX IF NOT EXISTS idx_quote_author ON quote(author_id);

CREATE TABLE IF NOT EXISTS quote_tag (
    quote_id INTEGER NOT NULL REFERENCES quote(id) ON DELETE CASCADE,
    tag_id   INTEGER NOT NULL REFERENCES tag(id),
    PRIMARY KEY (quote_id, tag_id)
);
CREATE INDEX IF NOT EXISTS idx_quote_tag_tag ON quote_tag(tag_id);

CREATE TABLE IF NOT EXISTS comment (
    id       INTEGER PRIMARY KEY,
    quote_id INTEGER NOT NULL REFERENCES quote(id) ON DELETE CASCADE,
    name     TEXT NOT NULL,
    email    TEXT NOT NULL,
    body     TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_comment_quote ON comment(quote_id);
"#;

/// Children first, so foreign keys never dangle mid-drop.
pub const DROP_SQL: &str = r#"
DROP TABLE IF EXISTS comment;
DROP TABLE IF EXISTS quote_tag;
DROP TABLE IF EXISTS quote;
DROP TABLE IF EXISTS tag;
DROP TABLE IF EXISTS author;
"#;

pub const TABLES: &[&str] = &["author", "tag", "quote", "quote_tag", "comment"];
