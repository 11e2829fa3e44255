// src/catalog/mod.rs
//
// Folder module facade: the query identifiers, their result rows, and the
// SQLite-backed catalog that runs them.

mod catalog;
mod error;
mod query;
mod rows;

pub use catalog::Catalog;
pub use error::QueryError;
pub use query::{ParamKind, Query, QueryKind};
pub use rows::{AuthorBio, AuthorCount, CommentRow, QueryOutcome, QuoteRow, SurprisePick};

/// What the controller needs from the data side. `Catalog` is the real one;
/// tests swap in stubs to drive error paths.
pub trait Model {
    /// Run one catalog query.
    fn run(&self, query: &Query) -> Result<QueryOutcome, QueryError>;

    /// Sorted author names, for the author prompt.
    fn author_names(&self) -> Result<Vec<String>, QueryError>;

    /// Sorted tag names, for the tag prompt.
    fn tag_names(&self) -> Result<Vec<String>, QueryError>;

    /// Number of quotes; bounds the count prompt.
    fn total_quotes(&self) -> Result<i64, QueryError>;

    /// Check the database opens and holds the tables.
    fn probe(&self) -> Result<(), QueryError>;
}
