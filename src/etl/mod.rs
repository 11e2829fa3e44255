// src/etl/mod.rs
//
// Offline loader: extract (scrape), transform (validate), load (SQLite).

use std::fmt;

use crate::{
    config::options::AppOptions,
    core::net::{HttpSource, NetError},
    progress::Progress,
    scrape,
    store::Database,
};

mod load;
mod transform;

pub use load::{LoadReport, TableCount, load};
pub use transform::{Rejected, Transformed, transform};

#[derive(Debug, thiserror::Error)]
pub enum EtlError {
    #[error("cannot open database {path}: {source}")]
    Open { path: String, source: rusqlite::Error },
    /// A whole source is down; nothing has been written.
    #[error("{what} unreachable: {source}")]
    Unreachable { what: String, source: NetError },
    #[error("comments payload is not a JSON array: {0}")]
    CommentsPayload(#[from] serde_json::Error),
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// End-of-run summary printed by the loader.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EtlReport {
    pub pages_ok: u32,
    pub pages_failed: u32,
    pub rejected: Rejected,
    pub load: LoadReport,
}

impl fmt::Display for EtlReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pages:     {} fetched, {} skipped", self.pages_ok, self.pages_failed)?;
        writeln!(
            f,
            "Rejected:  {} quote(s), {} author(s), {} comment(s)",
            self.rejected.quotes, self.rejected.authors, self.rejected.comments
        )?;
        writeln!(f, "Authors:   {}", self.load.authors)?;
        writeln!(f, "Tags:      {}", self.load.tags)?;
        writeln!(f, "Quotes:    {}", self.load.quotes)?;
        writeln!(f, "Quote tags: {}", self.load.quote_tags)?;
        write!(f, "Comments:  {}", self.load.comments)
    }
}

fn stages(
    opts: &AppOptions,
    source: &dyn HttpSource,
    progress: &mut dyn Progress,
    conn: &mut rusqlite::Connection,
) -> Result<EtlReport, EtlError> {
    let extracted = scrape::collect(source, &opts.etl, progress)?;
    let data = transform(&extracted);

    progress.log("Loading…");
    let loaded = load(conn, &data, opts.etl.fresh, &mut rand::thread_rng())?;

    Ok(EtlReport {
        pages_ok: extracted.pages_ok,
        pages_failed: extracted.pages_failed,
        rejected: data.rejected,
        load: loaded,
    })
}

/// One full pass. The database is opened before any request goes out, so a
/// bad path fails fast; a dead source aborts before anything is written.
pub fn run(
    opts: &AppOptions,
    source: &dyn HttpSource,
    progress: &mut dyn Progress,
) -> Result<EtlReport, EtlError> {
    let db = Database::new(&opts.db.path);
    let mut conn = db.open_read_write().map_err(|source| EtlError::Open {
        path: db.path().display().to_string(),
        source,
    })?;
    logf!("ETL: database {}", db.path().display());

    let result = stages(opts, source, progress, &mut conn);

    progress.finish();
    match &result {
        Ok(_) => logf!("ETL: done"),
        Err(e) => loge!("ETL: {e}"),
    }
    result
}
