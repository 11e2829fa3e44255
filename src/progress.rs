// src/progress.rs
/// Lightweight progress reporting used by the ETL run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of items, if known.
    fn begin(&mut self, _total: Option<usize>) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (e.g. a page was parsed).
    fn item_done(&mut self, _id: u32) {}

    /// Called when one logical unit failed and was skipped.
    fn item_failed(&mut self, _id: u32, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints one line per event to stderr.
#[derive(Default)]
pub struct ConsoleProgress {
    done: usize,
    failed: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: Option<usize>) {
        match total {
            Some(n) => eprintln!("Starting… {n} item(s)"),
            None => eprintln!("Starting…"),
        }
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, id: u32) {
        self.done += 1;
        eprintln!("  page {id} ok");
    }
    fn item_failed(&mut self, id: u32, reason: &str) {
        self.failed += 1;
        eprintln!("  page {id} skipped: {reason}");
    }
    fn finish(&mut self) {
        eprintln!("Done ({} ok, {} skipped)", self.done, self.failed);
    }
}
