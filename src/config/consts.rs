// src/config/consts.rs

// App
pub const APP_TITLE: &str = "Happy Quotes";
pub const WINDOW_W: f32 = 1400.0;
pub const WINDOW_H: f32 = 750.0;

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const DEFAULT_DATABASE: &str = "happy_quotes.db";
pub const DEFAULT_TUTORIAL: &str = "TUTORIAL.TXT";

// Net config
pub const DEFAULT_QUOTES_BASE_URL: &str = "http://quotes.toscrape.com";
pub const DEFAULT_COMMENTS_URL: &str = "https://jsonplaceholder.typicode.com/comments";
pub const USER_AGENT: &str = concat!("happy_quotes/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

// ETL
pub const DEFAULT_MAX_PAGES: u32 = 50;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const MAX_CONSECUTIVE_FAILURES: u32 = 3;

// Queries
pub const TOP_AUTHORS_LIMIT: usize = 5;
pub const TAG_SEP: char = ',';
