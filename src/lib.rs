// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod etl;
pub mod gui;
pub mod models;
pub mod progress;
pub mod scrape;
pub mod store;
