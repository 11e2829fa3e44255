// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod components;
pub mod format;

pub use app::run;
