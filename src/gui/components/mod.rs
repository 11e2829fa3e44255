// src/gui/components/mod.rs
pub mod console_panel;
pub mod dialogs;
pub mod footer;
pub mod menu_bar;
pub mod prompt_dialog;
pub mod response_panel;
