//! # Introduction
//!
//! A terminal editor for a small CSV glossary. The file is loaded into an
//! ordered in-memory store, shown as a table, and new rows are appended
//! through a three-field form. Every append rewrites the file.
//!
//! ```text
//! input.csv → WordList → TableView → TUI
//!                ↑                    │
//!                └──── add + save ────┘
//! ```
//!
//! 1. [`store`] — CSV load/add/save and the ordered word → attributes mapping.
//! 2. [`ui`] — ratatui-based TUI: table, entry form, status bar, notices.
//! 3. [`config`] — command-line options.
//! 4. [`logging`] — rotating file logs via `flexi_logger`.

pub mod config;
pub mod logging;
pub mod store;
pub mod ui;
