//! TUI pane rendering modules
//!
//! Each pane is a stateless render function over the app state.
//!
//! # Pane Modules
//!
//! - [`table`]: Glossary table with header row, scrolling and row highlight
//! - [`form`]: Word / description / genre input boxes
//! - [`status`]: Status bar with record count and keybindings
//! - [`notice`]: Modal popup for append confirmations, warnings and errors

pub mod form;
pub mod notice;
pub mod status;
pub mod table;

// Re-export render functions for convenience
pub use form::render_form_pane;
pub use notice::render_notice;
pub use status::render_status_bar;
pub use table::render_table_pane;
