//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into these layers:
//!
//! - **[`app`]** — application state, keyboard event loop, focus, submission
//! - **[`form`]** and **[`table_view`]** — form input and the table's display model
//! - **[`panes`]** — stateless render functions for each visible pane
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a loaded
//! [`WordList`] and call [`App::run`] to start the event loop.
//!
//! [`WordList`]: crate::store::WordList
//! [`App::run`]: app::App::run

pub mod app;
pub mod form;
pub mod panes;
pub mod table_view;
pub mod theme;

pub use app::App;
