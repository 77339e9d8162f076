//! Main TUI application state and logic

use crate::store::{AddOutcome, StoreError, WordList};
use crate::ui::form::{EntryForm, Field};
use crate::ui::table_view::TableView;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{info, warn};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// Rows moved by PageUp/PageDown
const PAGE_STEP: usize = 10;

/// Which part of the screen receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Table,
}

impl Focus {
    /// Move focus forward: word -> description -> genre -> table -> word
    pub fn next(self) -> Self {
        match self {
            Focus::Field(Field::Word) => Focus::Field(Field::Description),
            Focus::Field(Field::Description) => Focus::Field(Field::Genre),
            Focus::Field(Field::Genre) => Focus::Table,
            Focus::Table => Focus::Field(Field::Word),
        }
    }

    /// Move focus backward
    pub fn prev(self) -> Self {
        match self {
            Focus::Field(Field::Word) => Focus::Table,
            Focus::Field(Field::Description) => Focus::Field(Field::Word),
            Focus::Field(Field::Genre) => Focus::Field(Field::Description),
            Focus::Table => Focus::Field(Field::Genre),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// A modal message; any key dismisses it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    fn new(kind: NoticeKind, title: &str, message: impl Into<String>) -> Self {
        Notice {
            kind,
            title: title.to_string(),
            message: message.into(),
        }
    }
}

/// The main application state
pub struct App {
    /// Backing record store
    pub store: WordList,

    /// Rendered snapshot of the store
    pub table: TableView,

    /// New-record input
    pub form: EntryForm,

    pub focus: Focus,

    /// Modal notice shown over everything else
    pub notice: Option<Notice>,

    /// Status message to display
    pub status_message: String,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new app over an already loaded store
    pub fn new(store: WordList) -> Self {
        let table = TableView::new(&store);
        App {
            store,
            table,
            form: EntryForm::new(),
            focus: Focus::Field(Field::Word),
            notice: None,
            status_message: String::from("Ready!"),
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
                Event::Paste(text) => self.handle_paste(&text),
                _ => {}
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Table (top) | form | status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        super::panes::render_table_pane(
            frame,
            chunks[0],
            &mut self.table,
            self.focus == Focus::Table,
        );

        let focused_field = match self.focus {
            Focus::Field(field) if self.notice.is_none() => Some(field),
            _ => None,
        };
        let cursor = super::panes::render_form_pane(frame, chunks[1], &self.form, focused_field);
        if let Some(position) = cursor {
            frame.set_cursor_position(position);
        }

        super::panes::render_status_bar(
            frame,
            chunks[2],
            &self.status_message,
            self.store.len(),
            self.store.path(),
            self.focus == Focus::Table,
        );

        if let Some(notice) = &self.notice {
            super::panes::render_notice(frame, size, notice);
        }
    }

    /// Handle bracketed paste. While a notice is shown the paste only dismisses it.
    pub fn handle_paste(&mut self, text: &str) {
        if self.notice.take().is_some() {
            return;
        }
        if let Focus::Field(field) = self.focus {
            self.form.push_str(field, text);
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if self.notice.is_some() {
            self.notice = None;
            if ctrl && key.code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.reload(),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Enter => match self.focus {
                Focus::Field(_) => self.submit(),
                Focus::Table => self.focus = Focus::Field(Field::Word),
            },
            _ => match self.focus {
                Focus::Field(field) => self.handle_field_key(field, key, ctrl),
                Focus::Table => self.handle_table_key(key),
            },
        }
    }

    fn handle_field_key(&mut self, field: Field, key: KeyEvent, ctrl: bool) {
        match key.code {
            KeyCode::Backspace if ctrl => self.form.pop_word(field),
            KeyCode::Backspace => self.form.pop(field),
            KeyCode::Char('w') if ctrl => self.form.pop_word(field),
            KeyCode::Char('u') if ctrl => self.form.clear_field(field),
            KeyCode::Char(c) if !ctrl => self.form.push(field, c),
            KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::Up => self.focus = self.focus.prev(),
            _ => {}
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.table.select_prev(1),
            KeyCode::Down | KeyCode::Char('j') => self.table.select_next(1),
            KeyCode::PageUp => self.table.select_prev(PAGE_STEP),
            KeyCode::PageDown => self.table.select_next(PAGE_STEP),
            KeyCode::Home | KeyCode::Char('g') => self.table.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.table.select_last(),
            _ => {}
        }
    }

    /// Validate the form and append its record to the store
    pub fn submit(&mut self) {
        let Some(submission) = self.form.submission() else {
            self.notice = Some(Notice::new(
                NoticeKind::Warning,
                "Warning",
                "Please fill in every field.",
            ));
            self.status_message = "Incomplete entry".to_string();
            return;
        };

        match self
            .store
            .add(&submission.word, &submission.description, &submission.genre)
        {
            Ok(outcome) => {
                self.table.sync(&self.store);
                self.table.select(outcome.index());
                self.form.clear();
                self.focus = Focus::Field(Field::Word);

                let verb = match outcome {
                    AddOutcome::Inserted { .. } => "Appended",
                    AddOutcome::Replaced { .. } => "Updated",
                };
                info!(
                    "event=ui_submit status=ok word={:?} outcome={:?}",
                    submission.word, outcome
                );
                self.status_message = format!("{} '{}'", verb, submission.word);
                self.notice = Some(Notice::new(
                    NoticeKind::Info,
                    verb,
                    format!("{} '{}'.", verb, submission.word),
                ));
            }
            // add rolls back on failure; the form keeps its text for a retry
            Err(err) => self.report_store_error("Save failed", err),
        }
    }

    /// Re-read the backing file and redraw the table
    pub fn reload(&mut self) {
        match self.store.load() {
            Ok(()) => {
                self.table.sync(&self.store);
                self.status_message = format!("Reloaded {} record(s)", self.store.len());
            }
            // The store keeps its previous contents, so the table is still accurate
            Err(err) => self.report_store_error("Reload failed", err),
        }
    }

    fn report_store_error(&mut self, title: &str, err: StoreError) {
        warn!("event=ui_store_error title={:?} error={}", title, err);
        self.status_message = format!("{}: {}", title, err);
        self.notice = Some(Notice::new(NoticeKind::Error, title, err.to_string()));
    }
}
