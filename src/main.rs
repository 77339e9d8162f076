// glossary: terminal editor for a CSV word list

use std::io;

use clap::Parser;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::{backend::CrosstermBackend, Terminal};

use glossary::config::Config;
use glossary::logging::init_logging;
use glossary::store::WordList;
use glossary::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    let _logger = match init_logging(&config.log_level, &config.log_dir()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    };

    let store = match WordList::open(&config.file) {
        Ok(store) => store,
        Err(e) => {
            error!("event=startup status=error error={}", e);
            // Returning drops the logger handle, which flushes the buffered line above
            return Err(e.into());
        }
    };

    if config.print {
        println!("{}", store.to_text());
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(store);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    log_app_exit(&app, &res);
    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn log_app_exit(app: &App, res: &io::Result<()>) {
    match res {
        Ok(()) => info!(
            "event=app_exit status={} entries={} path={}",
            exit_status(res),
            app.store.len(),
            app.store.path().display()
        ),
        Err(err) => error!(
            "event=app_exit status={} entries={} path={} error={}",
            exit_status(res),
            app.store.len(),
            app.store.path().display(),
            err
        ),
    }
}

fn exit_status(res: &io::Result<()>) -> &'static str {
    if res.is_ok() {
        "ok"
    } else {
        "error"
    }
}

#[cfg(test)]
mod tests {
    use super::exit_status;
    use std::io;

    #[test]
    fn exit_status_reflects_ui_result() {
        assert_eq!(exit_status(&Ok(())), "ok");
        let failed: io::Result<()> = Err(io::Error::new(io::ErrorKind::Other, "tty gone"));
        assert_eq!(exit_status(&failed), "error");
    }
}
