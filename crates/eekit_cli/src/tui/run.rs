use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event as CEvent};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::tui::app::App;
use crate::tui::input::handle_key;
use crate::tui::ui::ui;

/// Raw-mode alternate screen that is handed back to the shell on drop, so an
/// early `?` return or a panic in the loop still leaves a usable terminal.
struct Session {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Session {
    fn open() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)
            .context("Failed to enter alternate screen")?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        );
    }
}

/// Runs the calculators until the user quits. Outputs are recomputed from
/// the current inputs on every frame.
pub fn run_tui() -> Result<()> {
    let mut session = Session::open()?;
    let mut app = App::new();

    loop {
        session
            .terminal
            .draw(|f| ui(f, &app))
            .context("Failed to draw frame")?;

        if event::poll(Duration::from_millis(250))?
            && let CEvent::Key(k) = event::read()?
            && handle_key(k, &mut app)
        {
            break;
        }
    }
    Ok(())
}
