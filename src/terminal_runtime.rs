use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Concrete terminal type used by the full-screen view.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Raw mode without the alternate screen, for the plain console view.
///
/// Key events still need raw mode to arrive unbuffered.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, Show);
    }
}

/// Full-screen view: the alternate screen layered over a [`RawModeGuard`].
///
/// Dropping it leaves the alternate screen first; the guard then restores the
/// cooked mode and cursor.
pub struct TerminalSession {
    terminal: AppTerminal,
    _raw: RawModeGuard,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        let raw = RawModeGuard::enter()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self {
                terminal,
                _raw: raw,
            }),
            Err(error) => {
                let _ = leave_alternate_screen();
                Err(error)
            }
        }
    }

    /// Ratatui handle the board is drawn through.
    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = leave_alternate_screen();
    }
}

fn leave_alternate_screen() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen)
}

/// Restores the terminal before the default panic output is printed.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}

fn restore_terminal() -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)
}
