//! Terminal mode setup and restore.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use tracing::{debug, error};

type Step<'a> = (&'static str, Box<dyn FnOnce() -> io::Result<()> + 'a>);

fn step<'a>(name: &'static str, f: impl FnOnce() -> io::Result<()> + 'a) -> Step<'a> {
    (name, Box::new(f))
}

/// Runs every step even if an earlier one fails. Returns the failure count.
fn run_teardown(steps: Vec<Step<'_>>) -> usize {
    let mut failed = 0;
    for (name, f) in steps {
        if let Err(err) = f() {
            error!(step = name, error = %err, "Terminal restore step failed");
            failed += 1;
        }
    }
    failed
}

/// Puts the terminal back into cooked mode on the main screen.
pub fn restore_terminal(mouse: bool) {
    let failed = run_teardown(vec![
        step("disable raw mode", disable_raw_mode),
        step("disable mouse capture", move || {
            if mouse {
                execute!(io::stdout(), DisableMouseCapture)
            } else {
                Ok(())
            }
        }),
        step("leave alternate screen", || {
            execute!(io::stdout(), LeaveAlternateScreen)
        }),
        step("show cursor", || execute!(io::stdout(), Show)),
    ]);
    debug!(failed, "Terminal restored");
}

/// Restores the terminal on drop, including early returns and panics.
///
/// Entering also installs a panic hook that restores the terminal before
/// the default hook prints, so the message lands on a usable screen.
/// Dropping outside a panic puts the default hook back.
pub struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    /// Enables raw mode, the alternate screen and optionally mouse capture.
    ///
    /// If a later setup step fails, the guard built so far is dropped and
    /// undoes the earlier ones.
    pub fn enter(mouse: bool) -> io::Result<Self> {
        install_panic_hook(mouse);
        enable_raw_mode()?;
        let guard = Self { mouse };
        execute!(io::stdout(), EnterAlternateScreen)?;
        if mouse {
            execute!(io::stdout(), EnableMouseCapture)?;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal(self.mouse);
        if !std::thread::panicking() {
            drop(std::panic::take_hook());
        }
    }
}

fn install_panic_hook(mouse: bool) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal(mouse);
        default_hook(info);
    }));
}
