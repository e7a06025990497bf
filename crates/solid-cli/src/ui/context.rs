//! Terminal capabilities and the UI settings derived from them.

use std::io::IsTerminal;

use super::mode::OutputMode;
use crate::cli::Cli;

const DEFAULT_WIDTH: usize = 80;

/// Facts about stdout and the environment, gathered once at startup.
#[derive(Debug, Clone, Default)]
pub struct Terminal {
    pub is_tty: bool,
    /// `TERM=dumb`
    pub dumb: bool,
    /// `NO_COLOR` is set
    pub no_color: bool,
    pub columns: Option<usize>,
}

impl Terminal {
    pub fn detect() -> Self {
        Self {
            is_tty: std::io::stdout().is_terminal(),
            dumb: std::env::var("TERM").is_ok_and(|term| term == "dumb"),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: columns_from_env().or_else(columns_from_tty),
        }
    }

    /// Whether frames, tables and escapes will render correctly.
    pub fn supports_pretty(&self) -> bool {
        self.is_tty && !self.dumb
    }
}

/// Resolved UI settings for one run.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
    pub width: usize,
    pub mode: OutputMode,
}

impl UiContext {
    pub fn from_cli(cli: &Cli, terminal: &Terminal) -> Self {
        let mode = OutputMode::select(cli.json, cli.format, terminal);
        // Forced pretty output into a pipe keeps its layout but not escapes
        let color =
            mode.is_pretty() && terminal.supports_pretty() && !terminal.no_color && !cli.no_color;

        Self {
            color,
            unicode: !cli.ascii,
            width: terminal.columns.unwrap_or(DEFAULT_WIDTH),
            mode,
        }
    }
}

fn columns_from_env() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.parse::<usize>().ok())
        .filter(|&cols| cols > 0)
}

#[cfg(unix)]
fn columns_from_tty() -> Option<usize> {
    use std::mem::MaybeUninit;

    let mut winsize = MaybeUninit::<libc::winsize>::uninit();
    // SAFETY: TIOCGWINSZ only writes into the provided winsize
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
    if result != 0 {
        return None;
    }
    let ws = unsafe { winsize.assume_init() };
    (ws.ws_col > 0).then_some(ws.ws_col as usize)
}

#[cfg(not(unix))]
fn columns_from_tty() -> Option<usize> {
    None
}
