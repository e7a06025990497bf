//! Output modes and how the flags select one.

use clap::ValueEnum;

use super::context::Terminal;

/// Human-facing format requested with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One fact per line, no styling
    Plain,
    /// Framed banners and tables
    Pretty,
}

/// How the demo steps are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Json,
    Plain,
    Pretty,
}

impl OutputMode {
    /// `--json` beats `--format`, and an explicit format is used as given.
    /// Without either, pretty output needs a capable terminal.
    pub fn select(json: bool, format: Option<Format>, terminal: &Terminal) -> Self {
        match (json, format) {
            (true, _) => Self::Json,
            (false, Some(Format::Plain)) => Self::Plain,
            (false, Some(Format::Pretty)) => Self::Pretty,
            (false, None) if terminal.supports_pretty() => Self::Pretty,
            (false, None) => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piped() -> Terminal {
        Terminal::default()
    }

    fn tty() -> Terminal {
        Terminal {
            is_tty: true,
            ..Terminal::default()
        }
    }

    #[test]
    fn test_json_beats_format() {
        let mode = OutputMode::select(true, Some(Format::Pretty), &tty());
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn test_pretty_format_forced_on_pipe() {
        let mode = OutputMode::select(false, Some(Format::Pretty), &piped());
        assert_eq!(mode, OutputMode::Pretty);
    }

    #[test]
    fn test_plain_format_forced_on_tty() {
        let mode = OutputMode::select(false, Some(Format::Plain), &tty());
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_auto_follows_terminal() {
        assert_eq!(OutputMode::select(false, None, &tty()), OutputMode::Pretty);
        assert_eq!(OutputMode::select(false, None, &piped()), OutputMode::Plain);

        let dumb = Terminal {
            dumb: true,
            ..tty()
        };
        assert_eq!(OutputMode::select(false, None, &dumb), OutputMode::Plain);
    }
}
