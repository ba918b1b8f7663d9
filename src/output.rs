//! Status lines for the iconfx CLI.
//!
//! Every line is a right-aligned verb followed by a message, written to
//! stderr so stdout stays free for completion scripts.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const VERB_WIDTH: usize = 12;

/// Colour of the verb column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Progress,
    Note,
    Warn,
    Fail,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Progress => "\x1b[1;32m",
            Tone::Note => "\x1b[1;36m",
            Tone::Warn => "\x1b[1;33m",
            Tone::Fail => "\x1b[1;31m",
        }
    }
}

/// Writes Cargo-style status lines to stderr.
///
/// ANSI colour is used only when stderr is a terminal. In quiet mode only
/// [`Tone::Fail`] lines get through.
#[derive(Debug, Clone)]
pub struct Printer {
    color: bool,
    quiet: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
            quiet: false,
        }
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// e.g. "  Processing 12 icons (outline=2px)"
    pub fn status(&self, verb: &str, message: &str) {
        self.emit(Tone::Progress, verb, message);
    }

    pub fn success(&self, verb: &str, message: &str) {
        self.emit(Tone::Progress, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.emit(Tone::Note, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.emit(Tone::Warn, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.emit(Tone::Fail, verb, message);
    }

    fn emit(&self, tone: Tone, verb: &str, message: &str) {
        if let Some(line) = self.render(tone, verb, message) {
            let _ = writeln!(io::stderr().lock(), "{line}");
        }
    }

    /// The line that would be printed, or `None` when quiet mode hides it.
    pub fn render(&self, tone: Tone, verb: &str, message: &str) -> Option<String> {
        if self.quiet && tone != Tone::Fail {
            return None;
        }

        let line = if self.color {
            format!("{}{verb:>VERB_WIDTH$}\x1b[0m {message}", tone.ansi())
        } else {
            format!("{verb:>VERB_WIDTH$} {message}")
        };
        Some(line)
    }
}

/// `plural(3, "icon", "icons")` gives "3 icons".
pub fn plural(n: usize, one: &str, many: &str) -> String {
    let noun = if n == 1 { one } else { many };
    format!("{n} {noun}")
}

/// Shorten `path` relative to the working directory when it lives under it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Printer {
        Printer {
            color: false,
            quiet: false,
        }
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "icon", "icons"), "1 icon");
        assert_eq!(plural(0, "icon", "icons"), "0 icons");
        assert_eq!(plural(12, "icon", "icons"), "12 icons");
    }

    #[test]
    fn test_render_right_aligns_verb() {
        let line = plain().render(Tone::Progress, "Saved", "out.png").unwrap();
        assert_eq!(line, "       Saved out.png");
    }

    #[test]
    fn test_quiet_keeps_only_failures() {
        let printer = plain().quiet(true);
        assert!(printer.render(Tone::Progress, "Saved", "x").is_none());
        assert!(printer.render(Tone::Warn, "Missing", "x").is_none());
        assert!(printer.render(Tone::Fail, "Failed", "x").is_some());
    }

    #[test]
    fn test_colour_wraps_verb() {
        let printer = Printer {
            color: true,
            quiet: false,
        };
        let line = printer.render(Tone::Fail, "Failed", "a.png").unwrap();
        assert!(line.starts_with("\x1b[1;31m"));
        assert!(line.ends_with("\x1b[0m a.png"));
    }

    #[test]
    fn test_display_path_outside_cwd_is_unchanged() {
        let p = Path::new("/nonexistent/path/to/icon.png");
        assert_eq!(display_path(p), "/nonexistent/path/to/icon.png");
    }
}
