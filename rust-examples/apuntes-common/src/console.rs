//! # Console
//!
//! The output sink every lesson writes to. It plays the role of
//! `console.log` / `print`: lines go to stdout (or stderr for warnings and
//! errors) and are also recorded so tests can compare them against the
//! literal text each example is expected to print.
//!
//! ## Example
//!
//! ```
//! use apuntes_common::Console;
//!
//! let mut console = Console::capture();
//! console.log("Hola, Josep");
//! console.warn("Dato nulo detectado, saltando");
//!
//! assert_eq!(console.lines(), ["Hola, Josep", "Dato nulo detectado, saltando"]);
//! assert_eq!(console.output(), "Hola, Josep\nDato nulo detectado, saltando\n");
//! ```

use std::fmt;
use std::io::{self, Write};

/// Severity of a recorded line, mirroring `console.log/warn/error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Log,
    Warn,
    Error,
}

/// A single line printed by a lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub level: Level,
    pub text: String,
}

/// Recording console. See the module docs.
#[derive(Debug, Default)]
pub struct Console {
    entries: Vec<Entry>,
    echo: bool,
}

impl Console {
    /// A console that prints to the terminal while recording.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            entries: Vec::new(),
            echo: true,
        }
    }

    /// A console that only records. Used by tests.
    #[must_use]
    pub fn capture() -> Self {
        Self::default()
    }

    /// Prints a line (`console.log` / `print`).
    pub fn log(&mut self, line: impl fmt::Display) {
        self.push(Level::Log, line.to_string());
    }

    /// Prints a warning line (`console.warn`).
    pub fn warn(&mut self, line: impl fmt::Display) {
        let text = line.to_string();
        tracing::debug!(target: "apuntes::console", kind = "warn", "{text}");
        self.push(Level::Warn, text);
    }

    /// Prints an error line (`console.error`).
    pub fn error(&mut self, line: impl fmt::Display) {
        let text = line.to_string();
        tracing::debug!(target: "apuntes::console", kind = "error", "{text}");
        self.push(Level::Error, text);
    }

    /// Shows an `input()` prompt: no newline, flushed before the caller
    /// blocks on a read. Nothing is recorded; see [`Console::record`].
    pub fn prompt(&mut self, prompt: &str) {
        if self.echo {
            let mut out = io::stdout().lock();
            let _ = write!(out, "{prompt}").and_then(|()| out.flush());
        }
    }

    /// Records a line without printing it, for text the terminal already
    /// shows (a prompt followed by what the user typed).
    pub fn record(&mut self, line: impl fmt::Display) {
        self.entries.push(Entry {
            level: Level::Log,
            text: line.to_string(),
        });
    }

    /// Prints an empty line (`print()`).
    pub fn blank(&mut self) {
        self.push(Level::Log, String::new());
    }

    /// Text of every recorded line, in order.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The whole transcript, one `\n`-terminated line per entry.
    #[must_use]
    pub fn output(&self) -> String {
        self.entries.iter().fold(String::new(), |mut acc, e| {
            acc.push_str(&e.text);
            acc.push('\n');
            acc
        })
    }

    /// Whether any recorded line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|e| e.text.contains(needle))
    }

    fn push(&mut self, level: Level, text: String) {
        if self.echo {
            // A closed pipe should not abort a lesson halfway through.
            let _ = match level {
                Level::Log => writeln!(io::stdout().lock(), "{text}"),
                Level::Warn | Level::Error => writeln!(io::stderr().lock(), "{text}"),
            };
        }
        self.entries.push(Entry { level, text });
    }
}
