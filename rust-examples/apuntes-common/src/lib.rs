//! # Apuntes Common
//!
//! Shared pieces for the lesson crates:
//!
//! - [`console`]: the recording `console.log` / `print` stand-in
//! - [`error`]: errors the examples throw and catch
//! - [`inspect`]: JavaScript- and Python-style rendering of dynamic values
//! - [`lesson`]: the lesson descriptor the runner executes
//! - [`logging`]: tracing subscriber setup
//! - [`settings`]: delays and interactivity knobs

pub mod console;
pub mod error;
pub mod inspect;
pub mod lesson;
pub mod logging;
pub mod settings;

pub use console::{Console, Entry, Level};
pub use error::{LessonError, Result};
pub use lesson::Lesson;
pub use settings::Settings;
