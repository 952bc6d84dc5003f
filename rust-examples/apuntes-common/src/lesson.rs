use crate::console::Console;
use crate::error::Result;
use crate::settings::Settings;

/// Signature of a lesson entry point.
pub type RunFn = fn(&mut Console, &Settings) -> Result<()>;

/// A runnable lesson: one section of a chapter.
#[derive(Debug, Clone, Copy)]
pub struct Lesson {
    /// Section number, e.g. `"2.1"`.
    pub id: &'static str,
    pub title: &'static str,
    pub run: RunFn,
}

impl Lesson {
    #[must_use]
    pub const fn new(id: &'static str, title: &'static str, run: RunFn) -> Self {
        Self { id, title, run }
    }

    /// Runs the lesson, logging its start and end.
    pub fn execute(&self, console: &mut Console, settings: &Settings) -> Result<()> {
        tracing::debug!(lesson = self.id, "starting lesson");
        let result = (self.run)(console, settings);
        match &result {
            Ok(()) => tracing::debug!(lesson = self.id, "lesson finished"),
            Err(e) => tracing::error!(lesson = self.id, error = %e, "lesson failed"),
        }
        result
    }
}

/// Finds a lesson by id.
#[must_use]
pub fn find<'a>(lessons: &'a [Lesson], id: &str) -> Option<&'a Lesson> {
    lessons.iter().find(|lesson| lesson.id == id)
}
