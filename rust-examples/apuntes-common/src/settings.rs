use std::time::Duration;

/// Runtime knobs shared by every lesson.
///
/// Lessons are otherwise stateless; only the timer examples and the
/// `input()` examples look at these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// How long the simulated data fetch takes before resolving.
    pub fetch_delay: Duration,
    /// How long the deferred callback waits before firing.
    pub callback_delay: Duration,
    /// Read prompted answers from stdin instead of the canned sample answers.
    pub interactive: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fetch_delay: Duration::from_millis(1000),
            callback_delay: Duration::from_millis(500),
            interactive: false,
        }
    }
}

impl Settings {
    /// Settings with every delay set to zero.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            fetch_delay: Duration::ZERO,
            callback_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_timers_of_the_notes() {
        let settings = Settings::default();
        assert_eq!(settings.fetch_delay, Duration::from_secs(1));
        assert_eq!(settings.callback_delay, Duration::from_millis(500));
        assert!(!settings.interactive);
    }

    #[test]
    fn test_instant_keeps_other_fields() {
        let settings = Settings::instant();
        assert_eq!(settings.fetch_delay, Duration::ZERO);
        assert_eq!(settings.callback_delay, Duration::ZERO);
        assert!(!settings.interactive);
    }
}
