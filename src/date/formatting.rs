//! Per-kind date formatting preferences.
//!
//! Each record kind owns one process-wide [`DateFormattingState`]. Readers
//! take a [`DateFormatting`] snapshot on every call, so a reset is visible to
//! already-constructed records on their next read.

use std::sync::{PoisonError, RwLock};

use tracing::debug;

use crate::config::{self, Config, DateStyle};

/// Style and optional custom pattern used to render a record's headline date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateFormatting {
    pub style: DateStyle,
    pub format: Option<String>,
}

impl DateFormatting {
    pub fn new(style: DateStyle, format: Option<String>) -> Self {
        Self { style, format }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            style: config.default_date_style,
            format: config.default_date_format.clone(),
        }
    }

    pub fn is_absolute(&self) -> bool {
        self.style == DateStyle::Absolute
    }
}

/// A shared, resettable [`DateFormatting`] slot.
///
/// Until the first `reset`/`set` it reports the relative style with no pattern.
pub struct DateFormattingState {
    kind: &'static str,
    current: RwLock<Option<DateFormatting>>,
}

impl DateFormattingState {
    pub const fn new(kind: &'static str) -> Self {
        Self {
            kind,
            current: RwLock::new(None),
        }
    }

    /// Snapshot of the current preferences
    pub fn current(&self) -> DateFormatting {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .unwrap_or_default()
    }

    pub fn set(&self, formatting: DateFormatting) {
        debug!(
            kind = self.kind,
            style = ?formatting.style,
            format = formatting.format.as_deref(),
            "Date formatting updated"
        );
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(formatting);
    }

    /// Reload preferences from the process-wide configuration store
    pub fn reset(&self) {
        self.reset_from(&config::store::current());
    }

    pub fn reset_from(&self, config: &Config) {
        self.set(DateFormatting::from_config(config));
    }
}

/// Preferences read by [`crate::git::PullRequest::formatted_date`].
pub static PULL_REQUEST_DATE_FORMATTING: DateFormattingState = DateFormattingState::new("pull_request");

/// Preferences read by [`crate::git::GitTag::formatted_date`].
pub static TAG_DATE_FORMATTING: DateFormattingState = DateFormattingState::new("tag");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uninitialized_state_is_relative() {
        let state = DateFormattingState::new("test");
        let current = state.current();
        assert_eq!(current.style, DateStyle::Relative);
        assert_eq!(current.format, None);
        assert!(!current.is_absolute());
    }

    #[test]
    fn test_reset_from_config() {
        let state = DateFormattingState::new("test");
        let config = Config {
            default_date_format: Some("YYYY".to_string()),
            default_date_style: DateStyle::Absolute,
            ..Config::default()
        };

        state.reset_from(&config);

        assert_eq!(
            state.current(),
            DateFormatting::new(DateStyle::Absolute, Some("YYYY".to_string()))
        );
    }

    #[test]
    fn test_reset_reads_config_store() {
        // The shared store is never updated by tests, so it holds the defaults
        let state = DateFormattingState::new("test");
        state.set(DateFormatting::new(DateStyle::Absolute, Some("YYYY".to_string())));

        state.reset();

        let current = state.current();
        assert_eq!(current.style, DateStyle::Relative);
        assert_eq!(current.format, None);
    }

    #[test]
    fn test_reset_again_replaces_values() {
        let state = DateFormattingState::new("test");
        state.set(DateFormatting::new(DateStyle::Absolute, Some("YYYY".to_string())));
        state.reset_from(&Config::default());
        assert_eq!(state.current(), DateFormatting::default());
    }
}
