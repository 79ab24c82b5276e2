//! Process-wide configuration snapshot shared by the record models.

use std::sync::{PoisonError, RwLock};

use tracing::debug;

use super::schema::Config;

static CURRENT: RwLock<Option<Config>> = RwLock::new(None);

/// Snapshot of the active configuration. Defaults until `update` is called.
pub fn current() -> Config {
    CURRENT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .unwrap_or_default()
}

/// Replace the active configuration.
pub fn update(config: Config) {
    debug!(
        date_style = ?config.default_date_style,
        date_format = config.default_date_format.as_deref(),
        sort_tags_by = ?config.sort_tags_by,
        "Configuration updated"
    );
    *CURRENT.write().unwrap_or_else(PoisonError::into_inner) = Some(config);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TagSorting;

    #[test]
    fn test_current_defaults_sort_to_date_desc() {
        // Nothing in the test suite installs a different tag ordering.
        assert_eq!(current().sort_tags_by, TagSorting::DateDesc);
    }
}
