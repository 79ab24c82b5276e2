use serde::{Deserialize, Serialize};

/// Settings consulted by the record models.
///
/// Example YAML:
/// ```yaml
/// default-date-format: "YYYY-MM-DD HH:mm"
/// default-date-style: absolute
/// sort-tags-by: "name:asc"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Custom absolute date pattern; the built-in pattern is used when absent
    #[serde(default)]
    pub default_date_format: Option<String>,

    #[serde(default)]
    pub default_date_style: DateStyle,

    #[serde(default)]
    pub sort_tags_by: TagSorting,
}

/// Whether dates render as calendar dates or as a distance from now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    Absolute,
    #[default]
    Relative,
}

/// Ordering applied to tag listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum TagSorting {
    #[default]
    #[serde(rename = "date:desc")]
    DateDesc,
    #[serde(rename = "date:asc")]
    DateAsc,
    #[serde(rename = "name:asc")]
    NameAsc,
    #[serde(rename = "name:desc")]
    NameDesc,
}
