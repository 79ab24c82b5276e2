use std::any::Any;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::reference::{GitReference, RefType, Reference};
use crate::config::{self, TagSorting};
use crate::date::{format_date, from_now, DateFormatting, DEFAULT_DATE_FORMAT, TAG_DATE_FORMATTING};
use crate::memo::Memo;
use crate::strings::sort_compare;

/// Options for [`GitTag::sort`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagSortOptions {
    /// Ordering to apply; the configured `sort-tags-by` when None
    pub order_by: Option<TagSorting>,
}

/// A tag enumerated from a repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GitTag {
    repo_path: String,
    name: String,
    sha: String,
    message: String,
    date: DateTime<Utc>,
    #[serde(default)]
    commit_date: Option<DateTime<Utc>>,
    #[serde(skip)]
    formatted: Memo,
    #[serde(skip)]
    basename: OnceLock<String>,
}

impl GitTag {
    pub fn new(
        repo_path: impl Into<String>,
        name: impl Into<String>,
        sha: impl Into<String>,
        message: impl Into<String>,
        date: DateTime<Utc>,
        commit_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            repo_path: repo_path.into(),
            name: name.into(),
            sha: sha.into(),
            message: message.into(),
            date,
            commit_date,
            formatted: Memo::new(),
            basename: OnceLock::new(),
        }
    }

    /// True if `value` is a `GitTag`
    pub fn is(value: &dyn Any) -> bool {
        value.is::<GitTag>()
    }

    /// True if `reference` is present and its discriminator says it is a tag
    pub fn is_of_ref_type<R: Reference + ?Sized>(reference: Option<&R>) -> bool {
        reference.is_some_and(|r| r.ref_type() == RefType::Tag)
    }

    /// Reorder `tags` by `options.order_by`, newest first by default.
    ///
    /// The sort is stable: tags that compare equal keep their input order.
    pub fn sort(mut tags: Vec<GitTag>, options: &TagSortOptions) -> Vec<GitTag> {
        let order_by = options
            .order_by
            .unwrap_or_else(|| config::store::current().sort_tags_by);
        trace!(?order_by, count = tags.len(), "Sorting tags");

        match order_by {
            TagSorting::DateAsc => tags.sort_by(|a, b| a.date.cmp(&b.date)),
            TagSorting::NameAsc => tags.sort_by(|a, b| sort_compare(&a.name, &b.name)),
            TagSorting::NameDesc => tags.sort_by(|a, b| sort_compare(&b.name, &a.name)),
            TagSorting::DateDesc => tags.sort_by(|a, b| b.date.cmp(&a.date)),
        }
        tags
    }

    pub fn sha(&self) -> &str {
        &self.sha
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn commit_date(&self) -> Option<DateTime<Utc>> {
        self.commit_date
    }

    /// Last path segment of the name ("releases/v1.0" -> "v1.0")
    pub fn basename(&self) -> &str {
        self.basename.get_or_init(|| match self.name.rsplit_once('/') {
            Some((_, basename)) => basename.to_string(),
            None => self.name.clone(),
        })
    }

    /// Headline date using the process-wide tag preferences
    pub fn formatted_date(&self) -> String {
        self.formatted_date_with(&TAG_DATE_FORMATTING.current())
    }

    pub fn formatted_date_with(&self, formatting: &DateFormatting) -> String {
        if formatting.is_absolute() {
            self.format_date(formatting.format.as_deref())
        } else {
            self.format_date_from_now()
        }
    }

    fn format_cached(&self, slot: &str, date: &DateTime<Utc>, format: Option<&str>) -> String {
        let pattern = format.unwrap_or(DEFAULT_DATE_FORMAT);
        let key = format!("{}:{}", slot, pattern);
        self.formatted
            .get_or_insert_with(&key, || format_date(date, pattern))
    }

    pub fn format_date(&self, format: Option<&str>) -> String {
        self.format_cached("date", &self.date, format)
    }

    pub fn format_date_from_now(&self) -> String {
        from_now(&self.date)
    }

    pub fn format_commit_date(&self, format: Option<&str>) -> String {
        match &self.commit_date {
            Some(date) => self.format_cached("commit", date, format),
            None => String::new(),
        }
    }

    pub fn format_commit_date_from_now(&self) -> String {
        self.commit_date.as_ref().map(from_now).unwrap_or_default()
    }
}

impl Reference for GitTag {
    fn ref_type(&self) -> RefType {
        RefType::Tag
    }

    fn repo_path(&self) -> &str {
        &self.repo_path
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// Tags are addressed by name
    fn reference(&self) -> &str {
        &self.name
    }
}

impl From<&GitTag> for GitReference {
    fn from(tag: &GitTag) -> Self {
        GitReference::Tag {
            repo_path: tag.repo_path.clone(),
            name: tag.name.clone(),
        }
    }
}
