use std::any::Any;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::remote::RemoteProviderReference;
use crate::date::{
    format_date, from_now, DateFormatting, DEFAULT_DATE_FORMAT, PULL_REQUEST_DATE_FORMATTING,
};
use crate::memo::Memo;
use crate::theme::{ColorThemeKind, ThemeColor, ThemeIcon};

/// Lifecycle state reported by the hosting provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PullRequestState {
    Open,
    Closed,
    Merged,
    /// Any state string the provider reports that is not one of the above
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PullRequestAuthor {
    pub name: String,
    pub avatar_url: String,
    pub url: String,
}

/// A pull request as fetched from a hosting provider.
///
/// Immutable after construction. Absolute date strings are cached per
/// instance and per format pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PullRequest {
    provider: RemoteProviderReference,
    author: PullRequestAuthor,
    id: String,
    title: String,
    url: String,
    state: PullRequestState,
    date: DateTime<Utc>,
    #[serde(default)]
    closed_date: Option<DateTime<Utc>>,
    #[serde(default)]
    merged_date: Option<DateTime<Utc>>,
    #[serde(skip)]
    formatted: Memo,
}

impl PullRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        provider: RemoteProviderReference,
        author: PullRequestAuthor,
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        state: PullRequestState,
        date: DateTime<Utc>,
        closed_date: Option<DateTime<Utc>>,
        merged_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            provider,
            author,
            id: id.into(),
            title: title.into(),
            url: url.into(),
            state,
            date,
            closed_date,
            merged_date,
            formatted: Memo::new(),
        }
    }

    /// True if `value` is a `PullRequest`
    pub fn is(value: &dyn Any) -> bool {
        value.is::<PullRequest>()
    }

    /// Markdown snippet for rich tooltips, colored for the given theme kind
    pub fn get_markdown_icon(pull_request: &PullRequest, theme: ColorThemeKind) -> String {
        let icon = Self::get_theme_icon(pull_request);
        match icon.color.and_then(|color| color.hex(theme)) {
            Some(hex) => format!("<span style=\"color:{};\">{}</span>", hex, icon.codicon()),
            None => icon.codicon(),
        }
    }

    /// Icon handle whose color is resolved by the renderer
    pub fn get_theme_icon(pull_request: &PullRequest) -> ThemeIcon {
        match pull_request.state {
            PullRequestState::Open => {
                ThemeIcon::with_color("git-pull-request", ThemeColor::OPEN_PULL_REQUEST)
            }
            PullRequestState::Closed => {
                ThemeIcon::with_color("git-pull-request-closed", ThemeColor::CLOSED_PULL_REQUEST)
            }
            PullRequestState::Merged => {
                ThemeIcon::with_color("git-merge", ThemeColor::MERGED_PULL_REQUEST)
            }
            PullRequestState::Unknown => ThemeIcon::new("git-pull-request"),
        }
    }

    pub fn provider(&self) -> &RemoteProviderReference {
        &self.provider
    }

    pub fn author(&self) -> &PullRequestAuthor {
        &self.author
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn state(&self) -> PullRequestState {
        self.state
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn closed_date(&self) -> Option<DateTime<Utc>> {
        self.closed_date
    }

    pub fn merged_date(&self) -> Option<DateTime<Utc>> {
        self.merged_date
    }

    /// Headline date using the process-wide pull request preferences
    pub fn formatted_date(&self) -> String {
        self.formatted_date_with(&PULL_REQUEST_DATE_FORMATTING.current())
    }

    pub fn formatted_date_with(&self, formatting: &DateFormatting) -> String {
        if formatting.is_absolute() {
            self.format_date(formatting.format.as_deref())
        } else {
            self.format_date_from_now()
        }
    }

    /// The most final timestamp: merged, else closed, else the base date
    fn latest_date(&self) -> DateTime<Utc> {
        self.merged_date.or(self.closed_date).unwrap_or(self.date)
    }

    fn format_cached(&self, slot: &str, date: &DateTime<Utc>, format: Option<&str>) -> String {
        let pattern = format.unwrap_or(DEFAULT_DATE_FORMAT);
        let key = format!("{}:{}", slot, pattern);
        self.formatted
            .get_or_insert_with(&key, || format_date(date, pattern))
    }

    pub fn format_date(&self, format: Option<&str>) -> String {
        self.format_cached("date", &self.latest_date(), format)
    }

    pub fn format_date_from_now(&self) -> String {
        from_now(&self.latest_date())
    }

    pub fn format_closed_date(&self, format: Option<&str>) -> String {
        match &self.closed_date {
            Some(date) => self.format_cached("closed", date, format),
            None => String::new(),
        }
    }

    pub fn format_closed_date_from_now(&self) -> String {
        self.closed_date.as_ref().map(from_now).unwrap_or_default()
    }

    pub fn format_merged_date(&self, format: Option<&str>) -> String {
        match &self.merged_date {
            Some(date) => self.format_cached("merged", date, format),
            None => String::new(),
        }
    }

    pub fn format_merged_date_from_now(&self) -> String {
        self.merged_date.as_ref().map(from_now).unwrap_or_default()
    }

    pub fn format_updated_date(&self, format: Option<&str>) -> String {
        self.format_cached("updated", &self.date, format)
    }

    pub fn format_updated_date_from_now(&self) -> String {
        from_now(&self.date)
    }
}
