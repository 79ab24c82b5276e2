//! Loading records produced by a fetch layer from a YAML document.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::git::{GitTag, PullRequest};

/// Records listed in an input document.
///
/// Example YAML:
/// ```yaml
/// tags:
///   - repo-path: /src/project
///     name: releases/v1.0
///     sha: 0123456789abcdef0123456789abcdef01234567
///     message: First release
///     date: "2020-01-01T00:00:00Z"
/// pull-requests:
///   - provider: { id: github, name: GitHub, domain: github.com }
///     author: { name: octocat, avatar-url: "", url: "https://github.com/octocat" }
///     id: "42"
///     title: Fix login bug
///     url: https://github.com/owner/repo/pull/42
///     state: Open
///     date: "2021-03-02T14:05:09Z"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RecordSet {
    #[serde(default)]
    pub tags: Vec<GitTag>,

    #[serde(default)]
    pub pull_requests: Vec<PullRequest>,
}

pub fn parse_records(content: &str) -> Result<RecordSet> {
    serde_saphyr::from_str(content).context("Failed to parse records: invalid YAML")
}

/// Load records from a YAML file
///
/// # Errors
///
/// Returns an error if the file cannot be read or the YAML cannot be parsed
pub fn load_records(path: &Path) -> Result<RecordSet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read records file at {}", path.display()))?;

    parse_records(&content).with_context(|| format!("Invalid records file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::{PullRequestState, Reference};

    const SAMPLE: &str = r#"
tags:
  - repo-path: /src/project
    name: releases/v1.0
    sha: 0123456789abcdef0123456789abcdef01234567
    message: First release
    date: "2020-01-01T00:00:00Z"
    commit-date: "2019-12-30T08:00:00Z"
  - repo-path: /src/project
    name: v2.0
    sha: 89abcdef0123456789abcdef0123456789abcdef
    message: Second release
    date: "2021-01-01T00:00:00Z"
pull-requests:
  - provider: { id: github, name: GitHub, domain: github.com }
    author: { name: octocat, avatar-url: "", url: "https://github.com/octocat" }
    id: "42"
    title: Fix login bug
    url: https://github.com/owner/repo/pull/42
    state: Merged
    date: "2021-03-02T14:05:09Z"
    merged-date: "2021-03-04T09:00:00Z"
"#;

    #[test]
    fn test_parse_records() {
        let records = parse_records(SAMPLE).unwrap();
        assert_eq!(records.tags.len(), 2);
        assert_eq!(records.tags[0].name(), "releases/v1.0");
        assert!(records.tags[0].commit_date().is_some());
        assert!(records.tags[1].commit_date().is_none());

        assert_eq!(records.pull_requests.len(), 1);
        let pr = &records.pull_requests[0];
        assert_eq!(pr.state(), PullRequestState::Merged);
        assert_eq!(pr.format_date(Some("YYYY-MM-DD")), "2021-03-04");
    }

    #[test]
    fn test_parse_empty_sections() {
        let records = parse_records("tags: []\n").unwrap();
        assert!(records.tags.is_empty());
        assert!(records.pull_requests.is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_section() {
        assert!(parse_records("branches: []\n").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("refview-records-does-not-exist.yaml");
        let err = load_records(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read records file"));
    }
}
