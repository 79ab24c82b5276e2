use std::io::IsTerminal;
use owo_colors::OwoColorize;

use crate::date::DateFormatting;
use crate::git::{GitTag, PullRequest, PullRequestState, Reference};
use crate::theme::ColorThemeKind;

/// Number of sha characters shown in listings
const SHORT_SHA_LEN: usize = 7;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

fn short_sha(sha: &str) -> &str {
    sha.get(..SHORT_SHA_LEN).unwrap_or(sha)
}

/// First line of a possibly multi-line message
fn summary(message: &str) -> &str {
    message.lines().next().unwrap_or("")
}

/// Format a list of tags as one line per tag
/// Format: "{name}  {short sha}  {date}  {message summary}"
pub fn format_tag_list(tags: &[GitTag], formatting: &DateFormatting, use_colors: bool) -> String {
    if tags.is_empty() {
        return "No tags found.".to_string();
    }

    tags.iter()
        .map(|tag| format_tag_line(tag, formatting, use_colors))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_tag_line(tag: &GitTag, formatting: &DateFormatting, use_colors: bool) -> String {
    let date = tag.formatted_date_with(formatting);
    let sha = short_sha(tag.sha());
    let message = summary(tag.message());

    let line = if use_colors {
        format!("{}  {}  {}", tag.name().bold(), sha.yellow(), date.dimmed())
    } else {
        format!("{}  {}  {}", tag.name(), sha, date)
    };

    if message.is_empty() {
        line
    } else {
        format!("{}  {}", line, message)
    }
}

/// Format a single tag with detailed multi-line output
pub fn format_tag_detail(tag: &GitTag, formatting: &DateFormatting, use_colors: bool) -> String {
    let mut lines = Vec::new();

    if use_colors {
        lines.push(format!("{} ({})", tag.name().bold(), tag.basename().cyan()));
        lines.push(format!("  Sha: {}", tag.sha().yellow()));
    } else {
        lines.push(format!("{} ({})", tag.name(), tag.basename()));
        lines.push(format!("  Sha: {}", tag.sha()));
    }

    lines.push(format!("  Repo: {}", tag.repo_path()));
    lines.push(format!("  Date: {}", tag.formatted_date_with(formatting)));

    if tag.commit_date().is_some() {
        let commit_date = if formatting.is_absolute() {
            tag.format_commit_date(formatting.format.as_deref())
        } else {
            tag.format_commit_date_from_now()
        };
        lines.push(format!("  Commit date: {}", commit_date));
    }

    if !tag.message().is_empty() {
        lines.push(format!("  Message: {}", summary(tag.message())));
    }

    lines.join("\n")
}

fn state_label(state: PullRequestState) -> &'static str {
    match state {
        PullRequestState::Open => "open",
        PullRequestState::Closed => "closed",
        PullRequestState::Merged => "merged",
        PullRequestState::Unknown => "unknown",
    }
}

/// `label` colored with the pull request's theme icon color
fn colored_state(pr: &PullRequest, theme: ColorThemeKind, label: &str) -> String {
    let rgb = PullRequest::get_theme_icon(pr)
        .color
        .and_then(|color| color.rgb(theme));

    match rgb {
        Some((r, g, b)) => label.truecolor(r, g, b).to_string(),
        None => label.dimmed().to_string(),
    }
}

/// Format a list of pull requests as one line per pull request
/// Format: "{state} #{id} {title} | {author} | {date}"
pub fn format_pull_request_list(
    prs: &[PullRequest],
    formatting: &DateFormatting,
    theme: ColorThemeKind,
    use_colors: bool,
) -> String {
    if prs.is_empty() {
        return "No pull requests found.".to_string();
    }

    prs.iter()
        .map(|pr| format_pull_request_line(pr, formatting, theme, use_colors))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_pull_request_line(
    pr: &PullRequest,
    formatting: &DateFormatting,
    theme: ColorThemeKind,
    use_colors: bool,
) -> String {
    let date = pr.formatted_date_with(formatting);

    if use_colors {
        format!(
            "{} #{} {} | {} | {}",
            colored_state(pr, theme, &format!("{:<6}", state_label(pr.state()))),
            pr.id(),
            pr.title().bold(),
            pr.author().name.yellow(),
            date.dimmed()
        )
    } else {
        format!(
            "{:<6} #{} {} | {} | {}",
            state_label(pr.state()),
            pr.id(),
            pr.title(),
            pr.author().name,
            date
        )
    }
}

/// Format a single pull request with detailed multi-line output
pub fn format_pull_request_detail(
    pr: &PullRequest,
    formatting: &DateFormatting,
    theme: ColorThemeKind,
    use_colors: bool,
) -> String {
    let absolute = formatting.is_absolute();
    let pattern = formatting.format.as_deref();
    let mut lines = Vec::new();

    if use_colors {
        lines.push(format!("{} #{}", pr.title().bold(), pr.id()));
        lines.push(format!(
            "  State: {}",
            colored_state(pr, theme, state_label(pr.state()))
        ));
        lines.push(format!("  Author: {}", pr.author().name.yellow()));
        lines.push(format!("  Provider: {}", pr.provider().name.cyan()));
    } else {
        lines.push(format!("{} #{}", pr.title(), pr.id()));
        lines.push(format!("  State: {}", state_label(pr.state())));
        lines.push(format!("  Author: {}", pr.author().name));
        lines.push(format!("  Provider: {}", pr.provider().name));
    }

    let updated = if absolute {
        pr.format_updated_date(pattern)
    } else {
        pr.format_updated_date_from_now()
    };
    lines.push(format!("  Updated: {}", updated));

    if pr.closed_date().is_some() {
        let closed = if absolute {
            pr.format_closed_date(pattern)
        } else {
            pr.format_closed_date_from_now()
        };
        lines.push(format!("  Closed: {}", closed));
    }

    if pr.merged_date().is_some() {
        let merged = if absolute {
            pr.format_merged_date(pattern)
        } else {
            pr.format_merged_date_from_now()
        };
        lines.push(format!("  Merged: {}", merged));
    }

    if use_colors {
        lines.push(format!("  URL: {}", pr.url().underline()));
    } else {
        lines.push(format!("  URL: {}", pr.url()));
    }

    lines.join("\n")
}

/// Format pull requests as markdown tooltip lines, one per pull request
pub fn format_pull_request_markdown(prs: &[PullRequest], theme: ColorThemeKind) -> String {
    prs.iter()
        .map(|pr| {
            format!(
                "{} [{}]({}) by {}",
                PullRequest::get_markdown_icon(pr, theme),
                pr.title(),
                pr.url(),
                pr.author().name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
