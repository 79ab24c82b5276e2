//! Color theme kind and themed icon descriptors.

use serde::Serialize;

/// Luma above which the terminal background counts as light
const LIGHT_LUMA_THRESHOLD: f32 = 0.6;

/// Whether the active theme has a light or dark background.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ColorThemeKind {
    Light,
    #[default]
    Dark,
}

impl ColorThemeKind {
    /// Detect the kind from the terminal background, falling back to dark
    pub fn detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) => Self::from_luma(luma),
            Err(_) => Self::Dark,
        }
    }

    pub fn from_luma(luma: f32) -> Self {
        if luma > LIGHT_LUMA_THRESHOLD {
            Self::Light
        } else {
            Self::Dark
        }
    }
}

/// Semantic color token resolved against the active theme at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ThemeColor(pub &'static str);

impl ThemeColor {
    pub const OPEN_PULL_REQUEST: ThemeColor = ThemeColor("refview.openPullRequestIconColor");
    pub const CLOSED_PULL_REQUEST: ThemeColor = ThemeColor("refview.closedPullRequestIconColor");
    pub const MERGED_PULL_REQUEST: ThemeColor = ThemeColor("refview.mergedPullRequestIconColor");

    pub fn id(&self) -> &'static str {
        self.0
    }

    /// Hex color for this token, or None for tokens without a palette entry
    pub fn hex(&self, kind: ColorThemeKind) -> Option<&'static str> {
        let (dark, light) = match *self {
            Self::OPEN_PULL_REQUEST => ("#3fb950", "#1a7f37"),
            Self::CLOSED_PULL_REQUEST => ("#f85149", "#cf222e"),
            Self::MERGED_PULL_REQUEST => ("#a371f7", "#8250df"),
            _ => return None,
        };
        Some(match kind {
            ColorThemeKind::Dark => dark,
            ColorThemeKind::Light => light,
        })
    }

    /// RGB triple for this token
    pub fn rgb(&self, kind: ColorThemeKind) -> Option<(u8, u8, u8)> {
        let hex = self.hex(kind)?.strip_prefix('#')?;
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
        Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// Icon glyph id plus an optional semantic color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ThemeIcon {
    pub id: &'static str,
    pub color: Option<ThemeColor>,
}

impl ThemeIcon {
    pub fn new(id: &'static str) -> Self {
        Self { id, color: None }
    }

    pub fn with_color(id: &'static str, color: ThemeColor) -> Self {
        Self {
            id,
            color: Some(color),
        }
    }

    /// Codicon reference in `$(name)` form
    pub fn codicon(&self) -> String {
        format!("$({})", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_luma() {
        assert_eq!(ColorThemeKind::from_luma(0.9), ColorThemeKind::Light);
        assert_eq!(ColorThemeKind::from_luma(0.1), ColorThemeKind::Dark);
        assert_eq!(ColorThemeKind::from_luma(0.6), ColorThemeKind::Dark);
    }

    #[test]
    fn test_hex_per_kind() {
        assert_eq!(ThemeColor::OPEN_PULL_REQUEST.hex(ColorThemeKind::Dark), Some("#3fb950"));
        assert_eq!(ThemeColor::OPEN_PULL_REQUEST.hex(ColorThemeKind::Light), Some("#1a7f37"));
        assert_eq!(ThemeColor::MERGED_PULL_REQUEST.hex(ColorThemeKind::Light), Some("#8250df"));
    }

    #[test]
    fn test_unknown_token_has_no_color() {
        assert_eq!(ThemeColor("custom.token").hex(ColorThemeKind::Dark), None);
        assert_eq!(ThemeColor("custom.token").rgb(ColorThemeKind::Dark), None);
    }

    #[test]
    fn test_rgb() {
        assert_eq!(
            ThemeColor::CLOSED_PULL_REQUEST.rgb(ColorThemeKind::Dark),
            Some((0xf8, 0x51, 0x49))
        );
    }

    #[test]
    fn test_codicon() {
        assert_eq!(ThemeIcon::new("git-merge").codicon(), "$(git-merge)");
    }
}
