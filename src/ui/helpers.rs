//! Shared rendering utilities.
//!
//! Cursor positioning, fuzzy-match highlighting and small text helpers used by
//! several components. Ranges and widths are in characters, not bytes.

use crate::ui::theme::Theme;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_DAY: i64 = 86400;

/// Moves the cursor to a 1-indexed `row`/`col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`, used as its display width.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// First `max` characters of `text`.
#[must_use]
pub fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Prints `text` with the character ranges in `ranges` highlighted.
///
/// Highlighting is skipped on the selected row so the selection colors win.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut cursor = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < cursor || start >= end {
            continue;
        }

        print!("{}", chars[cursor..start].iter().collect::<String>());
        print!(
            "{}{}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg)
        );
        print!("{}", chars[start..end].iter().collect::<String>());
        print!("{}{}", Theme::reset(), Theme::fg(&theme.colors.text_normal));

        cursor = end;
    }

    print!("{}", chars[cursor..].iter().collect::<String>());
}

/// Human-readable age of `then` relative to `now` (both Unix seconds).
///
/// - under a minute: "just now"
/// - under an hour: "5m ago"
/// - under a day: "3h ago"
/// - otherwise: "2d ago"
#[must_use]
pub fn time_ago(then: i64, now: i64) -> String {
    let diff = now.saturating_sub(then).max(0);

    if diff < SECONDS_PER_MINUTE {
        "just now".to_string()
    } else if diff < SECONDS_PER_HOUR {
        format!("{}m ago", diff / SECONDS_PER_MINUTE)
    } else if diff < SECONDS_PER_DAY {
        format!("{}h ago", diff / SECONDS_PER_HOUR)
    } else {
        format!("{}d ago", diff / SECONDS_PER_DAY)
    }
}
