//! Title bar.

use crate::ui::helpers::{clip, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the centered title, followed by the dimmed subtitle when present.
///
/// Returns the next free row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let subtitle = header
        .subtitle
        .as_deref()
        .map(|s| format!(" {s}"))
        .unwrap_or_default();

    let title = clip(&header.title, cols);
    let subtitle = clip(&subtitle, cols.saturating_sub(display_width(&title)));
    let used = display_width(&title) + display_width(&subtitle);
    let padding = cols.saturating_sub(used) / 2;

    position_cursor(row, 1);
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", " ".repeat(padding));

    print!("{}{}{title}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!("{}", Theme::reset());

    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}{subtitle}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(cols.saturating_sub(padding + used)));
    print!("{}", Theme::reset());

    row + 1
}
