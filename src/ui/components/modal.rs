//! Dialogs drawn over the list: the add/edit form and the delete prompt.
//!
//! Both are framed boxes centered in the pane. They are painted after the
//! list, so whatever they cover is simply overwritten for this frame.

use crate::app::modes::FormField;
use crate::ui::helpers::{clip, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ConfirmInfo, EditorInfo};

const MAX_DIALOG_WIDTH: usize = 60;
const FIELD_LABEL_WIDTH: usize = 8;
const EDITOR_HINT: &str = "Enter: save  Esc: cancel  Tab: switch field";
const CONFIRM_CHOICES: &str = "[n] Cancel  [y] Delete";

/// Position and size of a dialog, 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogRect {
    pub top: usize,
    pub left: usize,
    pub width: usize,
    pub height: usize,
}

impl DialogRect {
    /// Columns available between the borders, minus one space on each side.
    #[must_use]
    pub const fn inner_width(&self) -> usize {
        self.width.saturating_sub(4)
    }
}

/// Centers a `height`-row box in the pane, at most [`MAX_DIALOG_WIDTH`] wide
/// and always leaving two columns of margin.
#[must_use]
pub fn centered_box(rows: usize, cols: usize, height: usize) -> DialogRect {
    let width = cols.saturating_sub(4).min(MAX_DIALOG_WIDTH).max(4);
    let height = height.min(rows.max(1));

    DialogRect {
        top: rows.saturating_sub(height) / 2 + 1,
        left: cols.saturating_sub(width) / 2 + 1,
        width,
        height,
    }
}

/// Renders the add/edit form.
pub fn render_editor(editor: &EditorInfo, theme: &Theme, rows: usize, cols: usize) {
    let rect = centered_box(rows, cols, 7);
    render_frame(&rect, &editor.title, &theme.colors.modal_border, theme);

    render_field(rect.top + 2, &rect, "Name", &editor.name, editor.focus == FormField::Name, theme);
    render_field(rect.top + 3, &rect, "Email", &editor.email, editor.focus == FormField::Email, theme);

    let hint = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    render_line(rect.top + 5, &rect, EDITOR_HINT, &hint);
}

/// Renders the delete confirmation.
pub fn render_confirm(confirm: &ConfirmInfo, theme: &Theme, rows: usize, cols: usize) {
    let rect = centered_box(rows, cols, 7);
    render_frame(&rect, &confirm.title, &theme.colors.danger_fg, theme);

    render_line(rect.top + 2, &rect, &confirm.message, &Theme::fg(&theme.colors.text_normal));

    let choices = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.danger_fg));
    render_line(rect.top + 4, &rect, CONFIRM_CHOICES, &choices);
}

/// Border with the title set into the top edge, interior cleared.
fn render_frame(rect: &DialogRect, title: &str, color: &str, theme: &Theme) {
    let border = Theme::fg(color);
    let inner = rect.width.saturating_sub(2);
    let title = clip(&format!(" {title} "), inner.saturating_sub(2));
    let title_len = display_width(&title);

    position_cursor(rect.top, rect.left);
    print!("{border}┌─{}{}{title}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!("{}{border}", Theme::reset());
    print!("{}┐", "─".repeat(inner.saturating_sub(title_len + 1)));

    for offset in 1..rect.height.saturating_sub(1) {
        position_cursor(rect.top + offset, rect.left);
        print!("│{}│", " ".repeat(inner));
    }

    position_cursor(rect.top + rect.height.saturating_sub(1), rect.left);
    print!("└{}┘{}", "─".repeat(inner), Theme::reset());
}

/// Writes `text` inside the frame on `row`, clipped to the interior.
fn render_line(row: usize, rect: &DialogRect, text: &str, style: &str) {
    position_cursor(row, rect.left + 2);
    print!("{style}{}{}", clip(text, rect.inner_width()), Theme::reset());
}

/// One labelled input. The focused field gets a marker, its label in the
/// focus color and a block cursor after the text. Long values show their tail.
fn render_field(row: usize, rect: &DialogRect, label: &str, value: &str, focused: bool, theme: &Theme) {
    let value_width = rect.inner_width().saturating_sub(FIELD_LABEL_WIDTH + 2);
    let len = display_width(value);
    let tail: String = value.chars().skip(len.saturating_sub(value_width)).collect();

    position_cursor(row, rect.left + 2);
    if focused {
        print!("{}{}› {label:<FIELD_LABEL_WIDTH$}", Theme::bold(), Theme::fg(&theme.colors.input_focus_fg));
    } else {
        print!("{}  {label:<FIELD_LABEL_WIDTH$}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}{}{tail}", Theme::reset(), Theme::fg(&theme.colors.text_normal));
    if focused {
        print!("{} ", Theme::reverse());
    }
    print!("{}", Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_is_centered_and_capped() {
        let rect = centered_box(24, 120, 7);
        assert_eq!(rect.width, MAX_DIALOG_WIDTH);
        assert_eq!(rect.left, 31);
        assert_eq!(rect.top, 9);
        assert_eq!(rect.height, 7);
    }

    #[test]
    fn dialog_keeps_margin_on_narrow_panes() {
        let rect = centered_box(10, 40, 7);
        assert_eq!(rect.width, 36);
        assert_eq!(rect.left, 3);
        assert_eq!(rect.inner_width(), 32);
    }

    #[test]
    fn dialog_height_fits_tiny_panes() {
        let rect = centered_box(5, 40, 7);
        assert_eq!(rect.height, 5);
        assert_eq!(rect.top, 1);
    }
}
