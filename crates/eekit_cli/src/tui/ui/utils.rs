use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};

/// A box taking the given percentages of `area`, centered in it.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

/// Fixed-height strip on top, the rest below.
pub(crate) fn split_v(area: Rect, top: u16) -> [Rect; 2] {
    Layout::vertical([Constraint::Length(top), Constraint::Min(0)]).areas(area)
}

/// Fixed-height strip at the bottom, the rest above.
pub(crate) fn split_v_bottom(area: Rect, bottom: u16) -> [Rect; 2] {
    Layout::vertical([Constraint::Min(0), Constraint::Length(bottom)]).areas(area)
}

pub(crate) fn split_h(area: Rect, left_percent: u16) -> [Rect; 2] {
    Layout::horizontal([
        Constraint::Percentage(left_percent),
        Constraint::Percentage(100 - left_percent),
    ])
    .areas(area)
}

pub(crate) fn selected_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn result_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Text of an input field, with a cursor when it has focus.
pub(crate) fn field_text(value: &str, focused: bool) -> String {
    if focused {
        format!("{value}_")
    } else if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        assert_eq!(centered_rect(70, 80, area), Rect::new(15, 5, 70, 40));
    }

    #[test]
    fn test_field_text() {
        assert_eq!(field_text("4.7", true), "4.7_");
        assert_eq!(field_text("", false), "-");
        assert_eq!(field_text("100", false), "100");
    }
}
