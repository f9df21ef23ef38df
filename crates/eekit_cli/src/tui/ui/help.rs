use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Row, Table};

use super::utils::centered_rect;

// (tab, key, action); a blank tab continues the previous group
const BINDINGS: &[(&str, &str, &str)] = &[
    ("all", "Tab / S-Tab", "next/previous calculator"),
    ("", "?", "toggle this help"),
    ("", "Esc", "close help"),
    ("", "q / Ctrl-c", "quit"),
    ("decoder", "Up / Down", "select band"),
    ("", "Left / Right", "previous/next color for the band"),
    ("network", "Up / Down", "select resistor"),
    ("", "0-9 . e - +", "type a value in ohms"),
    ("", "Backspace", "delete last character"),
    ("", "a", "add resistor"),
    ("", "d / Del", "remove resistor"),
    ("", "m", "toggle series/parallel"),
    ("rc", "Up / Down", "select field"),
    ("", "0-9 . e - +", "type a value"),
    ("", "Backspace", "delete last character"),
];

fn binding_rows() -> impl Iterator<Item = Row<'static>> {
    let group = Style::default().add_modifier(Modifier::BOLD);
    let key = Style::default().fg(Color::Yellow);
    BINDINGS.iter().map(move |&(tab, keys, action)| {
        let mut row = Row::new([
            Cell::from(tab).style(group),
            Cell::from(keys).style(key),
            Cell::from(action),
        ]);
        if !tab.is_empty() {
            row = row.top_margin(1);
        }
        row
    })
}

pub(super) fn draw_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 80, area);
    let table = Table::new(
        binding_rows(),
        [
            Constraint::Length(9),
            Constraint::Length(14),
            Constraint::Min(0),
        ],
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("keys (Esc to close)"),
    );
    f.render_widget(Clear, popup);
    f.render_widget(table, popup);
}
