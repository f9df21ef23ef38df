use eekit_core::{CircuitMode, format_resistance};
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::Span as UiSpan;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::tui::app::NetworkState;

use super::utils::{field_text, result_style, selected_style, split_v, split_v_bottom};

fn mode_line(mode: CircuitMode) -> Line<'static> {
    let span = |m: CircuitMode| {
        let label = format!(" {m} ");
        if m == mode {
            UiSpan::styled(label, selected_style().add_modifier(Modifier::REVERSED))
        } else {
            UiSpan::raw(label)
        }
    };
    Line::from(vec![
        UiSpan::raw("circuit type: "),
        span(CircuitMode::Series),
        UiSpan::raw(" "),
        span(CircuitMode::Parallel),
        UiSpan::styled("   (m to toggle)", Style::default().fg(Color::DarkGray)),
    ])
}

pub(super) fn draw_network(f: &mut Frame, area: Rect, state: &NetworkState) {
    let [mode_area, rest] = split_v(area, 3);
    let [list_area, result_area] = split_v_bottom(rest, 4);

    f.render_widget(
        Paragraph::new(mode_line(state.mode)).block(Block::default().borders(Borders::ALL)),
        mode_area,
    );

    let rows = state.list.entries().iter().enumerate().map(|(idx, entry)| {
        let focused = idx == state.selected;
        let mut row = Row::new(vec![
            Cell::from(format!("R{}", idx + 1)),
            Cell::from(field_text(&entry.raw, focused)),
        ]);
        if focused {
            row = row.style(selected_style());
        }
        row
    });
    let table = Table::new(rows, [Constraint::Length(6), Constraint::Min(0)])
        .header(
            Row::new(vec![Cell::from(""), Cell::from("value (Ω)")])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("resistors (a: add, d: remove)"),
        );
    f.render_widget(table, list_area);

    let ohms = state.list.equivalent(state.mode);
    let result = Line::from(vec![
        UiSpan::raw("Equivalent Resistance: "),
        UiSpan::styled(format_resistance(ohms), result_style()),
    ]);
    f.render_widget(
        Paragraph::new(result).block(Block::default().borders(Borders::ALL)),
        result_area,
    );
}
