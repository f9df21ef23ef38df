use eekit_core::estimate_rc;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::Span as UiSpan;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};

use crate::tui::app::{RC_FIELDS, RcState};

use super::utils::{field_text, result_style, selected_style, split_v};

fn result_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        UiSpan::raw(format!("{label:<34}")),
        UiSpan::styled(value, result_style()),
    ])
}

pub(super) fn draw_rc(f: &mut Frame, area: Rect, state: &RcState) {
    let [inputs, results] = split_v(area, 7);

    let rows = RC_FIELDS.iter().enumerate().map(|(idx, field)| {
        let focused = idx == state.selected;
        let mut row = Row::new(vec![
            Cell::from(field.label()),
            Cell::from(field_text(&state.fields[idx], focused)),
        ]);
        if focused {
            row = row.style(selected_style());
        }
        row
    });
    let table = Table::new(rows, [Constraint::Length(22), Constraint::Min(0)])
        .header(
            Row::new(vec![Cell::from("parameter"), Cell::from("value")])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("input parameters"),
        );
    f.render_widget(table, inputs);

    let timing = estimate_rc(&state.parameters());
    let lines = vec![
        result_line("Time Constant (τ):", timing.time_constant_label()),
        result_line("Charge Time to Target Voltage:", timing.charge_label()),
        result_line("Discharge Time to Target Voltage:", timing.discharge_label()),
        Line::from(""),
        Line::from(UiSpan::styled(
            "Charge time assumes charging from 0 V towards the initial voltage. \
             Discharge time assumes discharging from the initial voltage towards 0 V. \
             The target voltage must be below the initial voltage.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let wrap = Wrap { trim: false };
    f.render_widget(
        Paragraph::new(Text::from(lines))
            .wrap(wrap)
            .block(Block::default().borders(Borders::ALL).title("results")),
        results,
    );
}
