use eekit_core::{BandRole, ColorBand};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::prelude::Span as UiSpan;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::tui::app::DecoderState;

use super::utils::{result_style, selected_style, split_h};

// Approximate terminal colors for drawing the bands.
fn band_color(band: ColorBand) -> Color {
    match band {
        ColorBand::Black => Color::Black,
        ColorBand::Brown => Color::Rgb(139, 69, 19),
        ColorBand::Red => Color::Red,
        ColorBand::Orange => Color::Rgb(255, 140, 0),
        ColorBand::Yellow => Color::Yellow,
        ColorBand::Green => Color::Green,
        ColorBand::Blue => Color::Blue,
        ColorBand::Violet => Color::Rgb(148, 0, 211),
        ColorBand::Gray => Color::Gray,
        ColorBand::White => Color::White,
        ColorBand::Gold => Color::Rgb(212, 175, 55),
        ColorBand::Silver => Color::Rgb(192, 192, 192),
        ColorBand::None => Color::Rgb(205, 170, 125),
    }
}

fn resistor_line(bands: [ColorBand; 4]) -> Line<'static> {
    let body = Style::default().bg(Color::Rgb(205, 170, 125));
    let lead = Style::default().fg(Color::DarkGray);
    let band = |b: ColorBand| UiSpan::styled("  ", Style::default().bg(band_color(b)));
    Line::from(vec![
        UiSpan::styled("───", lead),
        UiSpan::styled(" ", body),
        band(bands[0]),
        UiSpan::styled(" ", body),
        band(bands[1]),
        UiSpan::styled(" ", body),
        band(bands[2]),
        UiSpan::styled("   ", body),
        band(bands[3]),
        UiSpan::styled(" ", body),
        UiSpan::styled("───", lead),
    ])
}

pub(super) fn draw_decoder(f: &mut Frame, area: Rect, state: &DecoderState) {
    let [left, right] = split_h(area, 50);

    let rows = BandRole::ALL.iter().enumerate().map(|(idx, &role)| {
        let band = state.spec.band(role);
        let value = if idx == state.selected {
            format!("◀ {band} ▶")
        } else {
            band.to_string()
        };
        let swatch = Cell::from("  ").style(Style::default().bg(band_color(band)));
        let mut row = Row::new(vec![Cell::from(role.label()), swatch, Cell::from(value)]);
        if idx == state.selected {
            row = row.style(selected_style());
        }
        row
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(22),
            Constraint::Length(3),
            Constraint::Min(0),
        ],
    )
    .header(
        Row::new(vec![Cell::from("band"), Cell::from(""), Cell::from("color")])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("select band colors"),
    );
    f.render_widget(table, left);

    let reading = state.spec.resolve();
    let mut lines = vec![
        Line::from(""),
        Line::from(UiSpan::styled(reading.resistance_label(), result_style())),
        Line::from(reading.tolerance_label()),
    ];
    if let Err(err) = &reading.resistance {
        lines.push(Line::from(UiSpan::styled(
            err.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    lines.extend([
        Line::from(""),
        resistor_line(reading.bands),
        Line::from(""),
        Line::from(UiSpan::styled(
            "Colors are approximate for visualization.",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    let result = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("calculated value"));
    f.render_widget(result, right);
}
