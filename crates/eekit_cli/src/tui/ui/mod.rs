use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Span as UiSpan;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

use crate::tui::app::{App, Tab};

mod decoder;
mod help;
mod network;
mod rc;
mod utils;

use utils::selected_style;

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_tabs(f, chunks[0], app);
    match app.tab {
        Tab::Decoder => decoder::draw_decoder(f, chunks[1], &app.decoder),
        Tab::Network => network::draw_network(f, chunks[1], &app.network),
        Tab::Rc => rc::draw_rc(f, chunks[1], &app.rc),
    }
    draw_status(f, chunks[2], app);

    if app.show_help {
        help::draw_help(f, f.area());
    }
}

fn draw_tabs(f: &mut Frame, area: Rect, app: &App) {
    let titles = vec![
        Line::from(vec![
            UiSpan::styled("▮ ", Style::default().fg(Color::Yellow)),
            UiSpan::raw(Tab::Decoder.title()),
        ]),
        Line::from(vec![
            UiSpan::styled("Ω ", Style::default().fg(Color::Cyan)),
            UiSpan::raw(Tab::Network.title()),
        ]),
        Line::from(vec![
            UiSpan::styled("τ ", Style::default().fg(Color::Magenta)),
            UiSpan::raw(Tab::Rc.title()),
        ]),
    ];

    let tabs = Tabs::new(titles)
        .select(app.tab as usize)
        .highlight_style(selected_style())
        .block(Block::default().borders(Borders::ALL).title("EE toolkit"));
    f.render_widget(tabs, area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status {
        Some(msg) => Line::from(UiSpan::styled(
            format!(" {msg}"),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(UiSpan::styled(
            " Tab: next tool  ?: help  q: quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}
