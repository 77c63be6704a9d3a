use crate::app::App;
use crate::page::Page;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Static pages (about, contact): banner plus a short body, no search UI.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Layout: header(3) + body(min) + status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    // ── Header ──
    let mut header_lines = vec![Line::from(Span::styled(
        format!(" Travel Recommendations   [{}]", app.page.label()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(ref url) = app.banner_url {
        header_lines.push(Line::from(vec![
            Span::styled(" Background: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                url.as_str(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }
    let header = Paragraph::new(header_lines).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, chunks[0]);

    // ── Body ──
    let body_lines: Vec<Line> = match app.page {
        Page::About => vec![
            Line::from(""),
            Line::from("  We help travelers discover cities, temples, and beaches"),
            Line::from("  around the world, one recommendation at a time."),
            Line::from(""),
            Line::from("  Open the home page to search the catalogue."),
        ],
        Page::Contact => vec![
            Line::from(""),
            Line::from("  Questions or suggestions? Reach the team at:"),
            Line::from(""),
            Line::from(Span::styled(
                "    hello@travelrecommendations.example",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            )),
        ],
        Page::Home => Vec::new(),
    };
    let body = Paragraph::new(body_lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", app.page.label())),
    );
    frame.render_widget(body, chunks[1]);

    // ── Status bar ──
    let status_line = Line::from(vec![
        Span::styled(
            " ?",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Help  "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Quit"),
    ]);
    frame.render_widget(Paragraph::new(status_line), chunks[2]);
}
