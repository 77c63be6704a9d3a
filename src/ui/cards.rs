use crate::search::Entry;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Height of one card including its border.
const CARD_HEIGHT: u16 = 5;

/// Render the results panel: one bordered card per entry, top to bottom.
/// The panel is redrawn from scratch every frame, so replacing the entry
/// list fully replaces what is on screen.
pub fn render(entries: &[Entry], area: Rect, frame: &mut Frame) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Results ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if entries.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = entries
        .iter()
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (entry, chunk) in entries.iter().zip(chunks.iter()) {
        render_card(entry, *chunk, frame);
    }
}

fn render_card(entry: &Entry, area: Rect, frame: &mut Frame) {
    if area.height == 0 {
        return;
    }

    let title = if entry.tag.is_empty() {
        format!(" {} ", entry.name)
    } else {
        format!(" {} [{}] ", entry.name, entry.tag)
    };

    // Image line, description, then the static Visit control. A missing
    // image URL renders as an empty line, never an error.
    let image_line = match entry.image_url {
        Some(ref url) => Line::from(vec![
            Span::styled("Image: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                url.as_str(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        None => Line::from(""),
    };

    let lines = vec![
        image_line,
        Line::from(entry.description.as_str()),
        Line::from(Span::styled(
            "[ Visit ]",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let card = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    frame.render_widget(card, area);
}
