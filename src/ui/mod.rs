mod cards;
mod help;
mod home;
mod info;

use crate::app::App;
use crate::page::Page;
use ratatui::Frame;

/// Top-level render dispatch.
pub fn render(app: &App, frame: &mut Frame) {
    match app.page {
        Page::Home => home::render(app, frame),
        Page::About | Page::Contact => info::render(app, frame),
    }

    // Render help overlay on top if active
    if app.show_help {
        help::render(frame);
    }
}
