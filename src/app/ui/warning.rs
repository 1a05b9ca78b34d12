use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    text::{Line, Text},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};
use ratatui_macros::span;
use tui_textarea::Key;

use crate::models::Event;

use super::utils;

/// Modal dialog with a fixed message. While it is showing it swallows every
/// keyboard event until dismissed.
#[derive(Default)]
pub struct Warning {
    showing: bool,
    message: String,
}

impl Warning {
    pub fn showing(&self) -> bool {
        self.showing
    }

    pub fn message(&self) -> Option<&str> {
        self.showing.then_some(self.message.as_str())
    }

    pub fn open(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.showing = true;
    }

    pub fn close(&mut self) {
        self.showing = false;
    }

    pub fn handle_key_event(&mut self, event: &Event) {
        match event {
            Event::KeyboardEnter | Event::KeyboardEsc => self.close(),
            Event::KeyboardCharInput(input) => {
                if matches!(input.key, Key::Char('q') | Key::Char(' ')) {
                    self.close();
                }
            }
            _ => {}
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        if !self.showing {
            return;
        }

        let width = (area.width / 2).max(30).min(area.width);
        let lines = utils::wrap_text(&self.message, width.saturating_sub(4) as usize);
        let height = (lines.len() as u16 + 2).min(area.height);
        let area = utils::popup_area(area, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .padding(Padding::symmetric(1, 0))
            .title(Line::from(" Warning ").bold())
            .title_bottom(vec![
                span!(" "),
                span!("Enter").green().bold(),
                span!(" to dismiss ").white(),
            ])
            .title_alignment(Alignment::Center)
            .border_style(Style::default().light_yellow());

        let text = Text::from(lines.into_iter().map(Line::from).collect::<Vec<_>>());
        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
    }
}
