use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Padding},
};
use tui_textarea::{Input, TextArea};

/// A single-line text input with a titled border that lights up when focused.
pub struct InputField<'a> {
    focused: bool,
    input: TextArea<'a>,

    title: String,
    placeholder: String,
}

impl<'a> InputField<'a> {
    pub fn new(title: impl Into<String>) -> InputField<'a> {
        let mut field = InputField {
            focused: false,
            input: TextArea::default(),
            title: title.into(),
            placeholder: String::new(),
        };
        field.input = field.build_input();
        field
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> InputField<'a> {
        self.placeholder = placeholder.into();
        self.input = self.build_input();
        self
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.input.set_block(self.build_block());
        self.input.set_cursor_style(cursor_style(focused));
    }

    pub fn text(&self) -> String {
        self.input.lines().join(" ")
    }

    pub fn clear(&mut self) {
        self.input = self.build_input();
    }

    pub fn input(&mut self, input: Input) {
        self.input.input(input);
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        f.render_widget(&self.input, area);
    }

    fn build_input(&self) -> TextArea<'a> {
        let mut text_area = TextArea::default();
        text_area.set_block(self.build_block());
        text_area.set_placeholder_text(self.placeholder.clone());
        text_area.set_cursor_line_style(Style::default());
        text_area.set_cursor_style(cursor_style(self.focused));
        text_area
    }

    fn build_block(&self) -> Block<'a> {
        let border_color = if self.focused {
            Color::LightMagenta
        } else {
            Color::DarkGray
        };

        Block::default()
            .title(Line::from(format!(" {} ", self.title)).bold())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title_alignment(Alignment::Left)
            .padding(Padding::symmetric(1, 0))
    }
}

fn cursor_style(focused: bool) -> Style {
    if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    }
}
