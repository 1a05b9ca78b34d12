use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
};
use ratatui_macros::span;

pub struct KeyBinding {
    key: &'static str,
    description: &'static str,
}

pub const KEY_BINDINGS: &[KeyBinding] = &[
    KeyBinding {
        key: "Enter",
        description: "Add task",
    },
    KeyBinding {
        key: "Ctrl+R",
        description: "Refresh",
    },
    KeyBinding {
        key: "Ctrl+D",
        description: "Complete",
    },
    KeyBinding {
        key: "Del",
        description: "Delete",
    },
    KeyBinding {
        key: "Tab",
        description: "Focus",
    },
    KeyBinding {
        key: "Ctrl+Q",
        description: "Quit",
    },
];

pub fn build_line<'a>() -> Line<'a> {
    let mut spans: Vec<Span> = KEY_BINDINGS
        .iter()
        .flat_map(|b| {
            vec![
                span!(Style::default().fg(Color::LightGreen).add_modifier(Modifier::BOLD); b.key),
                " ".into(),
                span!(Style::default().fg(Color::White); b.description),
                " | ".into(),
            ]
        })
        .collect();
    spans.pop(); // remove the last " | "

    Line::from(spans).light_green()
}

pub fn render(f: &mut Frame, area: Rect) {
    f.render_widget(build_line(), area);
}
