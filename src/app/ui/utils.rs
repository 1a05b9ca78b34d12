#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use unicode_width::UnicodeWidthStr;

pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

pub fn notice_area(area: Rect, percent_width: u16) -> Rect {
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_width)]).flex(Flex::End);
    let [area] = horizontal.areas(area);
    area
}

/// Breaks `text` into lines no wider than `max_width` display cells. Words
/// longer than a line are kept whole on a line of their own.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = vec![];
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.width() + 1 + word.width() > max_width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
