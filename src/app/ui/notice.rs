use std::time::Duration;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::{config::constants::NOTICE_DURATION, models::NoticeMessage};

use super::utils;

struct MessageWrapper {
    value: NoticeMessage,
    created_at: chrono::DateTime<chrono::Utc>,
}

/// Toast messages stacked in the top right corner. Each one disappears
/// after its own duration or the default display duration.
pub struct Notice {
    notices: Vec<MessageWrapper>,
    display_duration: Duration,
}

impl Notice {
    pub fn add_message(&mut self, msg: NoticeMessage) {
        self.notices.push(MessageWrapper {
            value: msg,
            created_at: chrono::Utc::now(),
        });
    }

    pub fn info(&mut self, msg: impl Into<String>) {
        self.add_message(NoticeMessage::info(msg))
    }

    pub fn messages(&self) -> impl Iterator<Item = &NoticeMessage> {
        self.notices.iter().map(|n| &n.value)
    }

    fn sync(&mut self) {
        let now = chrono::Utc::now();
        let default_duration = self.display_duration;
        self.notices.retain(|msg| {
            let elapsed = now.signed_duration_since(msg.created_at);
            elapsed.num_milliseconds()
                < msg.value.duration().unwrap_or(default_duration).as_millis() as i64
        });
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        self.sync();
        if self.notices.is_empty() || area.width < 6 || area.height < 3 {
            return;
        }

        let max_width = area.width as usize - 2;
        let max_height = area.height as usize;

        let mut items = vec![];
        let mut current_height = 0;
        for item in &self.notices {
            let lines = build_bubble(
                item.value.message(),
                max_width,
                item.value.kind().border_color(),
            );

            current_height += lines.len();
            if current_height > max_height {
                break;
            }
            items.push(ListItem::new(lines));
        }

        f.render_widget(List::new(items), area);
    }
}

impl Default for Notice {
    fn default() -> Self {
        Self {
            notices: vec![],
            display_duration: NOTICE_DURATION,
        }
    }
}

fn build_bubble<'a>(message: &str, max_width: usize, border_color: Color) -> Vec<Line<'a>> {
    let style = Style::default().fg(border_color);
    let inner_width = max_width.saturating_sub(2);

    let mut lines = vec![Line::from(Span::styled(
        format!("╭{}╮", "─".repeat(max_width)),
        style,
    ))];
    for line in utils::wrap_text(message, inner_width) {
        let fill = " ".repeat(inner_width.saturating_sub(line.width()));
        lines.push(Line::from(Span::styled(format!("│ {line}{fill} │"), style)));
    }
    lines.push(Line::from(Span::styled(
        format!("╰{}╯", "─".repeat(max_width)),
        style,
    )));
    lines
}
