use std::time::Duration;

use ratatui::style::Color;

#[macro_export]
macro_rules! error_notice {
    ($msg:expr) => {
        $crate::models::NoticeMessage::error($msg)
    };
    ($msg:expr, $duration:expr) => {
        $crate::models::NoticeMessage::error($msg).with_duration($duration)
    };
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Info,
    Error,
}

/// A transient message shown in the corner of the screen.
#[derive(Debug, Clone)]
pub struct NoticeMessage {
    message: String,
    kind: NoticeKind,
    duration: Option<Duration>,
}

impl NoticeMessage {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Info,
            duration: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
            duration: None,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> NoticeKind {
        self.kind
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }
}

impl NoticeKind {
    pub fn border_color(&self) -> Color {
        match self {
            NoticeKind::Info => Color::Rgb(30, 136, 229),
            NoticeKind::Error => Color::Rgb(211, 47, 47),
        }
    }
}
