#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use crate::{config::constants::FRAME_DURATION, models::Event};
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyCode, KeyEventKind, MouseEventKind};
use futures::{FutureExt, StreamExt};
use tokio::time;
use tui_textarea::{Input, Key};

pub struct EventService {
    crossterm_events: EventStream,
}

impl EventService {
    pub fn new() -> EventService {
        EventService {
            crossterm_events: EventStream::new(),
        }
    }

    pub async fn next(&mut self) -> Event {
        loop {
            let e = tokio::select! {
                event = self.crossterm_events.next().fuse() => match event {
                    Some(Ok(input)) => handle_crossterm(input),
                    Some(Err(err)) => {
                        log::warn!("Failed to read terminal event: {}", err);
                        None
                    }
                    None => None
                },
                _ = time::sleep(FRAME_DURATION) => Some(Event::UiTick)
            };

            if let Some(event) = e {
                return event;
            }
        }
    }
}

impl Default for EventService {
    fn default() -> Self {
        Self::new()
    }
}

fn handle_crossterm(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(Event::UiScrollUp),
            MouseEventKind::ScrollDown => Some(Event::UiScrollDown),
            _ => None,
        },
        CrosstermEvent::Key(key_event) => {
            if key_event.kind != KeyEventKind::Press {
                return None;
            }

            if key_event.code == KeyCode::BackTab {
                return Some(Event::KeyboardBackTab);
            }

            let input: Input = key_event.into();

            // Map ctrl events
            if input.ctrl {
                match input.key {
                    Key::Char('q') => return Some(Event::Quit),
                    Key::Char('c') => return Some(Event::KeyboardCtrlC),
                    Key::Char('d') => return Some(Event::KeyboardCtrlD),
                    Key::Char('r') => return Some(Event::KeyboardCtrlR),
                    _ => return None,
                }
            }

            match input.key {
                Key::Esc => Some(Event::KeyboardEsc),
                Key::Enter => Some(Event::KeyboardEnter),
                Key::Tab => Some(Event::KeyboardTab),
                Key::F(5) => Some(Event::KeyboardF5),
                Key::Up => Some(Event::UiScrollUp),
                Key::Down => Some(Event::UiScrollDown),
                _ => Some(Event::KeyboardCharInput(input)),
            }
        }
        _ => None,
    }
}
