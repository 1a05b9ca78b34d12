#[cfg(test)]
#[path = "app_test.rs"]
mod tests;

use std::io;

use crate::config::constants::{
    EMPTY_TITLE_WARNING, ERROR_NOTICE_DURATION, NO_SELECTION_WARNING,
};
use crate::error_notice;
use crate::models::{Action, Event, NewTask, TaskStatus};
use crate::storage::ArcStorage;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use eyre::{Context, Result};
use ratatui::crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::{Backend, CrosstermBackend},
    style::Stylize,
    text::Line,
    widgets::{Paragraph, Wrap},
};
use tui_textarea::Key;

use crate::app::{
    app_state::{AppState, Focus},
    ui::{Notice, Warning, action_bar, task_table, utils},
};

use super::services::EventService;

const MIN_WIDTH: u16 = 60;
const MIN_HEIGHT: u16 = 14;

pub struct App<'a> {
    storage: ArcStorage,

    app_state: AppState<'a>,
    warning: Warning,
    notice: Notice,
}

impl<'a> App<'a> {
    pub fn new(storage: ArcStorage) -> App<'a> {
        App {
            storage,
            app_state: AppState::new(),
            warning: Warning::default(),
            notice: Notice::default(),
        }
    }

    pub async fn run(&mut self, events: &mut EventService) -> Result<()> {
        let stdout = io::stdout();
        let mut stdout = stdout.lock();

        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

        let term_backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(term_backend)?;
        let result = self.start_loop(&mut terminal, events).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;

        terminal.show_cursor()?;
        result
    }

    async fn start_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut EventService,
    ) -> Result<()> {
        loop {
            self.render(terminal)?;
            let event = events.next().await;
            if self.handle_event(event).await {
                return Ok(());
            }
        }
    }

    /// Repopulates the table from storage.
    pub async fn refresh(&mut self) -> Result<()> {
        let tasks = self
            .storage
            .list_tasks()
            .await
            .wrap_err("loading tasks")?;
        log::debug!("Loaded {} tasks", tasks.len());
        self.app_state.set_tasks(tasks);
        Ok(())
    }

    /// Runs one action against storage and reloads the table. Nothing is
    /// reloaded when the storage call fails.
    pub async fn dispatch(&mut self, action: Action) -> Result<()> {
        log::debug!("Dispatching {:?}", action);
        match action {
            Action::AddTask(task) => {
                let id = self.storage.create_task(task).await?;
                log::info!("Added task {}", id);
            }
            Action::Refresh => {}
            Action::CompleteTask(id) => {
                self.storage
                    .update_task_status(id, TaskStatus::Completed)
                    .await?;
                log::info!("Completed task {}", id);
            }
            Action::DeleteTask(id) => {
                self.storage.delete_task(id).await?;
                log::info!("Deleted task {}", id);
            }
        }
        self.refresh().await
    }

    /// Handles one event to completion. Returns true when the app should
    /// quit.
    pub async fn handle_event(&mut self, event: Event) -> bool {
        if matches!(event, Event::Quit | Event::KeyboardCtrlC) {
            return true;
        }

        if self.warning.showing() {
            self.warning.handle_key_event(&event);
            return false;
        }

        match event {
            Event::KeyboardTab => self.app_state.focus_next(),
            Event::KeyboardBackTab => self.app_state.focus_prev(),

            Event::KeyboardCtrlR | Event::KeyboardF5 => self.handle_refresh().await,
            Event::KeyboardCtrlD => self.handle_complete().await,

            Event::KeyboardEnter if self.app_state.focus().is_input() => self.handle_add().await,

            Event::KeyboardEsc => {
                if !self.app_state.focus().is_input() {
                    return true;
                }
                self.app_state.set_focus(Focus::Table);
            }

            Event::UiScrollUp => self.app_state.select_prev(),
            Event::UiScrollDown => self.app_state.select_next(),

            Event::KeyboardCharInput(input) => {
                if self.app_state.focus().is_input() {
                    self.app_state.input(input);
                    return false;
                }

                match input.key {
                    Key::Char('j') => self.app_state.select_next(),
                    Key::Char('k') => self.app_state.select_prev(),
                    Key::Char('c') => self.handle_complete().await,
                    Key::Char('d') | Key::Delete => self.handle_delete().await,
                    Key::Char('r') => self.handle_refresh().await,
                    _ => {}
                }
            }

            _ => {}
        }
        false
    }

    async fn handle_add(&mut self) {
        let title = self.app_state.title.text();
        let description = self.app_state.description.text();

        let task = match NewTask::new(&title, &description) {
            Ok(task) => task,
            Err(err) => {
                log::debug!("Rejected new task: {}", err);
                self.warning.open(EMPTY_TITLE_WARNING);
                return;
            }
        };

        if self.run_action(Action::AddTask(task)).await {
            self.app_state.clear_inputs();
        }
    }

    async fn handle_refresh(&mut self) {
        self.run_action(Action::Refresh).await;
    }

    async fn handle_complete(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.run_action(Action::CompleteTask(id)).await;
        }
    }

    async fn handle_delete(&mut self) {
        if let Some(id) = self.selected_task_id() {
            if self.run_action(Action::DeleteTask(id)).await {
                self.notice.info(format!("Deleted task {}", id));
            }
        }
    }

    /// The id of the selected row as currently displayed. Opens the warning
    /// when nothing is selected.
    fn selected_task_id(&mut self) -> Option<i64> {
        let id = self.app_state.selected_task().map(|t| t.id());
        if id.is_none() {
            self.warning.open(NO_SELECTION_WARNING);
        }
        id
    }

    async fn run_action(&mut self, action: Action) -> bool {
        match self.dispatch(action).await {
            Ok(_) => true,
            Err(err) => {
                log::error!("Action failed: {:?}", err);
                let message = format!("Error: {}", err);
                self.notice
                    .add_message(error_notice!(message, ERROR_NOTICE_DURATION));
                false
            }
        }
    }

    fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|f| {
            let area = f.area();
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                f.render_widget(
                    Paragraph::new(format!(
                        "I'm too small, make me bigger! I need at least {}x{} cells (current: {}x{})",
                        MIN_WIDTH, MIN_HEIGHT, area.width, area.height
                    ))
                    .wrap(Wrap { trim: true })
                    .alignment(Alignment::Left),
                    area,
                );
                return;
            }

            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(1),
                    Constraint::Min(4),
                    Constraint::Length(1),
                ])
                .split(area);

            self.app_state.title.render(f, layout[0]);
            self.app_state.description.render(f, layout[1]);
            action_bar::render(f, layout[2]);

            let focused = self.app_state.focus() == Focus::Table;
            task_table::render(
                f,
                layout[3],
                &self.app_state.tasks,
                &mut self.app_state.table_state,
                focused,
            );

            let footer = Line::from(format!(
                " {} tasks, {} completed",
                self.app_state.tasks.len(),
                self.app_state.completed_count()
            ))
            .gray();
            f.render_widget(footer, layout[4]);

            self.warning.render(f, area);
            self.notice.render(f, utils::notice_area(area, 30));
        })?;
        Ok(())
    }
}
