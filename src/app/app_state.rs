use ratatui::widgets::TableState;
use tui_textarea::Input;

use crate::{app::ui::InputField, models::Task};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Title,
    Description,
    Table,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Title => Focus::Description,
            Focus::Description => Focus::Table,
            Focus::Table => Focus::Title,
        }
    }

    pub fn prev(self) -> Focus {
        match self {
            Focus::Title => Focus::Table,
            Focus::Description => Focus::Title,
            Focus::Table => Focus::Description,
        }
    }

    pub fn is_input(self) -> bool {
        !matches!(self, Focus::Table)
    }
}

pub(crate) struct AppState<'a> {
    focus: Focus,
    pub title: InputField<'a>,
    pub description: InputField<'a>,

    pub tasks: Vec<Task>,
    pub table_state: TableState,
}

impl<'a> AppState<'a> {
    pub fn new() -> AppState<'a> {
        let mut state = AppState {
            focus: Focus::Title,
            title: InputField::new("Title").with_placeholder("What needs to be done?"),
            description: InputField::new("Description").with_placeholder("Optional details..."),
            tasks: vec![],
            table_state: TableState::default(),
        };
        state.set_focus(Focus::Title);
        state
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.title.set_focused(focus == Focus::Title);
        self.description.set_focused(focus == Focus::Description);
        if focus == Focus::Table && self.table_state.selected().is_none() {
            self.select(Some(0));
        }
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    /// Forwards a key to the focused input field.
    pub fn input(&mut self, input: Input) {
        match self.focus {
            Focus::Title => self.title.input(input),
            Focus::Description => self.description.input(input),
            Focus::Table => {}
        }
    }

    pub fn clear_inputs(&mut self) {
        self.title.clear();
        self.description.clear();
        self.set_focus(Focus::Title);
    }

    /// Replaces the displayed rows. The selection keeps its row index when
    /// possible and is clamped when the table shrank.
    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        let selected = match self.table_state.selected() {
            _ if self.tasks.is_empty() => None,
            Some(i) => Some(i.min(self.tasks.len() - 1)),
            None => None,
        };
        self.table_state.select(selected);
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.table_state
            .selected()
            .and_then(|i| self.tasks.get(i))
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.table_state
            .select(index.filter(|i| *i < self.tasks.len()));
    }

    pub fn select_next(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => (i + 1).min(self.tasks.len() - 1),
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn select_prev(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn completed_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.status().is_completed())
            .count()
    }
}
