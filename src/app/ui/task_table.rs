#[cfg(test)]
#[path = "task_table_test.rs"]
mod tests;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Cell, Padding, Row, Table, TableState},
};

use crate::models::{Task, TaskStatus};

const HEADERS: [&str; 4] = ["ID", "Title", "Description", "Status"];

pub fn render(f: &mut Frame, area: Rect, tasks: &[Task], state: &mut TableState, focused: bool) {
    let border_color = if focused {
        Color::LightBlue
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .padding(Padding::symmetric(1, 0))
        .title(Line::from(" Tasks ").bold())
        .title_alignment(Alignment::Left);

    let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h)))
        .style(Style::default().add_modifier(Modifier::BOLD).light_green())
        .bottom_margin(1);

    let selected_row_style = Style::default()
        .add_modifier(Modifier::REVERSED)
        .add_modifier(Modifier::BOLD);

    let table = Table::new(
        build_rows(tasks),
        [
            Constraint::Length(6),
            Constraint::Percentage(35),
            Constraint::Fill(1),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(selected_row_style);

    f.render_stateful_widget(table, area, state);
}

pub(crate) fn row_values(task: &Task) -> [String; 4] {
    [
        task.id().to_string(),
        task.title().to_string(),
        task.description().to_string(),
        task.status().to_string(),
    ]
}

fn build_rows<'a>(tasks: &[Task]) -> Vec<Row<'a>> {
    tasks
        .iter()
        .map(|task| {
            let style = status_style(task.status());
            Row::new(row_values(task)).style(style)
        })
        .collect()
}

fn status_style(status: TaskStatus) -> Style {
    match status {
        TaskStatus::Active => Style::default(),
        TaskStatus::Completed => Style::default().fg(Color::Green).add_modifier(Modifier::DIM),
    }
}
