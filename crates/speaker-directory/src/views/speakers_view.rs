//! Speaker table view
//!
//! Renders the day filters, the speaker table and a status line. All text
//! and colors come from `SpeakerTableViewModel`.

use crate::view_models::SpeakerTableViewModel;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

pub fn render(vm: &SpeakerTableViewModel, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Filter bar
            Constraint::Min(0),    // Table
            Constraint::Length(1), // Status line
        ])
        .split(area);

    let filters = Paragraph::new(vm.filter_text.clone()).style(Style::default().fg(Color::Cyan));
    f.render_widget(filters, chunks[0]);

    if vm.rows.is_empty() {
        render_empty(vm, chunks[1], f);
    } else {
        render_table(vm, chunks[1], f);
    }

    let status = Paragraph::new(vm.status_text.clone())
        .style(Style::default().fg(vm.status_color))
        .alignment(Alignment::Left);
    f.render_widget(status, chunks[2]);
}

fn block(vm: &SpeakerTableViewModel) -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Blue))
        .title(vm.title.clone())
}

fn render_table(vm: &SpeakerTableViewModel, area: Rect, f: &mut Frame) {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(
        ["", "Name", "Days", "Bio"]
            .into_iter()
            .map(|h| Cell::from(h).style(header_style)),
    )
    .height(1);

    let rows: Vec<Row> = vm
        .rows
        .iter()
        .map(|row_vm| {
            Row::new(vec![
                Cell::from(row_vm.favorite.clone()).style(Style::default().fg(Color::Red)),
                Cell::from(row_vm.name.clone()),
                Cell::from(row_vm.days.clone()),
                Cell::from(row_vm.bio.clone()),
            ])
            .style(Style::default().fg(row_vm.fg_color).bg(row_vm.bg_color))
            .height(1)
        })
        .collect();

    let widths = [
        Constraint::Length(3),      // Heart (+ pending marker)
        Constraint::Percentage(30), // Name
        Constraint::Length(8),      // "Sat Sun"
        Constraint::Min(10),        // Bio
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block(vm))
        .highlight_symbol("> ");

    let mut table_state = TableState::default();
    table_state.select(Some(vm.selected_index));

    f.render_stateful_widget(table, area, &mut table_state);
}

/// Nothing to list: loading, errored, or everything filtered out
fn render_empty(vm: &SpeakerTableViewModel, area: Rect, f: &mut Frame) {
    let paragraph = Paragraph::new(Line::from(vm.empty_message.clone()))
        .style(Style::default().fg(vm.status_color))
        .block(block(vm))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}
