//! TUI rendering with ratatui
//!
//! Form on the left, hive and statistics on the right, ranked results below.

use super::app::{App, FieldState, MessageStyle};
use crate::output::formatters::{format_score, hive_label, pangram_flag};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, List, ListItem, Paragraph, Row, Table},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(11), // Form and summary
            Constraint::Min(6),     // Results
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let top_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_form(f, app, top_chunks[0]);
    render_info_panel(f, app, top_chunks[1]);
    render_results(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🐝 SPELLING BEE HELPER")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(header, area);
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let focused = i == app.focus;
            let marker = if focused { "▶ " } else { "  " };
            let value_style = match field.state {
                FieldState::Placeholder => Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
                FieldState::Edited => Style::default().fg(Color::White),
            };
            let label_style = if focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            Line::from(vec![
                Span::styled(marker, label_style),
                Span::styled(format!("{:<14}", field.kind.label()), label_style),
                Span::styled(field.display_text().to_string(), value_style),
            ])
        })
        .collect();

    let form = Paragraph::new(lines).block(
        Block::default()
            .title(" Puzzle ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(form, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(3)])
        .split(area);

    render_summary(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_summary(f: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(result) = &app.result {
        let stats = result.statistics();
        vec![
            Line::from(Span::styled(
                hive_label(result.letters.center(), &app.outer),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(format!(
                "Words: {}   Pangrams: {}",
                stats.total_words, stats.pangrams_count
            )),
            Line::from(format!("Average length: {:.2}", stats.avg_length)),
            Line::from(format!(
                "Total score: {}",
                format_score(stats.total_points, app.integral_scores())
            )),
        ]
    } else {
        vec![Line::from("No search yet")]
    };

    let summary = Paragraph::new(content).block(
        Block::default()
            .title(format!(" Statistics ({}) ", app.scorer.label()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(summary, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Results ")
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));

    let Some(result) = &app.result else {
        f.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let integral = app.integral_scores();
    let rows: Vec<Row> = result
        .results
        .iter()
        .skip(app.scroll)
        .map(|row| {
            let pangram = result.is_pangram(&row.word);
            let style = if pangram {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Row::new(vec![
                Cell::from(row.word.clone()),
                Cell::from(format_score(row.score, integral)),
                Cell::from(pangram_flag(pangram)),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ],
    )
    .header(
        Row::new(vec!["Word", "Score", "Pangram?"]).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    )
    .block(block);

    f.render_widget(table, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let shown = app.result.as_ref().map_or(0, |r| r.len());
    let position = Paragraph::new(format!("Results: {shown} | Row {}", app.scroll + 1))
        .alignment(Alignment::Center);
    f.render_widget(position, chunks[0]);

    let help = Paragraph::new(
        "Enter: Search | Tab/↑↓: Field | PgUp/PgDn: Scroll | ^E: Export | ^S: Shuffle | ^U: Clear | Esc: Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
