use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
};
use strum::IntoEnumIterator;

use crate::{
    app::{
        dashboard::Dashboard,
        table::{ChangeColor, Column},
    },
    models::DayCount,
};

const SLIDER_WIDTH: usize = 40;

impl From<ChangeColor> for Color {
    fn from(color: ChangeColor) -> Self {
        match color {
            ChangeColor::Negative => Color::Red,
            ChangeColor::Positive => Color::Green,
            ChangeColor::Neutral => Color::Reset,
        }
    }
}

pub fn render(
    frame: &mut Frame,
    dashboard: &Dashboard,
    table_state: &mut TableState,
    popup_message: &Option<String>,
    error_popup: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = Paragraph::new(format!(
        "{} Price and Percentage Change",
        dashboard.symbol()
    ))
    .style(Style::default().fg(Color::Cyan))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(title, chunks[0]);

    render_day_slider(frame, dashboard.days(), chunks[1]);
    render_table(frame, dashboard, table_state, chunks[2]);

    let help = Paragraph::new(
        "←/→ days ±1  PgUp/PgDn ±30  Home/End min/max  ↑/↓ select  r refresh  q quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[3]);

    if let Some(message) = popup_message {
        render_popup(frame, "Loading", message, Color::Yellow);
    }

    if let Some(message) = error_popup {
        render_popup(frame, "Error", message, Color::Red);
    }
}

fn render_day_slider(frame: &mut Frame, days: DayCount, area: Rect) {
    let bar = slider_bar(days.get(), DayCount::MIN, DayCount::MAX, SLIDER_WIDTH);
    let line = Line::from(vec![
        Span::styled(bar, Style::default().fg(Color::Cyan)),
        Span::styled(
            format!(" {:>3}", days),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({}-{})", DayCount::MIN, DayCount::MAX),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let slider = Paragraph::new(line).block(
        Block::default()
            .title("Select number of days")
            .borders(Borders::ALL),
    );
    frame.render_widget(slider, area);
}

fn render_table(
    frame: &mut Frame,
    dashboard: &Dashboard,
    table_state: &mut TableState,
    area: Rect,
) {
    let rows = dashboard.rows();

    if rows.is_empty() {
        let empty_message = Paragraph::new("No price data for the selected period.")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty_message, area);
        return;
    }

    let header_cells = Column::iter()
        .map(|column| Cell::from(column.to_string()).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).style(Style::default()).height(1);

    let table_rows = rows.iter().map(|row| {
        let cells = Column::iter().map(|column| {
            let cell = Cell::from(row.cell(column).to_string());
            if column == Column::PercentageChange {
                cell.style(Style::default().fg(Color::from(*row.change_color())))
            } else {
                cell
            }
        });
        Row::new(cells).height(1)
    });

    let widths = [
        Constraint::Length(13),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(18),
    ];

    let table = Table::new(table_rows, widths)
        .header(header)
        .block(Block::default().title("Daily Prices").borders(Borders::ALL))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, area, table_state);
}

fn render_popup(frame: &mut Frame, title: &str, message: &str, color: Color) {
    let area = centered_rect(frame.area(), 60, 7);
    let popup = Paragraph::new(message.to_string())
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(title.to_string()).borders(Borders::ALL));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}

pub fn slider_bar(value: u16, min: u16, max: u16, width: usize) -> String {
    let range = f64::from(max.saturating_sub(min));
    if range <= 0.0 {
        return format!("[{}]", "=".repeat(width));
    }
    let frac = (f64::from(value.saturating_sub(min)) / range).clamp(0.0, 1.0);
    let filled = (frac * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}
