use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{CalculatorApp, Screen};

pub fn draw(frame: &mut Frame<'_>, app: &CalculatorApp) {
    match app.screen() {
        Screen::Intro => draw_intro(frame, app),
        Screen::Calculator => draw_calculator(frame, app),
    }

    if app.copied() {
        render_notification(frame, "Copied!");
    }
}

fn draw_intro(frame: &mut Frame<'_>, app: &CalculatorApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(2), // title
            Constraint::Length(2), // subtitle
            Constraint::Length(3), // tax stepper
            Constraint::Length(2), // key hints
            Constraint::Min(0),
        ])
        .split(frame.area());

    let title = Paragraph::new("Consignment Buddy")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[1]);

    if app.subtitle_visible() {
        let subtitle = Paragraph::new("How much is Today's Tax?")
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        frame.render_widget(subtitle, chunks[2]);
    }

    if app.tax_input_visible() {
        let stepper_style = |disabled: bool| {
            if disabled {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            }
        };

        let stepper = Paragraph::new(Line::from(vec![
            Span::styled("  −  ", stepper_style(app.tax_rate.at_min())),
            Span::styled(
                format!("  {:>2} %  ", app.tax_rate.percent()),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  +  ", stepper_style(app.tax_rate.at_max())),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(stepper, centered_horizontal(chunks[3], 30));

        let hints = Paragraph::new("↑/+ raise   ↓/− lower   0-6 set   Enter: Confirm   q: Quit")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        frame.render_widget(hints, chunks[4]);
    }
}

fn draw_calculator(frame: &mut Frame<'_>, app: &CalculatorApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title, tucked into the corner
            Constraint::Length(2), // tax display
            Constraint::Length(3), // desired board price
            Constraint::Length(3), // consignment price
            Constraint::Length(2), // key hints
            Constraint::Min(0),
        ])
        .split(frame.area());

    let title = Paragraph::new("Consignment Buddy")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(title, chunks[0]);

    let tax_line = Paragraph::new(format!("Today's Tax is {}", app.tax_rate))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(tax_line, chunks[1]);

    let field_width = frame.area().width.clamp(20, 46);

    let (desired_text, desired_style) = if app.price.is_empty() {
        ("0".to_string(), Style::default().fg(Color::DarkGray))
    } else {
        (
            app.price.display().to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )
    };
    let desired_box = Paragraph::new(Line::from(vec![
        Span::styled(desired_text, desired_style),
        Span::styled(" S", Style::default().fg(Color::Gray)),
    ]))
    .alignment(Alignment::Right)
    .block(Block::default().borders(Borders::ALL).title("Desired Board Price"));
    frame.render_widget(desired_box, centered_horizontal(chunks[2], field_width));

    let computed = app.consignment();
    let (result_text, result_style) = match &computed {
        Some(value) => (
            value.clone(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        None => ("0".to_string(), Style::default().fg(Color::DarkGray)),
    };
    let result_box = Paragraph::new(Line::from(vec![
        Span::styled(result_text, result_style),
        Span::styled(" S", Style::default().fg(Color::Gray)),
    ]))
    .alignment(Alignment::Right)
    .block(Block::default().borders(Borders::ALL).title("Consignment Price"));
    frame.render_widget(result_box, centered_horizontal(chunks[3], field_width));

    let hints = if computed.is_some() {
        "0-9 . edit   Backspace: delete   c: Copy to Clipboard   q: Quit"
    } else {
        "0-9 . edit   Backspace: delete   q: Quit"
    };
    let hints = Paragraph::new(hints)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[4]);
}

/// Render a notification overlay at the bottom center of the screen
fn render_notification(frame: &mut Frame<'_>, message: &str) {
    let area = frame.area();

    let width = (message.len() + 4).min(60) as u16;
    let height = 3;
    let x = (area.width.saturating_sub(width)) / 2;
    let y = area.height.saturating_sub(height + 1);

    let notification_area = Rect::new(x, y, width, height);

    let notification = Paragraph::new(message)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);

    frame.render_widget(notification, notification_area);
}

fn centered_horizontal(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}
