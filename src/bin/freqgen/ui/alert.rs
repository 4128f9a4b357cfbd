//! Modal alert - blocks input until dismissed

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Warning,
}

/// A titled message the user has to acknowledge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: &'static str,
    pub message: String,
}

impl Alert {
    pub fn error(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            title,
            message: message.into(),
        }
    }

    pub fn warning(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Warning,
            title,
            message: message.into(),
        }
    }
}

/// Render the alert centred over `area`
pub fn render_alert(frame: &mut Frame, area: Rect, alert: &Alert) {
    let accent = match alert.kind {
        AlertKind::Error => Color::Red,
        AlertKind::Warning => Color::Yellow,
    };

    let [popup] = Layout::horizontal([Constraint::Percentage(60)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::vertical([Constraint::Length(7)])
        .flex(Flex::Center)
        .areas(popup);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", alert.title),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(theme::base());

    let body = vec![
        Line::from(alert.message.as_str()),
        Line::default(),
        Line::from(Span::styled(
            "[Enter] OK",
            Style::default().fg(theme::MUTED),
        )),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(body).wrap(Wrap { trim: true }).block(block),
        popup,
    );
}
