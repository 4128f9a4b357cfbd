//! Input form widget - three labelled, editable text fields

use freqgen::{io::ToneInputs, InputField};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme;

/// Width reserved for the field labels
const LABEL_WIDTH: u16 = 22;

/// Field contents plus which one has keyboard focus
pub struct Form {
    inputs: ToneInputs,
    focus: InputField,
}

impl Form {
    pub fn new(inputs: ToneInputs) -> Self {
        Self {
            inputs,
            focus: InputField::FrequencyLeft,
        }
    }

    pub fn inputs(&self) -> &ToneInputs {
        &self.inputs
    }

    pub fn focus(&self) -> InputField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.offset_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.offset_focus(InputField::ALL.len() - 1);
    }

    fn offset_focus(&self, by: usize) -> InputField {
        let index = InputField::ALL
            .iter()
            .position(|&f| f == self.focus)
            .unwrap_or(0);
        InputField::ALL[(index + by) % InputField::ALL.len()]
    }

    /// Type a character into the focused field
    pub fn insert(&mut self, c: char) {
        if !c.is_control() {
            self.inputs.field_mut(self.focus).push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.inputs.field_mut(self.focus).pop();
    }
}

/// Render the form; `editable` is false while playing
pub fn render_form(frame: &mut Frame, area: Rect, form: &Form, editable: bool, show_cursor: bool) {
    let block = Block::default()
        .title(Span::styled(" Frequency Generator ", theme::title()))
        .borders(Borders::ALL)
        .style(theme::base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Length(1); 3])
        .spacing(1)
        .split(inner.inner(ratatui::layout::Margin::new(1, 1)));

    for (&field, &row) in InputField::ALL.iter().zip(rows.iter()) {
        let [label_area, value_area] =
            Layout::horizontal([Constraint::Length(LABEL_WIDTH), Constraint::Min(8)]).areas(row);

        let focused = field == form.focus();
        let label_style = if focused {
            Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::TEXT)
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(format!("{}:", field.label()), label_style))),
            label_area,
        );

        let value = form.inputs.field(field);
        let value_style = Style::default()
            .bg(theme::FIELD)
            .fg(if editable { theme::TEXT } else { theme::MUTED });
        frame.render_widget(
            Paragraph::new(format!(" {value}")).style(value_style),
            value_area,
        );

        if focused && editable && show_cursor {
            let x = value_area.x + 1 + value.chars().count() as u16;
            frame.set_cursor_position(Position::new(
                x.min(value_area.right().saturating_sub(1)),
                value_area.y,
            ));
        }
    }
}
