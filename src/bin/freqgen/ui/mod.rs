//! TUI module for freqgen
//!
//! Pure presentation: key presses become `start`/`stop` calls on the
//! controller, and everything shown about playback comes from the events it
//! emits.

mod alert;
mod form;
mod theme;
mod transport;
mod waveform;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use freqgen::{
    io::{AudioSink, ToneInputs},
    playback::{PlaybackController, PlaybackEvent, PlaybackStatus, StartOutcome, StopOutcome},
    ToneError,
};
use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Paragraph},
    DefaultTerminal, Frame,
};
use rtrb::Consumer;
use std::time::Duration;

use alert::{render_alert, Alert};
use form::{render_form, Form};
use transport::render_transport;
use waveform::{render_waveform, Preview};

/// UI application state
pub struct UiApp<S: AudioSink> {
    controller: PlaybackController<S>,
    /// Ring buffer receiver for controller events
    events: Consumer<PlaybackEvent>,
    form: Form,
    /// Last status received from the controller
    status: PlaybackStatus,
    preview: Preview,
    /// Open modal, if any
    alert: Option<Alert>,
    /// Whether the app should quit
    should_quit: bool,
}

impl<S: AudioSink> UiApp<S> {
    /// Create a new UI application
    pub fn new(
        controller: PlaybackController<S>,
        events: Consumer<PlaybackEvent>,
        inputs: ToneInputs,
    ) -> Self {
        let preview = Preview::from_inputs(&inputs, controller.settings());
        Self {
            controller,
            events,
            form: Form::new(inputs),
            status: PlaybackStatus::Idle,
            preview,
            alert: None,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_events();

            terminal.draw(|frame| self.render(frame))?;

            // Handle keyboard input (non-blocking, ~60fps)
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }

        if self.status.is_playing() {
            self.controller.stop();
        }
        Ok(())
    }

    /// Drain controller events
    fn poll_events(&mut self) {
        while let Ok(event) = self.events.pop() {
            match event {
                PlaybackEvent::Status(status) => self.status = status,
                PlaybackEvent::Failed(err) => {
                    self.alert = Some(Alert::error("Error", format!("An error occurred: {err}")));
                }
            }
        }
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyEvent) {
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.alert = None;
            }
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Enter => self.press_start(),
            KeyCode::Esc => self.press_stop(),
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            // Fields are locked while playing
            KeyCode::Backspace if !self.status.is_playing() => {
                self.form.backspace();
                self.refresh_preview();
            }
            KeyCode::Char(c) if !self.status.is_playing() => {
                self.form.insert(c);
                self.refresh_preview();
            }
            _ => {}
        }
    }

    fn press_start(&mut self) {
        // Start button is disabled while playing
        if self.status.is_playing() {
            return;
        }

        match self.controller.start(self.form.inputs()) {
            Ok(StartOutcome::Started) | Ok(StartOutcome::AlreadyPlaying) => {}
            Err(err @ ToneError::InvalidInput { .. }) => {
                self.alert = Some(Alert::warning(
                    "Input Error",
                    format!("{err}. Please enter positive numeric values."),
                ));
            }
            Err(err) => {
                self.alert = Some(Alert::error("Error", format!("An error occurred: {err}")));
            }
        }
    }

    fn press_stop(&mut self) {
        // Stop button is disabled while idle
        if !self.status.is_playing() {
            return;
        }

        // The status shown may lag behind a session that just finished
        if let outcome @ StopOutcome::NothingPlaying = self.controller.stop() {
            self.alert = Some(Alert::warning("Warning", outcome.to_string()));
        }
    }

    fn refresh_preview(&mut self) {
        self.preview = Preview::from_inputs(self.form.inputs(), self.controller.settings());
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(theme::BACKGROUND)), area);

        // Main layout: fields, transport, preview, help
        let chunks = Layout::vertical([
            Constraint::Length(9), // Input fields
            Constraint::Length(3), // Transport bar
            Constraint::Min(6),    // Waveform preview
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        render_form(
            frame,
            chunks[0],
            &self.form,
            !self.status.is_playing(),
            self.alert.is_none(),
        );
        render_transport(frame, chunks[1], self.status, self.controller.settings());
        render_waveform(frame, chunks[2], &self.preview);

        // Help bar
        let help = Paragraph::new(
            " [Enter] Start  [Esc] Stop  [Tab] Next field  [Ctrl+Q] Quit",
        )
        .style(Style::default().fg(theme::MUTED).bg(theme::BACKGROUND));
        frame.render_widget(help, chunks[3]);

        if let Some(alert) = &self.alert {
            render_alert(frame, area, alert);
        }
    }
}
