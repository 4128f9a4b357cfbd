//! Waveform preview widget - the first few milliseconds of both channels

use freqgen::{
    io::ToneInputs,
    playback::{render_stereo, ToneSettings},
};
use ratatui::{
    layout::Rect,
    style::Style,
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use super::theme;

/// How much of the tone the preview shows
const PREVIEW_SECS: f64 = 0.01;

/// Chart points for both channels, rebuilt whenever the fields change
#[derive(Default)]
pub struct Preview {
    left: Vec<(f64, f64)>,
    right: Vec<(f64, f64)>,
    amplitude: f64,
}

impl Preview {
    /// Render a short slice of what the fields describe.
    ///
    /// Fields that do not parse give an empty preview.
    pub fn from_inputs(inputs: &ToneInputs, settings: &ToneSettings) -> Self {
        let Ok(mut request) = inputs.parse() else {
            return Self::default();
        };
        request.duration = request.duration.min(PREVIEW_SECS);

        let Ok(stereo) = render_stereo(&request, settings) else {
            return Self::default();
        };

        let ms_per_frame = 1000.0 / settings.sample_rate as f64;
        let (left, right): (Vec<_>, Vec<_>) = stereo
            .frames()
            .iter()
            .enumerate()
            .map(|(i, frame)| {
                let x = i as f64 * ms_per_frame;
                ((x, frame.left), (x, frame.right))
            })
            .unzip();

        Self {
            left,
            right,
            amplitude: settings.amplitude,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

/// Render the waveform preview
pub fn render_waveform(frame: &mut Frame, area: Rect, preview: &Preview) {
    let block = Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .style(theme::base());

    if preview.is_empty() {
        let hint = Span::styled(" no valid tone to preview", Style::default().fg(theme::MUTED));
        frame.render_widget(
            ratatui::widgets::Paragraph::new(hint).block(block),
            area,
        );
        return;
    }

    let datasets = vec![
        Dataset::default()
            .name("L")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme::LEFT_CHANNEL))
            .data(&preview.left),
        Dataset::default()
            .name("R")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme::RIGHT_CHANNEL))
            .data(&preview.right),
    ];

    let span_ms = preview.left.last().map(|&(x, _)| x).unwrap_or(0.0).max(f64::EPSILON);
    // keep some headroom so a silent preview is still a visible flat line
    let peak = preview.amplitude.max(0.01) * 1.1;

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("ms")
                .bounds([0.0, span_ms])
                .style(Style::default().fg(theme::MUTED)),
        )
        .y_axis(
            Axis::default()
                .bounds([-peak, peak])
                .style(Style::default().fg(theme::MUTED)),
        );

    frame.render_widget(chart, area);
}
