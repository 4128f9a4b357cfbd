//! Transport bar widget - Start/Stop buttons, play state, and output settings

use freqgen::playback::{PlaybackStatus, ToneSettings};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme;

/// Render the transport bar
pub fn render_transport(
    frame: &mut Frame,
    area: Rect,
    status: PlaybackStatus,
    settings: &ToneSettings,
) {
    let block = Block::default()
        .title(" Transport ")
        .borders(Borders::ALL)
        .style(theme::base());

    let playing = status.is_playing();

    // Start is only pressable while idle, Stop only while playing
    let (status_text, status_color) = if playing {
        ("● Playing...", theme::PLAYING)
    } else {
        ("■ Stopped", theme::STOPPED)
    };

    // Format sample rate nicely (e.g., 44100 -> "44.1kHz")
    let sample_rate_khz = settings.sample_rate as f64 / 1000.0;

    let line = Line::from(vec![
        Span::raw(" "),
        button(" Start [Enter] ", !playing),
        Span::raw("  "),
        button(" Stop [Esc] ", playing),
        Span::raw("   "),
        Span::styled(
            format!("{status_text}  "),
            Style::default()
                .fg(status_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{sample_rate_khz:.1}kHz  Amp: {:.2}", settings.amplitude),
            Style::default().fg(theme::MUTED),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}

fn button(label: &'static str, enabled: bool) -> Span<'static> {
    let style = if enabled {
        Style::default()
            .fg(theme::TEXT)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::MUTED).bg(theme::FIELD)
    };
    Span::styled(label, style)
}
