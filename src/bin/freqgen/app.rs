//! FreqGen - application builder and runner

use std::fs::File;
use std::sync::Mutex;

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use tracing_subscriber::EnvFilter;

use freqgen::{
    io::{CpalSink, ToneInputs},
    playback::{EventQueue, PlaybackController, ToneSettings},
};

use super::ui::UiApp;

/// Capacity of the controller → UI event ring
const EVENT_QUEUE_LEN: usize = 64;

const LOG_FILE: &str = "freqgen.log";

/// Main application builder
pub struct FreqGen {
    inputs: ToneInputs,
    settings: ToneSettings,
}

impl FreqGen {
    /// Create a FreqGen with the stock 440/880 Hz, one second defaults
    pub fn new() -> Self {
        Self {
            inputs: ToneInputs::default(),
            settings: ToneSettings::default(),
        }
    }

    /// Run the application (takes over the terminal until quit)
    pub fn run(self) -> EyreResult<()> {
        let (queue, events) = EventQueue::new(EVENT_QUEUE_LEN);
        let controller = PlaybackController::with_settings(CpalSink::new(), queue, self.settings);

        tracing::info!(
            sample_rate = self.settings.sample_rate,
            amplitude = self.settings.amplitude,
            "freqgen starting"
        );

        let mut terminal = ratatui::init();
        let res = UiApp::new(controller, events, self.inputs).run(&mut terminal);
        ratatui::restore();

        res
    }
}

impl Default for FreqGen {
    fn default() -> Self {
        Self::new()
    }
}

/// Send tracing output to a log file when `RUST_LOG` is set.
///
/// The terminal UI owns stdout and stderr, so nothing is logged there.
pub fn init_logging() -> EyreResult<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let path = std::env::temp_dir().join(LOG_FILE);
    let file = File::create(&path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_thread_names(true)
        .try_init()
        .map_err(|err| eyre!("failed to install logger: {err}"))
}
