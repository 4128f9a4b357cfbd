//! freqgen - two-tone stereo sine generator
//!
//! Run with: cargo run
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=freqgen=debug`) to write diagnostics to
//! `freqgen.log` in the system temp directory.

mod app;
mod ui;

use app::FreqGen;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    app::init_logging()?;

    FreqGen::new().run()
}
