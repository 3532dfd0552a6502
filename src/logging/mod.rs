//! Logging infrastructure for console and file output.

mod logger;
mod palette;
mod recording;
mod subscriber;
mod types;
mod utils;

pub use logger::Logger;
pub use palette::{Color, Palette};
pub use recording::{Entry, RecordingLog};
pub use subscriber::init_subscriber;
pub use types::{Level, Log};

#[cfg(test)]
pub use types::MockLog;
