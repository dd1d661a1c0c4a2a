//! Logger writing `tracing` events to the browser console.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::{FmtSubscriber, fmt::MakeWriter};
use wasm_bindgen::JsValue;

/// Initialize logger.
///
/// Timestamps are omitted, because there is no system clock in `wasm32-unknown-unknown`
/// and the console adds its own anyway.
pub fn init() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .without_time()
        .with_ansi(false)
        .with_writer(Console)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}

/// [`MakeWriter`] creating a [`ConsoleWriter`] per event.
struct Console;

impl<'a> MakeWriter<'a> for Console {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers a single formatted event and prints it on drop with the console method matching its level.
struct ConsoleWriter {
    /// Level of the event.
    level: Level,
    /// Formatted event.
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    /// Construct new empty [`ConsoleWriter`] for an event with `level`.
    const fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let line = String::from_utf8_lossy(&self.buffer);
        let line = JsValue::from_str(line.trim_end());
        match self.level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
    }
}
