use std::io;

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Routes formatted log lines to the browser console (stderr natively)
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

/// Buffers one event and emits it on flush or drop
#[derive(Debug, Default)]
pub struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn take_line(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        let line = String::from_utf8_lossy(&self.buffer)
            .trim_end_matches('\n')
            .to_string();
        self.buffer.clear();
        Some(line)
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(line) = self.take_line() {
            emit(&line);
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.take_line() {
            emit(&line);
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::default()
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line));
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &str) {
    eprintln!("{line}");
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(max_level: Level) {
    // No wall clock in wasm32-unknown-unknown, so no timestamps
    let _ = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(max_level)
        .without_time()
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn writer_buffers_until_flush() {
        let mut writer = ConsoleMakeWriter.make_writer();
        writer.write_all(b"INFO loaded ").unwrap();
        writer.write_all(b"3 songs\n").unwrap();
        assert_eq!(writer.take_line().as_deref(), Some("INFO loaded 3 songs"));
        assert_eq!(writer.take_line(), None);
    }

    #[test]
    fn repeated_init_is_harmless() {
        init_logging(Level::INFO);
        init_logging(Level::DEBUG);
        tracing::info!("logging initialised twice");
    }
}
