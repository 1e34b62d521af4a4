//! Character-stream adapter
//!
//! Lets the display stand in for a text output stream: `write!` through
//! [`core::fmt::Write`], or byte writes through [`embedded_io::Write`].
//! Characters the font cannot draw are skipped so formatted output never
//! fails on content; bus and cursor faults are still reported.

use core::fmt;

use crate::error::LcdError;
use crate::font::DEGREE_CHAR;
use crate::renderer::CharSink;

/// Stream adapter over a [`CharSink`]
pub struct LcdWriter<S> {
    sink: S,
    /// First fault hidden behind a `fmt::Error`
    error: Option<LcdError>,
}

impl<S: CharSink> LcdWriter<S> {
    /// Wrap a character sink
    pub fn new(sink: S) -> Self {
        Self { sink, error: None }
    }

    /// The wrapped sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the wrapped sink
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Give back the sink
    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Take the fault behind the last `fmt::Error`, if any
    pub fn take_error(&mut self) -> Option<LcdError> {
        self.error.take()
    }

    /// Send one byte, skipping characters the font does not have
    fn put(&mut self, c: u8) -> Result<(), LcdError> {
        match self.sink.put_char(c) {
            Err(LcdError::UnsupportedCharacter(_)) => Ok(()),
            result => result,
        }
    }

    fn record(&mut self, result: Result<(), LcdError>) -> fmt::Result {
        result.map_err(|e| {
            self.error.get_or_insert(e);
            fmt::Error
        })
    }
}

impl<S: CharSink> fmt::Write for LcdWriter<S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            self.write_char(c)?;
        }
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        let byte = match c {
            '°' => DEGREE_CHAR,
            c if c.is_ascii() => c as u8,
            _ => return Ok(()),
        };
        let result = self.put(byte);
        self.record(result)
    }
}

impl<S: CharSink> embedded_io::ErrorType for LcdWriter<S> {
    type Error = LcdError;
}

impl<S: CharSink> embedded_io::Write for LcdWriter<S> {
    /// Render bytes until the first fault
    ///
    /// A fault after some bytes were drawn reports the count drawn so far
    /// and keeps the fault for [`LcdWriter::take_error`]. The fault is
    /// returned directly only when the first byte fails.
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        for (written, &byte) in buf.iter().enumerate() {
            if let Err(e) = self.put(byte) {
                if written == 0 {
                    return Err(e);
                }
                self.error.get_or_insert(e);
                return Ok(written);
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.sink.flush()
    }
}
