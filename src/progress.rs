//! Byte-based progress tracking for streamed input files.

use std::io::Read;

/// A reader wrapper that reports the running byte count to a callback.
///
/// Wraps the input CSV so the redactor can drive a byte-based progress bar
/// without knowing how many rows the file holds.
pub struct ProgressReader<R, F> {
    reader: R,
    on_progress: F,
    bytes_read: u64,
}

impl<R, F> ProgressReader<R, F>
where
    R: Read,
    F: FnMut(u64),
{
    pub fn new(reader: R, on_progress: F) -> Self {
        Self {
            reader,
            on_progress,
            bytes_read: 0,
        }
    }
}

impl<R, F> Read for ProgressReader<R, F>
where
    R: Read,
    F: FnMut(u64),
{
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.reader.read(buf)?;
        if n > 0 {
            self.bytes_read += n as u64;
            (self.on_progress)(self.bytes_read);
        }
        Ok(n)
    }
}
