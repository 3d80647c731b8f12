//! Byte-at-a-time symbol source over a file or any reader.

use crate::error::{EntropyError, Result};
use std::fs::File;
use std::io::{BufReader, Bytes, Read};
use std::path::Path;

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Lazy, single-use sequence of symbols (bytes) in input order.
///
/// Yields `Err(EntropyError::Io)` if the underlying read fails mid-stream
/// and `None` once the end of the stream is reached. The wrapped handle is
/// closed when the reader is dropped.
pub struct SymbolReader<R: Read> {
    bytes: Bytes<BufReader<R>>,
    bytes_read: u64,
}

impl SymbolReader<File> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| EntropyError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("opened {} for reading", path.display());
        Ok(Self::new(file))
    }
}

impl<R: Read> SymbolReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: BufReader::with_capacity(READ_BUFFER_SIZE, reader).bytes(),
            bytes_read: 0,
        }
    }

    /// Number of symbols yielded so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }
}

impl<R: Read> Iterator for SymbolReader<R> {
    type Item = Result<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.bytes.next()? {
            Ok(symbol) => {
                self.bytes_read += 1;
                Some(Ok(symbol))
            }
            Err(e) => Some(Err(EntropyError::Io(e))),
        }
    }
}
