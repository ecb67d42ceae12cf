//! Inputs for the encoder.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::time::SystemTime;

/// A byte stream that also knows when its data was last modified.
///
/// The modification time is only queried when
/// [`EncodingConfig::mod_time`](crate::EncodingConfig::mod_time) is set.
pub trait Source: Read {
    /// Gets the last modification time of the underlying data.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the time cannot be determined.
    fn modified(&self) -> io::Result<SystemTime>;
}

impl Source for File {
    fn modified(&self) -> io::Result<SystemTime> {
        self.metadata()?.modified()
    }
}

impl<R: Source> Source for BufReader<R> {
    fn modified(&self) -> io::Result<SystemTime> {
        self.get_ref().modified()
    }
}

impl<S: Source + ?Sized> Source for &mut S {
    fn modified(&self) -> io::Result<SystemTime> {
        (**self).modified()
    }
}

/// In-memory data has no modification time. Use [`Stamped`] to attach one.
impl Source for &[u8] {
    fn modified(&self) -> io::Result<SystemTime> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "in-memory data has no modification time",
        ))
    }
}

/// Attaches a fixed modification time to any reader.
#[derive(Debug, Clone)]
pub struct Stamped<R> {
    inner: R,
    modified: SystemTime,
}

impl<R: Read> Stamped<R> {
    /// Wraps `inner`, reporting `modified` as its modification time.
    pub const fn new(inner: R, modified: SystemTime) -> Self {
        Self { inner, modified }
    }
}

impl<R: Read> Read for Stamped<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R: Read> Source for Stamped<R> {
    fn modified(&self) -> io::Result<SystemTime> {
        Ok(self.modified)
    }
}
