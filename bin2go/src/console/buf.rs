//! Line-buffered stderr.
//!
//! Actions rewrite their last line, which flickers noticeably when every
//! escape sequence reaches the terminal as its own write.

use std::io::{LineWriter, Stderr, stderr};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// Provides exclusive access to a line-buffered wrapper around [`stderr`].
///
/// Re-entrant use will deadlock.
pub fn buf_stderr() -> MutexGuard<'static, LineWriter<Stderr>> {
    static INSTANCE: OnceLock<Mutex<LineWriter<Stderr>>> = OnceLock::new();

    INSTANCE
        .get_or_init(|| Mutex::new(LineWriter::new(stderr())))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}
