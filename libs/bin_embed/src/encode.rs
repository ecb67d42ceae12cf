//! Renders binary data as Go source code.

use std::fmt;
use std::io::{self, Read, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use utils::text::{PLACEHOLDER, sanitize};

use crate::{EncodingConfig, Error, Identifier, Result, Source};

/// First line of every generated file.
///
/// Matches the pattern Go tooling uses to recognize generated code.
pub const GENERATED_MARKER: &str = "// Code generated by bin2go; DO NOT EDIT.";

/// Amounts written by a single [`encode`] call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSummary {
    /// Bytes read from the source.
    pub bytes: u64,
    /// Lines of byte literals written.
    pub lines: u64,
}

/// Displays a byte as a Go hexadecimal literal, i.e. `0x0a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteLiteral(pub u8);

impl fmt::Display for ByteLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}", self.0)
    }
}

/// Writes the generated-code marker, the package clause and, if the
/// modification time is included, the `time` import.
///
/// This is written once per output file, before any [`encode`] output.
///
/// # Errors
///
/// Returns [`Error::Write`] if writing to `out` fails.
pub fn write_header<W: Write>(mut out: W, package: &str, config: &EncodingConfig) -> Result<()> {
    let mut inner = || -> io::Result<()> {
        writeln!(out, "{GENERATED_MARKER}")?;
        writeln!(out, "package {package}")?;
        if config.mod_time {
            write!(out, "\nimport \"time\"\n")?;
        }
        Ok(())
    };

    inner().map_err(Error::Write)
}

/// Reads `source` to its end and writes its bytes to `out` as a byte array
/// declaration bound to `name`.
///
/// The source is read in chunks of [`EncodingConfig::line_length`] bytes and
/// every chunk becomes one line. Only the final chunk may be shorter.
///
/// `out` receives no header. Use [`write_header`] first.
///
/// # Errors
///
/// Returns [`Error::Stat`] or [`Error::TimestampRange`] if the modification
/// time is requested but unavailable, [`Error::InputRead`] if reading fails
/// and [`Error::Write`] if writing fails. In any case, `out` may have been
/// partially written to.
pub fn encode<S, W>(
    mut source: S,
    name: &Identifier,
    config: &EncodingConfig,
    mut out: W,
) -> Result<EncodeSummary>
where
    S: Source,
    W: Write,
{
    if config.mod_time {
        let modified = source.modified().map_err(Error::Stat)?;
        let nanos = unix_nanos(modified).ok_or(Error::TimestampRange)?;
        write!(out, "\nvar {} = time.Unix(0, {nanos})\n", name.mod_time()).map_err(Error::Write)?;
    }

    write!(out, "\nvar {name} = [{}]byte{{\n", config.array_kind.marker()).map_err(Error::Write)?;

    let mut summary = EncodeSummary::default();
    let mut buf = vec![0u8; config.line_length.get()];
    loop {
        let len = fill_chunk(&mut source, &mut buf).map_err(Error::InputRead)?;
        if len == 0 {
            break;
        }

        // only the bytes of this read, the rest of the buffer may be stale
        let chunk = &buf[..len];
        write_line(&mut out, chunk, config.comments).map_err(Error::Write)?;

        summary.bytes += len as u64;
        summary.lines += 1;
    }

    out.write_all(b"}\n").map_err(Error::Write)?;

    log::debug!(
        "Encoded `{name}`: {} bytes in {} lines.",
        summary.bytes,
        summary.lines
    );
    Ok(summary)
}

/// Reads until `buf` is full or the reader is exhausted.
///
/// Returns the amount of bytes read, which is only 0 at the end of the stream.
fn fill_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0usize;
    while let Some(rest) = buf.get_mut(filled..).filter(|r| !r.is_empty()) {
        match reader.read(rest) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(why) if why.kind() == io::ErrorKind::Interrupted => {},
            Err(why) => return Err(why),
        }
    }

    Ok(filled)
}

fn write_line<W: Write>(mut out: W, chunk: &[u8], comments: bool) -> io::Result<()> {
    out.write_all(b"\t")?;
    for (index, &byte) in chunk.iter().enumerate() {
        if index != 0 {
            out.write_all(b" ")?;
        }
        write!(out, "{},", ByteLiteral(byte))?;
    }

    if comments {
        out.write_all(b"\t// ")?;
        write_comment(&mut out, chunk)?;
    }

    out.write_all(b"\n")
}

/// Writes the sanitized text of `chunk`, one character per decoded character
/// and one [`PLACEHOLDER`] per byte that isn't valid UTF-8.
///
/// Multi-byte characters split across two lines are therefore shown as one
/// placeholder per byte on both sides.
fn write_comment<W: Write>(mut out: W, chunk: &[u8]) -> io::Result<()> {
    for part in chunk.utf8_chunks() {
        write!(out, "{}", sanitize(part.valid()))?;
        for _ in part.invalid() {
            write!(out, "{PLACEHOLDER}")?;
        }
    }

    Ok(())
}

fn unix_nanos(time: SystemTime) -> Option<i64> {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_nanos()).ok(),
        Err(before) => i64::try_from(before.duration().as_nanos())
            .ok()
            .and_then(i64::checked_neg),
    }
}
