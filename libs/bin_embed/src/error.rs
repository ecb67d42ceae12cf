//! Error handling type.

use std::io;
use std::path::PathBuf;

/// Error when embedding binary files as source code.
///
/// Every variant is terminal for the file (or batch) it occurred in.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The input file could not be opened.
    #[error("cannot open input `{}`", path.display())]
    InputOpen {
        /// The path of the input.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// Reading from an opened input failed for a reason other than reaching
    /// its end.
    #[error("failed to read input")]
    InputRead(#[source] io::Error),

    /// The output file could not be created.
    #[error("cannot create output `{}`", path.display())]
    OutputCreate {
        /// The path of the output.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// Writing the generated code failed.
    #[error("failed to write output")]
    Write(#[source] io::Error),

    /// The modification time of the input could not be determined.
    #[error("cannot read modification time")]
    Stat(#[source] io::Error),

    /// The modification time can't be expressed as `i64` nanoseconds since
    /// the unix epoch.
    #[error("modification time is out of range")]
    TimestampRange,

    /// The input contains no letters or digits, so no name can be derived.
    #[error("cannot derive a name from `{input}`: it contains no letters or digits")]
    EmptyIdentifier {
        /// The input the name was derived from.
        input: String,
    },

    /// The name is not usable as a package-level identifier.
    #[error("`{name}` cannot be used as a name: {reason}")]
    InvalidIdentifier {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Two declarations in the same output share a name.
    #[error("`{name}` is declared for both `{}` and `{}`", first.display(), second.display())]
    DuplicateIdentifier {
        /// The shared name.
        name: String,
        /// The input that declared it first.
        first: PathBuf,
        /// The input that declared it again.
        second: PathBuf,
    },

    /// An explicit name was given for a batch that doesn't have exactly one
    /// input.
    #[error("an explicit name requires exactly one input, but {0} were given")]
    NameOverride(usize),

    /// An output file is also one of the inputs.
    #[error("output `{}` is also an input", path.display())]
    OutputIsInput {
        /// The conflicting path.
        path: PathBuf,
    },
}
