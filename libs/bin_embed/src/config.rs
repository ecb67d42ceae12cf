//! Formatting options for generated declarations.

use std::num::NonZeroUsize;

/// How the byte array is declared.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ArrayKind {
    /// A fixed-size array whose length is inferred: `[...]byte{...}`.
    #[default]
    Sized,
    /// A slice: `[]byte{...}`.
    Slice,
}

impl ArrayKind {
    /// The text placed between the brackets of the type.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Sized => "...",
            Self::Slice => "",
        }
    }
}

/// Options for [`encode`](crate::encode) and
/// [`write_header`](crate::write_header).
///
/// This is an immutable value that is passed into every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingConfig {
    /// Bytes rendered per output line.
    pub line_length: NonZeroUsize,
    /// Append a comment with the sanitized text of each line's bytes.
    pub comments: bool,
    /// Whether to declare a sized array or a slice.
    pub array_kind: ArrayKind,
    /// Declare `<name>Mod` holding the input's modification time.
    pub mod_time: bool,
}

impl EncodingConfig {
    /// The default amount of bytes per line.
    pub const DEFAULT_LINE_LENGTH: NonZeroUsize = NonZeroUsize::new(8).expect("8 is not zero");

    /// Sets [`Self::line_length`].
    #[must_use]
    pub const fn with_line_length(mut self, line_length: NonZeroUsize) -> Self {
        self.line_length = line_length;
        self
    }

    /// Sets [`Self::comments`].
    #[must_use]
    pub const fn with_comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }

    /// Sets [`Self::array_kind`].
    #[must_use]
    pub const fn with_array_kind(mut self, array_kind: ArrayKind) -> Self {
        self.array_kind = array_kind;
        self
    }

    /// Sets [`Self::mod_time`].
    #[must_use]
    pub const fn with_mod_time(mut self, mod_time: bool) -> Self {
        self.mod_time = mod_time;
        self
    }
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            line_length: Self::DEFAULT_LINE_LENGTH,
            comments: false,
            array_kind: ArrayKind::Sized,
            mod_time: false,
        }
    }
}
