use std::fmt::{self, Display, Write as _};

use super::char_class::is_letter_or_digit;

/// The character [`sanitize`] substitutes for anything that isn't a letter or
/// digit.
pub const PLACEHOLDER: char = '_';

/// Returns a type implementing [`Display`] that replaces every character that
/// isn't a Unicode letter or decimal digit with [`PLACEHOLDER`].
///
/// The substitution is 1:1, so the output has as many characters as the
/// source. Line breaks and comment delimiters never survive, which makes the
/// output safe to place inside a line comment.
///
/// # Examples
///
/// ```
/// let source = "PNG\r\n\x1a\n";
/// assert_eq!(utils::text::sanitize(source).to_string(), "PNG____");
/// ```
pub fn sanitize(source: &str) -> Sanitize<'_> {
    Sanitize { source }
}

/// Type returned by [`sanitize`].
#[derive(Debug, Clone, Copy)]
pub struct Sanitize<'a> {
    source: &'a str,
}

impl Sanitize<'_> {
    fn write_to(self, mut f: impl fmt::Write) -> fmt::Result {
        for part in self.source.split_inclusive(|c: char| !is_letter_or_digit(c)) {
            match part.char_indices().next_back() {
                Some((last, c)) if !is_letter_or_digit(c) => {
                    f.write_str(&part[..last])?;
                    f.write_char(PLACEHOLDER)?;
                },
                _ => f.write_str(part)?,
            }
        }

        Ok(())
    }
}

impl Display for Sanitize<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}
