use super::char_class::{is_letter_or_digit, to_lower_simple, to_title_simple};

/// Converts an arbitrary string, such as a file path, into `camelCase`.
///
/// Letters and decimal digits of any script are kept. Everything else is
/// dropped and starts a new word, whose first letter is title-cased. The very
/// first letter of the result is lower-cased. Leading separators are ignored.
///
/// The result is empty if `value` contains no letters or digits.
///
/// # Examples
///
/// ```
/// assert_eq!(utils::text::to_camel_case("/regular/root/path/file.ext"), "regularRootPathFileExt");
/// assert_eq!(utils::text::to_camel_case("._snake_cased"), "snakeCased");
/// assert_eq!(utils::text::to_camel_case("日本語_nihõŋɡo"), "日本語Nihõŋɡo");
/// ```
#[must_use]
pub fn to_camel_case(value: &str) -> String {
    let mut state = CamelCase::Start;
    let mut out = String::with_capacity(value.len());

    for c in value.chars() {
        let (emit, next) = camel_case_transform(c, state);
        state = next;
        if let Some(emit) = emit {
            out.push(emit);
        }
    }

    out
}

/// State of the [`camel_case_transform`] state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CamelCase {
    /// Nothing was emitted yet.
    Start,
    /// Inside a word.
    Word,
    /// A separator was skipped after at least one emitted character.
    Boundary,
}

/// Single step of [`to_camel_case`].
///
/// Returns the character to emit, if any, and the next state.
#[must_use]
pub fn camel_case_transform(c: char, state: CamelCase) -> (Option<char>, CamelCase) {
    if !is_letter_or_digit(c) {
        let next = match state {
            CamelCase::Start => CamelCase::Start,
            CamelCase::Word | CamelCase::Boundary => CamelCase::Boundary,
        };
        return (None, next);
    }

    let emit = match state {
        CamelCase::Start => to_lower_simple(c),
        CamelCase::Boundary => to_title_simple(c),
        CamelCase::Word => c,
    };

    (Some(emit), CamelCase::Word)
}
