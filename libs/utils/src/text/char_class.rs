use unicode_general_category::{GeneralCategory, get_general_category};

/// Whether `c` is a Unicode letter (`L*`) or decimal digit (`Nd`).
///
/// This is narrower than [`char::is_alphanumeric`], which also accepts
/// combining marks with the `Alphabetic` property and any numeric character
/// such as `²` or `½`.
///
/// # Examples
///
/// ```
/// use utils::text::is_letter_or_digit;
///
/// assert!(is_letter_or_digit('a'));
/// assert!(is_letter_or_digit('語'));
/// assert!(is_letter_or_digit('٣'));
/// assert!(!is_letter_or_digit('_'));
/// assert!(!is_letter_or_digit('²'));
/// ```
#[must_use]
pub fn is_letter_or_digit(c: char) -> bool {
    use GeneralCategory as G;

    matches!(
        get_general_category(c),
        G::UppercaseLetter
            | G::LowercaseLetter
            | G::TitlecaseLetter
            | G::ModifierLetter
            | G::OtherLetter
            | G::DecimalNumber
    )
}

/// Maps `c` to its single-character lower case form.
///
/// Characters whose full lower case mapping expands to several characters
/// (only `İ` at the moment) map to the first one, which is their simple
/// mapping.
#[must_use]
pub fn to_lower_simple(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Maps `c` to its single-character title case form.
///
/// Title case only differs from upper case for a handful of characters: the
/// Latin digraphs (`ǆ` becomes `ǅ`, not `Ǆ`), Greek letters with
/// ypogegrammeni and the Georgian Mkhedruli script, which has no title case.
/// Characters without a single-character mapping stay unchanged.
#[must_use]
pub fn to_title_simple(c: char) -> char {
    if let Some(title) = title_exception(c) {
        return title;
    }

    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn title_exception(c: char) -> Option<char> {
    let mapped = match u32::from(c) {
        0x01C4..=0x01C6 => 0x01C5,
        0x01C7..=0x01C9 => 0x01C8,
        0x01CA..=0x01CC => 0x01CB,
        0x01F1..=0x01F3 => 0x01F2,

        // greek with ypogegrammeni map onto the prosgegrammeni forms
        cp @ (0x1F80..=0x1F87 | 0x1F90..=0x1F97 | 0x1FA0..=0x1FA7) => cp + 8,
        cp @ (0x1F88..=0x1F8F | 0x1F98..=0x1F9F | 0x1FA8..=0x1FAF) => cp,
        0x1FB3 | 0x1FBC => 0x1FBC,
        0x1FC3 | 0x1FCC => 0x1FCC,
        0x1FF3 | 0x1FFC => 0x1FFC,

        // mkhedruli is its own title case
        cp @ (0x10D0..=0x10FA | 0x10FD..=0x10FF) => cp,
        _ => return None,
    };

    char::from_u32(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits() {
        for c in ['a', 'Z', 'õ', 'ŋ', 'ɡ', 'ι', '日', 'ǅ', 'ʰ', '0', '9', '٣'] {
            assert!(is_letter_or_digit(c), "{c:?} should be a letter or digit");
        }

        for c in ['_', '.', '/', '\\', ' ', '·', ';', '²', '\u{301}', '\u{fffd}', '\0'] {
            assert!(!is_letter_or_digit(c), "{c:?} should be a separator");
        }
    }

    #[test]
    fn lower_simple() {
        assert_eq!(to_lower_simple('A'), 'a');
        assert_eq!(to_lower_simple('Æ'), 'æ');
        assert_eq!(to_lower_simple('İ'), 'i');
        assert_eq!(to_lower_simple('日'), '日');
        assert_eq!(to_lower_simple('1'), '1');
    }

    #[test]
    fn title_simple() {
        assert_eq!(to_title_simple('a'), 'A');
        assert_eq!(to_title_simple('é'), 'É');
        assert_eq!(to_title_simple('κ'), 'Κ');
        assert_eq!(to_title_simple('ǆ'), 'ǅ');
        assert_eq!(to_title_simple('Ǆ'), 'ǅ');
        assert_eq!(to_title_simple('ᾀ'), 'ᾈ');
        assert_eq!(to_title_simple('ა'), 'ა');
        assert_eq!(to_title_simple('ß'), 'ß');
        assert_eq!(to_title_simple('ﬀ'), 'ﬀ');
        assert_eq!(to_title_simple('語'), '語');
    }
}
