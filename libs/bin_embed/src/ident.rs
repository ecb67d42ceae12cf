//! Names for the generated declarations.

use std::fmt;

use utils::text::{is_letter_or_digit, to_camel_case};

use crate::{Error, Result};

/// Keywords that can't be declared as variables.
const KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough", "for",
    "func", "go", "goto", "if", "import", "interface", "map", "package", "range", "return",
    "select", "struct", "switch", "type", "var",
];

/// A valid package-level identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(Box<str>);

impl Identifier {
    /// Derives a `camelCase` identifier from an arbitrary string, usually the
    /// path of the input file.
    ///
    /// See [`to_camel_case`] for the exact rules.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyIdentifier`] if `input` has no letters or digits
    /// and [`Error::InvalidIdentifier`] if the result starts with a digit or is
    /// a keyword.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bin_embed::Identifier;
    /// let name = Identifier::derive("assets/icon.png").unwrap();
    /// assert_eq!(name.as_str(), "assetsIconPng");
    /// ```
    pub fn derive(input: &str) -> Result<Self> {
        let name = to_camel_case(input);
        if name.is_empty() {
            return Err(Error::EmptyIdentifier {
                input: input.to_owned(),
            });
        }

        if !name.starts_with(is_letter) {
            return Err(Error::InvalidIdentifier {
                name,
                reason: "it must start with a letter",
            });
        }

        check_reserved(&name)?;
        Ok(Self(name.into_boxed_str()))
    }

    /// Validates an explicitly chosen identifier.
    ///
    /// Unlike derived names, underscores are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if `name` isn't a valid identifier.
    pub fn new(name: &str) -> Result<Self> {
        let invalid = |reason| Error::InvalidIdentifier {
            name: name.to_owned(),
            reason,
        };

        let mut chars = name.chars();
        let first = chars.next().ok_or_else(|| invalid("it is empty"))?;

        if first != '_' && !is_letter(first) {
            return Err(invalid("it must start with a letter or underscore"));
        }

        if !chars.all(|c| c == '_' || is_letter_or_digit(c)) {
            return Err(invalid("it may only contain letters, digits and underscores"));
        }

        if name == "_" {
            return Err(invalid("the blank identifier cannot be referenced"));
        }

        check_reserved(name)?;
        Ok(Self(name.into()))
    }

    /// Gets the identifier as a [`str`].
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name of the declaration holding the modification time.
    #[must_use]
    pub fn mod_time(&self) -> Self {
        Self(format!("{}Mod", self.0).into_boxed_str())
    }
}

fn is_letter(c: char) -> bool {
    is_letter_or_digit(c) && !c.is_numeric()
}

fn check_reserved(name: &str) -> Result<()> {
    let reason = if KEYWORDS.contains(&name) {
        "it is a keyword"
    } else if name == "init" {
        "`init` can only be declared as a function"
    } else {
        return Ok(());
    };

    Err(Error::InvalidIdentifier {
        name: name.to_owned(),
        reason,
    })
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
