//! Provides helper methods to turn arbitrary text into identifiers and
//! comment-safe text.

mod camel_case_impl;
mod char_class;
mod sanitize_impl;

pub use camel_case_impl::{CamelCase, camel_case_transform, to_camel_case};
pub use char_class::{is_letter_or_digit, to_lower_simple, to_title_simple};
pub use sanitize_impl::{PLACEHOLDER, Sanitize, sanitize};
