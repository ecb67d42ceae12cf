//! ANSI escape sequences for styling terminal text.
//!
//! These are plain [`str`] constants. Check support first via
//! [`super::use_ansi_escapes`].
//!
//! # Examples
//!
//! ```
//! use utils::term::style::*;
//!
//! println!("{BOLD}{RED}failed{RESET} to open `icon.png`");
//! ```

macro_rules! define_escapes {
    ($($(#[$attr:meta])* $name:ident = $lit:literal,)*) => {
        $(
            $(#[$attr])*
            pub const $name: &str = concat!("\x1b[", $lit);
        )*
    };
}

macro_rules! define_color_escapes {
    ($($label:literal $name:ident = $lit:literal,)*) => {
        $(
            #[doc = concat!("Change the foreground color to ", $label, ".")]
            pub const $name: &str = concat!("\x1b[38;5;", $lit);
        )*
    };
}

define_escapes! {
    /// Resets all styles and colors.
    RESET = "0m",
    /// Bold text.
    BOLD = "1m",

    /// Moves the cursor up one line.
    CURSOR_UP = "1A",
    /// Clears from the cursor to the end of the line.
    CLEAR_LINE = "0K",
}

define_color_escapes! {
    "red" RED = "1m",
    "yellow" YELLOW = "3m",
    "gray" GRAY = "8m",
    "bright green" BRIGHT_GREEN = "10m",
    "bright cyan" BRIGHT_CYAN = "14m",
}
