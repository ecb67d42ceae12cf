//! Console output: timestamped messages and progress lines for actions.
//!
//! Everything goes to stderr.

use std::fmt::{self, Arguments};
use std::io::{Write, stderr};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::{Instant, SystemTime};

use utils::term::style::*;

mod buf;
mod logger;
mod observer;

use buf::buf_stderr;
pub use logger::init_logger;
pub use observer::ConsoleObserver;

macro_rules! action {
    ($($t:tt)*) => {
        $crate::console::ActionBuilder::new(::std::format!($($t)*))
    };
}

macro_rules! info {
    ($($t:tt)*) => {
        $crate::console::__println($crate::console::Level::Info, ::std::format_args!($($t)*))
    };
}

pub(crate) use {action, info};

static USE_COLOR: AtomicBool = AtomicBool::new(false);

/// Counts printed lines so actions know whether their line is still the last.
static LINES: AtomicUsize = AtomicUsize::new(0);

/// Sets whether output is colored. [`None`] auto-detects.
pub fn use_color(choice: Option<bool>) {
    let color = utils::term::use_ansi_escapes(choice, &stderr());
    USE_COLOR.store(color, Ordering::Relaxed);
}

fn paint(code: &'static str) -> &'static str {
    if USE_COLOR.load(Ordering::Relaxed) {
        code
    } else {
        ""
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warn,
    Info,
    Debug,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reset = paint(RESET);
        match self {
            Self::Error => write!(f, "{}{}error:{reset} ", paint(RED), paint(BOLD)),
            Self::Warn => write!(f, "{}warning:{reset} ", paint(YELLOW)),
            Self::Info => Ok(()),
            Self::Debug => write!(f, "{}debug:{reset} ", paint(GRAY)),
        }
    }
}

#[doc(hidden)]
pub fn __println(level: Level, args: Arguments<'_>) {
    let mut out = buf_stderr();
    writeln_args(&mut *out, level, args);
}

fn writeln_args<W: Write>(mut writer: W, level: Level, args: Arguments<'_>) {
    _ = writeln!(
        writer,
        "{}[{}]{} {level}{args}",
        paint(GRAY),
        humantime::format_rfc3339_seconds(SystemTime::now()),
        paint(RESET),
    );
    LINES.fetch_add(1, Ordering::Relaxed);
}

/// A long-running step whose progress is shown on a single line.
#[derive(Debug)]
pub struct Action(ActionInner);

impl Action {
    pub fn update_amount(&mut self, amount: u64) {
        self.0.progress.current = amount;
        self.0.print_update();
    }

    pub fn finish(self) {
        drop(self);
    }

    pub fn fail(mut self) {
        self.0.failed = true;
        drop(self);
    }
}

impl Drop for Action {
    fn drop(&mut self) {
        self.0.finish();
    }
}

#[derive(Debug)]
pub struct ActionBuilder(ActionInner);

impl ActionBuilder {
    pub fn new(name: String) -> Self {
        Self(ActionInner {
            name,
            progress: Progress::new(),
            start: Start::now(),
            line: 0,
            failed: false,
        })
    }

    pub fn unbounded(mut self) -> Self {
        self.0.progress.kind = ProgressKind::Unbounded;
        self
    }

    pub fn suffix(mut self, suffix: &'static str) -> Self {
        self.0.progress.suffix = suffix;
        self
    }

    pub fn start(mut self) -> Action {
        self.0.print_init();
        Action(self.0)
    }
}

#[derive(Debug)]
struct ActionInner {
    name: String,
    progress: Progress,
    start: Start,
    /// Value of [`LINES`] right after this action printed its line.
    line: usize,
    failed: bool,
}

impl ActionInner {
    fn print_init(&mut self) {
        let mut out = buf_stderr();
        self.write_state(&mut *out);
        _ = writeln!(out);
        self.line = LINES.fetch_add(1, Ordering::Relaxed) + 1;
    }

    /// Whether the action's line is the last one and may be rewritten.
    fn can_rewrite(&self) -> bool {
        USE_COLOR.load(Ordering::Relaxed) && LINES.load(Ordering::Relaxed) == self.line
    }

    fn print_update(&self) {
        if !self.can_rewrite() {
            return;
        }

        let mut out = buf_stderr();
        _ = write!(out, "{CURSOR_UP}{CLEAR_LINE}");
        self.write_state(&mut *out);
        _ = writeln!(out);
    }

    fn finish(&self) {
        let rewrite = self.can_rewrite();
        let mut out = buf_stderr();
        if rewrite {
            _ = write!(out, "{CURSOR_UP}{CLEAR_LINE}");
        }

        self.write_state(&mut *out);
        _ = match self.failed {
            true => writeln!(out, " {}Failed!{}", paint(RED), paint(RESET)),
            false => writeln!(out, " {}Done!{}", paint(BRIGHT_GREEN), paint(RESET)),
        };

        if !rewrite {
            LINES.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn write_state<W: Write>(&self, mut writer: W) {
        _ = write!(writer, "{} {}{}", self.start, self.progress, self.name);
    }
}

#[derive(Debug)]
struct Start {
    instant: Instant,
    local: SystemTime,
}

impl Start {
    fn now() -> Self {
        Self {
            instant: Instant::now(),
            local: SystemTime::now(),
        }
    }
}

impl fmt::Display for Start {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] [{:>7.1?}]{}",
            paint(GRAY),
            humantime::format_rfc3339_seconds(self.local),
            self.instant.elapsed(),
            paint(RESET),
        )
    }
}

#[derive(Debug)]
struct Progress {
    current: u64,
    suffix: &'static str,
    kind: ProgressKind,
}

#[derive(Debug)]
enum ProgressKind {
    NotApplicable,
    Unbounded,
}

impl Progress {
    fn new() -> Self {
        Self {
            current: 0,
            suffix: "",
            kind: ProgressKind::NotApplicable,
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ProgressKind::NotApplicable => Ok(()),
            ProgressKind::Unbounded => write!(
                f,
                "{}[{}{}]{} ",
                paint(BRIGHT_CYAN),
                self.current,
                self.suffix,
                paint(RESET)
            ),
        }
    }
}
