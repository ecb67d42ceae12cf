use std::path::{Path, PathBuf};

use bin_embed::batch::Output;
use bin_embed::{Error, Observer, Report};

use super::{Action, action};

/// Shows one action per output file, counting the bytes embedded into it.
#[derive(Debug, Default)]
pub struct ConsoleObserver {
    action: Option<Action>,
    current: Option<PathBuf>,
    bytes: u64,
}

impl ConsoleObserver {
    /// The output that was started last.
    pub fn current(&self) -> Option<&Path> {
        self.current.as_deref()
    }
}

impl Observer for ConsoleObserver {
    fn start_output(&mut self, output: &Output) {
        let action = action!(
            "Writing `{}` ({} file(s)).",
            output.path().display(),
            output.entries().len()
        )
        .unbounded()
        .suffix(" B")
        .start();

        self.action = Some(action);
        self.current = Some(output.path().to_path_buf());
        self.bytes = 0;
    }

    fn entry_written(&mut self, report: &Report) {
        self.bytes += report.summary.bytes;
        if let Some(action) = &mut self.action {
            action.update_amount(self.bytes);
        }
    }

    fn finish_output(&mut self, _output: &Output, result: Result<(), &Error>) {
        let Some(action) = self.action.take() else {
            return;
        };

        match result {
            Ok(()) => action.finish(),
            Err(_) => action.fail(),
        }
    }
}
