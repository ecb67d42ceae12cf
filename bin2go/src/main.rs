use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::Context as _;
use bin_embed::{ArrayKind, Batch, EncodingConfig, OutputMode};
use clap::Parser;

// for integration tests
#[cfg(test)]
use tempfile as _;

mod console;

/// Embeds binary files into Go source code as byte arrays.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// The files to embed.
    ///
    /// Each file is declared as a variable named after its path in camelCase,
    /// so `assets/icon.png` becomes `assetsIconPng`.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// The package name of the generated files.
    #[arg(short, long, default_value = Batch::DEFAULT_PACKAGE)]
    package: String,

    /// The amount of bytes per line.
    #[arg(short, long, default_value_t = EncodingConfig::DEFAULT_LINE_LENGTH)]
    line_length: NonZeroUsize,

    /// Append a comment with the letters and digits of each line's bytes.
    #[arg(short, long)]
    comments: bool,

    /// Declare `[]byte` slices instead of sized `[...]byte` arrays.
    #[arg(short = 'z', long)]
    slice: bool,

    /// Also declare `<name>Mod` holding each file's modification time.
    ///
    /// This imports the `time` package.
    #[arg(short, long)]
    mod_time: bool,

    /// Write all declarations into this one file.
    ///
    /// Otherwise, every input gets its own `<input>.go` file.
    #[arg(short, long)]
    single: Option<PathBuf>,

    /// Use this name instead of deriving one from the path.
    ///
    /// Only valid with exactly one input.
    #[arg(short, long)]
    name: Option<String>,

    /// Print more details. May be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Override whether this program outputs color.
    ///
    /// Auto-detection is performed, but in case it is wrong, you may use this
    /// to override the default.
    #[arg(long)]
    color: Option<bool>,
}

impl Cli {
    fn config(&self) -> EncodingConfig {
        let array_kind = match self.slice {
            true => ArrayKind::Slice,
            false => ArrayKind::Sized,
        };

        EncodingConfig::default()
            .with_line_length(self.line_length)
            .with_comments(self.comments)
            .with_array_kind(array_kind)
            .with_mod_time(self.mod_time)
    }

    fn into_batch(self) -> Batch {
        let config = self.config();
        let output = match self.single {
            Some(path) => OutputMode::Single(path),
            None => OutputMode::PerFile,
        };

        let batch = Batch::new(self.inputs, config)
            .package(self.package)
            .output(output);

        match self.name {
            Some(name) => batch.name(name),
            None => batch,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    console::use_color(cli.color);
    console::init_logger(cli.verbose);

    match option_env!("GIT_HASH") {
        Some(git_hash) => log::debug!("bin2go v{} [Commit: {git_hash}]", env!("CARGO_PKG_VERSION")),
        None => log::debug!("bin2go v{} [Unknown Commit]", env!("CARGO_PKG_VERSION")),
    };

    let plan = cli.into_batch().plan()?;
    let mut observer = console::ConsoleObserver::default();
    let reports = plan.run_with(&mut observer).with_context(|| match observer.current() {
        Some(path) => format!("failed to generate `{}`", path.display()),
        None => "failed to generate output".to_owned(),
    })?;

    let bytes: u64 = reports.iter().map(|r| r.summary.bytes).sum();
    console::info!("Embedded {} file(s), {bytes} bytes in total.", reports.len());
    Ok(())
}
