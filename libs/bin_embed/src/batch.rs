//! Embedding several files at once.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::{EncodeSummary, EncodingConfig, Error, Identifier, Result, encode, write_header};

/// Where the generated code goes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Every input gets its own `<input>.go` file.
    #[default]
    PerFile,
    /// All inputs are written into one file, sharing a single header.
    Single(PathBuf),
}

/// A set of inputs to embed, along with how to embed them.
#[derive(Debug, Clone)]
pub struct Batch {
    inputs: Vec<PathBuf>,
    package: String,
    config: EncodingConfig,
    output: OutputMode,
    name: Option<String>,
}

impl Batch {
    /// The default package name.
    pub const DEFAULT_PACKAGE: &'static str = "main";

    /// Creates a batch for the `inputs` with per-file output in the default
    /// package.
    pub fn new<I>(inputs: I, config: EncodingConfig) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PathBuf>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            package: Self::DEFAULT_PACKAGE.to_owned(),
            config,
            output: OutputMode::PerFile,
            name: None,
        }
    }

    /// Sets the package name.
    #[must_use]
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Sets the output mode.
    #[must_use]
    pub fn output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    /// Uses an explicit name instead of deriving one. Only valid for a single
    /// input.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Derives and validates every name and groups the inputs by output file.
    ///
    /// Nothing is read or written yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the package name or any declaration name is
    /// invalid, if two declarations in one output share a name, if an
    /// explicit name is used with more than one input or if an output file
    /// is also an input.
    pub fn plan(&self) -> Result<Plan> {
        Identifier::new(&self.package)?;

        let entries = self.entries()?;
        let outputs: Vec<Output> = match &self.output {
            OutputMode::PerFile => entries
                .into_iter()
                .map(|entry| Output {
                    path: per_file_path(&entry.input),
                    entries: vec![entry],
                })
                .collect(),
            OutputMode::Single(path) => vec![Output {
                path: path.clone(),
                entries,
            }],
        };

        // outputs are truncated on creation, possibly before the input is read
        for output in &outputs {
            if self.inputs.contains(&output.path) {
                return Err(Error::OutputIsInput {
                    path: output.path.clone(),
                });
            }

            check_duplicates(output, &self.config)?;
        }

        Ok(Plan {
            package: self.package.clone(),
            config: self.config,
            outputs,
        })
    }

    /// Plans and then writes every output file.
    ///
    /// # Errors
    ///
    /// See [`Self::plan`] and [`Plan::run`].
    pub fn run(&self) -> Result<Vec<Report>> {
        self.plan()?.run()
    }

    fn entries(&self) -> Result<Vec<Entry>> {
        if let Some(name) = &self.name {
            let [input] = self.inputs.as_slice() else {
                return Err(Error::NameOverride(self.inputs.len()));
            };

            return Ok(vec![Entry {
                input: input.clone(),
                name: Identifier::new(name)?,
            }]);
        }

        self.inputs
            .iter()
            .map(|input| {
                let name = Identifier::derive(&input.to_string_lossy())?;
                Ok(Entry {
                    input: input.clone(),
                    name,
                })
            })
            .collect()
    }
}

/// The output path for an input in [`OutputMode::PerFile`].
#[must_use]
pub fn per_file_path(input: &Path) -> PathBuf {
    let mut path = input.as_os_str().to_owned();
    path.push(".go");
    PathBuf::from(path)
}

fn check_duplicates(output: &Output, config: &EncodingConfig) -> Result<()> {
    let mut seen: HashMap<Identifier, &Path> = HashMap::new();
    for entry in &output.entries {
        let names = [
            Some(entry.name.clone()),
            config.mod_time.then(|| entry.name.mod_time()),
        ];

        for name in names.into_iter().flatten() {
            if let Some(first) = seen.insert(name.clone(), &entry.input) {
                return Err(Error::DuplicateIdentifier {
                    name: name.as_str().to_owned(),
                    first: first.to_path_buf(),
                    second: entry.input.clone(),
                });
            }
        }
    }

    Ok(())
}

/// A validated [`Batch`], ready to be written.
#[derive(Debug, Clone)]
pub struct Plan {
    package: String,
    config: EncodingConfig,
    outputs: Vec<Output>,
}

/// One output file and the inputs written to it, in order.
#[derive(Debug, Clone)]
pub struct Output {
    path: PathBuf,
    entries: Vec<Entry>,
}

/// One input and the name of its declaration.
#[derive(Debug, Clone)]
pub struct Entry {
    input: PathBuf,
    name: Identifier,
}

/// The result of writing one input.
#[derive(Debug, Clone)]
pub struct Report {
    /// The input that was read.
    pub input: PathBuf,
    /// The output it was written to.
    pub output: PathBuf,
    /// The name of the declaration.
    pub name: Identifier,
    /// How much was written.
    pub summary: EncodeSummary,
}

impl Plan {
    /// The output files, in the order they are written.
    #[must_use]
    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    /// Creates every output file and writes it.
    ///
    /// Stops at the first error. The output being written at that point is
    /// left incomplete.
    ///
    /// # Errors
    ///
    /// Returns an error if an output can't be created, an input can't be
    /// opened or read, or writing fails.
    pub fn run(&self) -> Result<Vec<Report>> {
        self.run_with(&mut ())
    }

    /// Like [`Self::run`], but notifies `observer` about every output and
    /// every written input.
    ///
    /// # Errors
    ///
    /// See [`Self::run`].
    pub fn run_with<O: Observer + ?Sized>(&self, observer: &mut O) -> Result<Vec<Report>> {
        let mut reports = Vec::new();
        for output in &self.outputs {
            observer.start_output(output);
            let result = self.run_output(output, observer, &mut reports);
            observer.finish_output(output, result.as_ref().copied());
            result?;
        }

        Ok(reports)
    }

    fn run_output<O: Observer + ?Sized>(
        &self,
        output: &Output,
        observer: &mut O,
        reports: &mut Vec<Report>,
    ) -> Result<()> {
        let mut out = BufWriter::new(output.create()?);
        let written = self
            .write_output(output, &mut out, observer, reports)
            .and_then(|()| out.flush().map_err(Error::Write));

        if written.is_err() {
            log::warn!("`{}` is incomplete.", output.path.display());
        }

        written
    }

    fn write_output<W: Write, O: Observer + ?Sized>(
        &self,
        output: &Output,
        mut out: W,
        observer: &mut O,
        reports: &mut Vec<Report>,
    ) -> Result<()> {
        write_header(&mut out, &self.package, &self.config)?;

        for entry in &output.entries {
            let source = entry.open()?;
            let summary = encode(source, &entry.name, &self.config, &mut out)?;

            log::debug!(
                "Embedded `{}` as `{}` ({} bytes).",
                entry.input.display(),
                entry.name,
                summary.bytes
            );

            let report = Report {
                input: entry.input.clone(),
                output: output.path.clone(),
                name: entry.name.clone(),
                summary,
            };

            observer.entry_written(&report);
            reports.push(report);
        }

        Ok(())
    }
}

/// Receives progress from [`Plan::run_with`].
///
/// All methods do nothing by default.
pub trait Observer {
    /// Called before `output` is created.
    fn start_output(&mut self, _output: &Output) {}

    /// Called after an input was written to the current output.
    fn entry_written(&mut self, _report: &Report) {}

    /// Called once `output` was flushed or failed.
    ///
    /// Always follows [`Self::start_output`].
    fn finish_output(&mut self, _output: &Output, _result: Result<(), &Error>) {}
}

impl Observer for () {}

impl Output {
    /// The path of the output file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The inputs written to this output.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Creates or truncates the output file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutputCreate`] if the file can't be created.
    pub fn create(&self) -> Result<File> {
        File::create(&self.path).map_err(|source| Error::OutputCreate {
            path: self.path.clone(),
            source,
        })
    }
}

impl Entry {
    /// The name of the declaration.
    #[must_use]
    pub fn name(&self) -> &Identifier {
        &self.name
    }

    fn open(&self) -> Result<BufReader<File>> {
        let file = File::open(&self.input).map_err(|source| Error::InputOpen {
            path: self.input.clone(),
            source,
        })?;

        Ok(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(plan: &Plan) -> Vec<&str> {
        plan.outputs()
            .iter()
            .flat_map(Output::entries)
            .map(|e| e.name().as_str())
            .collect()
    }

    #[test]
    fn per_file_plan() {
        let plan = Batch::new(["icon.png", "certs/ca.pem"], EncodingConfig::default())
            .plan()
            .expect("valid batch");

        let paths: Vec<&Path> = plan.outputs().iter().map(Output::path).collect();
        assert_eq!(paths, [Path::new("icon.png.go"), Path::new("certs/ca.pem.go")]);
        assert_eq!(names(&plan), ["iconPng", "certsCaPem"]);
    }

    #[test]
    fn single_plan() {
        let plan = Batch::new(["a.bin", "b.bin"], EncodingConfig::default())
            .output(OutputMode::Single("assets.go".into()))
            .plan()
            .expect("valid batch");

        assert_eq!(plan.outputs().len(), 1);
        assert_eq!(names(&plan), ["aBin", "bBin"]);
    }

    #[test]
    fn single_rejects_duplicates() {
        let err = Batch::new(["a.bin", "a_bin"], EncodingConfig::default())
            .output(OutputMode::Single("assets.go".into()))
            .plan()
            .expect_err("both derive `aBin`");

        assert!(
            matches!(&err, Error::DuplicateIdentifier { name, .. } if name == "aBin"),
            "got {err:?}"
        );
    }

    #[test]
    fn single_rejects_mod_time_collision() {
        let config = EncodingConfig::default().with_mod_time(true);
        let err = Batch::new(["a", "a.mod"], config)
            .output(OutputMode::Single("assets.go".into()))
            .plan()
            .expect_err("`aMod` is declared twice");

        assert!(
            matches!(&err, Error::DuplicateIdentifier { name, .. } if name == "aMod"),
            "got {err:?}"
        );
    }

    #[test]
    fn per_file_allows_same_names() {
        Batch::new(["a.bin", "a_bin"], EncodingConfig::default())
            .plan()
            .expect("different outputs");
    }

    #[test]
    fn single_rejects_input_as_output() {
        let err = Batch::new(["a.bin", "out.go"], EncodingConfig::default())
            .output(OutputMode::Single("out.go".into()))
            .plan()
            .expect_err("output would clobber an input");

        assert!(matches!(err, Error::OutputIsInput { .. }), "got {err:?}");
    }

    #[test]
    fn per_file_rejects_input_as_output() {
        let err = Batch::new(["x", "x.go"], EncodingConfig::default())
            .plan()
            .expect_err("`x.go` is generated for `x`");

        assert!(
            matches!(&err, Error::OutputIsInput { path } if path == Path::new("x.go")),
            "got {err:?}"
        );
    }

    #[test]
    fn explicit_name() {
        let plan = Batch::new(["icon.png"], EncodingConfig::default())
            .name("appIcon")
            .plan()
            .expect("one input");
        assert_eq!(names(&plan), ["appIcon"]);

        let err = Batch::new(["a", "b"], EncodingConfig::default())
            .name("appIcon")
            .plan()
            .expect_err("two inputs");
        assert!(matches!(err, Error::NameOverride(2)), "got {err:?}");
    }

    #[test]
    fn invalid_package() {
        let err = Batch::new(["a"], EncodingConfig::default())
            .package("my-assets")
            .plan()
            .expect_err("package has a dash");
        assert!(matches!(err, Error::InvalidIdentifier { .. }), "got {err:?}");
    }

    #[test]
    fn empty_name() {
        let err = Batch::new(["a.png", "../_"], EncodingConfig::default())
            .plan()
            .expect_err("second input has no letters");
        assert!(matches!(err, Error::EmptyIdentifier { .. }), "got {err:?}");
    }
}
