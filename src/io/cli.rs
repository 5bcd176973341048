//! Command-line interface for generating patterns from one or more inputs

use crate::io::configuration::{DEFAULT_BASE_COLOR, FALLBACK_STEM, SVG_EXTENSION, TEXT_EXTENSION};
use crate::io::error::{Result, file_system};
use crate::io::progress::ProgressManager;
use crate::pattern::synthesizer::current_millis;
use crate::pattern::{GenerateOptions, GeneratedPattern, Generator, generate};
use clap::{ArgAction, Parser, ValueEnum};
use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Encoding written for each generated pattern
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw SVG markup
    Svg,
    /// Base64 of the markup
    Base64,
    /// `data:image/svg+xml;base64,...`
    DataUri,
    /// CSS `url("data:...")`
    DataUrl,
}

impl OutputFormat {
    /// Render a pattern in this format
    pub fn encode(self, pattern: &GeneratedPattern) -> String {
        match self {
            Self::Svg => pattern.to_svg().to_owned(),
            Self::Base64 => pattern.to_base64(),
            Self::DataUri => pattern.to_data_uri(),
            Self::DataUrl => pattern.to_data_url(),
        }
    }

    /// File extension used when writing to an output directory
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Svg => SVG_EXTENSION,
            Self::Base64 | Self::DataUri | Self::DataUrl => TEXT_EXTENSION,
        }
    }
}

#[derive(Parser)]
#[command(name = "geopattern")]
#[command(
    author,
    version,
    about = "Generate tiling SVG background patterns from strings"
)]
/// Command-line arguments for the pattern generator
// Independent on/off switches map naturally onto bool fields
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Strings to derive patterns from; the current time when none are given
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Use this generator instead of the one the fingerprint selects
    #[arg(short, long)]
    pub generator: Option<String>,

    /// Exact background color, skipping derivation
    #[arg(short, long)]
    pub color: Option<String>,

    /// Base color whose hue and saturation are rotated
    #[arg(short, long, default_value = DEFAULT_BASE_COLOR)]
    pub base_color: String,

    /// Forty hex digit fingerprint used instead of digesting the inputs
    #[arg(long)]
    pub hash: Option<String>,

    /// Output encoding
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Write one file per input into this directory instead of stdout
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Regenerate files that already exist in the output directory
    #[arg(short, long)]
    pub no_skip: bool,

    /// Print the registered generators and exit
    #[arg(short, long)]
    pub list: bool,

    /// Suppress the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && self.output.is_some()
    }

    /// Generation options built from the flags
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            color: self.color.clone(),
            base_color: self.base_color.clone(),
            generator: self.generator.clone(),
            hash: self.hash.clone(),
        }
    }

    /// Inputs to generate, falling back to the current time
    pub fn resolved_inputs(&self) -> Vec<String> {
        if self.inputs.is_empty() {
            vec![current_millis().to_string()]
        } else {
            self.inputs.clone()
        }
    }
}

/// Generates every input and writes the results to stdout or a directory
pub struct BatchProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchProcessor {
    /// Create a new batch processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the command
    ///
    /// # Errors
    ///
    /// Returns the first generation error (bad generator, color or hash) or
    /// any failure writing to stdout or the output directory
    pub fn process(&mut self) -> Result<()> {
        if self.cli.list {
            let mut stdout = std::io::stdout().lock();
            return write_lines(&mut stdout, Generator::names());
        }

        let options = self.cli.options();
        let inputs = self.cli.resolved_inputs();

        match self.cli.output.clone() {
            Some(directory) => self.write_directory(&directory, &inputs, &options),
            None => {
                let mut stdout = std::io::stdout().lock();
                self.write_stream(&mut stdout, &inputs, &options)
            }
        }
    }

    /// Write one encoded pattern per line to `out`
    ///
    /// Every input is generated before anything is written, so a rejected
    /// option produces no output at all.
    ///
    /// # Errors
    ///
    /// Returns generation errors and write failures
    pub fn write_stream(
        &self,
        out: &mut impl Write,
        inputs: &[String],
        options: &GenerateOptions,
    ) -> Result<()> {
        let encoded = inputs
            .iter()
            .map(|input| generate(input, options).map(|pattern| self.cli.format.encode(&pattern)))
            .collect::<Result<Vec<_>>>()?;

        write_lines(out, encoded)
    }

    /// Write one file per input into `directory`
    ///
    /// # Errors
    ///
    /// Returns generation errors and file system failures
    pub fn write_directory(
        &mut self,
        directory: &Path,
        inputs: &[String],
        options: &GenerateOptions,
    ) -> Result<()> {
        std::fs::create_dir_all(directory)
            .map_err(|source| file_system(directory, "create directory", source))?;

        let jobs: Vec<(&String, PathBuf)> = inputs
            .iter()
            .zip(self.output_paths(directory, inputs))
            .filter(|(input, path)| self.should_process(input, path))
            .collect();

        if jobs.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(jobs.len());
        }

        for (input, path) in &jobs {
            if let Some(ref pm) = self.progress_manager {
                pm.start_item(input);
            }

            let pattern = generate(input, options)?;
            std::fs::write(path, self.cli.format.encode(&pattern))
                .map_err(|source| file_system(path, "write", source))?;
            tracing::info!(input = %input, path = %path.display(), "wrote pattern");

            if let Some(ref pm) = self.progress_manager {
                pm.complete_item();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            let written = pm.finish();
            tracing::info!(written, directory = %directory.display(), "batch complete");
        }

        Ok(())
    }

    fn should_process(&self, input: &str, output_path: &Path) -> bool {
        if !self.cli.skip_existing() || !output_path.exists() {
            return true;
        }

        tracing::info!(
            input,
            path = %output_path.display(),
            "skipping, output exists"
        );
        false
    }

    /// Path of the file written for `input` on its own
    pub fn output_path(&self, directory: &Path, input: &str) -> PathBuf {
        self.path_for_stem(directory, &slug(input))
    }

    /// Paths of the files written for a batch, one distinct path per input
    ///
    /// When inputs share a slug, later ones get `-2`, `-3`, ... appended in
    /// input order, so no file of the batch overwrites another.
    pub fn output_paths(&self, directory: &Path, inputs: &[String]) -> Vec<PathBuf> {
        let mut claimed = HashSet::new();

        inputs
            .iter()
            .map(|input| {
                let stem = slug(input);
                let mut candidate = stem.clone();
                let mut suffix = 1_usize;
                while !claimed.insert(candidate.clone()) {
                    suffix += 1;
                    candidate = format!("{stem}-{suffix}");
                }

                if suffix > 1 {
                    tracing::warn!(input = %input, stem = %candidate, "output name taken, using suffix");
                }
                self.path_for_stem(directory, &candidate)
            })
            .collect()
    }

    fn path_for_stem(&self, directory: &Path, stem: &str) -> PathBuf {
        directory.join(format!("{stem}.{}", self.cli.format.extension()))
    }
}

/// File stem for an input
///
/// ASCII letters, digits, `-` and `_` are kept, every other character becomes
/// `-`, and leading or trailing dashes are dropped. An input with nothing
/// left gets the fallback stem.
pub fn slug(input: &str) -> String {
    let replaced: String = input
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();

    let trimmed = replaced.trim_matches('-');
    if trimmed.is_empty() {
        FALLBACK_STEM.to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn write_lines<I, S>(out: &mut impl Write, lines: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        writeln!(out, "{}", line.as_ref())
            .map_err(|source| file_system(Path::new("<stdout>"), "write", source))?;
    }
    out.flush()
        .map_err(|source| file_system(Path::new("<stdout>"), "flush", source))
}
