//! Command-line shell around the ranking engine: argument checks, output
//! path derivation, file handling and the exit-code table.

pub mod console;
pub mod paths;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};

use crate::config::{self, Config, ConfigSource};
use crate::lines::{DualSinkWriter, LineSink, TextSink, TextSource};
use crate::ranking::{LastFieldExtractor, RankingEngine};

pub use console::should_use_colors;
pub use paths::{derive_output_path, has_invalid_path_chars, is_same_file};

// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INPUT_MISSING: i32 = 1;
pub const EXIT_INVALID_PATH_CHARS: i32 = 2;
pub const EXIT_INPUT_NOT_FOUND: i32 = 3;
pub const EXIT_PARSE_FAILED: i32 = 4;
pub const EXIT_CONFIG: i32 = 5;
pub const EXIT_IO: i32 = 6;

/// How a ranking run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    InputMissing,
    InvalidPathChars,
    InputNotFound,
    ParseFailed,
    ConfigError,
    IoError,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => EXIT_SUCCESS,
            Outcome::InputMissing => EXIT_INPUT_MISSING,
            Outcome::InvalidPathChars => EXIT_INVALID_PATH_CHARS,
            Outcome::InputNotFound => EXIT_INPUT_NOT_FOUND,
            Outcome::ParseFailed => EXIT_PARSE_FAILED,
            Outcome::ConfigError => EXIT_CONFIG,
            Outcome::IoError => EXIT_IO,
        }
    }
}

/// Options for one ranking run, as collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct RankOptions {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub no_echo: bool,
    pub verbose: bool,
    pub use_colors: bool,
}

/// Rank the input file into its output file.
///
/// User-facing status lines and echoed records go to `console`; verbose
/// diagnostics and errors go to stderr. A failed console write is an I/O
/// error like any other.
pub fn run(options: &RankOptions, console: &mut dyn Write) -> Outcome {
    match try_run(options, console) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("I/O error: {:#}", e);
            Outcome::IoError
        }
    }
}

fn try_run(options: &RankOptions, console: &mut dyn Write) -> Result<Outcome> {
    let start_time = Instant::now();

    let Some(input) = options.input.as_deref() else {
        print_line(console, "Input file name is missing")?;
        return Ok(Outcome::InputMissing);
    };

    if has_invalid_path_chars(input) {
        print_line(console, "Input file name contains invalid path characters")?;
        return Ok(Outcome::InvalidPathChars);
    }

    let input_path = std::path::absolute(input).unwrap_or_else(|_| input.to_path_buf());
    if !input_path.is_file() {
        print_line(
            console,
            &format!("Input file does not exist: {}", input_path.display()),
        )?;
        return Ok(Outcome::InputNotFound);
    }

    let (config, source) = match config::load_config(options.config.clone()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            return Ok(Outcome::ConfigError);
        }
    };

    if options.verbose {
        match &source {
            ConfigSource::File(path) => eprintln!("Loaded config from {}", path.display()),
            ConfigSource::Defaults => eprintln!("No config file found, using defaults"),
        }
    }

    if let Err(errors) = config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Ok(Outcome::ConfigError);
    }

    let output_path = options
        .output
        .clone()
        .unwrap_or_else(|| derive_output_path(&input_path, &config.output_suffix));

    if options.verbose {
        eprintln!("Input:  {}", input_path.display());
        eprintln!("Output: {}", output_path.display());
    }

    if is_same_file(&input_path, &output_path)? {
        anyhow::bail!(
            "Output path is the same as the input: {}",
            output_path.display()
        );
    }

    if output_path.exists() {
        let warning = format!(
            "Output file exists and will be overwritten: {}",
            output_path.display()
        );
        print_line(console, &console::format_warning(&warning, options.use_colors))?;
    }

    let echo = config.echo && !options.no_echo;
    let ranked = rank_file(&input_path, &output_path, &config, echo, console)?;

    if options.verbose {
        eprintln!("Finished in {:?}", start_time.elapsed());
    }

    if ranked {
        let message = format!("Finished: created {}", display_name(&output_path));
        print_line(console, &console::format_status(&message, true, options.use_colors))?;
        Ok(Outcome::Success)
    } else {
        let message = format!("Cannot parse {}", display_name(&input_path));
        print_line(console, &console::format_status(&message, false, options.use_colors))?;
        Ok(Outcome::ParseFailed)
    }
}

/// Open both files and run the engine over them. `Ok(false)` is a parse
/// failure; the output file is left empty in that case.
fn rank_file(
    input_path: &Path,
    output_path: &Path,
    config: &Config,
    echo: bool,
    console: &mut dyn Write,
) -> Result<bool> {
    let input = File::open(input_path)
        .with_context(|| format!("Failed to open input file {}", input_path.display()))?;
    let output = File::create(output_path)
        .with_context(|| format!("Failed to create output file {}", output_path.display()))?;

    let engine = RankingEngine::new(LastFieldExtractor::new(config.separator.as_str()));
    let mut source = TextSource::new(BufReader::new(input));
    let mut file_sink = TextSink::new(BufWriter::new(output));

    let ranked = if echo {
        let mut tee = DualSinkWriter::new(&mut file_sink, TextSink::new(&mut *console));
        let ranked = engine.rank(&mut source, &mut tee);
        let flushed = tee.flush();
        let ranked = ranked?;
        flushed?;
        ranked
    } else {
        let ranked = engine.rank(&mut source, &mut file_sink)?;
        file_sink.flush()?;
        ranked
    };

    Ok(ranked)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn print_line(console: &mut dyn Write, message: &str) -> Result<()> {
    writeln!(console, "{}", message).context("Failed to write to console")
}
