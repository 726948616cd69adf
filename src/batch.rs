//! Directory batch processing.
//!
//! Every PDF in an input directory becomes one JSON result, named after the
//! document's file stem, in the output directory.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::detect::has_pdf_extension;
use crate::error::Result;
use crate::parser::ParseOptions;
use crate::render::{write_json, JsonFormat};

/// Default input directory of the container layout.
pub const DEFAULT_INPUT_DIR: &str = "/app/input";
/// Default output directory of the container layout.
pub const DEFAULT_OUTPUT_DIR: &str = "/app/output";

/// Options for a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Directory scanned for `*.pdf` files (not recursive)
    pub input_dir: PathBuf,

    /// Directory receiving `<stem>.json` files
    pub output_dir: PathBuf,

    /// JSON layout of the written files
    pub format: JsonFormat,

    /// Process documents in parallel
    pub parallel: bool,

    /// Options passed to each document's line provider
    pub parse_options: ParseOptions,
}

impl BatchOptions {
    /// Create batch options for the given directories.
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Set the JSON format.
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set the parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            format: JsonFormat::Pretty,
            parallel: true,
            parse_options: ParseOptions::default(),
        }
    }
}

/// One processed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    /// Source PDF
    pub input: PathBuf,
    /// Written JSON file
    pub output: PathBuf,
    /// Number of headings in the outline
    pub headings: usize,
}

/// Summary of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Processed documents, in input file-name order
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    /// Number of processed documents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no document was processed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// List the PDF inputs of a directory, sorted by file name.
pub fn collect_inputs(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.is_file() && has_pdf_extension(&path) {
            inputs.push(path);
        }
    }
    inputs.sort();
    Ok(inputs)
}

/// Output path for an input document: `<output_dir>/<stem>.json`.
pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let mut name = stem.to_os_string();
    name.push(".json");
    output_dir.join(name)
}

/// Process every PDF of the input directory.
///
/// The first failing document aborts the run with its error; results
/// already written stay on disk.
pub fn run(options: &BatchOptions) -> Result<BatchReport> {
    run_with_progress(options, |_| {})
}

/// Like [`run`], calling `on_done` after each document is written.
pub fn run_with_progress<F>(options: &BatchOptions, on_done: F) -> Result<BatchReport>
where
    F: Fn(&BatchEntry) + Sync,
{
    let inputs = collect_inputs(&options.input_dir)?;
    fs::create_dir_all(&options.output_dir)?;
    log::info!(
        "processing {} PDF(s) from {}",
        inputs.len(),
        options.input_dir.display()
    );

    let process = |input: &PathBuf| -> Result<BatchEntry> {
        let entry = process_one(input, options)?;
        on_done(&entry);
        Ok(entry)
    };

    let entries = if options.parallel {
        inputs.par_iter().map(process).collect::<Result<Vec<_>>>()?
    } else {
        inputs.iter().map(process).collect::<Result<Vec<_>>>()?
    };

    Ok(BatchReport { entries })
}

fn process_one(input: &Path, options: &BatchOptions) -> Result<BatchEntry> {
    let result = crate::extract_file_with_options(input, options.parse_options.clone())?;
    let output = output_path_for(input, &options.output_dir);

    let mut file = BufWriter::new(File::create(&output)?);
    write_json(&mut file, &result, options.format)?;
    file.flush()?;

    log::info!(
        "{} -> {} ({} headings)",
        input.display(),
        output.display(),
        result.outline.len()
    );

    Ok(BatchEntry {
        input: input.to_path_buf(),
        output,
        headings: result.outline.len(),
    })
}
