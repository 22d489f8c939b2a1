use crate::config::Config;
use crate::convert::{Conversion, Converter};
use crate::error::ConvertError;
use crate::io::{LogSink, write_image};
use anyhow::{Context, Result, bail};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressIterator};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A file that could not be converted.
#[derive(Debug)]
pub struct Failure {
    pub source: PathBuf,
    pub message: String,
}

/// What a batch run produced, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub generated: Vec<PathBuf>,
    pub failures: Vec<Failure>,
}

/// Lists the files under `input_dir` that `converter` can read, sorted by
/// file name so runs are reproducible. Entries that can't be read (an
/// unreadable subdirectory, say) come back as failures.
pub fn discover_inputs(
    input_dir: &Path,
    recursive: bool,
    converter: &Converter,
) -> (Vec<PathBuf>, Vec<Failure>) {
    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut inputs = Vec::new();
    let mut failures = Vec::new();

    for entry in WalkDir::new(input_dir)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name()
    {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && converter.accepts(entry.path()) {
                    inputs.push(entry.into_path());
                }
            }
            Err(e) => {
                let source = e.path().unwrap_or(input_dir).to_path_buf();
                warn!("Skipping {}: {}", source.display(), e);
                failures.push(Failure {
                    source,
                    message: e.to_string(),
                });
            }
        }
    }

    (inputs, failures)
}

/// Converts every input file of `config.input_dir` into `config.output_dir`.
///
/// Per-file problems end up in the report; only setup failures (missing
/// input directory, unwritable output directory or log) are returned as
/// errors.
pub fn run(config: &Config) -> Result<BatchReport> {
    let converter = Converter::from_config(config);
    run_with(&converter, config)
}

pub fn run_with(converter: &Converter, config: &Config) -> Result<BatchReport> {
    if !config.input_dir.is_dir() {
        bail!("input directory {} does not exist", config.input_dir.display());
    }
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("can't create output directory {}", config.output_dir.display())
    })?;
    let mut log = LogSink::create(&config.output_dir)
        .with_context(|| format!("can't create log file in {}", config.output_dir.display()))?;

    let (inputs, failures) = discover_inputs(&config.input_dir, config.recursive, converter);
    info!(
        "Found {} input files in {}",
        inputs.len(),
        config.input_dir.display()
    );

    let mut report = BatchReport {
        failures,
        ..BatchReport::default()
    };
    if inputs.is_empty() {
        return Ok(report);
    }

    let bar = ProgressBar::new(inputs.len() as u64);
    if config.parallel {
        debug!("converting on {} threads", rayon::current_num_threads());
        let conversions: Vec<_> = inputs
            .par_iter()
            .progress_with(bar.clone())
            .map(|path| converter.convert_file(path))
            .collect();
        for (path, conversion) in inputs.iter().zip(conversions) {
            let outcome = conversion.and_then(|c| commit(c, &config.output_dir, &mut log));
            record(&bar, &mut report, path, outcome);
        }
    } else {
        for path in inputs.iter().progress_with(bar.clone()) {
            let outcome = converter
                .convert_file(path)
                .and_then(|c| commit(c, &config.output_dir, &mut log));
            record(&bar, &mut report, path, outcome);
        }
    }
    bar.finish_and_clear();

    Ok(report)
}

/// Writes the image first and logs it only once it is on disk. If the log
/// line can't be written the image is removed again.
fn commit(conversion: Conversion, output_dir: &Path, log: &mut LogSink) -> Result<PathBuf, ConvertError> {
    let output_path = write_image(output_dir, &conversion.file_name, &conversion.image)?;
    if let Err(e) = log.append(&conversion.entry) {
        let _ = fs::remove_file(&output_path);
        return Err(e.into());
    }
    Ok(output_path)
}

fn record(
    bar: &ProgressBar,
    report: &mut BatchReport,
    source: &Path,
    outcome: Result<PathBuf, ConvertError>,
) {
    match outcome {
        Ok(output_path) => {
            bar.suspend(|| println!("✓ Generated {}", output_path.display()));
            report.generated.push(output_path);
        }
        Err(e) => {
            bar.suspend(|| eprintln!("✗ Failed to process {}: {}", source.display(), e));
            report.failures.push(Failure {
                source: source.to_path_buf(),
                message: e.to_string(),
            });
        }
    }
}
