use std::{
    io::{Stderr, Stdout},
    process::ExitCode,
    thread,
};

use anyhow::Result;
use clap::Args;
use crossbeam::channel;
use log::{debug, error};
use samedia_record::{FileRecord, RecordError};

use crate::printer::{
    ColorChoice, HumanPrinter, InspectSummary, JsonPrinter, OutputFormat, PrinterConfig,
    RecordPrinter,
};

#[derive(Debug, Args)]
pub struct OutputOptions {
    /// Output records as NDJSON (one JSON object per line)
    #[arg(long)]
    pub json: bool,

    /// When to use colors: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: String,

    /// Also print a time-ordered identifier for each file
    #[arg(long)]
    pub id: bool,

    /// Suppress the summary line
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl OutputOptions {
    pub fn printer_config(&self) -> PrinterConfig {
        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        };

        let color = match self.color.as_str() {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        };

        PrinterConfig {
            format,
            color,
            show_identifier: self.id,
            show_summary: !self.quiet,
        }
    }

    pub fn make_printer(&self) -> Box<dyn RecordPrinter> {
        let cfg = self.printer_config();
        match cfg.format {
            OutputFormat::Human => Box::new(HumanPrinter::<Stdout, Stderr>::stdout(cfg)),
            OutputFormat::Json => Box::new(JsonPrinter::<Stdout, Stderr>::stdout(cfg)),
        }
    }
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Paths to inspect
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Worker threads; 0 uses every available core
    #[arg(long, short = 'j', default_value = "1")]
    pub jobs: usize,

    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn run(args: InspectArgs) -> ExitCode {
    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            error!("[error] {e}");
            eprintln!("[inspect] {e}");
            ExitCode::from(2)
        }
    }
}

fn execute(args: InspectArgs) -> Result<ExitCode> {
    let jobs = effective_jobs(args.jobs);
    debug!("[inspect] {} paths, {} jobs", args.paths.len(), jobs);

    let outcomes = build_all(&args.paths, jobs);

    let mut printer = args.output.make_printer();
    let summary = print_all(printer.as_mut(), &args.paths, &outcomes)?;

    Ok(if summary.all_files() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn effective_jobs(requested: usize) -> usize {
    if requested > 0 {
        return requested;
    }
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

pub fn print_all(
    printer: &mut dyn RecordPrinter,
    paths: &[String],
    outcomes: &[Result<FileRecord, RecordError>],
) -> Result<InspectSummary> {
    let mut summary = InspectSummary::default();

    for (raw, outcome) in paths.iter().zip(outcomes) {
        if let Err(e) = outcome {
            error!("[inspect] {raw}: {e}");
        }
        summary.add(outcome);
        printer.print_record(raw, outcome)?;
    }

    printer.finish(&summary)?;
    Ok(summary)
}

/// Build one record per path, returned in input order.
///
/// With more than one job, paths are handed to a scoped worker pool over
/// a crossbeam channel; each record is still built independently.
pub fn build_all(paths: &[String], jobs: usize) -> Vec<Result<FileRecord, RecordError>> {
    if jobs <= 1 || paths.len() <= 1 {
        return paths.iter().map(|raw| FileRecord::build(raw)).collect();
    }

    let (work_tx, work_rx) = channel::unbounded::<(usize, &str)>();
    let (done_tx, done_rx) = channel::unbounded();

    for (idx, raw) in paths.iter().enumerate() {
        let _ = work_tx.send((idx, raw.as_str()));
    }
    drop(work_tx);

    thread::scope(|s| {
        for _ in 0..jobs.min(paths.len()) {
            let work_rx = work_rx.clone();
            let done_tx = done_tx.clone();

            s.spawn(move || {
                for (idx, raw) in work_rx.iter() {
                    if done_tx.send((idx, FileRecord::build(raw))).is_err() {
                        return;
                    }
                }
            });
        }
    });
    drop(done_tx);

    let mut slots: Vec<Option<Result<FileRecord, RecordError>>> =
        (0..paths.len()).map(|_| None).collect();
    for (idx, outcome) in done_rx.iter() {
        slots[idx] = Some(outcome);
    }

    slots.into_iter().flatten().collect()
}

#[cfg(test)]
#[path = "inspect_tests.rs"]
mod tests;
