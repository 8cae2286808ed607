use std::io::{self, Write};

use chrono::{DateTime, Local};
use samedia_fs::PathKind;
use samedia_record::{FileRecord, RecordError};
use serde_json::json;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable blocks, one per path.
    #[default]
    Human,
    /// NDJSON (newline-delimited JSON) for machine consumption.
    Json,
}

/// Color handling strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Automatically detect TTY and enable colors if appropriate.
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone)]
pub struct PrinterConfig {
    pub format: OutputFormat,
    pub color: ColorChoice,
    /// Print a fresh identifier seeded from each canonical timestamp.
    pub show_identifier: bool,
    /// Print the per-run summary on stderr.
    pub show_summary: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            color: ColorChoice::Auto,
            show_identifier: false,
            show_summary: true,
        }
    }
}

/// Counts for the end-of-run summary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InspectSummary {
    pub total: usize,
    pub files: usize,
    pub other: usize,
    pub errors: usize,
}

impl InspectSummary {
    pub fn add(&mut self, outcome: &Result<FileRecord, RecordError>) {
        self.total += 1;
        match outcome {
            Ok(rec) if rec.path().kind() == PathKind::File => self.files += 1,
            Ok(_) => self.other += 1,
            Err(_) => self.errors += 1,
        }
    }

    pub fn all_files(&self) -> bool {
        self.files == self.total
    }
}

/// Receives one outcome per input path, in input order.
pub trait RecordPrinter {
    fn print_record(
        &mut self,
        raw: &str,
        outcome: &Result<FileRecord, RecordError>,
    ) -> io::Result<()>;

    fn finish(&mut self, summary: &InspectSummary) -> io::Result<()>;
}

/// Human-readable local time for an epoch timestamp.
fn local_time(ts: f64) -> String {
    let secs = ts.floor();
    let nanos = ((ts - secs) * 1_000_000_000.0) as u32;
    DateTime::from_timestamp(secs as i64, nanos.min(999_999_999))
        .map(|dt| {
            dt.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S%.3f")
                .to_string()
        })
        .unwrap_or_else(|| "<out of range>".to_owned())
}

pub struct HumanPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    cfg: PrinterConfig,
    use_color: bool,
}

impl<W: Write, E: Write> HumanPrinter<W, E> {
    /// Generic writers never get color on `Auto`.
    pub fn new(out: W, err: E, cfg: PrinterConfig) -> Self {
        let use_color = cfg.color == ColorChoice::Always;
        Self {
            out,
            err,
            cfg,
            use_color,
        }
    }

    pub fn stdout(cfg: PrinterConfig) -> HumanPrinter<io::Stdout, io::Stderr> {
        use std::io::IsTerminal;

        let use_color = match cfg.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_terminal(),
        };

        HumanPrinter {
            out: io::stdout(),
            err: io::stderr(),
            cfg,
            use_color,
        }
    }

    #[inline]
    fn format_path(&self, path: &str) -> String {
        if self.use_color {
            format!("\x1b[32m{}\x1b[0m", path)
        } else {
            path.to_owned()
        }
    }

    fn write_record(&mut self, rec: &FileRecord) -> io::Result<()> {
        let path = rec.path();
        let header = self.format_path(path.raw_path());
        writeln!(self.out, "{header}")?;
        writeln!(self.out, "  kind:       {}", path.kind().as_str())?;

        if let Some(folder) = path.folder() {
            writeln!(self.out, "  folder:     {folder}")?;
        }

        if let Some(name) = path.filename() {
            writeln!(self.out, "  stem:       {}", name.stem())?;
            writeln!(self.out, "  extension:  {}", name.extension())?;
            writeln!(
                self.out,
                "  mime:       {}",
                name.mime_type().unwrap_or("-")
            )?;
        }

        if let Some(stats) = rec.os_stats() {
            writeln!(self.out, "  size:       {} bytes", stats.size)?;
        }

        if let Some(ts) = rec.timestamps() {
            for (label, value) in ts.iter() {
                writeln!(
                    self.out,
                    "  {:<11} {:.6}  ({})",
                    format!("{}:", label.as_str()),
                    value,
                    local_time(value)
                )?;
            }
        }

        if let Some(c) = rec.canonical_timestamp() {
            writeln!(
                self.out,
                "  canonical:  {} = {:.6}  ({})",
                c.label.as_str(),
                c.value,
                local_time(c.value)
            )?;
        }

        if self.cfg.show_identifier
            && let Some(id) = rec.identifier()
        {
            writeln!(self.out, "  id:         {id}")?;
        }

        Ok(())
    }
}

impl<W: Write, E: Write> RecordPrinter for HumanPrinter<W, E> {
    fn print_record(
        &mut self,
        raw: &str,
        outcome: &Result<FileRecord, RecordError>,
    ) -> io::Result<()> {
        match outcome {
            Ok(rec) => self.write_record(rec),
            Err(e) => writeln!(self.err, "[inspect] {raw}: {e}"),
        }
    }

    fn finish(&mut self, summary: &InspectSummary) -> io::Result<()> {
        if self.cfg.show_summary {
            writeln!(
                self.err,
                "\n[inspect] {} paths: {} files, {} other, {} errors",
                summary.total, summary.files, summary.other, summary.errors
            )?;
        }
        Ok(())
    }
}

pub struct JsonPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    cfg: PrinterConfig,
}

impl<W: Write, E: Write> JsonPrinter<W, E> {
    pub fn new(out: W, err: E, cfg: PrinterConfig) -> Self {
        Self { out, err, cfg }
    }

    pub fn stdout(cfg: PrinterConfig) -> JsonPrinter<io::Stdout, io::Stderr> {
        JsonPrinter {
            out: io::stdout(),
            err: io::stderr(),
            cfg,
        }
    }
}

impl<W: Write, E: Write> RecordPrinter for JsonPrinter<W, E> {
    fn print_record(
        &mut self,
        raw: &str,
        outcome: &Result<FileRecord, RecordError>,
    ) -> io::Result<()> {
        let obj = match outcome {
            Ok(rec) => {
                let mut obj = serde_json::to_value(rec).map_err(io::Error::other)?;
                if self.cfg.show_identifier
                    && let Some(id) = rec.identifier()
                {
                    obj["identifier"] = json!(id);
                }
                obj
            }
            Err(e) => json!({
                "type": "error",
                "path": raw,
                "error": e.to_string(),
            }),
        };
        writeln!(self.out, "{}", obj)
    }

    fn finish(&mut self, summary: &InspectSummary) -> io::Result<()> {
        if self.cfg.show_summary {
            let obj = json!({
                "type": "summary",
                "total": summary.total,
                "files": summary.files,
                "other": summary.other,
                "errors": summary.errors,
            });
            writeln!(self.err, "{}", obj)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
