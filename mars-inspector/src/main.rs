mod reports;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;

use mars_game::{AuditReport, Field, audit, game_constants};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Colored, human-readable output
    Console,
    /// Pretty-printed JSON with camelCase keys
    Json,
    /// Markdown tables
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "mars-inspector", version)]
#[command(about = "Inspect and audit the Terraforming Mars game constants table")]
struct Args {
    /// Print a single field (e.g. cardTypes, tilesCount)
    #[arg(long)]
    field: Option<Field>,

    /// Audit the table for duplicates and suspicious labels instead of printing it
    #[arg(long)]
    audit: bool,

    /// With --audit, exit with status 1 unless the report is clean
    #[arg(long, requires = "audit")]
    strict: bool,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Verbose output (include notices in console audits)
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.output.is_some() {
        colored::control::set_override(false);
    }

    let mut output_target = OutputTarget::new(args.output.clone())?;
    let outcome = run(&args, &mut output_target)?;
    output_target.flush_inner()?;

    if let Some(report) = outcome
        && args.strict
        && !report.is_clean()
    {
        log::error!("strict audit failed: {} findings", report.findings().len());
        std::process::exit(1);
    }

    Ok(())
}

/// Writes the requested view and hands back the audit report when one was run.
fn run<W: Write>(args: &Args, out: &mut W) -> Result<Option<AuditReport>> {
    let table = game_constants();

    if args.audit {
        let report = audit(table);
        match args.report {
            ReportFormat::Console => reports::audit_console(out, &report, args.verbose)?,
            ReportFormat::Json => reports::audit_json(out, &report)?,
            ReportFormat::Markdown => reports::audit_markdown(out, &report)?,
        }
        return Ok(Some(report));
    }

    match (args.field, args.report) {
        (Some(field), ReportFormat::Console) => reports::field_console(out, table, field)?,
        (Some(field), ReportFormat::Json) => reports::field_json(out, table, field)?,
        (Some(field), ReportFormat::Markdown) => reports::field_markdown(out, table, field)?,
        (None, ReportFormat::Console) => reports::table_console(out, table)?,
        (None, ReportFormat::Json) => reports::table_json(out, table)?,
        (None, ReportFormat::Markdown) => reports::table_markdown(out, table)?,
    }
    Ok(None)
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
