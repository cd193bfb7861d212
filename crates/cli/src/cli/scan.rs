use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::Context;
use scan_engine::{Format, InputCursor, ScanReport, Value};
use serde::Serialize;
use tracing::debug;

use crate::cli::ScanArgs;
use crate::config::{AppConfig, OutputMode};

/// One scan call as printed in JSON mode.
#[derive(Debug, Serialize)]
struct Record<'a> {
    record: usize,
    status: i32,
    assigned: usize,
    values: &'a [Value],
    #[serde(skip_serializing_if = "Option::is_none")]
    halted: Option<String>,
}

pub fn execute(args: ScanArgs, cfg: &AppConfig, output: OutputMode) -> anyhow::Result<()> {
    let Some(text) = args.format.as_deref().or(cfg.default_format.as_deref()) else {
        anyhow::bail!("No format given and no default_format configured");
    };
    let format = Format::parse(text);
    let mut out = io::stdout().lock();

    match &args.input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            let cursor = InputCursor::from_reader(BufReader::new(file));
            run(&format, cursor, args.repeat, output, &mut out)?;
        }
        None => {
            let cursor = InputCursor::from_reader(io::stdin().lock());
            run(&format, cursor, args.repeat, output, &mut out)?;
        }
    }
    Ok(())
}

/// Scan once, or until the format stops matching when `repeat` is set.
/// Returns the number of records printed.
fn run<S, W>(
    format: &Format,
    mut cursor: InputCursor<S>,
    repeat: bool,
    output: OutputMode,
    out: &mut W,
) -> anyhow::Result<usize>
where
    S: Iterator<Item = char>,
    W: Write,
{
    let mut printed = 0;
    loop {
        let start = cursor.position();
        let (values, report) = format.scan_values(&mut cursor);

        // Running dry after at least one full record is just the end of input.
        if printed > 0 && report.status() == -1 {
            break;
        }
        printed += 1;
        print_record(out, output, printed, &values, &report)?;

        let progressed = cursor.position() > start;
        if !repeat || !report.is_complete() || report.conversions == 0 || !progressed {
            break;
        }
    }
    debug!(records = printed, position = cursor.position(), "scan finished");
    Ok(printed)
}

fn print_record<W: Write>(
    out: &mut W,
    output: OutputMode,
    record: usize,
    values: &[Value],
    report: &ScanReport,
) -> anyhow::Result<()> {
    match output {
        OutputMode::Json => {
            let rec = Record {
                record,
                status: report.status(),
                assigned: report.assigned,
                values,
                halted: report.halted.as_ref().map(ToString::to_string),
            };
            writeln!(out, "{}", serde_json::to_string(&rec)?)?;
        }
        OutputMode::Text => {
            writeln!(out, "#{record} status={}", report.status())?;
            for (i, value) in values.iter().enumerate() {
                writeln!(out, "  [{i}] {:<5} {value}", value.kind())?;
            }
            if let Some(e) = &report.halted {
                writeln!(out, "  halted: {e}")?;
            }
        }
    }
    Ok(())
}
