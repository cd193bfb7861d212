use std::io::{self, Write};

use scan_engine::{Directive, Format, slot_kind};

use crate::cli::ExplainArgs;
use crate::config::OutputMode;

pub fn execute(args: ExplainArgs, output: OutputMode) -> anyhow::Result<()> {
    let format = Format::parse(&args.format);
    let mut out = io::stdout().lock();
    match output {
        OutputMode::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(format.directives())?)?;
        }
        OutputMode::Text => {
            for (i, directive) in format.directives().iter().enumerate() {
                writeln!(out, "{i:>3}  {}", describe(directive))?;
            }
        }
    }
    Ok(())
}

fn describe(directive: &Directive) -> String {
    match directive {
        Directive::Literal { expected } => format!("literal  {expected:?}"),
        Directive::WhitespaceMatch => "skip whitespace".into(),
        Directive::Conversion(spec) if spec.suppressed => format!("convert  {spec}  (discarded)"),
        Directive::Conversion(spec) => format!("convert  {spec}  -> {}", slot_kind(spec)),
        Directive::NoOp {
            specifier: Some(c),
        } => format!("ignored  %{c}"),
        Directive::NoOp { specifier: None } => "ignored  trailing %".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(format: &str) -> Vec<String> {
        Format::parse(format).directives().iter().map(describe).collect()
    }

    #[test]
    fn describes_each_directive_kind() {
        assert_eq!(
            lines("x: %*3d%hhx %q%"),
            vec![
                "literal  'x'",
                "literal  ':'",
                "skip whitespace",
                "convert  %*3d  (discarded)",
                "convert  %hhx  -> u8",
                "skip whitespace",
                "ignored  %q",
                "ignored  trailing %",
            ]
        );
    }
}
