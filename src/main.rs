use clap::{ArgGroup, Parser};
use colored::Colorize;
use std::path::PathBuf;
use xl::cli;
use xl::error::XlResult;
use xl::position::parse_position;
use xl::types::TransposeOptions;

#[derive(Parser)]
#[command(name = "xl")]
#[command(about = "Row oriented Excel operation tool")]
#[command(long_about = "xl - Row oriented Excel operation tool

Streams one sheet of an .xlsx file to stdout as delimited text lines,
or writes delimited text lines from stdin into a sheet.

MODES:
  -in  <file>   Excel → stdout (one line per row)
  -out <file>   stdin → Excel (file is created if missing)

Export stops at the first empty row; a row stops at its first empty cell.

EXAMPLES:
  xl -in report.xlsx                     # first sheet, space separated
  xl -in report.xlsx -S Data -s ,        # sheet 'Data', comma separated
  xl -in report.xlsx -b B,2              # start reading at cell B2
  seq 10 | xl -out numbers.xlsx -b C,5   # write from cell C5 downward")]
#[command(version)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["input", "output"]),
))]
struct Cli {
    /// Input Excel file; rows are written to stdout
    #[arg(long = "in", value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output Excel file; rows are read from stdin
    #[arg(long = "out", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Text column separator
    #[arg(
        short = 's',
        long = "sep",
        default_value = " ",
        env = "XL_SEPARATOR",
        allow_hyphen_values = true
    )]
    separator: String,

    /// Sheet name to operate on (default: first sheet)
    #[arg(short = 'S', long = "sheet", env = "XL_SHEET")]
    sheet: Option<String>,

    /// Base cell position as <column>,<row> (e.g. B,3)
    #[arg(short = 'b', long = "base", value_name = "COL,ROW")]
    base: Option<String>,

    /// Show debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse_from(cli::normalize_args(std::env::args_os()));
    cli::init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> XlResult<()> {
    let options = TransposeOptions {
        separator: cli.separator,
        sheet: cli.sheet.unwrap_or_default(),
        base: parse_position(cli.base.as_deref().unwrap_or_default())?,
    };

    match (cli.input, cli.output) {
        (Some(input), _) => cli::export(input, options),
        (None, Some(output)) => cli::import(output, options),
        // The "mode" argument group requires one of the two
        (None, None) => Ok(()),
    }
}
