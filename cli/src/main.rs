use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use md2backlog_core::{convert, ConvertOptions};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "md2backlog")]
#[command(about = "Convert Markdown documents into Backlog wiki notation")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Markdown document to Backlog notation
    Convert {
        /// Input Markdown file (stdin when omitted or `-`)
        input: Option<PathBuf>,

        /// Output file (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Space characters per nesting level for space-indented lists
        #[arg(long, default_value_t = 2)]
        indent_unit: usize,
    },

    /// Convert a Markdown document and compare the result against a reference
    Diff {
        /// Input Markdown file
        input: PathBuf,

        /// Reference Backlog file to compare against
        reference: PathBuf,

        /// Space characters per nesting level for space-indented lists
        #[arg(long, default_value_t = 2)]
        indent_unit: usize,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize tracing — logs go to stderr so stdout stays clean for output
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Convert {
            input,
            output,
            indent_unit,
        } => {
            let source = read_input(input.as_ref())?;
            let options = ConvertOptions { indent_unit };
            let converted = convert(&source, &options).context("Conversion failed")?;
            write_output(&converted, output.as_ref())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Diff {
            input,
            reference,
            indent_unit,
        } => {
            let source = read_input(Some(&input))?;
            let options = ConvertOptions { indent_unit };
            let converted = convert(&source, &options).context("Conversion failed")?;

            let expected = fs::read_to_string(&reference).with_context(|| {
                format!("Failed to read reference file: {}", reference.display())
            })?;

            let mismatches = report_diff(&converted, &expected)?;
            if mismatches == 0 {
                println!("outputs match");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("{mismatches} line(s) differ");
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => fs::read_to_string(p)
            .with_context(|| format!("Failed to read input file: {}", p.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(text: &str, path: Option<&PathBuf>) -> Result<()> {
    match path {
        Some(p) => fs::write(p, text)
            .with_context(|| format!("Failed to write output file: {}", p.display())),
        None => {
            io::stdout()
                .write_all(text.as_bytes())
                .context("Failed to write to stdout")?;
            Ok(())
        }
    }
}

/// Print a line-numbered report of converted-vs-reference mismatches to
/// stdout and return the number of differing lines.
fn report_diff(converted: &str, expected: &str) -> Result<usize> {
    let converted: Vec<&str> = converted.split('\n').collect();
    let expected: Vec<&str> = expected.split('\n').collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut mismatches = 0;

    for i in 0..converted.len().max(expected.len()) {
        let want = expected.get(i).copied();
        let got = converted.get(i).copied();
        if want != got {
            mismatches += 1;
            writeln!(out, "line {}:", i + 1).context("Failed to write to stdout")?;
            if let Some(want) = want {
                writeln!(out, "  - {want}").context("Failed to write to stdout")?;
            }
            if let Some(got) = got {
                writeln!(out, "  + {got}").context("Failed to write to stdout")?;
            }
        }
    }

    Ok(mismatches)
}
