//! pdfoutline CLI - heading outline extraction tool

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfoutline::batch::{self, BatchOptions, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use pdfoutline::{extract_file_with_options, JsonFormat, ParseOptions, PdfLineProvider};

#[derive(Parser)]
#[command(name = "pdfoutline")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract document titles and heading outlines from PDFs as JSON", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    // Batch arguments for the bare invocation
    #[command(flatten)]
    batch: BatchArgs,
}

#[derive(Args, Debug, Clone)]
struct BatchArgs {
    /// Directory containing PDF files
    #[arg(long, value_name = "DIR", env = "PDFOUTLINE_INPUT_DIR", default_value = DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,

    /// Directory receiving one JSON file per PDF
    #[arg(long, value_name = "DIR", env = "PDFOUTLINE_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Process documents one at a time
    #[arg(long)]
    sequential: bool,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the outline of one PDF
    Outline {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Fail on pages whose text cannot be read
        #[arg(long)]
        strict: bool,
    },

    /// Extract outlines for every PDF in a directory
    Batch(BatchArgs),

    /// Show the text lines read from a PDF
    Lines {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Only this page (1-based)
        #[arg(long)]
        page: Option<u32>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Outline {
            input,
            output,
            compact,
            strict,
        }) => cmd_outline(&input, output.as_deref(), compact, strict),
        Some(Commands::Batch(args)) => cmd_batch(args),
        Some(Commands::Lines { input, page }) => cmd_lines(&input, page),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        // Container entrypoint: no subcommand means a batch run
        None => cmd_batch(cli.batch),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_outline(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = if strict {
        ParseOptions::new()
    } else {
        ParseOptions::new().lenient()
    };
    let result = extract_file_with_options(input, options)?;
    let json = pdfoutline::render::to_json(&result, json_format(compact))?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_batch(args: BatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let options = BatchOptions::new(args.input_dir, args.output_dir)
        .with_parallel(!args.sequential)
        .with_format(json_format(args.compact));
    log::debug!("batch options: {:?}", options);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {pos} done {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    let report = batch::run_with_progress(&options, |entry| {
        pb.inc(1);
        pb.set_message(entry.input.display().to_string());
    });
    pb.finish_and_clear();
    let report = report?;

    println!(
        "{} {} document(s) -> {}",
        "Done!".green().bold(),
        report.len(),
        options.output_dir.display()
    );
    for entry in &report.entries {
        let name = entry.output.file_name().unwrap_or_default().to_string_lossy();
        println!("  {} {} ({} headings)", "├─".dimmed(), name, entry.headings);
    }

    Ok(())
}

fn cmd_lines(input: &Path, page: Option<u32>) -> Result<(), Box<dyn std::error::Error>> {
    let provider = PdfLineProvider::open_with_options(input, ParseOptions::new().lenient())?;

    let page_numbers: Vec<u32> = match page {
        Some(n) => vec![n],
        None => (1..=provider.page_count() as u32).collect(),
    };

    for page_num in page_numbers {
        let lines = provider.page_lines(page_num)?;
        println!("{}", format!("Page {}", page_num).cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        for line in lines {
            let y0 = line
                .y0
                .map(|y| format!("{:7.1}", y))
                .unwrap_or_else(|| "      -".to_string());
            let weight = if line.is_bold { "B" } else { " " };
            println!(
                "{} {:5.1} {} {}",
                y0.dimmed(),
                line.font_size,
                weight.yellow(),
                line.text
            );
        }
        println!();
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdfoutline".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF heading outline extraction tool");
    println!();
    println!("License: MIT");
}
