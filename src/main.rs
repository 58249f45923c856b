use clap::{Parser, Subcommand};
use colored::Colorize;
use ec_reference::cli;
use ec_reference::error::EcResult;
use ec_reference::logging;
use ec_reference::writer::TableFormat;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "ec-ref")]
#[command(about = "Eternity Challenge split reference: extract the spreadsheet, browse the table.")]
#[command(long_about = "ec-ref - Eternity Challenge split reference

The split table is extracted once from the curated spreadsheet and compiled
into the binary. 'show' works offline from that table.

COMMANDS:
  extract   - Regenerate the completion table from an .xlsx workbook
  show      - Show each challenge's dimension and pace splits

EXAMPLES:
  ec-ref extract \"Eternity Challenges.xlsx\"          # Rewrites src/data/table.rs
  ec-ref extract book.xlsx --format json -o ec.json
  ec-ref show                                         # All 12 challenges
  ec-ref show --challenge 4 --details")]
#[command(version)]
struct Cli {
    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Regenerate the completion table from an .xlsx workbook.

Scans the sheet for rows named EC<challenge>x<level> and reads notes, IP and
TT requirements, and the visible time studies. Study cells filled with the
hidden grey colours are skipped.

The sheet layout (row/column positions, hidden fill colours) can be
overridden with a YAML file; any key left out keeps its default:

  sheet: Picturemap v2.6
  first_row: 3
  first_study_col: 9
  last_study_col: 52
  hidden_fills: [FF666666, FF434343]

Nothing is written if the sheet is missing or the extracted table is invalid.")]
    /// Regenerate the completion table from an .xlsx workbook
    Extract {
        /// Path to the workbook (.xlsx)
        workbook: PathBuf,

        /// Output path (default: src/data/table.rs, or completions.json for JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Sheet name, overriding the layout
        #[arg(short, long)]
        sheet: Option<String>,

        /// YAML sheet layout
        #[arg(short, long, env = "EC_REF_LAYOUT")]
        layout: Option<PathBuf>,

        /// Table format: rust or json
        #[arg(short, long, default_value = "rust")]
        format: TableFormat,

        /// Extract and report without writing the table
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Show verbose extraction steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show each challenge's dimension and pace splits
    Show {
        /// JSON table written by 'extract --format json' (default: compiled table)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Only this challenge (1-12)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=12))]
        challenge: Option<u8>,

        /// Show notes, IP and TT for every level
        #[arg(short, long)]
        details: bool,

        /// Print the model as JSON
        #[arg(long)]
        json: bool,
    },
}

fn run(cli: Cli) -> EcResult<()> {
    match cli.command {
        Commands::Extract {
            workbook,
            output,
            sheet,
            layout,
            format,
            dry_run,
            verbose,
        } => {
            logging::init_cli_logger(verbose);
            cli::extract(workbook, output, sheet, layout, format, dry_run, verbose)
        }

        Commands::Show {
            input,
            challenge,
            details,
            json,
        } => {
            logging::init_cli_logger(false);
            cli::show(input, challenge, details, json)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
