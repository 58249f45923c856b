use crate::error::{EcError, EcResult};
use crate::extractor::{ExtractedCompletion, Extractor};
use crate::layout::SheetLayout;
use crate::model::{self, build_challenges, Challenge};
use crate::render::{render_challenges, RenderOptions};
use crate::workbook::{Workbook, XlsxWorkbook};
use crate::writer::{self, TableFormat};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Where `extract` writes when no output path is given
pub fn default_output(format: TableFormat) -> PathBuf {
    match format {
        TableFormat::Rust => PathBuf::from("src/data/table.rs"),
        TableFormat::Json => PathBuf::from("completions.json"),
    }
}

/// Resolve the layout: YAML file if given, then the `--sheet` override
pub fn load_layout(layout: Option<&Path>, sheet: Option<String>) -> EcResult<SheetLayout> {
    let mut resolved = match layout {
        Some(path) => SheetLayout::from_yaml_file(path)?,
        None => SheetLayout::default(),
    };
    if let Some(sheet) = sheet {
        resolved.sheet = sheet;
    }
    resolved.validate()?;
    Ok(resolved)
}

/// Execute the extract command
pub fn extract(
    workbook: PathBuf,
    output: Option<PathBuf>,
    sheet: Option<String>,
    layout: Option<PathBuf>,
    format: TableFormat,
    dry_run: bool,
    verbose: bool,
) -> EcResult<()> {
    let output = output.unwrap_or_else(|| default_output(format));

    println!("{}", "📊 ec-ref - Extracting completions".bold().green());
    println!("   Workbook: {}", workbook.display());
    println!("   Output:   {}\n", output.display());

    if dry_run {
        println!("{}", "📋 DRY RUN MODE - No table will be written\n".yellow());
    }

    let layout = load_layout(layout.as_deref(), sheet)?;
    if verbose {
        println!("   Sheet: {}", layout.sheet.bright_blue().bold());
        println!(
            "   Rows from {}, study columns {}..={}\n",
            layout.first_row, layout.first_study_col, layout.last_study_col
        );
    }

    let mut book = XlsxWorkbook::open(&workbook)?;
    let rows = extract_rows(&mut book, layout.clone())?;

    if verbose {
        for row in &rows {
            println!(
                "   {} {} studies",
                format!("{:<7}", row.name).cyan(),
                row.studies.len()
            );
        }
        println!();
    }

    // A table the model cannot build from is never written
    build_challenges(rows.iter().map(ExtractedCompletion::as_raw))?;

    println!(
        "{}",
        format!("✅ Extracted {} completions", rows.len()).bold().green()
    );

    if dry_run {
        println!("{}", "📋 Dry run complete - no table written".yellow());
        return Ok(());
    }

    writer::write_table(&output, &rows, &layout.sheet, format)?;
    println!("   Written to {}\n", output.display());

    Ok(())
}

/// Run the extractor, telling the operator which sheets exist on a miss
pub fn extract_rows<W: Workbook + ?Sized>(
    workbook: &mut W,
    layout: SheetLayout,
) -> EcResult<Vec<ExtractedCompletion>> {
    let extractor = Extractor::new(layout)?;
    match extractor.extract(workbook) {
        Err(EcError::SheetNotFound { sheet, available }) => {
            warn!(sheet = %sheet, "sheet not found");
            eprintln!(
                "{} Could not find sheet \"{}\"",
                "❌".red(),
                sheet.bright_yellow()
            );
            eprintln!("   Available sheets:");
            for name in &available {
                eprintln!("     - {}", name);
            }
            Err(EcError::SheetNotFound { sheet, available })
        }
        other => other,
    }
}

/// Build challenges from a JSON dump, or from the compiled table
pub fn load_challenges(input: Option<&Path>) -> EcResult<Vec<Challenge>> {
    match input {
        Some(path) => {
            let rows = writer::load_json_table(path)?;
            build_challenges(rows.iter().map(ExtractedCompletion::as_raw))
        }
        None => model::challenges(),
    }
}

/// Execute the show command
pub fn show(
    input: Option<PathBuf>,
    challenge: Option<u8>,
    details: bool,
    json: bool,
) -> EcResult<()> {
    let challenges = load_challenges(input.as_deref())?;

    if json {
        let selected: Vec<&Challenge> = challenges
            .iter()
            .filter(|c| challenge.map_or(true, |id| c.id == id))
            .collect();
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    println!("{}", "Eternity Challenge Split Reference".bold().green());
    println!();
    let options = RenderOptions { challenge, details };
    print!("{}", render_challenges(&challenges, options));

    Ok(())
}
