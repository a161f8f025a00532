use clap::Parser;
use shift_roster::{RosterResult, RunConfig, RunOverrides, Shift, process_workbook, write_extraction};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Extracts a weekly stacker roster from a shift spreadsheet into JSON.
#[derive(Debug, Parser)]
#[command(name = "roster", version)]
struct Cli {
    /// Shift to extract: noche, tarde or mañana
    #[arg(value_parser = parse_shift)]
    shift: Shift,

    /// Spreadsheet to read (.xlsx, .xls, .ods or .csv)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Sheet name inside the workbook
    #[arg(long)]
    sheet: Option<String>,

    /// Zero-based row holding the column headers
    #[arg(long)]
    header_row: Option<usize>,

    /// Where to write the JSON result
    #[arg(long)]
    output: Option<PathBuf>,

    /// JSON file with default overrides; flags win over it
    #[arg(long)]
    config: Option<PathBuf>,
}

fn parse_shift(value: &str) -> Result<Shift, String> {
    value.parse::<Shift>().map_err(|err| err.to_string())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(cli: Cli) -> RosterResult<RunConfig> {
    let from_file = match &cli.config {
        Some(path) => RunOverrides::load(path)?,
        None => RunOverrides::default(),
    };
    let from_flags = RunOverrides {
        input: cli.input,
        sheet: cli.sheet,
        header_row: cli.header_row,
        output: cli.output,
    };
    Ok(RunConfig::for_shift(cli.shift).with_overrides(from_file.merge(from_flags)))
}

fn run(cli: Cli) -> RosterResult<()> {
    let config = build_config(cli)?;

    println!("--- TURNO {} ---", config.shift.as_str().to_uppercase());
    let extraction = process_workbook(&config)?;
    for summary in &extraction.summaries {
        println!("{}", summary.to_cli_summary());
    }

    write_extraction(&config, &extraction)?;
    println!(
        "Los resultados han sido guardados en el archivo: {}",
        config.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
