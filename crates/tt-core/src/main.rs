//! Threshold Triage - catalog builder and decision verifier
//!
//! The main entry point for tt-core, handling:
//! - Catalog artifact generation from the literal parameter tables
//! - Independent recomputation and verification of every decision
//! - Reference workbook validation

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tt_catalog::{build_catalog, CatalogArtifact};
use tt_common::{error::format_error_human, Error, OutputFormat};
use tt_config::ReferenceWorkbook;
use tt_core::exit_codes::ExitCode;
use tt_core::logging::init_logging;
use tt_core::output::{render_build, render_verify, BuildSummary};
use tt_core::verify::{verify_catalog, VerifyResult};
use tt_report::{ReportConfig, ReportGenerator};

/// Threshold Triage - thrombophilia-testing catalog builder and verifier
#[derive(Parser)]
#[command(name = "tt-core")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "json")]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the 69-record catalog artifact from the literal tables
    Build(BuildArgs),

    /// Recompute decisions and compare against the artifact and reference
    Verify(VerifyArgs),

    /// Validate the reference workbook export
    Check(CheckArgs),

    /// Print version information
    Version,
}

#[derive(Args)]
struct BuildArgs {
    /// Reference workbook export (JSON)
    #[arg(long, default_value = "reference.json")]
    reference: PathBuf,

    /// Output path for the catalog artifact
    #[arg(long, short = 'o', default_value = "catalog.json")]
    out: PathBuf,
}

#[derive(Args)]
struct VerifyArgs {
    /// Catalog artifact to verify
    #[arg(long, default_value = "catalog.json")]
    catalog: PathBuf,

    /// Reference workbook export (JSON)
    #[arg(long, default_value = "reference.json")]
    reference: PathBuf,

    /// Write a self-contained HTML report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Report title override
    #[arg(long)]
    title: Option<String>,
}

#[derive(Args)]
struct CheckArgs {
    /// Reference workbook export (JSON)
    #[arg(long, default_value = "reference.json")]
    reference: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.verbose, cli.global.quiet);

    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", format_error_human(&err, !cli.global.no_color));
            ExitCode::from_error(&err)
        }
    };
    std::process::exit(code.as_i32());
}

fn run(cli: &Cli) -> tt_common::Result<ExitCode> {
    match &cli.command {
        Commands::Build(args) => cmd_build(args, &cli.global),
        Commands::Verify(args) => cmd_verify(args, &cli.global),
        Commands::Check(args) => cmd_check(args, &cli.global),
        Commands::Version => {
            println!("tt-core {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::Clean)
        }
    }
}

fn cmd_build(args: &BuildArgs, global: &GlobalOpts) -> tt_common::Result<ExitCode> {
    let reference = ReferenceWorkbook::load(&args.reference)?;
    let outcome = build_catalog(&reference)?;

    outcome.artifact.write_atomic(&args.out)?;
    info!(
        records = outcome.artifact.counts.total,
        unresolved = outcome.unresolved.len(),
        path = %args.out.display(),
        "catalog artifact written"
    );

    let summary = BuildSummary {
        artifact_path: args.out.display().to_string(),
        counts: outcome.artifact.counts,
        unresolved: outcome.unresolved,
    };
    println!("{}", render_build(&summary, global.format)?);

    Ok(ExitCode::Clean)
}

fn cmd_verify(args: &VerifyArgs, global: &GlobalOpts) -> tt_common::Result<ExitCode> {
    // Load failures degrade to an empty report with the cause attached;
    // the verifier never dies without producing its diagnostic output.
    let mut load_errors = Vec::new();

    let reference = ReferenceWorkbook::load(&args.reference)
        .map_err(|e| load_errors.push(e.to_string()))
        .ok();
    let artifact = CatalogArtifact::load(&args.catalog)
        .map_err(|e| load_errors.push(e.to_string()))
        .ok();

    let loads_failed = !load_errors.is_empty();
    let result = match (&artifact, &reference) {
        (Some(artifact), Some(reference)) => verify_catalog(artifact, reference),
        _ => VerifyResult::empty_with_errors(load_errors),
    };

    if let Some(path) = &args.report {
        let generator = ReportGenerator::new(ReportConfig {
            title: args.title.clone(),
            include_matches: true,
        });
        let html = generator
            .generate(&result.report_data())
            .map_err(|e| Error::Verify(format!("report generation failed: {e}")))?;
        std::fs::write(path, html)?;
        info!(path = %path.display(), "verification report written");
    }

    println!("{}", render_verify(&result, global.format)?);

    if loads_failed {
        Ok(ExitCode::SourceError)
    } else if result.summary.mismatched == 0 {
        Ok(ExitCode::Clean)
    } else {
        Ok(ExitCode::MismatchesFound)
    }
}

fn cmd_check(args: &CheckArgs, global: &GlobalOpts) -> tt_common::Result<ExitCode> {
    let workbook = ReferenceWorkbook::load(&args.reference)?;
    let rows = workbook.agreement.len();

    match global.format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "reference": args.reference.display().to_string(),
                "agreement_rows": rows,
                "valid": true,
            })
        ),
        OutputFormat::Md => println!(
            "# Reference Check\n\n{} is valid ({} agreement rows).",
            args.reference.display(),
            rows
        ),
        OutputFormat::Summary => {
            println!("reference valid: {rows} agreement rows")
        }
    }

    Ok(ExitCode::Clean)
}
