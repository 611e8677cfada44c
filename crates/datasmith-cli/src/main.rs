mod config;
mod logging;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use datasmith_core::{
    Error as CoreError, FieldKind, GenerationRequest, IssueSeverity, SeedInput, ValidationIssue,
    ValidationReport, request_json_schema, validate_fields, validate_request_json,
};
use datasmith_generate::{ExportFormat, GenerationEngine, GenerationError, write_rows};
use thiserror::Error;

use config::{ConfigError, Settings, load_settings};
use logging::init_logging;

#[derive(Debug, Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("request is invalid: {0} error(s)")]
    Invalid(usize),
}

#[derive(Parser, Debug)]
#[command(name = "datasmith", version, about = "Deterministic synthetic data generator")]
struct Cli {
    /// Path to a settings file (defaults to ./datasmith.toml when present).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate rows from a request document.
    Generate(GenerateArgs),
    /// Validate a request document without generating.
    Validate(ValidateArgs),
    /// List supported field type tags.
    Kinds,
    /// Print the request JSON Schema.
    JsonSchema,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Request document (JSON).
    request: PathBuf,
    /// Override the request's row count.
    #[arg(long)]
    count: Option<u64>,
    /// Override the request's seed.
    #[arg(long)]
    seed: Option<String>,
    /// Export format: csv, json or sql.
    #[arg(long)]
    format: Option<ExportFormat>,
    /// Table name for SQL inserts (defaults to the request file stem).
    #[arg(long)]
    table: Option<String>,
    /// Output file; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Fail on dangling references and other schema errors.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Request document (JSON).
    request: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;
    init_logging(settings.log_format, &settings.log_level).map_err(CliError::Logging)?;

    match cli.command {
        Command::Generate(args) => run_generate(args, &settings),
        Command::Validate(args) => run_validate(args),
        Command::Kinds => {
            for kind in FieldKind::ALL {
                println!("{kind}");
            }
            Ok(())
        }
        Command::JsonSchema => {
            println!("{}", serde_json::to_string_pretty(&request_json_schema())?);
            Ok(())
        }
    }
}

fn run_generate(args: GenerateArgs, settings: &Settings) -> Result<(), CliError> {
    let (mut request, report) = load_request(&args.request)?;
    log_issues(&report.warnings);

    if !report.is_ok() {
        if args.strict || settings.strict_references {
            print_issues(&report.errors);
            return Err(CliError::Invalid(report.errors.len()));
        }
        log_issues(&report.errors);
    }

    if let Some(count) = args.count {
        request.count = count;
    }
    if let Some(seed) = args.seed {
        request.seed = Some(SeedInput::Text(seed));
    }

    let format = args.format.unwrap_or(settings.default_format);
    let table = args.table.unwrap_or_else(|| default_table_name(&args.request));
    let engine = GenerationEngine::new(settings.generate_options(args.strict));

    tracing::info!(
        event = "generate_started",
        request = %args.request.display(),
        format = %format,
        rows = request.count
    );

    let result = engine.generate(&request)?;

    let bytes = match &args.out {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            write_rows(format, BufWriter::new(file), &table, &request.fields, &result.rows)?
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            let bytes = write_rows(format, &mut handle, &table, &request.fields, &result.rows)?;
            handle.flush().map_err(|source| CliError::Io {
                path: PathBuf::from("<stdout>"),
                source,
            })?;
            bytes
        }
    };

    tracing::info!(
        event = "generate_finished",
        seed = %result.report.seed,
        rows = result.report.rows_generated,
        used_fallback = result.used_fallback,
        bytes,
        out = %destination(args.out.as_deref())
    );
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), CliError> {
    let (_, report) = load_request(&args.request)?;
    print_issues(&report.errors);
    print_issues(&report.warnings);
    if !report.is_ok() {
        return Err(CliError::Invalid(report.errors.len()));
    }
    println!(
        "ok: {} ({} warning(s))",
        args.request.display(),
        report.warnings.len()
    );
    Ok(())
}

/// Read a request, check it against the JSON Schema, then check its fields.
///
/// Structural violations are fatal; field issues are returned for the caller
/// to act on.
fn load_request(path: &Path) -> Result<(GenerationRequest, ValidationReport), CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: serde_json::Value = serde_json::from_str(&content)?;
    let schema = serde_json::to_value(request_json_schema())?;

    let structural = validate_request_json(&document, &schema)?;
    if !structural.is_ok() {
        print_issues(&structural.errors);
        return Err(CliError::Invalid(structural.errors.len()));
    }

    let request: GenerationRequest = serde_json::from_value(document)?;
    let report = validate_fields(&request.fields);
    Ok((request, report))
}

fn destination(out: Option<&Path>) -> String {
    out.map(|path| path.display().to_string())
        .unwrap_or_else(|| "<stdout>".to_string())
}

fn default_table_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(|stem| stem.split('.').next())
        .filter(|stem| !stem.is_empty())
        .unwrap_or("dataset")
        .to_string()
}

fn print_issues(issues: &[ValidationIssue]) {
    for issue in issues {
        let level = match issue.severity {
            IssueSeverity::Error => "error",
            IssueSeverity::Warning => "warning",
        };
        eprintln!("{level} [{}] {}: {}", issue.code, issue.path, issue.message);
        if let Some(hint) = &issue.hint {
            eprintln!("  hint: {hint}");
        }
    }
}

fn log_issues(issues: &[ValidationIssue]) {
    for issue in issues {
        tracing::warn!(
            event = "validation_issue",
            code = %issue.code,
            path = %issue.path,
            "{}",
            issue.message
        );
    }
}
