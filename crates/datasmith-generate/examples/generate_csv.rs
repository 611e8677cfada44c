use std::env;
use std::path::PathBuf;

use datasmith_core::GenerationRequest;
use datasmith_generate::output::write_csv;
use datasmith_generate::{GenerateOptions, GenerationEngine};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut request_path: Option<PathBuf> = None;
    let mut out_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--request" => request_path = args.next().map(PathBuf::from),
            "--out" => out_path = args.next().map(PathBuf::from),
            _ => {
                if request_path.is_none() {
                    request_path = Some(PathBuf::from(arg));
                } else {
                    return Err("unexpected argument".into());
                }
            }
        }
    }

    let request_path = request_path.ok_or("missing --request path")?;
    let request_json = std::fs::read_to_string(&request_path)?;
    let request: GenerationRequest = serde_json::from_str(&request_json)?;

    let engine = GenerationEngine::new(GenerateOptions::default());
    let result = engine.generate(&request)?;

    let bytes = match out_path {
        Some(path) => {
            let file = std::io::BufWriter::new(std::fs::File::create(&path)?);
            write_csv(file, &request.fields, &result.rows)?
        }
        None => write_csv(std::io::stdout().lock(), &request.fields, &result.rows)?,
    };

    eprintln!(
        "seed={} rows={} used_fallback={} bytes={bytes}",
        result.report.seed, result.report.rows_generated, result.used_fallback
    );
    Ok(())
}
