use anyhow::{Context, Result};
use deme::bundle::ModelBundle;
use deme::config::{Command, ConfigError, RunConfig, USAGE, parse_args};
use deme::core::features::FeatureVector;
use deme::ensemble::{EnsembleResult, ModelRanking};
use deme::input::{TabularBatch, record_for_schema};
use deme::logging;
use deme::report::{PredictionTable, ReportFormat};
use deme::tasks::Predictor;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    if let Err(err) = logging::init() {
        eprintln!("{err}");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            if matches!(
                err,
                ConfigError::MissingCommand | ConfigError::UnknownCommand(_)
            ) {
                eprintln!("{USAGE}");
            }
            return ExitCode::from(2);
        }
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: RunConfig) -> Result<()> {
    if config.command == Command::Schema {
        let schema = ModelBundle::json_schema();
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let ranking_on_stderr = config.command.explains_on_stderr();
    let bundle_path = config.bundle_path()?;
    let predictor = load_predictor(&bundle_path)?;

    match config.command {
        Command::Predict {
            input,
            out,
            format,
            explain,
        } => {
            let table = TabularBatch::from_path(&input)?;
            let rows = table
                .to_feature_vectors(predictor.schema())
                .with_context(|| format!("reading {}", input.display()))?;
            info!(rows = rows.len(), input = %input.display(), "scoring batch");

            let result = predictor.predict(&rows).context("scoring batch")?;
            let report = PredictionTable::new(&rows, &result)?;
            match out {
                Some(path) => {
                    report
                        .export(&path, format)
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!(out = %path.display(), %format, "predictions written");
                }
                None => {
                    let mut stdout = io::stdout().lock();
                    report.write(&mut stdout, format)?;
                    stdout.flush()?;
                }
            }
            if explain {
                if ranking_on_stderr {
                    print_ranking(&mut io::stderr().lock(), &result, format)?;
                } else {
                    print_ranking(&mut io::stdout().lock(), &result, format)?;
                }
            }
        }
        Command::ScoreRecord { record, explain } => {
            let value: serde_json::Value =
                serde_json::from_str(&record).context("parsing --record")?;
            let row = record_for_schema(&value, predictor.schema())?;
            let result = predictor.predict_one(&row).context("scoring record")?;
            print_single(&row, &result)?;
            if explain {
                print_ranking(&mut io::stdout().lock(), &result, ReportFormat::Csv)?;
            }
        }
        Command::Schema => {}
    }
    Ok(())
}

fn load_predictor(path: &Path) -> Result<Predictor> {
    let bundle = ModelBundle::from_path(path)?;
    bundle
        .into_predictor()
        .with_context(|| format!("loading model bundle {}", path.display()))
}

fn print_single(row: &FeatureVector, result: &EnsembleResult) -> Result<()> {
    let Some(prediction) = result.rows().first() else {
        return Ok(());
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "predicted state: {}", prediction.outcome)?;
    writeln!(stdout, "confidence: {:.2}%", prediction.mean_confidence_pct)?;
    writeln!(stdout, "weighted score: {:.6}", prediction.weighted_score)?;
    for (name, value) in row.names().iter().zip(row.values()) {
        writeln!(stdout, "  {name}: {value}")?;
    }
    Ok(())
}

fn print_ranking(w: &mut dyn Write, result: &EnsembleResult, format: ReportFormat) -> Result<()> {
    let ranking: ModelRanking = result.ranking()?;
    match format {
        ReportFormat::Json => writeln!(w, "{}", serde_json::to_string_pretty(&ranking)?)?,
        ReportFormat::Csv | ReportFormat::Tsv => writeln!(w, "{ranking}")?,
    }
    w.flush()?;
    Ok(())
}
