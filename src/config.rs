use crate::report::ReportFormat;
use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable consulted when `--bundle` is not given.
pub const BUNDLE_ENV: &str = "DEME_BUNDLE";

pub const USAGE: &str = "\
usage:
  deme predict --input <students.csv> [--bundle <bundle.json>] [--out <file>] [--format csv|tsv|json] [--explain]
  deme score-record --record <json> [--bundle <bundle.json>] [--explain]
  deme schema

The bundle path falls back to $DEME_BUNDLE. Log level is read from $RUST_LOG.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing command")]
    MissingCommand,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("{0} is required")]
    MissingRequired(&'static str),

    #[error("invalid --format '{0}' (use csv|tsv|json)")]
    InvalidFormat(String),

    #[error("no model bundle given: pass --bundle or set {}", BUNDLE_ENV)]
    MissingBundle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Predict {
        input: PathBuf,
        out: Option<PathBuf>,
        format: ReportFormat,
        explain: bool,
    },
    ScoreRecord {
        record: String,
        explain: bool,
    },
    Schema,
}

impl Command {
    /// `predict --explain` without `--out` owns stdout with the report, so
    /// the ranking goes to stderr.
    pub fn explains_on_stderr(&self) -> bool {
        matches!(
            self,
            Command::Predict {
                out: None,
                explain: true,
                ..
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub bundle: Option<PathBuf>,
    pub command: Command,
}

impl RunConfig {
    /// The explicit `--bundle` path, else the value of [`BUNDLE_ENV`].
    pub fn resolve_bundle_path(&self, env_value: Option<OsString>) -> Result<PathBuf, ConfigError> {
        self.bundle
            .clone()
            .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
            .ok_or(ConfigError::MissingBundle)
    }

    pub fn bundle_path(&self) -> Result<PathBuf, ConfigError> {
        self.resolve_bundle_path(std::env::var_os(BUNDLE_ENV))
    }
}

pub fn parse_args(args: &[String]) -> Result<RunConfig, ConfigError> {
    let (cmd, rest) = args.split_first().ok_or(ConfigError::MissingCommand)?;

    let mut bundle: Option<PathBuf> = None;
    let mut input: Option<PathBuf> = None;
    let mut out: Option<PathBuf> = None;
    let mut record: Option<String> = None;
    let mut format = ReportFormat::Csv;
    let mut explain = false;

    let mut i = 0usize;
    while i < rest.len() {
        match rest[i].as_str() {
            "--bundle" => bundle = Some(PathBuf::from(value_of(rest, &mut i, "--bundle")?)),
            "--input" => input = Some(PathBuf::from(value_of(rest, &mut i, "--input")?)),
            "--out" => out = Some(PathBuf::from(value_of(rest, &mut i, "--out")?)),
            "--record" => record = Some(value_of(rest, &mut i, "--record")?.to_string()),
            "--format" => {
                let raw = value_of(rest, &mut i, "--format")?;
                format = ReportFormat::from_str(raw)
                    .map_err(|_| ConfigError::InvalidFormat(raw.to_string()))?;
            }
            "--explain" => explain = true,
            other => return Err(ConfigError::UnknownOption(other.to_string())),
        }
        i += 1;
    }

    let command = match cmd.as_str() {
        "predict" => Command::Predict {
            input: input.ok_or(ConfigError::MissingRequired("--input"))?,
            out,
            format,
            explain,
        },
        "score-record" => Command::ScoreRecord {
            record: record.ok_or(ConfigError::MissingRequired("--record"))?,
            explain,
        },
        "schema" => Command::Schema,
        other => return Err(ConfigError::UnknownCommand(other.to_string())),
    };

    Ok(RunConfig { bundle, command })
}

fn value_of<'a>(args: &'a [String], i: &mut usize, flag: &'static str) -> Result<&'a str, ConfigError> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or(ConfigError::MissingValue(flag))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_predict() {
        let config = parse_args(&args(&[
            "predict",
            "--bundle",
            "deme.json",
            "--input",
            "students.csv",
            "--format",
            "json",
            "--explain",
        ]))
        .unwrap();
        assert_eq!(config.bundle, Some(PathBuf::from("deme.json")));
        assert_eq!(
            config.command,
            Command::Predict {
                input: PathBuf::from("students.csv"),
                out: None,
                format: ReportFormat::Json,
                explain: true,
            }
        );
    }

    #[test]
    fn parses_score_record_and_schema() {
        let config = parse_args(&args(&["score-record", "--record", "{\"a\":1}"])).unwrap();
        assert_eq!(
            config.command,
            Command::ScoreRecord {
                record: "{\"a\":1}".into(),
                explain: false
            }
        );
        assert_eq!(parse_args(&args(&["schema"])).unwrap().command, Command::Schema);
    }

    #[test]
    fn ranking_leaves_stdout_to_the_report() {
        let piped = parse_args(&args(&["predict", "--input", "s.csv", "--explain"])).unwrap();
        assert!(piped.command.explains_on_stderr());

        let to_file = parse_args(&args(&[
            "predict", "--input", "s.csv", "--out", "p.json", "--explain",
        ]))
        .unwrap();
        assert!(!to_file.command.explains_on_stderr());

        let record = parse_args(&args(&["score-record", "--record", "{}", "--explain"])).unwrap();
        assert!(!record.command.explains_on_stderr());
    }

    #[test]
    fn reports_bad_invocations() {
        assert_eq!(parse_args(&[]), Err(ConfigError::MissingCommand));
        assert_eq!(
            parse_args(&args(&["train"])),
            Err(ConfigError::UnknownCommand("train".into()))
        );
        assert_eq!(
            parse_args(&args(&["predict"])),
            Err(ConfigError::MissingRequired("--input"))
        );
        assert_eq!(
            parse_args(&args(&["predict", "--input"])),
            Err(ConfigError::MissingValue("--input"))
        );
        assert_eq!(
            parse_args(&args(&["predict", "--input", "x.csv", "--format", "xml"])),
            Err(ConfigError::InvalidFormat("xml".into()))
        );
        assert_eq!(
            parse_args(&args(&["schema", "--verbose"])),
            Err(ConfigError::UnknownOption("--verbose".into()))
        );
    }

    #[test]
    fn bundle_path_falls_back_to_environment() {
        let config = parse_args(&args(&["schema"])).unwrap();
        assert_eq!(
            config.resolve_bundle_path(Some("env.json".into())),
            Ok(PathBuf::from("env.json"))
        );
        assert_eq!(
            config.resolve_bundle_path(Some("".into())),
            Err(ConfigError::MissingBundle)
        );
        assert_eq!(config.resolve_bundle_path(None), Err(ConfigError::MissingBundle));

        let explicit = parse_args(&args(&["schema", "--bundle", "cli.json"])).unwrap();
        assert_eq!(
            explicit.resolve_bundle_path(Some("env.json".into())),
            Ok(PathBuf::from("cli.json"))
        );
    }
}
