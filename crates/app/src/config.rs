use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_FILE: &str = "data.json";
pub const DEFAULT_REPORT_TITLE: &str = "Study Tracker";

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidPort { raw: String },
    EmptyValue { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidPort { raw } => write!(f, "invalid port: {raw}"),
            ArgsError::EmptyValue { flag } => write!(f, "{flag} must not be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

/// Runtime settings: environment first, command-line flags override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub data_file: PathBuf,
    pub report_title: String,
    pub log_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            report_title: DEFAULT_REPORT_TITLE.to_owned(),
            log_json: false,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Serve(AppConfig),
    Help,
}

impl AppConfig {
    /// Read from the process environment and arguments.
    ///
    /// # Errors
    ///
    /// Returns `ArgsError` for unknown flags or unusable values.
    pub fn from_process() -> Result<Invocation, ArgsError> {
        Self::parse(|key| std::env::var(key).ok(), std::env::args().skip(1))
    }

    /// # Errors
    ///
    /// Returns `ArgsError` for unknown flags or unusable values.
    pub fn parse(
        env: impl Fn(&str) -> Option<String>,
        args: impl IntoIterator<Item = String>,
    ) -> Result<Invocation, ArgsError> {
        let mut config = AppConfig::default();

        if let Some(raw) = env("PORT") {
            config.port = parse_port(raw)?;
        }
        if let Some(path) = env("TRACKER_DATA_FILE").filter(|v| !v.trim().is_empty()) {
            config.data_file = PathBuf::from(path);
        }
        if let Some(title) = env("TRACKER_REPORT_TITLE").filter(|v| !v.trim().is_empty()) {
            config.report_title = title;
        }
        config.log_json = env("TRACKER_LOG_JSON").is_some_and(|v| parse_bool(&v));

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--port" => config.port = parse_port(require_value(&mut args, "--port")?)?,
                "--data" => {
                    let value = require_value(&mut args, "--data")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyValue { flag: "--data" });
                    }
                    config.data_file = PathBuf::from(value);
                }
                "--report-title" => {
                    let value = require_value(&mut args, "--report-title")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyValue {
                            flag: "--report-title",
                        });
                    }
                    config.report_title = value;
                }
                "--help" | "-h" => return Ok(Invocation::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Invocation::Serve(config))
    }
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  study-tracker [--port <port>] [--data <file>] [--report-title <title>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --port {DEFAULT_PORT}");
    eprintln!("  --data {DEFAULT_DATA_FILE}");
    eprintln!("  --report-title \"{DEFAULT_REPORT_TITLE}\"");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PORT, TRACKER_DATA_FILE, TRACKER_REPORT_TITLE, TRACKER_LOG_JSON, RUST_LOG");
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_port(raw: String) -> Result<u16, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidPort { raw })
}

fn parse_bool(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse(env: &[(&str, &str)], args: &[&str]) -> Result<Invocation, ArgsError> {
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        AppConfig::parse(
            |key| env.get(key).cloned(),
            args.iter().map(|a| (*a).to_owned()),
        )
    }

    #[test]
    fn defaults_apply_without_input() {
        assert_eq!(parse(&[], &[]), Ok(Invocation::Serve(AppConfig::default())));
    }

    #[test]
    fn flags_override_environment() {
        let parsed = parse(
            &[
                ("PORT", "8080"),
                ("TRACKER_DATA_FILE", "env.json"),
                ("TRACKER_LOG_JSON", "true"),
            ],
            &["--port", "9000", "--report-title", "Exam Prep"],
        )
        .unwrap();
        let Invocation::Serve(config) = parsed else {
            panic!("expected serve");
        };
        assert_eq!(config.port, 9000);
        assert_eq!(config.data_file, PathBuf::from("env.json"));
        assert_eq!(config.report_title, "Exam Prep");
        assert!(config.log_json);
    }

    #[test]
    fn bad_input_is_reported() {
        assert_eq!(
            parse(&[], &["--port", "http"]),
            Err(ArgsError::InvalidPort { raw: "http".into() })
        );
        assert_eq!(
            parse(&[], &["--data"]),
            Err(ArgsError::MissingValue { flag: "--data" })
        );
        assert_eq!(
            parse(&[], &["--verbose"]),
            Err(ArgsError::UnknownArg("--verbose".into()))
        );
        assert_eq!(parse(&[("PORT", "70000")], &[]).unwrap_err().to_string(), "invalid port: 70000");
        assert_eq!(parse(&[], &["-h"]), Ok(Invocation::Help));
    }
}
