//! Command-line argument parsing.

use std::time::Duration;

use crate::config::{parse_number, AppConfig};
use crate::error::{AppError, AppResult};

/// Settings given on the command line. `None` keeps the configured value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub api_url: Option<String>,
    pub max_delay: Option<Duration>,
    pub request_timeout: Option<Duration>,
    pub log_filter: Option<String>,
}

impl CliOverrides {
    /// Apply these overrides on top of `config`.
    pub fn apply(self, mut config: AppConfig) -> AppResult<AppConfig> {
        if let Some(url) = self.api_url {
            config.api_url = url;
        }
        if let Some(delay) = self.max_delay {
            config.max_delay = delay;
        }
        if let Some(timeout) = self.request_timeout {
            config.request_timeout = timeout;
        }
        if let Some(filter) = self.log_filter {
            config.log_filter = filter;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    Run(CliOverrides),
}

/// Parse command-line arguments, including the program name.
///
/// `--version` and `--help` win over everything else. Both `--flag value`
/// and `--flag=value` are accepted.
///
/// # Examples
///
/// ```
/// use inflight::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["inflight".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> AppResult<CliCommand>
where
    I: Iterator<Item = String>,
{
    let mut overrides = CliOverrides::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline_value) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_string(), Some(value.to_string()))
            }
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--api-url" | "--max-delay-ms" | "--timeout-secs" | "--log" => {
                let value = match inline_value {
                    Some(value) => value,
                    None => args
                        .next()
                        .ok_or_else(|| AppError::config(flag.clone(), "missing value"))?,
                };
                match flag.as_str() {
                    "--api-url" => overrides.api_url = Some(value),
                    "--max-delay-ms" => {
                        overrides.max_delay =
                            Some(Duration::from_millis(parse_number(&flag, &value)?))
                    }
                    "--timeout-secs" => {
                        let secs = parse_number(&flag, &value)?;
                        if secs == 0 {
                            return Err(AppError::config(flag.as_str(), "must be greater than zero"));
                        }
                        overrides.request_timeout = Some(Duration::from_secs(secs));
                    }
                    _ => overrides.log_filter = Some(value),
                }
            }
            other => return Err(AppError::config(other, "unknown argument")),
        }
    }

    Ok(CliCommand::Run(overrides))
}
