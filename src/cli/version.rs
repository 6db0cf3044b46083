//! Version and help output.

/// The current version of inflight, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: inflight [OPTIONS]

Shows a loading spinner while requests to a users API are in flight.

Options:
      --api-url <URL>        Base URL of the users API
      --max-delay-ms <MS>    Upper bound of the random response delay (0 disables)
      --timeout-secs <SECS>  Per-request transport timeout
      --log <FILTER>         Log filter, e.g. inflight=debug
  -V, --version              Print version
  -h, --help                 Print help

Keys: c/Enter request a user, x cancel latest, X cancel all, d clear, q quit";

/// Version line printed by `--version`.
pub fn version_string() -> String {
    format!("inflight {}", VERSION)
}
