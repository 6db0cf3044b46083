//! CLI module for inflight.
//!
//! Handles flags before the TUI starts:
//!
//! ```ignore
//! use inflight::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(overrides) = run_cli_command(command) {
//!     // start the TUI with overrides applied
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, CliOverrides};
pub use version::{version_string, USAGE, VERSION};

/// Print output for informational commands.
///
/// Returns the overrides to run the TUI with, or `None` when the command
/// was fully handled here.
pub fn run_cli_command(command: CliCommand) -> Option<CliOverrides> {
    match command {
        CliCommand::Version => {
            println!("{}", version_string());
            None
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            None
        }
        CliCommand::Run(overrides) => Some(overrides),
    }
}
