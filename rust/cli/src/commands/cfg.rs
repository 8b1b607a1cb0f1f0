//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the resolved
//! configuration with the source of each value (default, environment, or
//! configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "keep": {
//!     "value": 4,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config::ConfigResolved;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Io` if writing to the output stream fails.
pub fn handle_cfg_command(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "keep": {
            "value": config.keep,
            "source": sources.keep,
        },
        "deal_size": {
            "value": config.deal_size,
            "source": sources.deal_size,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "log_level": {
            "value": config.log_level,
            "source": sources.log_level,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
