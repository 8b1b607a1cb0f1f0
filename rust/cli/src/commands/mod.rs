//! Command handler modules for the crib CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: output streams (`&mut dyn Write`) passed as parameters
//! - Flag values arrive as `Option`s and fall back to the resolved [`crate::config::Config`]

mod best;
mod cfg;
mod deal;
mod enumerate;
mod score;

pub use best::handle_best_command;
pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use enumerate::handle_enumerate_command;
pub use score::handle_score_command;
