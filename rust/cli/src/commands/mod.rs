//! Command handlers, one module per subcommand.
//!
//! Every handler has the shape `handle_X_command(..., out, err) ->
//! Result<(), CliError>` with output streams injected so tests can capture
//! them.

mod bank;
mod cfg;
mod eval;
mod play;

pub use bank::handle_reset_bank_command;
pub use cfg::handle_cfg_command;
pub use eval::handle_eval_command;
pub use play::{PlayArgs, handle_play_command};
