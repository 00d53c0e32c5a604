// NOTE: shelfview CLI Architecture Rationale
//
// Why one-shot commands (not a REPL)?
// - Every command is a full action cycle: load snapshot, dispatch, render, exit
// - Composable with shell pipelines and scripts; state lives in the snapshot store
// - Trade-off: the snapshot is re-read per invocation, which is cheap at this scale
//
// Why route everything through the runtime Controller?
// - The CLI is just one Renderer/InputAdapter pair over the shared view pipeline
// - Filter flags, sort tokens, and page bounds behave identically for any frontend
// - Keeps validation and page-reset rules out of argument handling

mod args;
mod commands;
mod handlers;
mod output;

pub use args::{Cli, Commands, ConfigCommand, OutputFormat};
pub use commands::run;
