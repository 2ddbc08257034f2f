//! Command dispatch: bridges CLI args -> `CrudPage` actions -> output formatting.

pub mod about;
pub mod config_cmd;
pub mod crud;
pub mod gallery;
pub mod press;
pub mod slides;
pub mod util;
pub mod videos;

use lifeline_core::Controller;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a backend-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    controller: &Controller,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Videos(args) => videos::handle(controller, args, global).await,
        Command::Gallery(args) => gallery::handle(controller, args, global).await,
        Command::About(args) => about::handle(controller, args, global).await,
        Command::Press(args) => press::handle(controller, args, global).await,
        Command::Slides(args) => slides::handle(controller, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
