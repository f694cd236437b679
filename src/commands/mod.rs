//! Command dispatch and handlers.
//!
//! Handlers render their output into a `String`; only `dispatch` prints, so
//! every handler can be exercised against an in-memory context.

pub mod export;
pub mod generate;
pub mod history;
pub mod queue;
pub mod sheet;

use crate::cli::{Cli, Command, QueueCommand};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::session::Session;

/// Dispatch a parsed command against the live store.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let config = Config::from_env().with_store_override(cli.store.as_deref());
    tracing::debug!(store = %config.store_root.display(), "using store");
    let ctx = ServiceContext::live(&config.store_root);
    let output = dispatch_with_context(&cli.command, &ctx, &config)?;
    print!("{output}");
    Ok(())
}

/// Dispatch a command with the given service context, returning its output.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: &Config,
) -> Result<String, String> {
    let mut session = Session::open(ctx, config.retry_budget);
    match command {
        Command::Generate { label } => generate::run(&mut session, label.as_deref()),
        Command::History => Ok(history::list(&session)),
        Command::Show { id } => history::show(&mut session, id.as_deref()),
        Command::Delete { id } => history::delete(&mut session, id),
        Command::ClearHistory => Ok(history::clear(&mut session)),
        Command::Queue { action } => match action {
            QueueCommand::Add { id, copies } => queue::add(&mut session, id.as_deref(), *copies),
            QueueCommand::Remove { print_id } => queue::remove(&mut session, print_id),
            QueueCommand::Clear => Ok(queue::clear(&mut session)),
            QueueCommand::List => Ok(queue::list(&session)),
        },
        Command::Sheet => Ok(sheet::run(&session)),
        Command::Export { queue: true, .. } => export::queue(&session),
        Command::Export { id, queue: false } => export::entry(&mut session, id.as_deref()),
    }
}
