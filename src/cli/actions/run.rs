use crate::cli::actions::{Action, open, openapi, server, users};
use anyhow::Result;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Server(args) => server::execute(args).await,
        Action::Users(args) => users::execute(args).await,
        Action::Open(args) => open::execute(args).await,
        Action::OpenApi => openapi::execute(),
    }
}
