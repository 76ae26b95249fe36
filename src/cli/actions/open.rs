use crate::{cli::globals::GlobalArgs, routes};
use anyhow::Result;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub route: routes::Route,
}

/// Render the view behind a route.
/// # Errors
/// Returns an error if the API URL is invalid.
pub async fn execute(args: Args) -> Result<()> {
    let service = args.globals.service()?;

    debug!(route = %args.route, "opening route");
    println!("{}", routes::render(&service, args.route).await);

    Ok(())
}
