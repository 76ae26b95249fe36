use crate::cli::{
    actions::{open, server, users, users::UserCommand, Action},
    globals::GlobalArgs,
};
use crate::routes::Route;
use anyhow::{anyhow, Context, Result};

/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let api_url = matches
        .get_one::<String>("api-url")
        .cloned()
        .context("missing required argument: --api-url")?;
    let globals = GlobalArgs::new(api_url);

    match matches.subcommand() {
        Some(("users", sub_m)) => Ok(Action::Users(users::Args {
            globals,
            command: user_command(sub_m)?,
        })),
        Some(("open", sub_m)) => {
            let path = sub_m
                .get_one::<String>("path")
                .context("missing required argument: path")?;
            let route = Route::parse(path).ok_or_else(|| anyhow!("unknown route: {path}"))?;

            Ok(Action::Open(open::Args { globals, route }))
        }
        Some(("serve", sub_m)) => Ok(Action::Server(server::Args {
            port: sub_m.get_one::<u16>("port").copied().unwrap_or(8080),
        })),
        Some(("openapi", _)) => Ok(Action::OpenApi),
        _ => Err(anyhow!("missing subcommand")),
    }
}

fn user_command(matches: &clap::ArgMatches) -> Result<UserCommand> {
    // Closure to return the required id of a subcommand
    let id = |sub_m: &clap::ArgMatches| -> Result<i64> {
        sub_m
            .get_one::<i64>("id")
            .copied()
            .context("missing required argument: id")
    };
    let text = |sub_m: &clap::ArgMatches, name: &str| sub_m.get_one::<String>(name).cloned();

    match matches.subcommand() {
        Some(("list", _)) => Ok(UserCommand::List),
        Some(("show", sub_m)) => Ok(UserCommand::Show { id: id(sub_m)? }),
        Some(("create", sub_m)) => Ok(UserCommand::Create {
            name: text(sub_m, "name").context("missing required argument: --name")?,
            email: text(sub_m, "email").context("missing required argument: --email")?,
        }),
        Some(("edit", sub_m)) => Ok(UserCommand::Edit {
            id: id(sub_m)?,
            name: text(sub_m, "name"),
            email: text(sub_m, "email"),
        }),
        Some(("delete", sub_m)) => Ok(UserCommand::Delete { id: id(sub_m)? }),
        _ => Err(anyhow!("missing users subcommand")),
    }
}
