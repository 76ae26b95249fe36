use crate::cli::globals::GlobalArgs;
use crate::features::users::{UserForm, UserService};
use crate::routes::{self, UserDetail, UserList};
use anyhow::{bail, Result};
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: UserCommand,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    List,
    Show {
        id: i64,
    },
    Create {
        name: String,
        email: String,
    },
    Edit {
        id: i64,
        name: Option<String>,
        email: Option<String>,
    },
    Delete {
        id: i64,
    },
}

/// Execute a users subcommand and print the resulting screen.
/// # Errors
/// Returns an error if the API URL is invalid or the server rejected the request.
pub async fn execute(args: Args) -> Result<()> {
    let service = args.globals.service()?;

    match args.command {
        UserCommand::List => {
            let list = UserList::load(service).await;
            println!("{list}");
            failed(list.error())
        }
        UserCommand::Show { id } => {
            let detail = UserDetail::load(service, id).await;
            println!("{detail}");
            failed(detail.error())
        }
        UserCommand::Create { name, email } => {
            let mut form = UserForm::init(service.clone(), None).await;
            form.set_name(name);
            form.set_email(email);
            submit(form, &service).await
        }
        UserCommand::Edit { id, name, email } => {
            let mut form = UserForm::init(service.clone(), Some(id)).await;
            if let Some(name) = name {
                form.set_name(name);
            }
            if let Some(email) = email {
                form.set_email(email);
            }
            submit(form, &service).await
        }
        UserCommand::Delete { id } => {
            let mut list = UserList::load(service).await;
            let deleted = list.delete(id).await;
            println!("{list}");
            if deleted {
                Ok(())
            } else {
                failed(list.error())
            }
        }
    }
}

async fn submit(mut form: UserForm, service: &UserService) -> Result<()> {
    match form.submit().await {
        Some(route) => {
            debug!(%route, "navigating after save");
            println!("{}", routes::render(service, route).await);
            Ok(())
        }
        None => {
            println!("{form}");
            bail!("user was not saved")
        }
    }
}

fn failed(error: Option<&str>) -> Result<()> {
    match error {
        Some(error) => bail!("{error}"),
        None => Ok(()),
    }
}
