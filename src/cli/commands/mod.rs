use crate::app_lib::DEFAULT_API_BASE_URL;
use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ArgAction, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

fn id_arg() -> Arg {
    Arg::new("id")
        .help("User id")
        .required(true)
        .value_parser(clap::value_parser!(i64))
}

fn name_arg() -> Arg {
    Arg::new("name").short('n').long("name").help("User name")
}

fn email_arg() -> Arg {
    Arg::new("email").short('e').long("email").help("User email")
}

fn users_command() -> Command {
    Command::new("users")
        .about("List, show, create, edit and delete users")
        .subcommand_required(true)
        .subcommand(Command::new("list").about("List all users"))
        .subcommand(Command::new("show").about("Show one user").arg(id_arg()))
        .subcommand(
            Command::new("create")
                .about("Create a user")
                .arg(name_arg().required(true))
                .arg(email_arg().required(true)),
        )
        .subcommand(
            Command::new("edit")
                .about("Edit a user, omitted fields keep their stored value")
                .arg(id_arg())
                .arg(name_arg())
                .arg(email_arg()),
        )
        .subcommand(Command::new("delete").about("Delete a user").arg(id_arg()))
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("userdesk")
        .about("Manage user records over a REST API")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg(
            Arg::new("api-url")
                .short('a')
                .long("api-url")
                .help("Base URL of the users API")
                .default_value(DEFAULT_API_BASE_URL)
                .env("USERDESK_API_URL")
                .global(true),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .help("Write logs as JSON")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("USERDESK_LOG_LEVEL")
                .global(true)
                .action(ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .subcommand(users_command())
        .subcommand(
            Command::new("open")
                .about("Render the screen behind a route, e.g. /users, /user/3 or /user-form/3")
                .arg(Arg::new("path").help("Route path").required(true)),
        )
        .subcommand(
            Command::new("serve")
                .about("Run the in-memory development backend")
                .arg(
                    Arg::new("port")
                        .short('p')
                        .long("port")
                        .help("Port to listen on")
                        .default_value("8080")
                        .env("USERDESK_PORT")
                        .value_parser(clap::value_parser!(u16)),
                ),
        )
        .subcommand(Command::new("openapi").about("Print the backend OpenAPI document"))
}
