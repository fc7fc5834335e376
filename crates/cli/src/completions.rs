// Command tree used for shell completions. Shared with build.rs through `include!`,
// so it must only depend on clap.
use clap::{Arg, ArgAction, Command};

fn author_args(cmd: Command) -> Command {
    cmd.arg(clap::arg!(--"author-name" <NAME> "Author name, 0-128 characters"))
        .arg(clap::arg!(--"author-url" <URL> "Author profile link"))
}

/// Positional INPUT comes last, after the command's own positionals
fn page_body_args(cmd: Command) -> Command {
    author_args(cmd)
        .arg(clap::arg!([INPUT] "Local HTML file, or '-' for stdin").default_value("-"))
        .arg(clap::arg!(--"return-content" "Ask the service to return the page content"))
}

pub fn completion_command() -> Command {
    let account = Command::new("account")
        .about("Manage the Telegraph account")
        .subcommand_required(true)
        .subcommand(
            author_args(Command::new("create").about("Create a new account and save its access token"))
                .arg(clap::arg!(<SHORT_NAME> "Account name, 1-32 characters"))
                .arg(clap::arg!(--"no-save" "Do not save the new access token")),
        )
        .subcommand(
            Command::new("info").about("Show account information").arg(
                clap::arg!(--fields <FIELDS> "Fields to request")
                    .value_delimiter(',')
                    .value_parser(["short_name", "author_name", "author_url", "auth_url", "page_count"]),
            ),
        )
        .subcommand(
            author_args(Command::new("edit").about("Update account information"))
                .arg(clap::arg!(<SHORT_NAME> "Account name, 1-32 characters")),
        )
        .subcommand(
            Command::new("revoke")
                .about("Revoke the access token and save the new one")
                .arg(clap::arg!(--"no-save" "Do not save the new access token")),
        );

    let page = Command::new("page")
        .about("Create, edit and fetch pages")
        .subcommand_required(true)
        .subcommand(page_body_args(
            Command::new("create")
                .about("Publish an HTML fragment as a new page")
                .arg(clap::arg!(<TITLE> "Page title, 1-256 characters")),
        ))
        .subcommand(page_body_args(
            Command::new("edit")
                .about("Replace the content of an existing page")
                .arg(clap::arg!(<PATH> "Page path"))
                .arg(clap::arg!(<TITLE> "Page title, 1-256 characters")),
        ))
        .subcommand(
            Command::new("get")
                .about("Fetch a page")
                .arg(clap::arg!(<PATH> "Page path"))
                .arg(clap::arg!(--content "Include the page content")),
        )
        .subcommand(
            Command::new("list")
                .about("List pages of the account")
                .arg(clap::arg!(--offset <NUM> "Sequential number of the first page").default_value("0"))
                .arg(clap::arg!(--limit <NUM> "Number of pages to list (0-200)").default_value("50")),
        );

    let views = Command::new("views")
        .about("Show the number of views of a page")
        .arg(clap::arg!(<PATH> "Page path"))
        .arg(clap::arg!(--year <YEAR> "Year (2000-2100)"))
        .arg(clap::arg!(--month <MONTH> "Month (1-12)").requires("year"))
        .arg(clap::arg!(--day <DAY> "Day of month (1-31)").requires("month"))
        .arg(clap::arg!(--hour <HOUR> "Hour (0-24)").requires("day"));

    Command::new("telegraph")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Publish HTML to Telegraph and manage Telegraph accounts")
        .subcommand_required(true)
        .arg(clap::arg!(--token <TOKEN> "Access token (default: the saved token)").global(true))
        .arg(
            clap::arg!(--"token-file" <FILE> "File holding the saved access token")
                .value_parser(clap::value_parser!(std::path::PathBuf))
                .global(true),
        )
        .arg(clap::arg!(--"base-url" <URL> "API endpoint").global(true))
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30").global(true))
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (text, json)")
                .default_value("text")
                .value_parser(["text", "json"])
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert an HTML fragment to Telegraph content nodes (no network)")
                .arg(clap::arg!([INPUT] "Local HTML file, or '-' for stdin").default_value("-"))
                .arg(clap::arg!(--pretty "Pretty-print the JSON output")),
        )
        .subcommand(account)
        .subcommand(page)
        .subcommand(views)
}
