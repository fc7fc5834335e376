use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use serde::Serialize;
use telegraph_core::{
    API_BASE_URL, AccountField, Client, ClientConfig, PageDraft, TokenStore, ViewsQuery, nodes_from_html_bytes,
};
use tracing_subscriber::EnvFilter;
use url::Url;

#[cfg(test)]
mod completions;
mod echo;

use echo::{
    format_size, print_banner, print_error, print_info, print_step, print_success, print_warning, render_account,
    render_page, render_page_list, render_views,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for API results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Publish HTML to Telegraph and manage Telegraph accounts
#[derive(Parser, Debug)]
#[command(name = "telegraph")]
#[command(version)]
#[command(about = "Publish HTML to Telegraph and manage Telegraph accounts", long_about = None)]
struct Cli {
    /// Access token (default: the saved token)
    #[arg(long, global = true, env = "TELEGRAPH_ACCESS_TOKEN", hide_env_values = true, value_name = "TOKEN")]
    token: Option<String>,

    /// File holding the saved access token (default: ~/.config/telegraph/access_token)
    #[arg(long, global = true, value_name = "FILE")]
    token_file: Option<PathBuf>,

    /// API endpoint
    #[arg(long, global = true, env = "TELEGRAPH_API_URL", default_value = API_BASE_URL, value_parser = parse_url, value_name = "URL")]
    base_url: String,

    /// HTTP timeout in seconds
    #[arg(long, global = true, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an HTML fragment to Telegraph content nodes (no network)
    Convert {
        /// Local HTML file, or "-" for stdin
        #[arg(value_name = "INPUT", default_value = "-")]
        input: String,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Manage the Telegraph account
    #[command(subcommand)]
    Account(AccountCommand),

    /// Create, edit and fetch pages
    #[command(subcommand)]
    Page(PageCommand),

    /// Show the number of views of a page
    Views {
        /// Page path, e.g. Sample-Page-12-15
        path: String,

        #[arg(long, value_parser = clap::value_parser!(u16).range(2000..=2100))]
        year: Option<u16>,

        #[arg(long, requires = "year", value_parser = clap::value_parser!(u8).range(1..=12))]
        month: Option<u8>,

        #[arg(long, requires = "month", value_parser = clap::value_parser!(u8).range(1..=31))]
        day: Option<u8>,

        #[arg(long, requires = "day", value_parser = clap::value_parser!(u8).range(0..=24))]
        hour: Option<u8>,
    },
}

#[derive(Subcommand, Debug)]
enum AccountCommand {
    /// Create a new account and save its access token
    Create {
        /// Account name, 1-32 characters
        short_name: String,

        #[command(flatten)]
        author: AuthorArgs,

        /// Do not save the new access token
        #[arg(long)]
        no_save: bool,
    },

    /// Show account information
    Info {
        /// Fields to request (short_name, author_name, author_url, auth_url, page_count)
        #[arg(long, value_delimiter = ',', value_name = "FIELDS")]
        fields: Vec<AccountField>,
    },

    /// Update account information
    Edit {
        /// Account name, 1-32 characters
        short_name: String,

        #[command(flatten)]
        author: AuthorArgs,
    },

    /// Revoke the access token and save the new one
    Revoke {
        /// Do not save the new access token
        #[arg(long)]
        no_save: bool,
    },
}

#[derive(Subcommand, Debug)]
enum PageCommand {
    /// Publish an HTML fragment as a new page
    Create {
        /// Page title, 1-256 characters
        title: String,

        #[command(flatten)]
        body: PageBodyArgs,
    },

    /// Replace the content of an existing page
    Edit {
        /// Page path
        path: String,

        /// Page title, 1-256 characters
        title: String,

        #[command(flatten)]
        body: PageBodyArgs,
    },

    /// Fetch a page
    Get {
        /// Page path
        path: String,

        /// Include the page content
        #[arg(long)]
        content: bool,
    },

    /// List pages of the account
    List {
        #[arg(long, default_value = "0")]
        offset: u32,

        #[arg(long, default_value = "50", value_parser = clap::value_parser!(u32).range(0..=200))]
        limit: u32,
    },
}

#[derive(Args, Debug)]
struct AuthorArgs {
    /// Author name, 0-128 characters
    #[arg(long, value_name = "NAME")]
    author_name: Option<String>,

    /// Author profile link
    #[arg(long, value_parser = parse_url, value_name = "URL")]
    author_url: Option<String>,
}

#[derive(Args, Debug)]
struct PageBodyArgs {
    /// Local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    input: String,

    #[command(flatten)]
    author: AuthorArgs,

    /// Ask the service to return the page content
    #[arg(long)]
    return_content: bool,
}

fn parse_url(s: &str) -> Result<String, String> {
    let url = Url::parse(s).map_err(|e| format!("invalid URL {}: {}", s, e))?;
    match url.scheme() {
        "http" | "https" => Ok(s.to_string()),
        other => Err(format!("unsupported URL scheme: {}", other)),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("telegraph_core=debug,telegraph=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Read HTML from a file or stdin
fn read_input(input: &str) -> anyhow::Result<Vec<u8>> {
    if input == "-" {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer).context("Failed to read from stdin")?;
        Ok(buffer)
    } else {
        fs::read(input).with_context(|| format!("Failed to read file: {}", input))
    }
}

fn print_output<T: Serialize>(format: OutputFormat, value: &T, text: impl FnOnce(&T) -> String) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value).context("Failed to encode JSON")?),
        OutputFormat::Text => print!("{}", text(value)),
    }
    Ok(())
}

struct App {
    cli: Cli,
    store: TokenStore,
}

impl App {
    fn new(cli: Cli) -> anyhow::Result<Self> {
        let store = match &cli.token_file {
            Some(path) => TokenStore::new(path.clone()),
            None => TokenStore::default_location().context("Failed to locate token file")?,
        };
        Ok(Self { cli, store })
    }

    fn config(&self) -> ClientConfig {
        ClientConfig::builder()
            .base_url(self.cli.base_url.as_str())
            .timeout(self.cli.timeout)
            .user_agent(format!("telegraph-cli/{}", VERSION))
            .build()
    }

    fn token(&self) -> anyhow::Result<String> {
        if let Some(token) = &self.cli.token {
            return Ok(token.clone());
        }

        match self.store.load().context("Failed to read saved access token")? {
            Some(token) => Ok(token),
            None => bail!(
                "no access token: pass --token, set TELEGRAPH_ACCESS_TOKEN, or run `telegraph account create`"
            ),
        }
    }

    fn client(&self) -> anyhow::Result<Client> {
        Ok(Client::with_access_token(self.token()?, self.config())?)
    }

    fn anonymous_client(&self) -> anyhow::Result<Client> {
        Ok(Client::new(self.config())?)
    }

    fn save_token(&self, token: Option<&str>) -> anyhow::Result<()> {
        match token {
            Some(token) => {
                self.store.save(token).context("Failed to save access token")?;
                print_success(&format!("Access token saved to {}", self.store.path().display().bright_white()));
            }
            None => print_warning("The service returned no access token"),
        }
        Ok(())
    }

    fn read_body(&self, title: &str, body: &PageBodyArgs) -> anyhow::Result<PageDraft> {
        let html = read_input(&body.input)?;
        if self.cli.verbose {
            print_step(1, 2, "Converting HTML");
            eprintln!("  {} {}", "Size:".dimmed(), format_size(html.len()).bright_white());
        }

        let content = nodes_from_html_bytes(&html).context("Failed to parse HTML")?;
        if self.cli.verbose {
            eprintln!("  {} {}", "Nodes:".dimmed(), content.len().to_string().bright_white());
            print_step(2, 2, "Publishing");
        }

        let mut draft = PageDraft::new(title, content).return_content(body.return_content);
        draft.author_name = body.author.author_name.clone();
        draft.author_url = body.author.author_url.clone();
        Ok(draft)
    }

    async fn run(&self) -> anyhow::Result<()> {
        let format = self.cli.format;

        match &self.cli.command {
            Command::Convert { input, pretty } => {
                let html = read_input(input)?;
                if self.cli.verbose {
                    print_info(&format!("Converting {} of HTML", format_size(html.len())));
                }

                let nodes = nodes_from_html_bytes(&html).context("Failed to parse HTML")?;
                let json = if *pretty { serde_json::to_string_pretty(&nodes) } else { serde_json::to_string(&nodes) };
                println!("{}", json.context("Failed to encode nodes")?);
            }

            Command::Account(AccountCommand::Create { short_name, author, no_save }) => {
                let client = self.anonymous_client()?;
                let account = client
                    .create_account(short_name, author.author_name.as_deref(), author.author_url.as_deref())
                    .await
                    .context("Failed to create account")?;

                print_output(format, &account, render_account)?;
                if !*no_save {
                    self.save_token(account.access_token.as_deref())?;
                }
            }

            Command::Account(AccountCommand::Info { fields }) => {
                let account = self
                    .client()?
                    .get_account_info(fields)
                    .await
                    .context("Failed to fetch account info")?;
                print_output(format, &account, render_account)?;
            }

            Command::Account(AccountCommand::Edit { short_name, author }) => {
                let account = self
                    .client()?
                    .edit_account_info(short_name, author.author_name.as_deref(), author.author_url.as_deref())
                    .await
                    .context("Failed to edit account")?;
                print_output(format, &account, render_account)?;
            }

            Command::Account(AccountCommand::Revoke { no_save }) => {
                let mut client = self.client()?;
                let account = client.revoke_access_token().await.context("Failed to revoke access token")?;

                print_output(format, &account, render_account)?;
                if !*no_save {
                    self.save_token(client.access_token())?;
                }
            }

            Command::Page(PageCommand::Create { title, body }) => {
                let draft = self.read_body(title, body)?;
                let page = self.client()?.create_page(&draft).await.context("Failed to create page")?;
                print_output(format, &page, render_page)?;
            }

            Command::Page(PageCommand::Edit { path, title, body }) => {
                let draft = self.read_body(title, body)?;
                let page = self.client()?.edit_page(path, &draft).await.context("Failed to edit page")?;
                print_output(format, &page, render_page)?;
            }

            Command::Page(PageCommand::Get { path, content }) => {
                let page = self
                    .anonymous_client()?
                    .get_page(path, *content)
                    .await
                    .context("Failed to fetch page")?;
                print_output(format, &page, render_page)?;
            }

            Command::Page(PageCommand::List { offset, limit }) => {
                let list = self
                    .client()?
                    .get_page_list(*offset, *limit)
                    .await
                    .context("Failed to list pages")?;
                print_output(format, &list, render_page_list)?;
            }

            Command::Views { path, year, month, day, hour } => {
                let query = ViewsQuery { year: *year, month: *month, day: *day, hour: *hour };
                let views = self
                    .anonymous_client()?
                    .get_views(path, &query)
                    .await
                    .context("Failed to fetch views")?;
                print_output(format, &views, |v| render_views(path, v))?;
            }
        }

        Ok(())
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let result = match App::new(cli) {
        Ok(app) => app.run().await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
