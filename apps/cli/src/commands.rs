//! CLI command definitions, routing, and tracing setup.

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use nomadplan_client::ApiClient;
use nomadplan_core::{Catalog, ProfileEditor, destination_detail, home, trips};
use nomadplan_query::{Query, results_heading};
use nomadplan_shared::{
    AppConfig, CoworkingSpace, Destination, PreferenceCategory, WorkType, init_config,
    load_config,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::output;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// NomadPlan: travel planning for digital nomads.
#[derive(Parser)]
#[command(
    name = "nomadplan",
    version,
    about = "Find destinations and coworking spaces, review trips, and edit your nomad profile.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// API base URL (overrides config and NOMADPLAN_API_URL).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Load data from the REST API instead of the bundled demo catalog.
    #[arg(long, global = true)]
    pub remote: bool,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Featured destinations and headline stats.
    Home,

    /// Search, filter, and sort destinations.
    Destinations {
        /// Case-insensitive text matched against name, country, description.
        #[arg(short, long, default_value = "")]
        search: String,

        /// Category: all, beach, affordable, startup-friendly, tropical, history.
        #[arg(short, long, default_value = "all")]
        filter: String,

        /// Sort: rating, cost, internet, safety (defaults to config).
        #[arg(long)]
        sort: Option<String>,
    },

    /// Show one destination and its coworking spaces.
    Destination {
        /// Destination ID.
        id: String,
    },

    /// Search, filter, and sort coworking spaces.
    Coworking {
        /// Case-insensitive text matched against name, address, description.
        #[arg(short, long, default_value = "")]
        search: String,

        /// Price range: all, budget, mid, premium.
        #[arg(short, long, default_value = "all")]
        price: String,

        /// Sort: rating, price, internet (defaults to config).
        #[arg(long)]
        sort: Option<String>,
    },

    /// List your trips.
    Trips,

    /// Show the profile, optionally editing it for this session.
    Profile {
        #[command(flatten)]
        edit: ProfileEdit,
    },

    /// Launch the interactive TUI.
    Tui,

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Profile edits applied before the profile is printed.
///
/// Edits are saved into the session only. With `--remote` the changed
/// fields are also sent to the API.
#[derive(clap::Args, Debug, Default)]
pub(crate) struct ProfileEdit {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Empty clears the location.
    #[arg(long)]
    pub location: Option<String>,

    /// Empty clears the bio.
    #[arg(long)]
    pub bio: Option<String>,

    /// e.g. designer, software-developer, content-creator.
    #[arg(long)]
    pub work_type: Option<String>,

    /// Monthly budget in USD. Invalid input becomes 0.
    #[arg(long)]
    pub budget: Option<String>,

    /// Add a preference, as CATEGORY=VALUE (repeatable).
    #[arg(long = "add-pref", value_name = "CATEGORY=VALUE")]
    pub add_prefs: Vec<String>,

    /// Remove a preference, as CATEGORY=VALUE (repeatable).
    #[arg(long = "remove-pref", value_name = "CATEGORY=VALUE")]
    pub remove_prefs: Vec<String>,
}

impl ProfileEdit {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.location.is_none()
            && self.bio.is_none()
            && self.work_type.is_none()
            && self.budget.is_none()
            && self.add_prefs.is_empty()
            && self.remove_prefs.is_empty()
    }
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "nomadplan=info",
        1 => "nomadplan=debug",
        _ => "nomadplan=trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Resolved settings shared by every command.
struct Session {
    config: AppConfig,
    remote: bool,
    json: bool,
}

impl Session {
    fn new(cli: &Cli) -> Result<Self> {
        let mut config = load_config()?;
        if let Some(url) = &cli.api_url {
            config.api.base_url = url.clone();
        }
        Ok(Self {
            config,
            remote: cli.remote,
            json: cli.json,
        })
    }

    fn client(&self) -> Result<ApiClient> {
        Ok(ApiClient::from_config(&self.config)?)
    }

    /// The demo catalog, or the API's when `--remote` is set.
    async fn catalog(&self) -> Result<Catalog> {
        if !self.remote {
            return Ok(Catalog::mock()?);
        }

        let client = self.client()?;
        let spinner = spinner(format!("Loading from {}", client.base_url()));
        let result = Catalog::fetch(&client, &self.config.defaults.user_id).await;
        spinner.finish_and_clear();
        Ok(result?)
    }

    fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

impl Command {
    /// `config init` rewrites the config file, so it must run even when the
    /// current one fails to load.
    fn needs_session(&self) -> bool {
        !matches!(
            self,
            Command::Config {
                action: ConfigAction::Init
            }
        )
    }
}

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    if !cli.command.needs_session() {
        return cmd_config_init();
    }
    let session = Session::new(&cli)?;
    match cli.command {
        Command::Home => cmd_home(&session).await,
        Command::Destinations {
            search,
            filter,
            sort,
        } => cmd_destinations(&session, &search, &filter, sort.as_deref()).await,
        Command::Destination { id } => cmd_destination(&session, &id).await,
        Command::Coworking {
            search,
            price,
            sort,
        } => cmd_coworking(&session, &search, &price, sort.as_deref()).await,
        Command::Trips => cmd_trips(&session).await,
        Command::Profile { edit } => cmd_profile(&session, edit).await,
        Command::Tui => cmd_tui(),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(&session.config),
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

async fn cmd_home(session: &Session) -> Result<()> {
    let catalog = session.catalog().await?;
    let featured = home::featured(&catalog);

    if session.json {
        #[derive(Serialize)]
        struct HomeView<'a> {
            stats: Vec<Stat<'a>>,
            featured: &'a [Destination],
        }
        #[derive(Serialize)]
        struct Stat<'a> {
            label: &'a str,
            value: &'a str,
        }

        let stats = home::HEADLINE_STATS
            .iter()
            .map(|&(label, value)| Stat { label, value })
            .collect();
        return session.print_json(&HomeView { stats, featured });
    }

    print!("{}", output::home(featured));
    Ok(())
}

async fn cmd_destinations(
    session: &Session,
    search: &str,
    filter: &str,
    sort: Option<&str>,
) -> Result<()> {
    let catalog = session.catalog().await?;
    let sort = sort.unwrap_or(session.config.defaults.destination_sort.as_str());
    let query = Query::<Destination>::new()
        .with_search(search)
        .with_filter_key(filter)
        .with_sort_key(sort);

    info!(?query, "listing destinations");
    let results = query.apply(&catalog.destinations);

    if session.json {
        return session.print_json(&results);
    }

    println!("{}", results_heading(results.len(), "destination"));
    for destination in &results {
        print!("{}", output::destination_card(destination));
    }
    Ok(())
}

async fn cmd_destination(session: &Session, id: &str) -> Result<()> {
    let catalog = session.catalog().await?;
    let Some(detail) = destination_detail(&catalog, id) else {
        if session.json {
            return session.print_json(&serde_json::Value::Null);
        }
        println!("Destination not found");
        return Ok(());
    };

    if session.json {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct DetailView<'a> {
            destination: &'a Destination,
            coworking_spaces: &'a [&'a CoworkingSpace],
        }
        return session.print_json(&DetailView {
            destination: detail.destination,
            coworking_spaces: &detail.spaces,
        });
    }

    print!("{}", output::destination_detail(&detail));
    Ok(())
}

async fn cmd_coworking(
    session: &Session,
    search: &str,
    price: &str,
    sort: Option<&str>,
) -> Result<()> {
    let catalog = session.catalog().await?;
    let sort = sort.unwrap_or(session.config.defaults.coworking_sort.as_str());
    let query = Query::<CoworkingSpace>::new()
        .with_search(search)
        .with_filter_key(price)
        .with_sort_key(sort);

    info!(?query, "listing coworking spaces");
    let results = query.apply(&catalog.coworking_spaces);

    if session.json {
        return session.print_json(&results);
    }

    println!("{}", results_heading(results.len(), "coworking space"));
    for space in &results {
        print!("{}", output::coworking_card(space));
    }
    Ok(())
}

async fn cmd_trips(session: &Session) -> Result<()> {
    let catalog = session.catalog().await?;

    if session.json {
        return session.print_json(&catalog.trips);
    }

    if catalog.trips.is_empty() {
        println!("No trips yet");
        return Ok(());
    }
    for card in trips::trip_cards(&catalog.trips) {
        print!("{}", output::trip_card(&card));
    }
    Ok(())
}

async fn cmd_profile(session: &Session, edit: ProfileEdit) -> Result<()> {
    let catalog = session.catalog().await?;
    let mut editor = ProfileEditor::new(catalog.profile);

    if !edit.is_empty() {
        editor.begin_edit();
        apply_profile_edit(&mut editor, &edit)?;
        let patch = editor.save();

        if session.remote && !patch.is_empty() {
            let client = session.client()?;
            let id = editor.profile().id.clone();
            let spinner = spinner(format!("Saving profile {id}"));
            let result = client.users().update(&id, &patch).await;
            spinner.finish_and_clear();
            let saved = result?;
            info!(id = %saved.id, "profile saved to API");
            editor = ProfileEditor::new(saved);
        } else if patch.is_empty() {
            warn!("profile edit changed nothing");
        }
    }

    if session.json {
        return session.print_json(editor.profile());
    }

    print!("{}", output::profile(editor.profile()));
    Ok(())
}

fn apply_profile_edit(editor: &mut ProfileEditor, edit: &ProfileEdit) -> Result<()> {
    if let Some(name) = &edit.name {
        editor.set_name(name.as_str());
    }
    if let Some(email) = &edit.email {
        editor.set_email(email.as_str());
    }
    if let Some(location) = &edit.location {
        editor.set_location(location);
    }
    if let Some(bio) = &edit.bio {
        editor.set_bio(bio);
    }
    if let Some(work_type) = &edit.work_type {
        editor.set_work_type(work_type.parse::<WorkType>()?);
    }
    if let Some(budget) = &edit.budget {
        editor.set_budget_input(budget);
    }
    for pair in &edit.add_prefs {
        let (category, value) = parse_preference(pair)?;
        if !editor.add_preference(category, value) {
            warn!(%category, value, "preference ignored");
        }
    }
    for pair in &edit.remove_prefs {
        let (category, value) = parse_preference(pair)?;
        editor.remove_preference(category, value);
    }
    Ok(())
}

/// Split `CATEGORY=VALUE`.
fn parse_preference(pair: &str) -> Result<(PreferenceCategory, &str)> {
    let (category, value) = pair
        .split_once('=')
        .ok_or_else(|| eyre!("invalid preference '{pair}': expected CATEGORY=VALUE"))?;
    Ok((category.parse()?, value.trim()))
}

fn cmd_tui() -> Result<()> {
    info!("launching TUI");

    // The TUI ships as a sibling binary.
    let sibling = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("nomadplan-tui")))
        .filter(|path| path.exists());
    let program = sibling.unwrap_or_else(|| "nomadplan-tui".into());

    let status = std::process::Command::new(&program)
        .status()
        .map_err(|e| eyre!("failed to launch {}: {e}", program.display()))?;

    if !status.success() {
        return Err(eyre!(
            "TUI exited with status: {}",
            status.code().unwrap_or(-1)
        ));
    }
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show(config: &AppConfig) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

fn spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
    spinner.set_style(style);
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
